//! Library layer for leadgen: memoized suggestions, homepage extraction,
//! heuristic enrichment, lead assembly and exports.
//!
//! Wraps the `leadgen_api` crate with an in-memory TTL cache and turns raw
//! company suggestions into scored, tagged leads.

pub mod cache;
pub mod client;
pub mod config;
pub mod enrich;
pub mod error;
pub mod export;
pub mod extract;
pub mod favorites;
pub mod lead;
pub mod pipeline;
pub mod simulated;
pub mod validation;

pub use leadgen_api;
pub use leadgen_api::types;
pub use leadgen_api::{PageFetcher, SuggestQuery};

pub use client::CachedClient;
pub use config::LeadGenConfig;
pub use enrich::{IcpRule, TagPolicy};
pub use error::LeadGenError;
pub use favorites::FavoritesStore;
pub use lead::Lead;
pub use pipeline::{
    assemble, filter_by_score, run_pipeline, AssembleOptions, LeadRequest, PageSource,
    PipelineReport,
};
pub use simulated::{FixedEnrichment, RandomEnrichment, SimulatedEnrichment};
