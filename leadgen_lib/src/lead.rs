//! The enriched lead record.

use serde::{Deserialize, Serialize};

/// One enriched, scored company record.
///
/// Built once by the assembler and never modified afterwards; later stages
/// only drop leads from the sequence.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Lead {
    /// 1-based position assigned at assembly, before any filtering.
    pub rank: usize,
    pub company: String,
    /// Always `https://` + domain.
    pub website: String,
    /// Guessed contact address, never verified.
    pub email: String,
    pub logo: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    /// Heuristic score, always within `[70, 95]`.
    pub score: u8,
    pub pitch: String,
    pub cold_email: String,
    pub linkedin: String,
    pub twitter: String,
    /// Illustrative placeholder, not real enrichment.
    pub tech_stack: Vec<String>,
    /// Illustrative placeholder, not real enrichment.
    pub traffic: String,
}

impl Lead {
    /// The bare domain this lead was built from.
    pub fn domain(&self) -> &str {
        self.website.trim_start_matches("https://")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
