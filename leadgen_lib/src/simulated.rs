//! Simulated enrichment: placeholder tech-stack and traffic figures.
//!
//! None of these values carry information about the company. They exist to
//! show where a real data provider would plug in, behind the
//! [`SimulatedEnrichment`] trait.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const TECH_CATALOGUE: &[&str] = &[
    "React",
    "Node.js",
    "Python",
    "AWS",
    "Google Cloud",
    "Azure",
    "Kubernetes",
    "PostgreSQL",
    "Stripe",
    "Segment",
    "HubSpot",
    "Salesforce",
    "Shopify",
    "Cloudflare",
    "Vercel",
];

const STACK_SIZE: usize = 3;

/// Source of illustrative enrichment values.
pub trait SimulatedEnrichment: Send + Sync {
    /// A plausible-looking list of technologies for the domain.
    fn tech_stack(&self, domain: &str) -> Vec<String>;
    /// A plausible-looking monthly traffic figure for the domain.
    fn traffic(&self, domain: &str) -> String;
}

/// Random placeholder values from a seedable RNG.
pub struct RandomEnrichment {
    rng: Mutex<StdRng>,
}

impl RandomEnrichment {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible output for a given seed and call order.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomEnrichment {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedEnrichment for RandomEnrichment {
    fn tech_stack(&self, _domain: &str) -> Vec<String> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        TECH_CATALOGUE
            .choose_multiple(&mut *rng, STACK_SIZE)
            .map(|t| t.to_string())
            .collect()
    }

    fn traffic(&self, _domain: &str) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        format!("{}K monthly visits", rng.gen_range(5..=500))
    }
}

/// Deterministic stub: empty stack and `N/A` traffic, or fixed values.
#[derive(Clone, Debug)]
pub struct FixedEnrichment {
    pub tech_stack: Vec<String>,
    pub traffic: String,
}

impl Default for FixedEnrichment {
    fn default() -> Self {
        Self {
            tech_stack: Vec::new(),
            traffic: "N/A".to_string(),
        }
    }
}

impl SimulatedEnrichment for FixedEnrichment {
    fn tech_stack(&self, _domain: &str) -> Vec<String> {
        self.tech_stack.clone()
    }

    fn traffic(&self, _domain: &str) -> String {
        self.traffic.clone()
    }
}
