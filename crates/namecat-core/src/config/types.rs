//! Configuration type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NamecatError;
use crate::hierarchy::TierScores;

/// Default minimum score for a discovered similarity
pub const DEFAULT_THRESHOLD: u32 = 60;

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Similarity search settings
    #[serde(default)]
    pub similarity: SimilarityConfig,

    /// Tier scores per taxonomy
    #[serde(default)]
    pub tiers: TierConfig,
}

/// Similarity search settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Minimum accumulated score for a candidate to be kept
    #[serde(default = "default_threshold")]
    pub threshold: u32,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        SimilarityConfig {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Tier scores for each taxonomy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    /// Category (meaning) paths
    #[serde(default = "default_category_tiers")]
    pub category: TierScores,

    /// Geographic origin paths
    #[serde(default = "default_origin_tiers")]
    pub origin: TierScores,
}

impl Default for TierConfig {
    fn default() -> Self {
        TierConfig {
            category: TierScores::CATEGORY,
            origin: TierScores::ORIGIN,
        }
    }
}

impl TierConfig {
    /// Tier scores for a taxonomy
    pub fn for_taxonomy(&self, taxonomy: Taxonomy) -> &TierScores {
        match taxonomy {
            Taxonomy::Category => &self.category,
            Taxonomy::Origin => &self.origin,
        }
    }
}

/// Taxonomies scored by the hierarchy matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Taxonomy {
    #[default]
    Category,
    Origin,
}

impl FromStr for Taxonomy {
    type Err = NamecatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "category" | "meaning" => Ok(Taxonomy::Category),
            "origin" => Ok(Taxonomy::Origin),
            other => crate::bail_unsupported!("taxonomy", other, "category, origin"),
        }
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Taxonomy::Category => write!(f, "category"),
            Taxonomy::Origin => write!(f, "origin"),
        }
    }
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD
}

fn default_category_tiers() -> TierScores {
    TierScores::CATEGORY
}

fn default_origin_tiers() -> TierScores {
    TierScores::ORIGIN
}
