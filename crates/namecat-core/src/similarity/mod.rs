//! Similarity engine for discovering related names
//!
//! Compares a target name against every other catalog entry, accumulating a
//! score and an ordered list of reasons from the comparators in [`signals`].
//! Names with an explicitly declared relation are never reported here; they
//! are shown through the declared relation instead.

mod duplicates;
pub mod signals;

pub use duplicates::{find_all_duplicates, find_duplicates, DuplicateMatch};
pub use signals::{PairContext, PairScore, Reason, Signal};

use std::cmp::Ordering;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::name::Name;
use crate::text::natural_cmp;

/// Separator used when joining reasons for display
pub const REASON_SEPARATOR: &str = ", ";

/// A catalog entry found similar to the target
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityResult<'a> {
    pub candidate: &'a Name,
    /// Reasons in comparator order
    pub reasons: Vec<Reason>,
    pub score: u32,
}

impl SimilarityResult<'_> {
    /// Reasons joined for display, e.g. `"shared root (greek: philos), similar spelling"`
    pub fn explanation(&self) -> String {
        self.reasons
            .iter()
            .map(Reason::to_string)
            .collect::<Vec<_>>()
            .join(REASON_SEPARATOR)
    }
}

impl Serialize for SimilarityResult<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SimilarityResult", 5)?;
        state.serialize_field("id", &self.candidate.id)?;
        state.serialize_field("name", &self.candidate.name)?;
        state.serialize_field("score", &self.score)?;
        state.serialize_field("reasons", &self.reasons)?;
        state.serialize_field("explanation", &self.explanation())?;
        state.end()
    }
}

/// Same spelling with no origin shared exactly (ignoring case)
pub fn is_false_cognate(target: &Name, candidate: &Name) -> bool {
    if target.name.trim().to_lowercase() != candidate.name.trim().to_lowercase() {
        return false;
    }

    let shares_origin = target.origin.iter().any(|a| {
        candidate
            .origin
            .iter()
            .any(|b| a.to_lowercase() == b.to_lowercase())
    });

    !shares_origin
}

/// Order by score descending, then by name in natural order
fn rank(a: &SimilarityResult<'_>, b: &SimilarityResult<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| natural_cmp(&a.candidate.name, &b.candidate.name))
}

/// Similarity Engine
pub struct SimilarityEngine<'a> {
    config: &'a EngineConfig,
}

impl<'a> SimilarityEngine<'a> {
    /// Create a new Similarity Engine
    pub fn new(config: &'a EngineConfig) -> Self {
        SimilarityEngine { config }
    }

    /// Score a single pair, ignoring the threshold.
    ///
    /// Returns `None` when the pair is excluded outright: the same entry, or a
    /// relation declared in either direction.
    pub fn compare(&self, target: &Name, candidate: &Name) -> Option<PairScore> {
        if candidate.id == target.id || target.is_declared_relative(candidate) {
            return None;
        }

        let ctx = PairContext {
            target,
            candidate,
            tiers: &self.config.tiers,
            false_cognate: is_false_cognate(target, candidate),
        };

        Some(signals::score_pair(&ctx))
    }

    /// Find similar names using the configured threshold
    pub fn find_similar<'c>(
        &self,
        target: &Name,
        corpus: &'c [Name],
    ) -> Vec<SimilarityResult<'c>> {
        self.find_similar_with_threshold(target, corpus, self.config.similarity.threshold)
    }

    /// Find every corpus entry scoring at least `threshold` against `target`
    pub fn find_similar_with_threshold<'c>(
        &self,
        target: &Name,
        corpus: &'c [Name],
        threshold: u32,
    ) -> Vec<SimilarityResult<'c>> {
        let mut results: Vec<SimilarityResult<'c>> = corpus
            .iter()
            .filter_map(|candidate| {
                let Some(pair) = self.compare(target, candidate) else {
                    trace!(candidate = %candidate.name, "excluded");
                    return None;
                };
                if pair.reasons.is_empty() || pair.score < threshold {
                    trace!(candidate = %candidate.name, score = pair.score, "below_threshold");
                    return None;
                }
                trace!(candidate = %candidate.name, score = pair.score, "kept");
                Some(SimilarityResult {
                    candidate,
                    reasons: pair.reasons,
                    score: pair.score,
                })
            })
            .collect();

        results.sort_by(rank);

        debug!(
            name = %target.name,
            corpus = corpus.len(),
            kept = results.len(),
            threshold,
            "find_similar"
        );

        results
    }
}

/// Find similar names with the built-in scoring policy
pub fn find_similar<'c>(
    target: &Name,
    corpus: &'c [Name],
    threshold: u32,
) -> Vec<SimilarityResult<'c>> {
    let config = EngineConfig::default();
    SimilarityEngine::new(&config).find_similar_with_threshold(target, corpus, threshold)
}
