//! Pairwise comparator signals
//!
//! Each comparator looks at one field pair of two names and either produces a
//! scored [`Signal`] or nothing. The aggregator folds the ordered comparator
//! list into a [`PairScore`].

use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::TierConfig;
use crate::fields::{etymology_score, feelings_overlap, literal_meaning_score, FEELING_SCORE};
use crate::hierarchy::best_match;
use crate::name::Name;
use crate::phonetic::{pronunciation_score, spelling_match, SPELLING_SCORE};
use crate::roots::check_shared_roots;

/// Human-readable reason a candidate was found similar
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reason {
    /// Shared etymological root, with its identifier
    SharedRoot(String),
    SimilarPronunciation,
    SharedEtymology,
    SimilarCategory,
    SimilarLiteralMeaning,
    SimilarSpelling,
    RelatedOrigin,
    SimilarFeeling,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::SharedRoot(root) => write!(f, "shared root ({})", root),
            Reason::SimilarPronunciation => f.write_str("similar pronunciation"),
            Reason::SharedEtymology => f.write_str("shared etymology"),
            Reason::SimilarCategory => f.write_str("similar category"),
            Reason::SimilarLiteralMeaning => f.write_str("similar literal meaning"),
            Reason::SimilarSpelling => f.write_str("similar spelling"),
            Reason::RelatedOrigin => f.write_str("related origin"),
            Reason::SimilarFeeling => f.write_str("similar feeling"),
        }
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A scored contribution from one comparator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub score: u32,
    pub reason: Reason,
}

impl Signal {
    fn new(score: u32, reason: Reason) -> Option<Self> {
        (score > 0).then_some(Signal { score, reason })
    }
}

/// Inputs shared by every comparator for one (target, candidate) pair
#[derive(Debug, Clone, Copy)]
pub struct PairContext<'a> {
    pub target: &'a Name,
    pub candidate: &'a Name,
    pub tiers: &'a TierConfig,
    /// Same spelling but no origin in common
    pub false_cognate: bool,
}

/// Accumulated score and reasons for a pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairScore {
    pub score: u32,
    pub reasons: Vec<Reason>,
}

impl PairScore {
    /// Add one signal. The total saturates at `u32::MAX`.
    pub fn with(mut self, signal: Signal) -> Self {
        self.score = self.score.saturating_add(signal.score);
        self.reasons.push(signal.reason);
        self
    }
}

/// A comparator over one field pair
pub type Comparator = fn(&PairContext<'_>) -> Option<Signal>;

/// Comparators in reason order
pub const COMPARATORS: &[Comparator] = &[
    roots_signal,
    pronunciation_signal,
    etymology_signal,
    category_signal,
    literal_meaning_signal,
    spelling_signal,
    origin_signal,
    feeling_signal,
];

pub fn roots_signal(ctx: &PairContext<'_>) -> Option<Signal> {
    let shared = check_shared_roots(&ctx.target.roots, &ctx.candidate.roots)?;
    Signal::new(shared.score, Reason::SharedRoot(shared.shared_root))
}

pub fn pronunciation_signal(ctx: &PairContext<'_>) -> Option<Signal> {
    let score = pronunciation_score(
        ctx.target.pronunciation.as_deref(),
        ctx.candidate.pronunciation.as_deref(),
    );
    Signal::new(score, Reason::SimilarPronunciation)
}

pub fn etymology_signal(ctx: &PairContext<'_>) -> Option<Signal> {
    let score = etymology_score(
        ctx.target.etymology.as_deref(),
        ctx.candidate.etymology.as_deref(),
    );
    Signal::new(score, Reason::SharedEtymology)
}

pub fn category_signal(ctx: &PairContext<'_>) -> Option<Signal> {
    let score = best_match(
        &ctx.target.meanings,
        &ctx.candidate.meanings,
        &ctx.tiers.category,
    );
    Signal::new(score, Reason::SimilarCategory)
}

pub fn literal_meaning_signal(ctx: &PairContext<'_>) -> Option<Signal> {
    let score = literal_meaning_score(
        ctx.target.meaning.as_deref(),
        ctx.candidate.meaning.as_deref(),
    );
    Signal::new(score, Reason::SimilarLiteralMeaning)
}

/// Spelling closeness. The false-cognate gate is applied by the aggregator
/// once every other signal is known.
pub fn spelling_signal(ctx: &PairContext<'_>) -> Option<Signal> {
    spelling_match(&ctx.target.name, &ctx.candidate.name)
        .then_some(Signal {
            score: SPELLING_SCORE,
            reason: Reason::SimilarSpelling,
        })
}

pub fn origin_signal(ctx: &PairContext<'_>) -> Option<Signal> {
    let score = best_match(&ctx.target.origin, &ctx.candidate.origin, &ctx.tiers.origin);
    Signal::new(score, Reason::RelatedOrigin)
}

pub fn feeling_signal(ctx: &PairContext<'_>) -> Option<Signal> {
    feelings_overlap(&ctx.target.feelings, &ctx.candidate.feelings).then_some(Signal {
        score: FEELING_SCORE,
        reason: Reason::SimilarFeeling,
    })
}

/// Run every comparator over the pair and fold the signals.
///
/// A false cognate only keeps its spelling signal when some other comparator
/// also scored.
pub fn score_pair(ctx: &PairContext<'_>) -> PairScore {
    let signals: Vec<Signal> = COMPARATORS.iter().filter_map(|c| c(ctx)).collect();

    let independent: u32 = signals
        .iter()
        .filter(|s| s.reason != Reason::SimilarSpelling)
        .fold(0u32, |acc, s| acc.saturating_add(s.score));
    let suppress_spelling = ctx.false_cognate && independent == 0;

    signals
        .into_iter()
        .filter(|s| !(suppress_spelling && s.reason == Reason::SimilarSpelling))
        .fold(PairScore::default(), PairScore::with)
}
