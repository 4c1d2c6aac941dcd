//! Namecat Core Library
//!
//! The name relatedness engine for the namecat catalog: pairwise comparators,
//! corpus-wide similarity ranking, and the hierarchical path matcher shared by
//! every taxonomy filter.

pub mod config;
pub mod error;
pub mod fields;
pub mod format;
pub mod hierarchy;
pub mod logging;
pub mod name;
pub mod phonetic;
pub mod query;
pub mod roots;
pub mod similarity;
pub mod text;
