//! Catalog queries

pub mod filter;

pub use filter::{syllable_options, NameFilter};
