//! Relatedness command argument structures

use clap::Args;

use crate::cli::parse::parse_taxonomy;
use namecat_core::config::Taxonomy;

/// Arguments for the similar command.
#[derive(Args, Debug)]
pub struct SimilarArgs {
    /// Name id or display name (case-insensitive)
    pub name: String,

    /// Minimum score to report (overrides the configured threshold)
    #[arg(long, short)]
    pub threshold: Option<u32>,

    /// Maximum number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// Arguments for the classify command.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// First path, e.g. "Europe > Western Europe > France"
    pub path_a: String,

    /// Second path
    pub path_b: String,

    /// Which tier scores to apply (category, origin)
    #[arg(long, value_parser = parse_taxonomy, default_value = "category")]
    pub taxonomy: Taxonomy,
}

/// Arguments for the duplicates command.
#[derive(Args, Debug)]
pub struct DuplicatesArgs {
    /// Name to check; omit to report every same-spelling pair in the catalog
    pub name: Option<String>,

    /// Origin of the name being checked (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub origin: Vec<String>,

    /// Catalog id to skip, e.g. the entry being edited
    #[arg(long)]
    pub exclude_id: Option<String>,
}
