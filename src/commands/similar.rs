//! `namecat similar` command - rank catalog names related to a target
//!
//! The target itself and names it declares a relation with (in either
//! direction) are never reported.

use serde_json::json;

use crate::catalog::Catalog;
use crate::cli::commands::relate::SimilarArgs;
use crate::cli::{Cli, OutputFormat};
use crate::commands::print_json;
use namecat_core::bail_invalid;
use namecat_core::config::EngineConfig;
use namecat_core::error::Result;
use namecat_core::format::similarity_line;
use namecat_core::similarity::SimilarityEngine;

/// Execute the similar command
pub fn execute(
    cli: &Cli,
    catalog: &Catalog,
    config: &EngineConfig,
    args: &SimilarArgs,
) -> Result<()> {
    if args.limit == Some(0) {
        bail_invalid!("limit", "0 (must be at least 1)");
    }

    let target = catalog.find(&args.name)?;
    let threshold = args.threshold.unwrap_or(config.similarity.threshold);

    let engine = SimilarityEngine::new(config);
    let mut results = engine.find_similar_with_threshold(target, catalog.names(), threshold);
    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "target": { "id": target.id, "name": target.name },
            "threshold": threshold,
            "results": results,
        })),
        OutputFormat::Human => {
            if results.is_empty() {
                if !cli.quiet {
                    println!("No names similar to {} (threshold {})", target.name, threshold);
                }
                return Ok(());
            }

            if !cli.quiet {
                println!("Similar to {} (threshold {}):", target.name, threshold);
            }
            for result in &results {
                println!("{}", similarity_line(result));
            }
            Ok(())
        }
    }
}
