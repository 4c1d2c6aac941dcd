//! `namecat classify` command - relate two taxonomy paths

use serde_json::json;

use crate::cli::commands::relate::ClassifyArgs;
use crate::cli::{Cli, OutputFormat};
use crate::commands::print_json;
use namecat_core::config::EngineConfig;
use namecat_core::error::Result;
use namecat_core::hierarchy::{classify_relation, depth};

/// Execute the classify command
pub fn execute(cli: &Cli, config: &EngineConfig, args: &ClassifyArgs) -> Result<()> {
    let relation = classify_relation(&args.path_a, &args.path_b);
    let score = config.tiers.for_taxonomy(args.taxonomy).score(relation);

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "path_a": args.path_a,
            "path_b": args.path_b,
            "depth_a": depth(&args.path_a),
            "depth_b": depth(&args.path_b),
            "taxonomy": args.taxonomy,
            "relation": relation.label(),
            "score": score,
        })),
        OutputFormat::Human => {
            if cli.quiet {
                println!("{}", score);
            } else {
                println!("{} ({} score {})", relation.label(), args.taxonomy, score);
            }
            Ok(())
        }
    }
}
