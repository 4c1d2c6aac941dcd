//! `namecat list` command - filter the catalog
//!
//! Category and origin selectors match by hierarchy: a name passes when one
//! of its paths equals a selector or lies beneath it. Catalog order is kept.

use serde_json::json;
use tracing::debug;

use crate::catalog::Catalog;
use crate::cli::commands::browse::ListArgs;
use crate::cli::{Cli, OutputFormat};
use crate::commands::print_json;
use namecat_core::error::Result;
use namecat_core::name::Name;
use namecat_core::query::NameFilter;

/// Execute the list command
pub fn execute(cli: &Cli, catalog: &Catalog, args: &ListArgs) -> Result<()> {
    let filter = NameFilter::new()
        .with_categories(&args.category)
        .with_origins(&args.origin)
        .with_name_type(args.r#type)
        .with_gender(args.gender)
        .with_status(args.status)
        .with_syllables(args.syllables)
        .with_starts_with(args.starts_with.as_deref())
        .with_ends_with(args.ends_with.as_deref())
        .with_rhymes_with(args.rhymes_with.as_deref());

    let names = filter.apply(catalog.names());
    debug!(total = catalog.names().len(), matched = names.len(), "list_filtered");

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "count": names.len(),
            "names": names,
        })),
        OutputFormat::Human => {
            if names.is_empty() && !cli.quiet {
                println!("No names found");
            }
            for name in names {
                println!("{}", list_line(name));
            }
            Ok(())
        }
    }
}

fn list_line(name: &Name) -> String {
    match &name.pronunciation {
        Some(p) => format!("{}  {}  [{}]", name.id, name.name, p),
        None => format!("{}  {}", name.id, name.name),
    }
}
