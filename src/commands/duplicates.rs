//! `namecat duplicates` command - same-spelling entries in the catalog
//!
//! With a name, reports the entries spelled like it (the check to run before
//! adding a name). Without one, reports every same-spelling pair. Hits that
//! share no origin are flagged as false cognates.

use serde_json::json;

use crate::catalog::Catalog;
use crate::cli::commands::relate::DuplicatesArgs;
use crate::cli::{Cli, OutputFormat};
use crate::commands::print_json;
use namecat_core::error::Result;
use namecat_core::name::Name;
use namecat_core::similarity::{find_all_duplicates, find_duplicates};

const FALSE_COGNATE_NOTE: &str = "false cognate: no shared origin";

/// Execute the duplicates command
pub fn execute(cli: &Cli, catalog: &Catalog, args: &DuplicatesArgs) -> Result<()> {
    match &args.name {
        Some(name) => check_name(cli, catalog, name, args),
        None => all_pairs(cli, catalog),
    }
}

fn check_name(cli: &Cli, catalog: &Catalog, name: &str, args: &DuplicatesArgs) -> Result<()> {
    let matches = find_duplicates(
        name,
        &args.origin,
        catalog.names(),
        args.exclude_id.as_deref(),
    );

    match cli.format {
        OutputFormat::Json => {
            let entries: Vec<_> = matches
                .iter()
                .map(|m| {
                    json!({
                        "id": m.existing.id,
                        "name": m.existing.name,
                        "origin": m.existing.origin,
                        "false_cognate": m.false_cognate,
                    })
                })
                .collect();
            print_json(&json!({ "name": name, "duplicates": entries }))
        }
        OutputFormat::Human => {
            if matches.is_empty() {
                if !cli.quiet {
                    println!("No existing entries spelled {}", name);
                }
                return Ok(());
            }
            for m in &matches {
                println!("{}", entry_line(m.existing, m.false_cognate));
            }
            Ok(())
        }
    }
}

fn all_pairs(cli: &Cli, catalog: &Catalog) -> Result<()> {
    let pairs = find_all_duplicates(catalog.names());

    match cli.format {
        OutputFormat::Json => {
            let entries: Vec<_> = pairs
                .iter()
                .map(|(a, b, false_cognate)| {
                    json!({
                        "first": { "id": a.id, "name": a.name },
                        "second": { "id": b.id, "name": b.name },
                        "false_cognate": false_cognate,
                    })
                })
                .collect();
            print_json(&entries)
        }
        OutputFormat::Human => {
            if pairs.is_empty() && !cli.quiet {
                println!("No duplicate spellings in catalog");
            }
            for (a, b, false_cognate) in pairs {
                let mut line = format!("{} {} <-> {} {}", a.id, a.name, b.id, b.name);
                if false_cognate {
                    line.push_str(&format!("  ({})", FALSE_COGNATE_NOTE));
                }
                println!("{}", line);
            }
            Ok(())
        }
    }
}

fn entry_line(existing: &Name, false_cognate: bool) -> String {
    let mut line = format!("{}  {}", existing.id, existing.name);
    if false_cognate {
        line.push_str(&format!("  ({})", FALSE_COGNATE_NOTE));
    }
    line
}
