//! `namecat syllables` command - syllable counts present in the catalog

use crate::catalog::Catalog;
use crate::cli::{Cli, OutputFormat};
use crate::commands::print_json;
use namecat_core::error::Result;
use namecat_core::query::syllable_options;

/// Execute the syllables command
pub fn execute(cli: &Cli, catalog: &Catalog) -> Result<()> {
    let options = syllable_options(catalog.names());

    match cli.format {
        OutputFormat::Json => print_json(&options),
        OutputFormat::Human => {
            if options.is_empty() && !cli.quiet {
                println!("No pronunciations in catalog");
            }
            for count in options {
                println!("{}", count);
            }
            Ok(())
        }
    }
}
