//! `namecat phonetic` command - inspect a single pronunciation

use serde::Serialize;

use crate::cli::commands::browse::PhoneticArgs;
use crate::cli::{Cli, OutputFormat};
use crate::commands::print_json;
use namecat_core::error::Result;
use namecat_core::phonetic::{ends_with_sound, rhymes, starts_with_sound, syllable_count};

#[derive(Debug, Serialize)]
struct PhoneticReport<'a> {
    pronunciation: &'a str,
    syllables: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    rhymes_with: Option<Check<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    starts_with: Option<Check<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ends_with: Option<Check<'a>>,
}

#[derive(Debug, Serialize)]
struct Check<'a> {
    value: &'a str,
    matches: bool,
}

fn report(args: &PhoneticArgs) -> PhoneticReport<'_> {
    let pronunciation = Some(args.pronunciation.as_str());

    PhoneticReport {
        pronunciation: &args.pronunciation,
        syllables: syllable_count(pronunciation),
        rhymes_with: args.rhymes_with.as_deref().map(|other| Check {
            value: other,
            matches: rhymes(pronunciation, Some(other)),
        }),
        starts_with: args.starts_with.as_deref().map(|sound| Check {
            value: sound,
            matches: starts_with_sound(pronunciation, sound),
        }),
        ends_with: args.ends_with.as_deref().map(|sound| Check {
            value: sound,
            matches: ends_with_sound(pronunciation, sound),
        }),
    }
}

fn yes_no(matches: bool) -> &'static str {
    if matches {
        "yes"
    } else {
        "no"
    }
}

/// Execute the phonetic command
pub fn execute(cli: &Cli, args: &PhoneticArgs) -> Result<()> {
    let report = report(args);

    match cli.format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Human => {
            println!("syllables: {}", report.syllables);
            if let Some(check) = &report.rhymes_with {
                println!("rhymes with {}: {}", check.value, yes_no(check.matches));
            }
            if let Some(check) = &report.starts_with {
                println!("starts with {}: {}", check.value, yes_no(check.matches));
            }
            if let Some(check) = &report.ends_with {
                println!("ends with {}: {}", check.value, yes_no(check.matches));
            }
            Ok(())
        }
    }
}
