//! Catalog browsing argument structures

use clap::Args;

use crate::cli::parse::{parse_gender, parse_name_type, parse_status};
use namecat_core::name::{Gender, NameType, Status};

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Category path; names at or beneath it match (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub category: Vec<String>,

    /// Origin path; names at or beneath it match (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub origin: Vec<String>,

    /// Exact syllable count
    #[arg(long)]
    pub syllables: Option<usize>,

    /// Pronunciation starts with this sound
    #[arg(long)]
    pub starts_with: Option<String>,

    /// Pronunciation ends with this sound
    #[arg(long)]
    pub ends_with: Option<String>,

    /// Pronunciation to rhyme with, e.g. "MER-uh-deth"
    #[arg(long)]
    pub rhymes_with: Option<String>,

    /// Filter by gender (masculine, feminine, neutral, any)
    #[arg(long, value_parser = parse_gender)]
    pub gender: Option<Gender>,

    /// Filter by name type (firstName, surname, either)
    #[arg(long, short = 'T', value_parser = parse_name_type)]
    pub r#type: Option<NameType>,

    /// Filter by status (available, used, blocked)
    #[arg(long, value_parser = parse_status)]
    pub status: Option<Status>,
}

/// Arguments for the phonetic command.
#[derive(Args, Debug)]
pub struct PhoneticArgs {
    /// Pronunciation with hyphen-separated syllables, e.g. "ih-LIZ-uh-beth"
    pub pronunciation: String,

    /// Check whether it rhymes with this pronunciation
    #[arg(long)]
    pub rhymes_with: Option<String>,

    /// Check whether it starts with this sound
    #[arg(long)]
    pub starts_with: Option<String>,

    /// Check whether it ends with this sound
    #[arg(long)]
    pub ends_with: Option<String>,
}
