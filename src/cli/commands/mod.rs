//! Main CLI commands enum

use clap::Subcommand;

pub mod browse;
pub mod relate;

use browse::*;
use relate::*;

/// Top-level namecat commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find names related to a catalog entry
    Similar(SimilarArgs),

    /// Classify how two taxonomy paths relate and score the pair
    Classify(ClassifyArgs),

    /// Check the catalog for entries spelled like a name
    Duplicates(DuplicatesArgs),

    /// List catalog names matching filters
    List(ListArgs),

    /// List the syllable counts present in the catalog
    Syllables,

    /// Inspect the syllables and sounds of a pronunciation
    Phonetic(PhoneticArgs),
}
