//! Name filtering utilities
//!
//! Taxonomy filters match by hierarchy: a name passes a category or origin
//! selector when any of its paths equals the selector or lies beneath it.
//! Selectors that are ancestors of another selected path are dropped first, so
//! choosing both "Europe" and "Europe > France" narrows to France.

use crate::hierarchy::{matches_any, most_specific};
use crate::name::{Gender, Name, NameType, Status};
use crate::phonetic::{ends_with_sound, rhymes, starts_with_sound, syllable_count};

/// Filter configuration for names
#[derive(Debug, Clone, Default)]
pub struct NameFilter<'a> {
    /// Category selectors (most specific only)
    pub categories: Vec<String>,
    /// Origin selectors (most specific only)
    pub origins: Vec<String>,
    /// Filter by name type
    pub name_type: Option<NameType>,
    /// Filter by gender
    pub gender: Option<Gender>,
    /// Filter by status
    pub status: Option<Status>,
    /// Exact syllable count
    pub syllables: Option<usize>,
    /// Pronunciation prefix
    pub starts_with: Option<&'a str>,
    /// Pronunciation suffix
    pub ends_with: Option<&'a str>,
    /// Pronunciation the name must rhyme with
    pub rhymes_with: Option<&'a str>,
}

impl<'a> NameFilter<'a> {
    /// Create a new filter that passes everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category selectors
    pub fn with_categories<S: AsRef<str>>(mut self, selectors: &[S]) -> Self {
        self.categories = most_specific(selectors);
        self
    }

    /// Set the origin selectors
    pub fn with_origins<S: AsRef<str>>(mut self, selectors: &[S]) -> Self {
        self.origins = most_specific(selectors);
        self
    }

    /// Set the name type filter
    pub fn with_name_type(mut self, name_type: Option<NameType>) -> Self {
        self.name_type = name_type;
        self
    }

    /// Set the gender filter
    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    /// Set the status filter
    pub fn with_status(mut self, status: Option<Status>) -> Self {
        self.status = status;
        self
    }

    /// Set the syllable count filter
    pub fn with_syllables(mut self, syllables: Option<usize>) -> Self {
        self.syllables = syllables;
        self
    }

    /// Set the pronunciation prefix filter
    pub fn with_starts_with(mut self, sound: Option<&'a str>) -> Self {
        self.starts_with = sound;
        self
    }

    /// Set the pronunciation suffix filter
    pub fn with_ends_with(mut self, sound: Option<&'a str>) -> Self {
        self.ends_with = sound;
        self
    }

    /// Set the rhyme filter
    pub fn with_rhymes_with(mut self, pronunciation: Option<&'a str>) -> Self {
        self.rhymes_with = pronunciation;
        self
    }

    /// Check if a name matches all configured filters
    pub fn matches(&self, name: &Name) -> bool {
        self.matches_taxonomy(name)
            && self.matches_attributes(name)
            && self.matches_phonetics(name)
    }

    fn matches_taxonomy(&self, name: &Name) -> bool {
        (self.categories.is_empty() || matches_any(&name.meanings, &self.categories))
            && (self.origins.is_empty() || matches_any(&name.origin, &self.origins))
    }

    fn matches_attributes(&self, name: &Name) -> bool {
        if let Some(wanted) = self.name_type {
            if !name.name_type.satisfies(wanted) {
                return false;
            }
        }

        if let Some(wanted) = self.gender {
            // an unspecified gender is treated as "any"
            if !name.gender.unwrap_or(Gender::Any).satisfies(wanted) {
                return false;
            }
        }

        self.status.is_none_or(|s| name.status == s)
    }

    fn matches_phonetics(&self, name: &Name) -> bool {
        let pronunciation = name.pronunciation.as_deref();

        if let Some(count) = self.syllables {
            if syllable_count(pronunciation) != count {
                return false;
            }
        }

        if let Some(sound) = self.starts_with {
            if !starts_with_sound(pronunciation, sound) {
                return false;
            }
        }

        if let Some(sound) = self.ends_with {
            if !ends_with_sound(pronunciation, sound) {
                return false;
            }
        }

        self.rhymes_with
            .is_none_or(|other| rhymes(pronunciation, Some(other)))
    }

    /// Apply the filter to a corpus, preserving order
    pub fn apply<'c>(&self, names: &'c [Name]) -> Vec<&'c Name> {
        names.iter().filter(|n| self.matches(n)).collect()
    }
}

/// Sorted distinct non-zero syllable counts present in a corpus
pub fn syllable_options(names: &[Name]) -> Vec<usize> {
    let mut counts: Vec<usize> = names
        .iter()
        .map(|n| syllable_count(n.pronunciation.as_deref()))
        .filter(|&c| c > 0)
        .collect();
    counts.sort_unstable();
    counts.dedup();
    counts
}
