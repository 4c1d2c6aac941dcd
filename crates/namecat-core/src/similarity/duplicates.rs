//! Same-spelling lookup across the catalog
//!
//! Flags hits that share no origin with the checked name as false cognates.

use crate::name::Name;
use crate::similarity::is_false_cognate;

/// A catalog entry spelled the same as the name being checked
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateMatch<'a> {
    pub existing: &'a Name,
    /// Same spelling but no origin in common
    pub false_cognate: bool,
}

fn same_spelling(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Find entries spelled like `name`, skipping `exclude_id`.
///
/// `origin` is the origin list of the name being checked; hits that share
/// none of it are flagged as false cognates.
pub fn find_duplicates<'c>(
    name: &str,
    origin: &[String],
    corpus: &'c [Name],
    exclude_id: Option<&str>,
) -> Vec<DuplicateMatch<'c>> {
    let probe = Name {
        name: name.trim().to_string(),
        origin: origin.to_vec(),
        ..Default::default()
    };

    corpus
        .iter()
        .filter(|n| exclude_id != Some(n.id.as_str()))
        .filter(|n| same_spelling(&n.name, name))
        .map(|existing| DuplicateMatch {
            existing,
            false_cognate: is_false_cognate(&probe, existing),
        })
        .collect()
}

/// Find all same-spelling pairs in the catalog
///
/// Returns (first, second, false_cognate) for each pair in catalog order.
pub fn find_all_duplicates(corpus: &[Name]) -> Vec<(&Name, &Name, bool)> {
    let mut duplicates = Vec::new();

    for i in 0..corpus.len() {
        for j in i + 1..corpus.len() {
            let (a, b) = (&corpus[i], &corpus[j]);
            if same_spelling(&a.name, &b.name) {
                duplicates.push((a, b, is_false_cognate(a, b)));
            }
        }
    }

    duplicates
}
