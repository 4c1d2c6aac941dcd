//! Etymological root descriptors
//!
//! A root descriptor is free text such as `"Greek: philos (love)"` or a
//! compound like `"Old Norse: ás (god) + Old Norse: mundr (protection)"`.
//! Each element carries an identifier and an optional parenthesized gloss.

use std::cmp::{Ordering, Reverse};
use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

/// Score for two root strings that are equal ignoring case
pub const EXACT_ROOT_SCORE: u32 = 80;

static ELEMENT_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn element_pattern() -> Option<&'static Regex> {
    // identifier, then an optional trailing "(gloss)"
    ELEMENT_PATTERN
        .get_or_init(|| match Regex::new(r"^([^()]*?)\s*(?:\(([^()]*)\))?\s*$") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile root element regex");
                None
            }
        })
        .as_ref()
}

/// One parsed element of a root descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRootElement {
    /// Trimmed, lower-cased text before the gloss
    pub identifier: String,
    /// Trimmed, lower-cased gloss, if any
    pub explanation: Option<String>,
    /// The element exactly as given
    pub full_text: String,
}

/// Best shared root between two root lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedRoot {
    pub score: u32,
    /// Identifier of the shared root, for display
    pub shared_root: String,
}

/// Parse a single root element.
///
/// Text that does not fit the `identifier (gloss)` shape becomes a bare
/// identifier of the whole trimmed, lower-cased string.
pub fn parse(element: &str) -> ParsedRootElement {
    let full_text = element.to_string();

    if let Some(caps) = element_pattern().and_then(|re| re.captures(element)) {
        let identifier = caps
            .get(1)
            .map(|m| m.as_str().trim().to_lowercase())
            .unwrap_or_default();
        let explanation = caps
            .get(2)
            .map(|m| m.as_str().trim().to_lowercase())
            .filter(|e| !e.is_empty());
        if !identifier.is_empty() {
            return ParsedRootElement {
                identifier,
                explanation,
                full_text,
            };
        }
    }

    ParsedRootElement {
        identifier: element.trim().to_lowercase(),
        explanation: None,
        full_text,
    }
}

/// Split a compound root on `+` or `/` and parse each part.
///
/// Separators inside a parenthesized gloss do not split, so
/// `"Latin: amor (love/affection)"` stays one element.
pub fn extract_elements(root: &str) -> Vec<ParsedRootElement> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, c) in root.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '+' | '/' if depth == 0 => {
                parts.push(&root[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&root[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(parse)
        .collect()
}

fn strip_quotes(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '"' | '\'' | '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Score a pair of parsed elements.
///
/// 80 same identifier and gloss, 70 when one gloss contains the other,
/// 50 for a homograph (same identifier, different gloss), 60 when a gloss is
/// missing on either side, 0 for different identifiers.
pub fn compare_elements(e1: &ParsedRootElement, e2: &ParsedRootElement) -> u32 {
    if e1.identifier != e2.identifier {
        return 0;
    }

    match (&e1.explanation, &e2.explanation) {
        (Some(x1), Some(x2)) => {
            let x1 = strip_quotes(x1);
            let x2 = strip_quotes(x2);
            if x1 == x2 {
                80
            } else if x1.contains(&x2) || x2.contains(&x1) {
                70
            } else {
                50
            }
        }
        _ => 60,
    }
}

/// Identifier used for display when whole root strings match
fn display_identifier(root: &str) -> String {
    root.split('(').next().unwrap_or(root).trim().to_lowercase()
}

/// Best nonzero partner score for each element of `from`
fn best_partners<'e>(
    from: &'e [ParsedRootElement],
    against: &[ParsedRootElement],
) -> Vec<(u32, &'e ParsedRootElement)> {
    from.iter()
        .filter_map(|e1| {
            let best = against
                .iter()
                .map(|e2| compare_elements(e1, e2))
                .max()
                .unwrap_or(0);
            (best > 0).then_some((best, e1))
        })
        .collect()
}

fn join_identifiers(matched: &[(u32, &ParsedRootElement)]) -> String {
    matched
        .iter()
        .map(|(_, e)| e.identifier.as_str())
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Score two root strings against each other
fn compare_roots(root1: &str, root2: &str) -> Option<SharedRoot> {
    if root1.trim().to_lowercase() == root2.trim().to_lowercase() {
        return Some(SharedRoot {
            score: EXACT_ROOT_SCORE,
            shared_root: display_identifier(root1),
        });
    }

    let elements1 = extract_elements(root1);
    let elements2 = extract_elements(root2);
    let total = elements1.len().max(elements2.len());
    if total == 0 {
        return None;
    }

    let left = best_partners(&elements1, &elements2);
    let right = best_partners(&elements2, &elements1);
    if left.is_empty() || right.is_empty() {
        return None;
    }

    // the side with fewer matches bounds the count; equal counts label by the
    // smaller joined identifier so argument order never matters
    let left_label = join_identifiers(&left);
    let right_label = join_identifiers(&right);
    let (matched, shared_root) = match left.len().cmp(&right.len()) {
        Ordering::Less => (left.len(), left_label),
        Ordering::Greater => (right.len(), right_label),
        Ordering::Equal => (left.len(), left_label.min(right_label)),
    };

    let scores: Vec<u32> = left.iter().chain(right.iter()).map(|(s, _)| *s).collect();
    let ratio = matched as f64 / total as f64;
    let mean = scores.iter().map(|s| f64::from(*s)).sum::<f64>() / scores.len() as f64;
    let max = scores.iter().copied().max().unwrap_or(0);

    let score = if ratio >= 0.8 {
        mean.round() as u32
    } else if ratio >= 0.5 {
        (mean * 0.75).round() as u32
    } else {
        ((f64::from(max) * 0.6).round() as u32).clamp(30, 50)
    };

    Some(SharedRoot { score, shared_root })
}

/// Find the best shared root across every pairing of two root lists.
///
/// Ties keep the smaller shared root identifier.
pub fn check_shared_roots<A, B>(roots1: &[A], roots2: &[B]) -> Option<SharedRoot>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut best: Option<SharedRoot> = None;

    for r1 in roots1 {
        for r2 in roots2 {
            if let Some(candidate) = compare_roots(r1.as_ref(), r2.as_ref()) {
                let better = best.as_ref().is_none_or(|b| {
                    (candidate.score, Reverse(&candidate.shared_root))
                        > (b.score, Reverse(&b.shared_root))
                });
                if better {
                    best = Some(candidate);
                }
            }
        }
    }

    best
}
