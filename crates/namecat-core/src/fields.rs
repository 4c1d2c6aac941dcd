//! Free-text field comparators

use crate::text::etymology_tokens;

/// Points for overlapping feeling tags
pub const FEELING_SCORE: u32 = 8;

fn present(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// Word overlap between two etymology descriptions.
///
/// 75 for three or more shared significant words, 50 for two, 25 for one.
pub fn etymology_score(e1: Option<&str>, e2: Option<&str>) -> u32 {
    let (Some(e1), Some(e2)) = (present(e1), present(e2)) else {
        return 0;
    };

    let words1 = etymology_tokens(e1);
    let words2 = etymology_tokens(e2);
    let shared = words1.intersection(&words2).count();

    match shared {
        0 => 0,
        1 => 25,
        2 => 50,
        _ => 75,
    }
}

/// Literal meaning overlap: 60 exact, 40 when one contains the other.
pub fn literal_meaning_score(m1: Option<&str>, m2: Option<&str>) -> u32 {
    let (Some(m1), Some(m2)) = (present(m1), present(m2)) else {
        return 0;
    };

    let m1 = m1.trim().to_lowercase();
    let m2 = m2.trim().to_lowercase();

    if m1 == m2 {
        60
    } else if m1.contains(&m2) || m2.contains(&m1) {
        40
    } else {
        0
    }
}

fn normalized_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    tags.iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Whether any feeling tag equals or contains a tag on the other side
pub fn feelings_overlap<A, B>(f1: &[A], f2: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let tags1 = normalized_tags(f1);
    let tags2 = normalized_tags(f2);

    tags1
        .iter()
        .any(|a| tags2.iter().any(|b| a == b || a.contains(b.as_str()) || b.contains(a.as_str())))
}
