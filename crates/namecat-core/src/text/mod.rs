//! Text utilities shared by the comparators
//!
//! Edit distance, whitespace normalization, etymology tokenization and the
//! natural ordering used to break score ties.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Stop words ignored when comparing etymology descriptions
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "the", "a", "an", "from", "of", "in", "to", "and", "or", "via", "through",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Levenshtein distance between two strings, counted in characters.
///
/// Empty input yields the length of the other string.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=a.len()).collect();
    let mut curr_row = vec![0; a.len() + 1];

    for (i, ch_b) in b.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, ch_a) in a.iter().enumerate() {
            let cost = usize::from(ch_a != ch_b);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[a.len()]
}

/// Lower-case and drop all whitespace
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Significant words of an etymology description.
///
/// Splits on whitespace only; words of three characters or fewer and stop
/// words are dropped.
pub fn etymology_tokens(text: &str) -> HashSet<String> {
    let stop_words = get_stop_words();
    text.to_lowercase()
        .split_whitespace()
        .filter(|t| t.chars().count() > 3)
        .filter(|t| !stop_words.contains(t))
        .map(|t| t.to_string())
        .collect()
}

/// Case-insensitive comparison where runs of ASCII digits compare by value.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let mut ia = a.chars().peekable();
    let mut ib = b.chars().peekable();

    loop {
        match (ia.peek().copied(), ib.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let na = take_digits(&mut ia);
                let nb = take_digits(&mut ib);
                // compare by magnitude, then by length so "007" sorts after "7"
                let ord = na
                    .trim_start_matches('0')
                    .len()
                    .cmp(&nb.trim_start_matches('0').len())
                    .then_with(|| na.trim_start_matches('0').cmp(nb.trim_start_matches('0')))
                    .then_with(|| na.len().cmp(&nb.len()));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(ca), Some(cb)) => {
                if ca != cb {
                    return ca.cmp(&cb);
                }
                ia.next();
                ib.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits
}
