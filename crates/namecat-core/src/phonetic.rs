//! Phonetic comparison over pseudo-IPA pronunciations
//!
//! Pronunciations are coarse hyphen-segmented strings such as
//! `"ih-LIZ-uh-beth"`. The hyphen is the only syllable delimiter; stress is
//! marked by capitals and ignored by every comparison here.

use crate::text::{edit_distance, normalize};

/// Syllable delimiter in pronunciation strings
pub const SYLLABLE_DELIMITER: char = '-';

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Points for a spelling match
pub const SPELLING_SCORE: u32 = 50;

fn present(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// Number of syllables; 0 when absent or blank
pub fn syllable_count(pronunciation: Option<&str>) -> usize {
    match present(pronunciation) {
        Some(p) => p.matches(SYLLABLE_DELIMITER).count() + 1,
        None => 0,
    }
}

/// Whether the pronunciation begins with `sound`
pub fn starts_with_sound(pronunciation: Option<&str>, sound: &str) -> bool {
    match present(pronunciation) {
        Some(p) if !sound.trim().is_empty() => normalize(p).starts_with(&normalize(sound)),
        _ => false,
    }
}

/// Whether the pronunciation ends with `sound`
pub fn ends_with_sound(pronunciation: Option<&str>, sound: &str) -> bool {
    match present(pronunciation) {
        Some(p) if !sound.trim().is_empty() => normalize(p).ends_with(&normalize(sound)),
        _ => false,
    }
}

/// Split a syllable at its first vowel into (onset, rhyme)
fn split_onset(syllable: &str) -> (&str, &str) {
    match syllable.find(|c: char| VOWELS.contains(&c.to_ascii_lowercase())) {
        Some(idx) => (&syllable[..idx], &syllable[idx..]),
        None => ("", syllable),
    }
}

/// Whether two pronunciations rhyme on their final syllable.
///
/// The rhyme part (first vowel onward) must match with at least two
/// characters while the onsets differ. Identical pronunciations do not rhyme.
pub fn rhymes(p1: Option<&str>, p2: Option<&str>) -> bool {
    let (Some(p1), Some(p2)) = (present(p1), present(p2)) else {
        return false;
    };

    let p1 = normalize(p1);
    let p2 = normalize(p2);
    if p1 == p2 {
        return false;
    }

    let last1 = p1.rsplit(SYLLABLE_DELIMITER).next().unwrap_or_default();
    let last2 = p2.rsplit(SYLLABLE_DELIMITER).next().unwrap_or_default();
    if last1.chars().count() < 2 || last2.chars().count() < 2 {
        return false;
    }

    let (onset1, rhyme1) = split_onset(last1);
    let (onset2, rhyme2) = split_onset(last2);

    rhyme1 == rhyme2 && onset1 != onset2 && rhyme1.chars().count() >= 2
}

fn clean_pronunciation(p: &str) -> String {
    p.chars()
        .filter(|c| !matches!(c, '/' | '[' | ']'))
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// Pronunciation closeness: 80 exact, 60 within 20% edits, 40 within 40%.
pub fn pronunciation_score(p1: Option<&str>, p2: Option<&str>) -> u32 {
    let (Some(p1), Some(p2)) = (present(p1), present(p2)) else {
        return 0;
    };

    let clean1 = clean_pronunciation(p1);
    let clean2 = clean_pronunciation(p2);
    if clean1 == clean2 {
        return 80;
    }

    let distance = edit_distance(&clean1, &clean2) as f64;
    let max_len = clean1.chars().count().max(clean2.chars().count()) as f64;

    if distance <= 0.2 * max_len {
        60
    } else if distance <= 0.4 * max_len {
        40
    } else {
        0
    }
}

/// Whether two spellings are close but not identical.
///
/// Lengths may differ by at most three characters and the edit distance must
/// be within 30% of the longer spelling.
pub fn spelling_match(name1: &str, name2: &str) -> bool {
    let a = name1.to_lowercase();
    let b = name2.to_lowercase();
    let len_a = a.chars().count();
    let len_b = b.chars().count();

    if len_a.abs_diff(len_b) > 3 {
        return false;
    }

    let distance = edit_distance(&a, &b);
    let max_len = len_a.max(len_b) as f64;
    distance > 0 && distance as f64 <= 0.3 * max_len
}
