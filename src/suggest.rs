//! "Did you mean" suggestions for mistyped subcommand names.

use strsim::levenshtein;

/// Candidates whose length differs from the input by more than this are skipped
/// by the edit-distance search.
const MAX_LENGTH_DIFFERENCE: usize = 3;

/// Find the candidate the user most likely meant.
///
/// Rules, first match wins:
/// 1. a case-insensitive prefix match,
/// 2. a single transposition of two characters,
/// 3. the smallest Levenshtein distance, if within `max(2, len / 3)`.
pub fn closest_match<S: AsRef<str>>(input: &str, candidates: &[S]) -> Option<String> {
    if input.is_empty() || candidates.is_empty() {
        return None;
    }

    let needle = input.to_lowercase();

    if let Some(candidate) = candidates
        .iter()
        .find(|c| c.as_ref().to_lowercase().starts_with(&needle))
    {
        return Some(candidate.as_ref().to_string());
    }

    let needle_chars: Vec<char> = needle.chars().collect();

    if let Some(candidate) = candidates.iter().find(|c| {
        let lowered: Vec<char> = c.as_ref().to_lowercase().chars().collect();
        is_transposition(&needle_chars, &lowered)
    }) {
        return Some(candidate.as_ref().to_string());
    }

    let mut best: Option<(&S, usize)> = None;
    for candidate in candidates {
        let lowered = candidate.as_ref().to_lowercase();
        if lowered.chars().count().abs_diff(needle_chars.len()) > MAX_LENGTH_DIFFERENCE {
            continue;
        }
        let distance = levenshtein(&needle, &lowered);
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((candidate, distance));
        }
    }

    let threshold = std::cmp::max(2, needle_chars.len() / 3);
    best.filter(|(_, distance)| *distance <= threshold)
        .map(|(candidate, _)| candidate.as_ref().to_string())
}

/// Equal-length strings that differ in exactly two positions holding swapped characters.
fn is_transposition(a: &[char], b: &[char]) -> bool {
    if a.len() != b.len() || a.len() < 2 {
        return false;
    }

    let mut diff = Vec::with_capacity(2);
    for (i, (ca, cb)) in a.iter().zip(b).enumerate() {
        if ca != cb {
            if diff.len() == 2 {
                return false;
            }
            diff.push(i);
        }
    }

    match diff[..] {
        [i, j] => a[i] == b[j] && a[j] == b[i],
        _ => false,
    }
}
