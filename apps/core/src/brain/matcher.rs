//! Fuzzy best-match retrieval over knowledge-base tables.
//!
//! Scores every candidate key by word overlap plus a flat bonus when the
//! whole key appears inside the query. Scores live in [0, 1.5].

use std::collections::HashSet;

/// Minimum score a match must exceed (strictly) to be considered confident.
pub const MATCH_THRESHOLD: f32 = 0.3;

/// Find the best matching key in an ordered table of `(key, value)` entries.
///
/// A query word counts as matched when it appears as a substring of any key
/// word. The per-word overlap ratio gets a flat +0.5 bonus when the full
/// lower-cased key is contained in the lower-cased query. Only strictly
/// higher scores replace the current best, so ties keep the earliest
/// declared key and a zero-scoring key is never selected.
///
/// Returns `(None, 0.0)` for an empty table or an all-zero scoring round
/// (including a blank query, which can never match anything).
pub fn find_best_match<'a, V>(query: &str, entries: &'a [(&'a str, V)]) -> (Option<&'a str>, f32) {
    let query_lower = query.to_lowercase();
    let query_words: HashSet<&str> = query_lower.split_whitespace().collect();

    let mut best_key = None;
    let mut best_score = 0.0_f32;

    for (key, _) in entries {
        let key_lower = key.to_lowercase();
        let key_words: Vec<&str> = key_lower.split_whitespace().collect();

        let matches = query_words
            .iter()
            .filter(|word| key_words.iter().any(|kw| kw.contains(**word)))
            .count();
        let mut score = if query_words.is_empty() {
            0.0
        } else {
            matches as f32 / query_words.len() as f32
        };

        if query_lower.contains(&key_lower) {
            score += 0.5;
        }

        if score > best_score {
            best_score = score;
            best_key = Some(*key);
        }
    }

    (best_key, best_score)
}
