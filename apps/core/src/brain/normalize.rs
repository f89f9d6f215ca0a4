//! Topic normalization.
//!
//! Cleans extracted topic phrases before they are used as lookup keys.

/// Filler words stripped from the front of an extracted topic. Only leading
/// tokens are dropped; a stopword in the middle of a phrase is meaningful
/// ("privilege escalation on linux").
const LEADING_STOPWORDS: &[&str] = &[
    "the", "a", "an", "to", "for", "with", "about", "on", "in", "at", "by", "from", "of", "and",
    "or",
];

/// Strip leading filler words from a topic phrase and collapse whitespace.
///
/// Never empties the result: if every token is a stopword, the input is
/// returned unchanged.
pub fn normalize_topic(phrase: &str) -> String {
    let words: Vec<&str> = phrase.split_whitespace().collect();

    let mut start = 0;
    while start < words.len()
        && LEADING_STOPWORDS
            .iter()
            .any(|s| words[start].eq_ignore_ascii_case(s))
    {
        start += 1;
    }

    let cleaned = words[start..].join(" ");
    if cleaned.is_empty() {
        phrase.to_string()
    } else {
        cleaned
    }
}
