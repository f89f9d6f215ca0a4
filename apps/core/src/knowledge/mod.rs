//! # Knowledge Module
//!
//! Curated educational content for the six study commands.
//!
//! The tables are static, loaded once, and immutable: slices of
//! `(key, content)` pairs with lower-case phrase keys. Slice order is the
//! declared order and doubles as the retrieval tie-break (earliest wins),
//! so it must stay stable.

pub mod data;

/// Structured explain content for one tool: a base description, per-flag
/// descriptions in declared order, and usage/caution lines.
#[derive(Debug, Clone, Copy)]
pub struct ExplainEntry {
    /// One-line description of the tool
    pub base: &'static str,
    /// Flag/feature descriptions, in display order
    pub flags: &'static [(&'static str, &'static str)],
    /// When to reach for the tool
    pub usage: &'static str,
    /// What to watch out for
    pub caution: &'static str,
}

/// The six read-only content tables, one per command.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    pub explain: &'static [(&'static str, ExplainEntry)],
    pub tips: &'static [(&'static str, &'static str)],
    pub assists: &'static [(&'static str, &'static str)],
    pub reports: &'static [(&'static str, &'static str)],
    pub quizzes: &'static [(&'static str, &'static str)],
    pub plans: &'static [(&'static str, &'static str)],
}

impl KnowledgeBase {
    /// The built-in curated knowledge base.
    pub fn curated() -> Self {
        Self {
            explain: data::EXPLAIN_ENTRIES,
            tips: data::TIP_ENTRIES,
            assists: data::ASSIST_ENTRIES,
            reports: data::REPORT_ENTRIES,
            quizzes: data::QUIZ_ENTRIES,
            plans: data::PLAN_ENTRIES,
        }
    }

    /// Exact lookup of a structured explain entry.
    pub fn explain_entry(&self, key: &str) -> Option<&'static ExplainEntry> {
        self.explain
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, entry)| entry)
    }
}
