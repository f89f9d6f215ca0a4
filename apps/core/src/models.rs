use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::brain::intent::Command;

/// A rendered answer for one request.
#[derive(Debug, Clone, Serialize)]
pub struct Advice {
    /// The command that produced this answer.
    pub command: Command,
    /// The topic the lookup ran against.
    pub topic: String,
    /// Knowledge-base key that matched, if any.
    pub matched_key: Option<String>,
    /// Retrieval confidence in [0, 1.5].
    pub score: f32,
    /// Whether the generic fallback template was used.
    pub fallback: bool,
    /// The displayable answer text.
    pub text: String,
}

/// Machine-readable output envelope, printed when JSON mode is enabled.
#[derive(Debug, Serialize)]
pub struct AdviceEnvelope<'a> {
    /// Command name ("explain", "tip", ...)
    pub kind: &'a str,
    /// The raw input text
    pub input: &'a str,
    /// The rendered answer
    pub output: &'a str,
    /// Timestamp of the request
    pub ts: DateTime<Utc>,
}
