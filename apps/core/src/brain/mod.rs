//! # Brain Module
//!
//! Fast, non-LLM understanding layer for SecMentor.
//! Turns free-text student questions into structured command lookups.
//!
//! ## Components
//! - `intent`: command classification using regex patterns and keyword fallback
//! - `normalize`: topic cleanup (leading stopword stripping)
//! - `matcher`: fuzzy best-match retrieval over knowledge tables
//! - `advisor`: main orchestrator gluing the pieces together
//!
//! Everything here is synchronous and pure: static tables compiled once,
//! no I/O, no shared mutable state.

pub mod advisor;
pub mod intent;
pub mod matcher;
pub mod normalize;

pub use advisor::Advisor;
pub use intent::{extract_topic, is_natural_language, Command, IntentClassifier, ParsedIntent};
pub use matcher::{find_best_match, MATCH_THRESHOLD};
pub use normalize::normalize_topic;
