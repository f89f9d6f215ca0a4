//! Intent classification using regex patterns.
//!
//! Maps conversational input onto one of the six study commands.
//! No ML model required - pure Rust regex matching.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::normalize::normalize_topic;

/// One of the six study commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// What a tool or command does ("explain nmap -sV")
    Explain,
    /// Next-steps guidance for a scenario ("I found port 80 open")
    Plan,
    /// Study guide for a technique or topic
    Tip,
    /// Troubleshooting for an error or issue
    Assist,
    /// Micro-report template for a finding
    Report,
    /// Flashcards for active recall
    Quiz,
}

impl Command {
    /// All commands, in pattern-matching priority order. Earlier categories
    /// win when several patterns could match the same text.
    pub const ALL: [Command; 6] = [
        Command::Explain,
        Command::Plan,
        Command::Tip,
        Command::Assist,
        Command::Report,
        Command::Quiz,
    ];

    /// The command word as typed by users.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Explain => "explain",
            Command::Plan => "plan",
            Command::Tip => "tip",
            Command::Assist => "assist",
            Command::Report => "report",
            Command::Quiz => "quiz",
        }
    }

    /// Parse a bare command word.
    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of intent classification: the inferred command and the topic
/// extracted from the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIntent {
    /// Inferred command
    pub command: Command,
    /// Extracted topic, used as the knowledge-base lookup key
    pub topic: String,
}

impl ParsedIntent {
    /// Human-readable hint shown when natural-language routing rewrites
    /// the input.
    pub fn suggestion(&self) -> String {
        format!("I think you mean: {} '{}'", self.command, self.topic)
    }
}

// Patterns are matched against lower-cased, trimmed input, anchored at the
// start. Within a category, declared order is tried first to last; the first
// capture wins. expect() is acceptable here: an invalid static pattern is
// unrecoverable.
static EXPLAIN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"^how (?:do|can) i (.*)").expect("Invalid regex: how-do-i pattern"),
        Regex::new(r"^how to (.*)").expect("Invalid regex: how-to pattern"),
        Regex::new(r"^explain (.*)").expect("Invalid regex: explain pattern"),
        Regex::new(r"^what is (.*)").expect("Invalid regex: what-is pattern"),
        Regex::new(r"^what's (.*)").expect("Invalid regex: what's pattern"),
        Regex::new(r"^tell me about (.*)").expect("Invalid regex: tell-me-about pattern"),
        Regex::new(r"^describe (.*)").expect("Invalid regex: describe pattern"),
        Regex::new(r"^show me (.*)").expect("Invalid regex: show-me pattern"),
    ]
});

static PLAN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"^what should i do (?:after|when|if) (.*)")
            .expect("Invalid regex: what-should-i-do pattern"),
        Regex::new(r"^what(?:'s| is) (?:the )?next (?:step|after) (.*)")
            .expect("Invalid regex: next-step pattern"),
        Regex::new(r"^next steps (?:for|after) (.*)").expect("Invalid regex: next-steps pattern"),
        Regex::new(r"^i (?:found|got|have|see) (.*)").expect("Invalid regex: i-found pattern"),
        Regex::new(r"^what to do (?:with|about) (.*)").expect("Invalid regex: what-to-do pattern"),
        Regex::new(r"^help (?:me )?(?:with|plan) (.*)").expect("Invalid regex: help-with pattern"),
    ]
});

static TIP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"^tips? (?:on|for|about) (.*)").expect("Invalid regex: tips-on pattern"),
        Regex::new(r"^guide (?:for|to|on) (.*)").expect("Invalid regex: guide-for pattern"),
        Regex::new(r"^(?:how to )?learn (?:about )?(.*)").expect("Invalid regex: learn pattern"),
        Regex::new(r"^techniques? (?:for|on) (.*)").expect("Invalid regex: techniques pattern"),
        Regex::new(r"^best practices? (?:for )?(.*)")
            .expect("Invalid regex: best-practices pattern"),
    ]
});

static ASSIST_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"^i'?m getting (?:an? )?(.*)").expect("Invalid regex: im-getting pattern"),
        Regex::new(r"^(?:error|problem|issue):? (.*)").expect("Invalid regex: error pattern"),
        Regex::new(r"^why (?:is|does|am|can't) (.*)").expect("Invalid regex: why-is pattern"),
        Regex::new(r"^(?:how to )?fix (.*)").expect("Invalid regex: fix pattern"),
        Regex::new(r"^troubleshoot (.*)").expect("Invalid regex: troubleshoot pattern"),
    ]
});

static REPORT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"^document (.*)").expect("Invalid regex: document pattern"),
        Regex::new(r"^write (?:a )?(?:up |report (?:for|on) )?(.*)")
            .expect("Invalid regex: write-report pattern"),
        Regex::new(r"^report (.*)").expect("Invalid regex: report pattern"),
        Regex::new(r"^create (?:a )?report (?:for )?(.*)")
            .expect("Invalid regex: create-report pattern"),
    ]
});

static QUIZ_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"^test me (?:on )?(.*)").expect("Invalid regex: test-me pattern"),
        Regex::new(r"^quiz (?:me )?(?:on |about )?(.*)").expect("Invalid regex: quiz pattern"),
        Regex::new(r"^question(?:s)? (?:on |about )?(.*)")
            .expect("Invalid regex: questions pattern"),
        Regex::new(r"^practice (.*)").expect("Invalid regex: practice pattern"),
    ]
});

/// Tool names that route bare mentions to `explain`.
const TOOL_KEYWORDS: &[&str] = &[
    "nmap", "burp", "sqlmap", "metasploit", "wireshark", "hydra", "john", "hashcat", "gobuster",
    "ffuf", "nikto", "dirb", "wfuzz", "netcat", "nc", "ssh", "tcpdump", "masscan", "enum4linux",
    "smbclient",
];

/// Attack/technique names that route bare mentions to `tip`.
const ATTACK_KEYWORDS: &[&str] = &[
    "xss",
    "sqli",
    "sql injection",
    "csrf",
    "ssrf",
    "xxe",
    "rce",
    "lfi",
    "rfi",
    "ssti",
    "deserialization",
    "privilege escalation",
    "privesc",
    "buffer overflow",
    "format string",
    "race condition",
    "injection",
];

/// Scenario words that route bare mentions to `plan`.
const SCENARIO_KEYWORDS: &[&str] = &[
    "found",
    "got",
    "have",
    "discovered",
    "see",
    "seeing",
    "stuck",
    "after",
    "next",
    "shell",
    "port",
    "vulnerability",
    "target",
    "enumeration",
    "foothold",
];

/// Pattern group for a single command category.
struct CommandPatterns {
    command: Command,
    patterns: Vec<Regex>,
}

/// Intent classifier using ordered regex patterns with keyword fallback.
pub struct IntentClassifier {
    patterns: Vec<CommandPatterns>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a new classifier with all pattern categories in priority order.
    pub fn new() -> Self {
        let patterns = vec![
            CommandPatterns {
                command: Command::Explain,
                patterns: EXPLAIN_PATTERNS.clone(),
            },
            CommandPatterns {
                command: Command::Plan,
                patterns: PLAN_PATTERNS.clone(),
            },
            CommandPatterns {
                command: Command::Tip,
                patterns: TIP_PATTERNS.clone(),
            },
            CommandPatterns {
                command: Command::Assist,
                patterns: ASSIST_PATTERNS.clone(),
            },
            CommandPatterns {
                command: Command::Report,
                patterns: REPORT_PATTERNS.clone(),
            },
            CommandPatterns {
                command: Command::Quiz,
                patterns: QUIZ_PATTERNS.clone(),
            },
        ];

        Self { patterns }
    }

    /// Classify free text into a command and topic.
    ///
    /// Always succeeds: input that matches nothing falls back to
    /// `(Explain, original text)`, and empty input yields `(Explain, "")`.
    pub fn classify(&self, text: &str) -> ParsedIntent {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return ParsedIntent {
                command: Command::Explain,
                topic: String::new(),
            };
        }

        let lower = trimmed.to_lowercase();

        // Direct command short-circuit: "explain nmap -sV" bypasses pattern
        // matching and keeps the topic's original case.
        for command in Command::ALL {
            let name = command.name();
            if trimmed.eq_ignore_ascii_case(name) {
                return ParsedIntent {
                    command,
                    topic: String::new(),
                };
            }
            if trimmed.len() > name.len()
                && trimmed.is_char_boundary(name.len())
                && trimmed[..name.len()].eq_ignore_ascii_case(name)
                && trimmed.as_bytes()[name.len()] == b' '
            {
                return ParsedIntent {
                    command,
                    topic: trimmed[name.len()..].trim().to_string(),
                };
            }
        }

        // Category order is a deliberate tie-break: explain before plan
        // before tip, and so on.
        for group in &self.patterns {
            for pattern in &group.patterns {
                if let Some(caps) = pattern.captures(&lower) {
                    if let Some(matched) = caps.get(1) {
                        let raw = matched
                            .as_str()
                            .trim()
                            .trim_end_matches(['?', '.', '!'])
                            .trim_end();
                        return ParsedIntent {
                            command: group.command,
                            topic: normalize_topic(raw),
                        };
                    }
                }
            }
        }

        self.keyword_fallback(&lower, trimmed)
    }

    /// Keyword-based detection when no pattern matched.
    fn keyword_fallback(&self, lower: &str, original: &str) -> ParsedIntent {
        let command = if TOOL_KEYWORDS.iter().any(|k| lower.contains(k)) {
            Command::Explain
        } else if ATTACK_KEYWORDS.iter().any(|k| lower.contains(k)) {
            Command::Tip
        } else if SCENARIO_KEYWORDS.iter().any(|k| lower.contains(k)) {
            Command::Plan
        } else {
            Command::Explain
        };

        ParsedIntent {
            command,
            topic: original.to_string(),
        }
    }
}

const QUESTION_WORDS: &[&str] = &["how", "what", "why", "when", "where", "who", "which"];

static NL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"i (?:found|got|have|see|need|want)")
            .expect("Invalid regex: i-found NL pattern"),
        Regex::new(r"tips? (?:on|for)").expect("Invalid regex: tips NL pattern"),
        Regex::new(r"tell me").expect("Invalid regex: tell-me NL pattern"),
        Regex::new(r"show me").expect("Invalid regex: show-me NL pattern"),
        Regex::new(r"help me").expect("Invalid regex: help-me NL pattern"),
        Regex::new(r"can you").expect("Invalid regex: can-you NL pattern"),
        Regex::new(r"should i").expect("Invalid regex: should-i NL pattern"),
    ]
});

/// Decide whether input reads like natural language rather than a literal
/// command. Callers use this to guard classification.
pub fn is_natural_language(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    let lower = trimmed.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();

    // A lone word is only natural language when it is a question word.
    if words.len() == 1 {
        return QUESTION_WORDS.contains(&words[0]);
    }

    if text.contains('?') {
        return true;
    }

    if QUESTION_WORDS.contains(&words[0]) {
        return true;
    }

    if Command::from_name(words[0]).is_some() && words.len() > 1 {
        return true;
    }

    if NL_PATTERNS.iter().any(|p| p.is_match(&lower)) {
        return true;
    }

    words.len() >= 3
}

static TOPIC_PREFIX_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"^how (?:do|can) i\s+").expect("Invalid regex: how-do-i prefix"),
        Regex::new(r"^how to\s+").expect("Invalid regex: how-to prefix"),
        Regex::new(r"^what is\s+").expect("Invalid regex: what-is prefix"),
        Regex::new(r"^what's\s+").expect("Invalid regex: what's prefix"),
        Regex::new(r"^tell me about\s+").expect("Invalid regex: tell-me-about prefix"),
        Regex::new(r"^explain\s+").expect("Invalid regex: explain prefix"),
        Regex::new(r"^tips? on\s+").expect("Invalid regex: tips-on prefix"),
        Regex::new(r"^help me\s+").expect("Invalid regex: help-me prefix"),
    ]
});

/// Strip question scaffolding and trailing punctuation to get a bare topic
/// suitable for fuzzy lookup.
#[allow(dead_code)]
pub fn extract_topic(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let mut lower = text.to_lowercase();
    for pattern in TOPIC_PREFIX_PATTERNS.iter() {
        lower = pattern.replace(&lower, "").into_owned();
    }

    lower.trim_end_matches(['?', '.', '!']).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_command_short_circuit() {
        let classifier = IntentClassifier::new();

        for command in Command::ALL {
            let input = format!("{} SQL Injection ", command.name());
            let result = classifier.classify(&input);
            assert_eq!(result.command, command);
            assert_eq!(result.topic, "SQL Injection", "for {}", input);
        }
    }

    #[test]
    fn test_direct_command_keeps_original_case() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("explain nmap -sV");
        assert_eq!(result.command, Command::Explain);
        assert_eq!(result.topic, "nmap -sV");
    }

    #[test]
    fn test_bare_command_word() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("quiz");
        assert_eq!(result.command, Command::Quiz);
        assert_eq!(result.topic, "");
    }

    #[test]
    fn test_empty_input() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("");
        assert_eq!(result.command, Command::Explain);
        assert_eq!(result.topic, "");

        let result = classifier.classify("   ");
        assert_eq!(result.command, Command::Explain);
        assert_eq!(result.topic, "");
    }

    #[test]
    fn test_what_is_question() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("what is burp suite?");
        assert_eq!(result.command, Command::Explain);
        assert_eq!(result.topic, "burp suite");
    }

    #[test]
    fn test_tips_on_topic() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("tips on sql injection");
        assert_eq!(result.command, Command::Tip);
        assert_eq!(result.topic, "sql injection");
    }

    #[test]
    fn test_scenario_pattern_strips_leading_article() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("I found an open port 22");
        assert_eq!(result.command, Command::Plan);
        assert_eq!(result.topic, "open port 22");
    }

    #[test]
    fn test_troubleshooting_question() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("why is my scan not working?");
        assert_eq!(result.command, Command::Assist);
        assert_eq!(result.topic, "my scan not working");
    }

    #[test]
    fn test_quiz_request() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("test me on buffer overflow");
        assert_eq!(result.command, Command::Quiz);
        assert_eq!(result.topic, "buffer overflow");
    }

    #[test]
    fn test_report_request() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("document xss vulnerability");
        assert_eq!(result.command, Command::Report);
        assert_eq!(result.topic, "xss vulnerability");
    }

    #[test]
    fn test_tool_keyword_fallback() {
        let classifier = IntentClassifier::new();

        // Two words, no pattern match: the tool keyword decides.
        let result = classifier.classify("nmap -sV");
        assert_eq!(result.command, Command::Explain);
        assert_eq!(result.topic, "nmap -sV");
    }

    #[test]
    fn test_attack_keyword_fallback() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("sqli basics");
        assert_eq!(result.command, Command::Tip);
        assert_eq!(result.topic, "sqli basics");
    }

    #[test]
    fn test_scenario_keyword_fallback() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("totally stuck");
        assert_eq!(result.command, Command::Plan);
        assert_eq!(result.topic, "totally stuck");
    }

    #[test]
    fn test_default_fallback_is_explain() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("gibberish zz");
        assert_eq!(result.command, Command::Explain);
        assert_eq!(result.topic, "gibberish zz");
    }

    #[test]
    fn test_classify_is_idempotent() {
        let classifier = IntentClassifier::new();

        let first = classifier.classify("how do I scan for open ports?");
        let second = classifier.classify("how do I scan for open ports?");
        assert_eq!(first, second);
    }

    #[test]
    fn test_is_natural_language() {
        assert!(is_natural_language("how do I scan ports?"));
        assert!(is_natural_language("what is nmap"));
        assert!(is_natural_language("tips on xss"));
        assert!(is_natural_language("can you help"));
        assert!(is_natural_language("one two three"));
        assert!(is_natural_language("explain nmap"));
        assert!(is_natural_language("how"));

        assert!(!is_natural_language(""));
        assert!(!is_natural_language("nmap"));
        assert!(!is_natural_language("explain"));
        assert!(!is_natural_language("nmap -sV"));
    }

    #[test]
    fn test_extract_topic() {
        assert_eq!(extract_topic("what is burp suite?"), "burp suite");
        assert_eq!(extract_topic("tips on sql injection"), "sql injection");
        assert_eq!(extract_topic("how do I pivot"), "pivot");
        assert_eq!(extract_topic(""), "");
    }

    #[test]
    fn test_suggestion_format() {
        let intent = ParsedIntent {
            command: Command::Tip,
            topic: "sql injection".to_string(),
        };
        assert_eq!(intent.suggestion(), "I think you mean: tip 'sql injection'");
    }
}
