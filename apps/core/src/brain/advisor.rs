//! Advisor - main orchestrator for the brain module.
//!
//! Ties classification, normalization, and retrieval together: free text
//! goes in, a displayable answer always comes out. A lookup that clears the
//! confidence threshold returns curated content; everything else lands on a
//! per-command fallback template, so no input ever dead-ends.

use super::intent::{Command, IntentClassifier, ParsedIntent};
use super::matcher::{find_best_match, MATCH_THRESHOLD};
use crate::knowledge::KnowledgeBase;
use crate::models::Advice;

const EXPLAIN_FALLBACK: &str =
    "Command not in knowledge base. Try a simpler example or check man page.";

const TIP_FALLBACK: &str = "Topic not found. Try: sql injection, xss, privilege escalation, \
     nmap, burp suite, password cracking, metasploit, api testing, cloud security";

const ASSIST_FALLBACK: &str = "Issue not recognized. Reproduce the error, capture the exact \
     message, and try simplifying the command. Check tool documentation and logs for details.";

const PLAN_FALLBACK: &str = "1. Clarify scope and objective (what are you trying to achieve?)\n\
     2. Choose appropriate tools with safe default settings\n\
     3. Document findings and plan next targeted probe based on results";

fn report_fallback(finding: &str) -> String {
    let subject = if finding.is_empty() {
        "(describe vulnerability)"
    } else {
        finding
    };
    format!(
        "Vulnerability: {}\n\
         Impact: (what can attacker do? data access, privilege escalation, denial of service, etc.)\n\
         Mitigation: (specific steps to fix: input validation, access controls, patching, configuration changes)",
        subject
    )
}

fn quiz_fallback(topic: &str) -> String {
    format!(
        "Q: What is {topic}?\n\
         A: (core concept in one sentence)\n\
         \n\
         Q: When is {topic} commonly found?\n\
         A: (typical scenarios or contexts)\n\
         \n\
         Q: What's a key mitigation for {topic}?\n\
         A: (primary defensive measure)"
    )
}

/// Orchestrates classifier, normalizer, and retriever over an injected
/// knowledge base.
pub struct Advisor {
    classifier: IntentClassifier,
    knowledge: KnowledgeBase,
}

impl Advisor {
    /// Create an advisor over the given knowledge base.
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            knowledge,
        }
    }

    /// Advisor over the built-in curated knowledge base.
    #[allow(dead_code)]
    pub fn with_defaults() -> Self {
        Self::new(KnowledgeBase::curated())
    }

    /// Classify free text into a command and topic.
    pub fn classify(&self, text: &str) -> ParsedIntent {
        self.classifier.classify(text)
    }

    /// Full natural-language path: classify, then retrieve.
    #[allow(dead_code)]
    pub fn respond(&self, text: &str) -> Advice {
        let intent = self.classifier.classify(text);
        self.advise(intent.command, &intent.topic)
    }

    /// Retrieve the answer for an already-resolved command and topic.
    pub fn advise(&self, command: Command, topic: &str) -> Advice {
        match command {
            Command::Explain => self.explain(topic),
            Command::Tip => self.lookup(Command::Tip, topic, self.knowledge.tips, || {
                TIP_FALLBACK.to_string()
            }),
            Command::Assist => self.lookup(Command::Assist, topic, self.knowledge.assists, || {
                ASSIST_FALLBACK.to_string()
            }),
            Command::Report => self.lookup(Command::Report, topic, self.knowledge.reports, || {
                report_fallback(topic)
            }),
            Command::Quiz => self.lookup(Command::Quiz, topic, self.knowledge.quizzes, || {
                quiz_fallback(topic)
            }),
            Command::Plan => self.lookup(Command::Plan, topic, self.knowledge.plans, || {
                PLAN_FALLBACK.to_string()
            }),
        }
    }

    /// Fuzzy retrieval with the confidence threshold applied.
    fn lookup(
        &self,
        command: Command,
        topic: &str,
        table: &'static [(&'static str, &'static str)],
        fallback: impl FnOnce() -> String,
    ) -> Advice {
        let (best_key, score) = find_best_match(topic, table);

        if let Some(key) = best_key {
            if score > MATCH_THRESHOLD {
                if let Some((_, content)) = table.iter().find(|(k, _)| *k == key) {
                    return Advice {
                        command,
                        topic: topic.to_string(),
                        matched_key: Some(key.to_string()),
                        score,
                        fallback: false,
                        text: content.to_string(),
                    };
                }
            }
        }

        Advice {
            command,
            topic: topic.to_string(),
            matched_key: None,
            score,
            fallback: true,
            text: fallback(),
        }
    }

    /// Structured explain retrieval: exact base-command match first, then
    /// first key contained in the input, then the generic fallback.
    fn explain(&self, command_text: &str) -> Advice {
        let cmd = command_text.trim().to_lowercase();
        let base_cmd = cmd.split_whitespace().next().unwrap_or("");

        if let Some(entry) = self.knowledge.explain_entry(base_cmd) {
            let mut parts = vec![entry.base.to_string()];

            // Flags are matched case-insensitively against the whole input,
            // so "explain nmap -sv" still surfaces -sV.
            for (flag, desc) in entry.flags {
                if cmd.contains(&flag.to_lowercase()) {
                    parts.push(format!("{}: {}", flag, desc));
                }
            }

            parts.push(format!("Use when: {}", entry.usage));
            parts.push(format!("⚠ {}", entry.caution));

            return Advice {
                command: Command::Explain,
                topic: command_text.to_string(),
                matched_key: Some(base_cmd.to_string()),
                score: 1.0,
                fallback: false,
                text: parts.join("\n"),
            };
        }

        for (tool, entry) in self.knowledge.explain {
            if cmd.contains(tool) {
                let text = format!(
                    "{}\nUse when: {}\n⚠ {}",
                    entry.base, entry.usage, entry.caution
                );
                return Advice {
                    command: Command::Explain,
                    topic: command_text.to_string(),
                    matched_key: Some(tool.to_string()),
                    score: 0.5,
                    fallback: false,
                    text,
                };
            }
        }

        Advice {
            command: Command::Explain,
            topic: command_text.to_string(),
            matched_key: None,
            score: 0.0,
            fallback: true,
            text: EXPLAIN_FALLBACK.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::data;

    fn advisor() -> Advisor {
        Advisor::with_defaults()
    }

    #[test]
    fn test_explain_exact_with_flags() {
        let advice = advisor().advise(Command::Explain, "nmap -sV");

        assert!(!advice.fallback);
        assert_eq!(advice.matched_key.as_deref(), Some("nmap"));
        assert!(advice.text.contains("Network Mapper"));
        assert!(advice.text.contains("-sV: Version detection"));
        assert!(advice.text.contains("Use when:"));
        assert!(advice.text.contains("⚠"));
    }

    #[test]
    fn test_explain_flag_match_is_case_insensitive() {
        let advice = advisor().advise(Command::Explain, "nmap -sv");
        assert!(advice.text.contains("-sV: Version detection"));
    }

    #[test]
    fn test_explain_skips_unmentioned_flags() {
        let advice = advisor().advise(Command::Explain, "nmap");
        assert!(!advice.text.contains("-sV:"));
    }

    #[test]
    fn test_explain_partial_containment() {
        // "sqlmap" is not the first token, so the partial path applies.
        let advice = advisor().advise(Command::Explain, "run sqlmap against target");

        assert!(!advice.fallback);
        assert_eq!(advice.matched_key.as_deref(), Some("sqlmap"));
        assert!(advice.text.contains("SQL injection"));
    }

    #[test]
    fn test_explain_fallback() {
        let advice = advisor().advise(Command::Explain, "frobnicator");

        assert!(advice.fallback);
        assert_eq!(advice.matched_key, None);
        assert!(advice.text.contains("not in knowledge base"));
    }

    #[test]
    fn test_tip_retrieval_with_bonus() {
        let advice = advisor().advise(Command::Tip, "sql injection basics");

        assert!(!advice.fallback);
        assert_eq!(advice.matched_key.as_deref(), Some("sql injection"));
        assert!(advice.score > MATCH_THRESHOLD);
    }

    #[test]
    fn test_tip_fallback_lists_topics() {
        let advice = advisor().advise(Command::Tip, "qqqq zzzz");

        assert!(advice.fallback);
        assert!(advice.text.starts_with("Topic not found."));
    }

    #[test]
    fn test_score_at_threshold_is_no_match() {
        // Ten distinct query words, three of which appear in the key:
        // 3/10 = 0.3 exactly, and the key is not a substring of the query,
        // so no bonus applies. The strict > comparison must reject it.
        let query = "alpha beta gamma delta epsilon zeta eta theta iota kappa";

        static BOUNDARY: &[(&str, &str)] = &[("alpha gamma epsilon", "content")];
        let (key, score) = find_best_match(query, BOUNDARY);
        assert_eq!(key, Some("alpha gamma epsilon"));
        assert!((score - 0.3).abs() < 1e-6);

        let kb = KnowledgeBase {
            tips: BOUNDARY,
            ..KnowledgeBase::curated()
        };
        let advice = Advisor::new(kb).advise(Command::Tip, query);
        assert!(advice.fallback);

        // Four matching words clears the threshold.
        let query = "alpha gamma epsilon zeta eta theta iota kappa mu nu";
        static ABOVE: &[(&str, &str)] = &[("alpha gamma epsilon zeta", "content")];
        let kb = KnowledgeBase {
            tips: ABOVE,
            ..KnowledgeBase::curated()
        };
        let advice = Advisor::new(kb).advise(Command::Tip, query);
        assert!(!advice.fallback);
    }

    #[test]
    fn test_assist_retrieval() {
        let advice = advisor().advise(Command::Assist, "connection refused error");

        assert!(!advice.fallback);
        assert_eq!(advice.matched_key.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_assist_fallback() {
        let advice = advisor().advise(Command::Assist, "zzzz");
        assert!(advice.fallback);
        assert!(advice.text.starts_with("Issue not recognized."));
    }

    #[test]
    fn test_report_fallback_interpolates_finding() {
        let advice = advisor().advise(Command::Report, "weird widget glitch");

        assert!(advice.fallback);
        assert!(advice
            .text
            .starts_with("Vulnerability: weird widget glitch"));
        assert!(advice.text.contains("Impact:"));
        assert!(advice.text.contains("Mitigation:"));
    }

    #[test]
    fn test_report_fallback_empty_finding() {
        let advice = advisor().advise(Command::Report, "");
        assert!(advice.text.contains("(describe vulnerability)"));
    }

    #[test]
    fn test_quiz_fallback_interpolates_topic() {
        let advice = advisor().advise(Command::Quiz, "quantum basket weaving");

        assert!(advice.fallback);
        assert!(advice.text.contains("Q: What is quantum basket weaving?"));
    }

    #[test]
    fn test_plan_retrieval() {
        let advice = advisor().advise(Command::Plan, "found port 80 open");

        assert!(!advice.fallback);
        assert_eq!(advice.matched_key.as_deref(), Some("found port 80 open"));
        assert!(advice.text.starts_with("1."));
    }

    #[test]
    fn test_plan_fallback() {
        let advice = advisor().advise(Command::Plan, "zzzz");
        assert!(advice.fallback);
        assert!(advice.text.starts_with("1. Clarify scope"));
    }

    #[test]
    fn test_respond_routes_natural_language() {
        let advice = advisor().respond("tips on sql injection");

        assert_eq!(advice.command, Command::Tip);
        assert_eq!(advice.topic, "sql injection");
        assert!(!advice.fallback);
    }

    #[test]
    fn test_respond_empty_input_reaches_fallback() {
        let advice = advisor().respond("");

        assert_eq!(advice.command, Command::Explain);
        assert_eq!(advice.topic, "");
        assert!(advice.fallback);
    }

    #[test]
    fn test_data_tables_reachable() {
        // Every flat table resolves its own first key.
        let advisor = advisor();
        for (key, _) in data::TIP_ENTRIES.iter().take(1) {
            assert!(!advisor.advise(Command::Tip, key).fallback);
        }
        for (key, _) in data::PLAN_ENTRIES.iter().take(1) {
            assert!(!advisor.advise(Command::Plan, key).fallback);
        }
    }
}
