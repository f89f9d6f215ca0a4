//! Brain Module Tests
//!
//! End-to-end scenarios through the classifier, normalizer, matcher, and
//! advisor, mirroring how the CLI drives them.

use crate::brain::{
    find_best_match, is_natural_language, Advisor, Command, IntentClassifier, MATCH_THRESHOLD,
};
use crate::knowledge::{data, KnowledgeBase};

mod classification_scenarios {
    use super::*;

    #[test]
    fn test_question_about_tool() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("what is burp suite?");
        assert_eq!(result.command, Command::Explain);
        assert_eq!(result.topic, "burp suite");
    }

    #[test]
    fn test_tips_request() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("tips on sql injection");
        assert_eq!(result.command, Command::Tip);
        assert_eq!(result.topic, "sql injection");
    }

    #[test]
    fn test_scenario_report() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("I found an open port 22");
        assert_eq!(result.command, Command::Plan);
        assert_eq!(result.topic, "open port 22");
    }

    #[test]
    fn test_post_exploitation_question() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("what should I do after getting a shell?");
        assert_eq!(result.command, Command::Plan);
        assert_eq!(result.topic, "getting a shell");
    }

    #[test]
    fn test_documentation_request() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("document xss vulnerability");
        assert_eq!(result.command, Command::Report);
    }

    #[test]
    fn test_quiz_request() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("test me on buffer overflow");
        assert_eq!(result.command, Command::Quiz);
        assert_eq!(result.topic, "buffer overflow");
    }

    #[test]
    fn test_troubleshooting_request() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("why is my scan not working?");
        assert_eq!(result.command, Command::Assist);
    }

    #[test]
    fn test_bare_tool_name_falls_back_to_explain() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("nmap -sV");
        assert_eq!(result.command, Command::Explain);
        assert_eq!(result.topic, "nmap -sV");
    }

    #[test]
    fn test_category_order_prefers_explain() {
        let classifier = IntentClassifier::new();

        // "how to ..." could read as a tip request, but the explain
        // category is declared first and wins.
        let result = classifier.classify("how to learn metasploit");
        assert_eq!(result.command, Command::Explain);
        assert_eq!(result.topic, "learn metasploit");
    }
}

mod retrieval_scenarios {
    use super::*;

    #[test]
    fn test_full_flow_tip_lookup() {
        let advisor = Advisor::with_defaults();

        let advice = advisor.respond("tips on sql injection");
        assert_eq!(advice.command, Command::Tip);
        assert_eq!(advice.matched_key.as_deref(), Some("sql injection"));
        assert!(!advice.fallback);
        assert!(advice.text.contains("UNION SELECT"));
    }

    #[test]
    fn test_full_flow_explain_with_flag() {
        let advisor = Advisor::with_defaults();

        let advice = advisor.respond("explain nmap -sV");
        assert_eq!(advice.command, Command::Explain);
        assert!(advice.text.contains("Version detection"));
    }

    #[test]
    fn test_full_flow_plan_scenario() {
        let advisor = Advisor::with_defaults();

        let advice = advisor.respond("I found port 80 open");
        assert_eq!(advice.command, Command::Plan);
        assert!(!advice.fallback);
        assert!(advice.text.contains("nikto") || advice.text.contains("gobuster"));
    }

    #[test]
    fn test_full_flow_unknown_topic_gets_fallback() {
        let advisor = Advisor::with_defaults();

        let advice = advisor.respond("tips on underwater basket weaving");
        assert_eq!(advice.command, Command::Tip);
        assert!(advice.fallback);
        assert!(!advice.text.is_empty());
    }

    #[test]
    fn test_every_flat_table_key_resolves_itself() {
        // Each key queried verbatim scores 1.5 (full overlap + containment
        // bonus) and must retrieve its own content.
        let advisor = Advisor::with_defaults();

        let tables: [(&[(&str, &str)], Command); 5] = [
            (data::TIP_ENTRIES, Command::Tip),
            (data::ASSIST_ENTRIES, Command::Assist),
            (data::REPORT_ENTRIES, Command::Report),
            (data::QUIZ_ENTRIES, Command::Quiz),
            (data::PLAN_ENTRIES, Command::Plan),
        ];

        for (table, command) in tables {
            for (key, content) in table {
                let advice = advisor.advise(command, key);
                assert!(!advice.fallback, "{} '{}' fell back", command, key);
                assert_eq!(advice.text, *content, "{} '{}' wrong content", command, key);
            }
        }
    }

    #[test]
    fn test_empty_query_always_falls_back() {
        let advisor = Advisor::with_defaults();

        for command in Command::ALL {
            let advice = advisor.advise(command, "");
            assert!(advice.fallback, "{} with empty topic must fall back", command);
            assert!(!advice.text.is_empty());
        }
    }

    #[test]
    fn test_score_range() {
        let kb = KnowledgeBase::curated();

        for (key, _) in kb.tips {
            let (_, score) = find_best_match(key, kb.tips);
            assert!((0.0..=1.5).contains(&score), "score out of range for {}", key);
        }
    }

    #[test]
    fn test_threshold_constant() {
        // The boundary is part of the retrieval contract.
        assert_eq!(MATCH_THRESHOLD, 0.3);
    }
}

mod dispatch_guard {
    use super::*;

    #[test]
    fn test_natural_language_inputs_route_to_classifier() {
        for input in [
            "how do I scan for open ports?",
            "what is burp suite?",
            "tips on privilege escalation",
            "I found an open port 8080",
            "can you help with recon",
        ] {
            assert!(is_natural_language(input), "expected NL: {}", input);
        }
    }

    #[test]
    fn test_literal_inputs_bypass_classifier() {
        for input in ["nmap", "sqlmap -u", "explain", ""] {
            assert!(!is_natural_language(input), "expected literal: {}", input);
        }
    }
}
