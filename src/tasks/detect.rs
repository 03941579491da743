//! Local action-item detection by lead-in phrase matching.
//!
//! This is the fallback when the AI task-extraction call fails or returns
//! nothing. First matching pattern wins; the captured remainder becomes the
//! task description.

use regex::Regex;
use std::sync::OnceLock;

const LEAD_IN_PATTERNS: [&str; 5] = [
    r"(?i)I will (.*)",
    r"(?i)We need to (.*)",
    r"(?i)Don't forget to (.*)",
    r"(?i)Please (.*)",
    r"(?i)Action item: (.*)",
];

fn patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        LEAD_IN_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("lead-in pattern is valid"))
            .collect()
    })
}

/// Scan `text` for an action-item lead-in phrase.
///
/// Returns the captured task description of the first matching pattern, or
/// `None` when no pattern matches. Never an error.
pub fn detect_action_item(text: &str) -> Option<String> {
    for pattern in patterns() {
        if let Some(captures) = pattern.captures(text) {
            if let Some(rest) = captures.get(1) {
                return Some(rest.as_str().to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_remainder() {
        assert_eq!(
            detect_action_item("We need to fix the API latency"),
            Some("fix the API latency".to_string())
        );
        assert_eq!(
            detect_action_item("I will draft the rollout plan"),
            Some("draft the rollout plan".to_string())
        );
        assert_eq!(
            detect_action_item("Action item: review the budget"),
            Some("review the budget".to_string())
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            detect_action_item("don't forget to ping the stakeholder"),
            Some("ping the stakeholder".to_string())
        );
    }

    #[test]
    fn test_first_pattern_wins() {
        // "I will" is declared before "Please".
        assert_eq!(
            detect_action_item("Please note I will handle deploys"),
            Some("handle deploys".to_string())
        );
    }

    #[test]
    fn test_no_match_yields_none() {
        assert_eq!(detect_action_item("the build is green"), None);
        assert_eq!(detect_action_item(""), None);
    }
}
