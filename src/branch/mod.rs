// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Branch-name inference.
//!
//! Extracts a ticket identifier and a commit-type hint from the current
//! branch name. Both functions are pure and never fail; a branch that
//! matches nothing simply yields `None` and the caller falls back to
//! manual entry.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Ticket extraction rules, evaluated in order. The first capture group
    /// of the first matching rule wins; rules are never combined.
    static ref TICKET_RULES: [Regex; 6] = [
        // Project-code prefix delimited by an underscore, e.g. "ABC-12_fix".
        Regex::new(r"^([A-Z]+-[A-Za-z0-9]+)_").unwrap(),
        // The same token after a slash, e.g. "user/ABC-12_fix".
        Regex::new(r"/([A-Z]+-[A-Za-z0-9]+)_").unwrap(),
        // Tag after a slash, e.g. "feature/JIRA-99".
        Regex::new(r"/(\w+-\d+)").unwrap(),
        // Bare number after a slash, e.g. "feature/42".
        Regex::new(r"/(\d+)").unwrap(),
        // Tag at the start, e.g. "JIRA-7-login".
        Regex::new(r"^(\w+-\d+)").unwrap(),
        // Bare number at the start, e.g. "99-login".
        Regex::new(r"^(\d+)").unwrap(),
    ];
}

/// Extract a ticket identifier from a branch name.
pub fn infer_ticket(branch: &str) -> Option<String> {
    TICKET_RULES
        .iter()
        .find_map(|rule| rule.captures(branch))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Find the first candidate type that the branch name carries.
///
/// A candidate `t` matches when it appears as a segment prefix followed by
/// `-`, as an infix surrounded by `-`, or as a prefix followed by `/`.
/// Candidates are tried in the caller's order; matching is case-sensitive.
pub fn infer_type(branch: &str, candidates: &[String]) -> Option<String> {
    candidates
        .iter()
        .find(|t| type_matches(branch, t))
        .cloned()
}

fn type_matches(branch: &str, candidate: &str) -> bool {
    let escaped = regex::escape(candidate);

    let patterns = [
        format!("(^|/){}-", escaped),
        format!("-{}-", escaped),
        format!("{}/", escaped),
    ];

    patterns.iter().any(|pattern| {
        Regex::new(pattern)
            .map(|re| re.is_match(branch))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_ticket_underscore_prefix() {
        assert_eq!(infer_ticket("ABC-12_fix-login"), Some("ABC-12".to_string()));
    }

    #[test]
    fn test_ticket_underscore_after_slash() {
        assert_eq!(
            infer_ticket("user/ABC-12_fix-login"),
            Some("ABC-12".to_string())
        );
    }

    #[test]
    fn test_ticket_tag_after_slash() {
        assert_eq!(infer_ticket("feature/JIRA-99"), Some("JIRA-99".to_string()));
    }

    #[test]
    fn test_ticket_number_after_slash() {
        assert_eq!(infer_ticket("feature/42"), Some("42".to_string()));
    }

    #[test]
    fn test_ticket_tag_at_start() {
        assert_eq!(infer_ticket("JIRA-7-login"), Some("JIRA-7".to_string()));
    }

    #[test]
    fn test_ticket_number_at_start() {
        assert_eq!(infer_ticket("99-login"), Some("99".to_string()));
    }

    #[test]
    fn test_ticket_no_match() {
        assert_eq!(infer_ticket("main"), None);
        assert_eq!(infer_ticket("develop"), None);
    }

    #[test]
    fn test_ticket_first_rule_wins() {
        // Matches both the underscore rule and the start-tag rule; the
        // underscore rule has higher precedence.
        assert_eq!(infer_ticket("ABC-12_JIRA-99"), Some("ABC-12".to_string()));
    }

    #[test]
    fn test_type_prefix_dash() {
        assert_eq!(
            infer_type("fix-123-login", &candidates(&["feat", "fix"])),
            Some("fix".to_string())
        );
    }

    #[test]
    fn test_type_segment_prefix() {
        assert_eq!(
            infer_type("feature/feat-x", &candidates(&["feat", "fix"])),
            Some("feat".to_string())
        );
    }

    #[test]
    fn test_type_before_slash() {
        assert_eq!(
            infer_type("feat/login", &candidates(&["feat", "fix"])),
            Some("feat".to_string())
        );
    }

    #[test]
    fn test_type_between_dashes() {
        assert_eq!(
            infer_type("release-feat-x", &candidates(&["feat", "fix"])),
            Some("feat".to_string())
        );
    }

    #[test]
    fn test_type_no_match() {
        assert_eq!(infer_type("release", &candidates(&["feat", "fix"])), None);
    }

    #[test]
    fn test_type_embedded_word_does_not_match() {
        // "feature/login" contains "feat" but not as a delimited token.
        assert_eq!(
            infer_type("feature/login", &candidates(&["feat"])),
            None
        );
    }

    #[test]
    fn test_type_candidate_order_wins() {
        assert_eq!(
            infer_type("feat-fix-1", &candidates(&["fix", "feat"])),
            Some("fix".to_string())
        );
    }

    #[test]
    fn test_type_case_sensitive() {
        assert_eq!(infer_type("FEAT/login", &candidates(&["feat"])), None);
    }
}
