//! Heuristic quality score for a boolean search string.

use serde::{Deserialize, Serialize};

const UNBALANCED_PENALTY: i32 = 20;
const NO_OPERATOR_PENALTY: i32 = 10;
const NO_QUOTES_PENALTY: i32 = 15;
const LOCATION_PENALTY: i32 = 25;

/// Location words that do not belong in a skills search.
pub const LOCATION_TERMS: &[&str] = &["city", "state", "country", "remote", "onsite", "hybrid"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanValidation {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    /// 0..=100
    pub score: u32,
}

/// True when some pair of adjacent double quotes encloses at least one character.
fn has_quoted_term(query: &str) -> bool {
    let parts: Vec<&str> = query.split('"').collect();
    parts.len() >= 3 && parts[1..parts.len() - 1].iter().any(|p| !p.is_empty())
}

/// Scores `query` from 100 down. Only an empty query is invalid; every other problem
/// lowers the score and is reported as an issue or suggestion.
pub fn validate_boolean_search(query: &str) -> BooleanValidation {
    if query.is_empty() {
        return BooleanValidation {
            is_valid: false,
            issues: vec!["Empty boolean search".to_string()],
            suggestions: Vec::new(),
            score: 0,
        };
    }

    let mut score = 100_i32;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    if query.matches('(').count() != query.matches(')').count() {
        issues.push("Unbalanced parentheses".to_string());
        score -= UNBALANCED_PENALTY;
    }

    if !query.contains("AND") && !query.contains("OR") {
        suggestions.push("Consider using AND/OR operators for better precision".to_string());
        score -= NO_OPERATOR_PENALTY;
    }

    if !has_quoted_term(query) {
        suggestions.push("Use quotes around multi-word terms".to_string());
        score -= NO_QUOTES_PENALTY;
    }

    let lower = query.to_lowercase();
    for term in LOCATION_TERMS {
        if lower.contains(term) {
            issues.push(format!(
                "Location term \"{term}\" detected - focus on technical skills"
            ));
            score -= LOCATION_PENALTY;
        }
    }

    BooleanValidation {
        is_valid: true,
        issues,
        suggestions,
        score: score.max(0) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_invalid() {
        let v = validate_boolean_search("");
        assert!(!v.is_valid);
        assert_eq!(v.score, 0);
    }

    #[test]
    fn test_well_formed_query_scores_full() {
        let v = validate_boolean_search(r#""React" AND ("TypeScript" OR "JavaScript")"#);
        assert!(v.is_valid);
        assert_eq!(v.score, 100);
        assert!(v.issues.is_empty());
        assert!(v.suggestions.is_empty());
    }

    #[test]
    fn test_individual_penalties() {
        assert_eq!(validate_boolean_search(r#"("React" AND "Go""#).score, 80);
        assert_eq!(validate_boolean_search(r#""React""#).score, 90);
        assert_eq!(validate_boolean_search("React AND Go").score, 85);
        assert_eq!(validate_boolean_search(r#""React" AND "Remote""#).score, 75);
    }

    #[test]
    fn test_empty_quotes_do_not_count() {
        let v = validate_boolean_search(r#""" AND React"#);
        assert_eq!(v.score, 85);
    }

    #[test]
    fn test_location_terms_accumulate_and_floor_at_zero() {
        let v = validate_boolean_search("remote onsite hybrid city state");
        assert!(v.is_valid);
        assert_eq!(v.score, 0);
        assert_eq!(v.issues.len(), 5);
    }

    #[test]
    fn test_score_is_always_in_range() {
        for query in ["", "x", "((", "\"a\"", "remote AND \"x\" OR (", "country state city"] {
            let v = validate_boolean_search(query);
            assert!(v.score <= 100);
        }
    }
}
