//! Job Email Detector: cheap additive scoring that decides whether a message is a job
//! posting before any AI analysis is spent on it.

use serde::{Deserialize, Serialize};

use crate::detection::patterns::{
    BONUS_RULES, JOB_KEYWORDS, JOB_PATTERNS, JOB_THRESHOLD, KEYWORD_WEIGHT, MAX_SCORE,
    RECRUITER_INDICATORS, SENDER_INDICATOR_WEIGHT, SUBJECT_JOB_PATTERNS, TECH_MENTIONS,
    TECH_MENTION_WEIGHT,
};

/// Which signals fired. Pattern entries are the regex sources or bonus rule labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionDetails {
    pub keyword_matches: Vec<String>,
    pub pattern_matches: Vec<String>,
    pub subject_matches: Vec<String>,
    pub sender_indicators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub is_job: bool,
    /// Normalized score in [0, 1].
    pub confidence: f64,
    pub details: DetectionDetails,
}

/// Stateless detector over the static tables in `detection::patterns`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JobEmailDetector;

impl JobEmailDetector {
    /// Scores `content`, `subject` and `sender` against the keyword and pattern tables.
    ///
    /// Rules overlap and can double-count the same phrase (e.g. "bill rate" fires both a
    /// strong pattern and a bonus rule). The weights are kept as tuned.
    pub fn is_job_email(&self, content: &str, subject: &str, sender: &str) -> DetectionResult {
        let content = content.to_lowercase();
        let subject = subject.to_lowercase();
        let sender = sender.to_lowercase();

        let mut score = 0.0_f64;
        let mut details = DetectionDetails::default();

        for &keyword in JOB_KEYWORDS {
            if content.contains(keyword) {
                score += KEYWORD_WEIGHT;
                details.keyword_matches.push(keyword.to_string());
            }
        }

        for pattern in JOB_PATTERNS.iter() {
            if pattern.regex.is_match(&content) {
                score += pattern.weight;
                details.pattern_matches.push(pattern.source.to_string());
            }
        }

        for pattern in SUBJECT_JOB_PATTERNS.iter() {
            if pattern.regex.is_match(&subject) {
                score += pattern.weight;
                details.subject_matches.push(pattern.source.to_string());
            }
        }

        for &indicator in RECRUITER_INDICATORS {
            if sender.contains(indicator) {
                score += SENDER_INDICATOR_WEIGHT;
                details.sender_indicators.push(indicator.to_string());
            }
        }

        for rule in BONUS_RULES {
            if rule.matches(&content) {
                score += rule.weight;
                details.pattern_matches.push(rule.label.to_string());
            }
        }

        let mentioned: Vec<&str> = TECH_MENTIONS
            .iter()
            .copied()
            .filter(|tech| content.contains(tech))
            .collect();
        if mentioned.len() >= 2 {
            score += mentioned.len() as f64 * TECH_MENTION_WEIGHT;
            details
                .keyword_matches
                .extend(mentioned.iter().map(|t| t.to_string()));
        }

        let confidence = (score / MAX_SCORE).min(1.0);

        DetectionResult {
            is_job: confidence >= JOB_THRESHOLD,
            confidence,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT_EMAIL: &str = r#"
        Client: Nordic Naturals

        Nordic Naturals sells vitamins and supplements including fish oils.

        Location: 100% remote manager is based in Watsonville
        Duration: 4 - 5 months (could extend)
        Bill Rate: 60 to 65/hr
        Part-time Hours: 20 - 30 a week

        Client Need Summary - Web Developer (Part-Time Contract)

        The client is seeking a senior-level front-end web developer to support their main website.

        Current Tech Stack:
        - CMS: WordPress
        - eCommerce: Shopify
        - Frontend: GatsbyJS - they will be moving to Hydrogen soon
    "#;

    fn detect(content: &str) -> DetectionResult {
        JobEmailDetector.is_job_email(content, "", "")
    }

    #[test]
    fn test_client_need_bill_rate_looking_for_developer_is_job() {
        let result = detect("Client need: we are looking for a developer. Bill rate is $70/hr.");
        assert!(result.is_job);
        assert!(result.confidence > 0.20, "confidence was {}", result.confidence);
        assert!(result
            .details
            .pattern_matches
            .contains(&"looking_for_developer".to_string()));
        assert!(result
            .details
            .pattern_matches
            .contains(&"rate_mention".to_string()));
    }

    #[test]
    fn test_contract_email_scores_high() {
        let result = JobEmailDetector.is_job_email(
            CONTRACT_EMAIL,
            "Web Developer Position - React/Shopify",
            "jane@staffing-agency.com",
        );
        assert!(result.is_job);
        assert!(result.confidence >= 0.7, "confidence was {}", result.confidence);
        assert!(result
            .details
            .sender_indicators
            .contains(&"staffing".to_string()));
        assert!(result
            .details
            .sender_indicators
            .contains(&"agency".to_string()));
    }

    #[test]
    fn test_personal_email_is_not_job() {
        let result = JobEmailDetector.is_job_email(
            "Hey! Are we still on for dinner on Friday? Let me know.",
            "Dinner plans",
            "friend@example.com",
        );
        assert!(!result.is_job);
        assert!(result.confidence < 0.20);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let result = JobEmailDetector.is_job_email("", "", "");
        assert!(!result.is_job);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.details, DetectionDetails::default());
    }

    #[test]
    fn test_confidence_is_clamped_to_one() {
        let loud = "job description minimum qualifications must-have what you will bring \
                    pay rate bill rate role details: interview type: client need \
                    support our client software engineer key details: looking for a developer";
        let result = detect(loud);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_subject_patterns_score_separately() {
        let without = JobEmailDetector.is_job_email("hello", "", "");
        let with = JobEmailDetector.is_job_email("hello", "Exciting Job Opportunity", "");
        assert!((with.confidence - without.confidence - 0.08).abs() < 1e-9);
        assert_eq!(with.details.subject_matches, vec![r"job\s+opportunity"]);
    }

    #[test]
    fn test_single_tech_mention_adds_nothing() {
        let result = detect("python");
        assert_eq!(result.confidence, 0.0);

        let result = detect("python docker");
        // two mentions, two points each
        assert!((result.confidence - 0.04).abs() < 1e-9);
        assert_eq!(result.details.keyword_matches, vec!["python", "docker"]);
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        let lower = detect("looking for a software engineer");
        let upper = detect("LOOKING FOR A SOFTWARE ENGINEER");
        assert_eq!(lower, upper);
    }
}
