// Prompt constants for boolean search generation.

use crate::llm_client::prompts::{fill_template, BOOLEAN_GROUPING_RULES, TECHNICAL_FOCUS_RULES};

pub const BOOLEAN_SYSTEM: &str =
    "You are a recruitment expert who creates concise boolean search queries.";

/// Replace: {job_title}, {skills}, {boolean_rules}, {focus_rules}
pub const BOOLEAN_PROMPT_TEMPLATE: &str = r#"Create a concise boolean search query for a recruiter to find candidates with these skills.

Job Title: {job_title}
Skills: {skills}

Requirements:
{boolean_rules}
- Keep it short and focused
{focus_rules}

Example format: "Skill1" AND ("Skill2" OR "Skill3") AND "Skill4"

Return only the boolean search query, no explanations."#;

pub fn boolean_prompt(skills: &[String], title: &str) -> String {
    let skills = skills.join(", ");
    fill_template(
        BOOLEAN_PROMPT_TEMPLATE,
        &[
            ("boolean_rules", BOOLEAN_GROUPING_RULES),
            ("focus_rules", TECHNICAL_FOCUS_RULES),
            ("job_title", title),
            ("skills", skills.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_with_placeholder_name_stays_literal() {
        let skills = vec!["Rust".to_string(), "Tokio".to_string()];
        let prompt = boolean_prompt(&skills, "{skills} Engineer");
        assert!(prompt.contains("Job Title: {skills} Engineer"));
        assert!(prompt.contains("Skills: Rust, Tokio"));
        assert!(!prompt.contains("{boolean_rules}"));
    }
}
