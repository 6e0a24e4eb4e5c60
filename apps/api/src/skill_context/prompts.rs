// Prompt constants for skill context and market insight generation.

use crate::llm_client::prompts::fill_template;

/// Replace: {skill}
pub const SKILL_CONTEXT_PROMPT_TEMPLATE: &str = r#"Provide context for the technical skill: {skill}

Return a JSON object with:
1. description: Brief description of what this skill is
2. probing_question: ONE specific behavioral question to assess this skill (focus on integration/challenge scenarios)
3. key_areas: List of 3-5 related technical areas

Format:
{
    "description": "...",
    "probing_question": "...",
    "key_areas": ["...", "...", "..."]
}

Make the probing question specific and focused on technical challenges or integration scenarios."#;

/// Replace: {skills}
pub const MARKET_INSIGHTS_PROMPT_TEMPLATE: &str = r#"Provide market insights for these technical skills: {skills}

Return a JSON object with:
1. market_trends: List of 2-3 current market trends for these skills
2. recommendations: List of 2-3 recommendations for skill development or job search

Format:
{
    "market_trends": ["...", "..."],
    "recommendations": ["...", "..."]
}"#;

pub fn skill_context_prompt(skill: &str) -> String {
    fill_template(SKILL_CONTEXT_PROMPT_TEMPLATE, &[("skill", skill)])
}

pub fn market_insights_prompt(skills: &[String]) -> String {
    let skills = skills.join(", ");
    fill_template(MARKET_INSIGHTS_PROMPT_TEMPLATE, &[("skills", skills.as_str())])
}
