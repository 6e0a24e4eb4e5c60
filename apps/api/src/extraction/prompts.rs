// Prompt templates for the extraction cascade.
// Placeholders are substituted with `str::replace` before sending.

use crate::llm_client::prompts::{fill_template, BOOLEAN_GROUPING_RULES, TECHNICAL_FOCUS_RULES};

/// One-skill-per-line prompt for the provider list stage.
/// Replace: {job_title}, {job_description}
pub const SKILL_LIST_PROMPT_TEMPLATE: &str = r#"Extract ONLY technical skills, technologies, tools, and programming languages from this job description.

Job Title: {job_title}
Job Description: {job_description}

IMPORTANT: Extract ONLY individual technical skills, not phrases or sentences.

Examples of what to extract:
- Ansible, Nornir, Git, CI/CD, Containers, Docker, Kubernetes
- Python, Java, JavaScript, SQL, REST API
- AWS, Azure, GCP, VMware, Cisco
- Linux, Windows, MySQL, MongoDB

Examples of what NOT to extract:
- "Interview Process - Prescreen" (this is a phrase, not a skill)
- "Network Enterprise" (this is too generic)
- "Develop" or "Evaluate" (these are verbs, not skills)

Return only the skill names, one per line, no explanations or bullet points.
Focus on specific technologies, tools, frameworks, and technical competencies."#;

/// Structured recruiter analysis. The answer must be a single JSON object.
/// Replace: {job_title}, {job_description}, {focus_rules}, {boolean_rules}
pub const DYNAMIC_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following job description from the perspective of an expert technical recruiter.
Focus on identifying TECHNICAL skills, tools, technologies, and frameworks that would be relevant for candidate sourcing.

Job Title: {job_title}
Job Description: "{job_description}"

Think like a recruiter who needs to find candidates on LinkedIn, Indeed, or other platforms.
Identify skills that are:
1. Technical and specific (e.g., "Python", "React", "AWS", "Docker")
2. Relevant for the role
3. Commonly searched by recruiters

Return your analysis as a single JSON object with the following structure:
{
  "skills": [
    {"name": "SkillName", "confidence": 0.9, "source": "ai_analysis"},
    {"name": "AnotherSkill", "confidence": 0.8, "source": "ai_analysis"}
  ],
  "keySkillContext": "A single, insightful sentence explaining the most critical technical requirement.",
  "booleanString": "A concise boolean search string with proper AND/OR grouping. Format: (\"Skill A\" OR \"Skill B\") AND \"Skill C\" AND (\"Skill D\" OR \"Skill E\")",
  "aiQuestions": [
    "A specific, technical question about the most important skill or technology mentioned in the job description.",
    "A behavioral or experience-based question relevant to the role and company context."
  ],
  "extractionMethod": "ai_dynamic_analysis"
}

Important guidelines:
{focus_rules}

Boolean search rules:
{boolean_rules}

For AI Questions:
- Generate 2 specific, relevant questions for this role
- First question should be technical/skill-based (e.g., "Can you walk me through your experience with React hooks and state management?")
- Second question should be behavioral/experience-based (e.g., "Tell me about a challenging e-commerce project you worked on and how you handled it.")
- Questions should be specific to the technologies and context mentioned in the job description
- Make questions actionable and interview-ready"#;

pub fn skill_list_prompt(description: &str, title: &str) -> String {
    fill_template(
        SKILL_LIST_PROMPT_TEMPLATE,
        &[("job_title", title), ("job_description", description)],
    )
}

pub fn dynamic_analysis_prompt(description: &str, title: &str) -> String {
    let title = if title.trim().is_empty() {
        "Not specified"
    } else {
        title
    };
    fill_template(
        DYNAMIC_ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("focus_rules", TECHNICAL_FOCUS_RULES),
            ("boolean_rules", BOOLEAN_GROUPING_RULES),
            ("job_title", title),
            ("job_description", description),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_list_prompt_substitutes_fields() {
        let prompt = skill_list_prompt("Build APIs in Go.", "Backend Engineer");
        assert!(prompt.contains("Job Title: Backend Engineer"));
        assert!(prompt.contains("Job Description: Build APIs in Go."));
        assert!(!prompt.contains("{job_title}"));
    }

    #[test]
    fn test_skill_list_title_is_not_expanded() {
        let prompt = skill_list_prompt("Build APIs in Go.", "{job_description} Lead");
        assert!(prompt.contains("Job Title: {job_description} Lead"));
        assert_eq!(prompt.matches("Build APIs in Go.").count(), 1);
    }

    #[test]
    fn test_dynamic_prompt_defaults_missing_title() {
        let prompt = dynamic_analysis_prompt("Workday HCM data conversion", "");
        assert!(prompt.contains("Job Title: Not specified"));
        assert!(prompt.contains("\"Workday HCM data conversion\""));
        assert!(prompt.contains("Use ONLY 4-5 skills maximum"));
        assert!(!prompt.contains("{focus_rules}"));
    }

    #[test]
    fn test_description_placeholders_are_not_expanded() {
        let prompt = dynamic_analysis_prompt("literal {boolean_rules} text", "QA");
        assert!(prompt.contains("literal {boolean_rules} text"));
    }
}
