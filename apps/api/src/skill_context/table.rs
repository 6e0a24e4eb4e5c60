//! Curated interview context for common skills and the aliases that map onto them.

use crate::skill_context::SkillContext;

pub struct CuratedContext {
    pub key: &'static str,
    pub description: &'static str,
    pub probing_question: &'static str,
    pub key_areas: &'static [&'static str],
}

impl CuratedContext {
    pub fn to_context(&self) -> SkillContext {
        SkillContext {
            description: self.description.to_string(),
            probing_question: self.probing_question.to_string(),
            key_areas: self.key_areas.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Searched in this order by both the exact and the partial lookup.
pub const CURATED: &[CuratedContext] = &[
    CuratedContext {
        key: "workday",
        description: "Workday HCM/HRIS platform for human capital management",
        probing_question: "Can you tell me about a time when you had to configure Workday business processes or security? What was the most challenging aspect?",
        key_areas: &["HCM", "HRIS", "Business Process Configuration", "Security", "Data Conversion"],
    },
    CuratedContext {
        key: "salesforce",
        description: "Salesforce CRM platform for customer relationship management",
        probing_question: "Can you describe a complex Salesforce integration you built? What was the \"glue\" that held everything together?",
        key_areas: &["Apex", "Lightning", "SOQL", "Integration", "Custom Objects"],
    },
    CuratedContext {
        key: "react",
        description: "React JavaScript library for building user interfaces",
        probing_question: "Can you tell me about a time when you had to optimize React performance? What was your approach and what were the results?",
        key_areas: &["JavaScript", "TypeScript", "State Management", "Performance", "Component Architecture"],
    },
    CuratedContext {
        key: "python",
        description: "Python programming language for backend development and data science",
        probing_question: "Can you describe a time when you had to integrate multiple Python services or APIs? What was the most challenging part?",
        key_areas: &["Backend Development", "API Integration", "Data Processing", "Automation", "Testing"],
    },
    CuratedContext {
        key: "java",
        description: "Java programming language for enterprise applications",
        probing_question: "Can you tell me about a time when you had to design a scalable Java architecture? What decisions did you make and why?",
        key_areas: &["Spring Framework", "Enterprise Architecture", "Performance", "Microservices", "Testing"],
    },
    CuratedContext {
        key: "devops",
        description: "DevOps practices for software development and operations",
        probing_question: "Can you describe a time when you had to automate a complex deployment process? What was the \"glue\" that made it work?",
        key_areas: &["CI/CD", "Infrastructure as Code", "Monitoring", "Automation", "Cloud Platforms"],
    },
    CuratedContext {
        key: "aws",
        description: "Amazon Web Services cloud computing platform",
        probing_question: "Can you tell me about a time when you had to design a multi-service AWS architecture? What was the most challenging integration point?",
        key_areas: &["EC2", "S3", "Lambda", "CloudFormation", "VPC", "Security"],
    },
    CuratedContext {
        key: "sql",
        description: "Structured Query Language for database management",
        probing_question: "Can you describe a time when you had to optimize a complex SQL query? What was your approach and what were the performance improvements?",
        key_areas: &["Database Design", "Query Optimization", "Data Modeling", "Performance Tuning", "ETL"],
    },
];

/// Alias → curated key. An alias matches when it occurs anywhere in the skill name.
pub const VARIATIONS: &[(&str, &str)] = &[
    ("javascript", "react"),
    ("js", "react"),
    ("typescript", "react"),
    ("ts", "react"),
    ("spring", "java"),
    ("hibernate", "java"),
    ("docker", "devops"),
    ("kubernetes", "devops"),
    ("jenkins", "devops"),
    ("git", "devops"),
    ("hcm", "workday"),
    ("hris", "workday"),
    ("apex", "salesforce"),
    ("lightning", "salesforce"),
    ("soql", "salesforce"),
    ("ec2", "aws"),
    ("s3", "aws"),
    ("lambda", "aws"),
    ("mysql", "sql"),
    ("postgresql", "sql"),
    ("mongodb", "sql"),
];

fn by_key(key: &str) -> Option<&'static CuratedContext> {
    CURATED.iter().find(|c| c.key == key)
}

/// Exact key, then containment in either direction, then aliases.
pub fn lookup(skill: &str) -> Option<&'static CuratedContext> {
    let name = skill.to_lowercase();

    by_key(&name)
        .or_else(|| {
            CURATED
                .iter()
                .find(|c| name.contains(c.key) || c.key.contains(name.as_str()))
        })
        .or_else(|| {
            VARIATIONS
                .iter()
                .find(|(alias, _)| name.contains(alias))
                .and_then(|(_, key)| by_key(key))
        })
}
