// Static vocabularies for skill extraction. Loaded once per process.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Words and phrases that are never skills on their own.
pub static NON_TECHNICAL: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "we", "the", "this", "that", "these", "those", "required", "experience", "years",
        "plus", "level", "certification", "process", "prescreen", "network", "enterprise",
        "identify", "develop", "evaluate", "coordinate", "facilitate", "manage", "design",
        "implement", "analyze", "assess", "cth", "asap", "usc", "poc", "sme", "hr", "hcm",
        "analyst", "interview", "phone", "email", "resume", "cover letter", "application",
        "position", "role", "job", "career", "opportunity", "company", "team", "department",
        "division", "organization", "business", "industry", "sector", "market", "customer",
        "client", "user", "stakeholder", "partner", "vendor", "supplier", "contractor",
        "consultant", "advisor", "expert", "specialist", "professional", "practitioner",
        "practicing", "working", "collaborating", "communicating", "presenting", "reporting",
        "documenting", "planning", "organizing", "coordinating", "scheduling", "prioritizing",
        "problem solving", "critical thinking", "analytical thinking", "creative thinking",
        "strategic thinking", "systems thinking", "design thinking", "lean thinking",
        "agile thinking", "scrum thinking", "kanban thinking", "devops thinking",
        "cloud thinking", "security thinking", "compliance thinking", "governance thinking",
        "responsive", "including", "focus", "description", "duration", "location", "remote",
        "month", "front", "end", "script", "developer", "need", "flexible", "insurance",
        "minutes", "ladder", "life", "implementation", "component", "emphasis", "strong",
        "migration", "quickly", "existing", "codebase", "processes", "contribute", "tasks",
        "evolving", "tech", "stack", "assist", "deliver", "features", "improvements",
        "senior", "onboarding", "meaningful", "contributions", "ramp", "both", "closely",
        "new", "quick",
    ]
    .into_iter()
    .collect()
});

pub const NON_TECHNICAL_PREFIXES: &[&str] =
    &["we ", "the ", "this ", "that ", "these ", "those ", "a ", "an "];

/// Generic action verbs rejected by the technical-skill check.
pub static ACTION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "identify", "develop", "evaluate", "coordinate", "facilitate", "manage", "design",
        "implement", "analyze", "assess", "review", "plan", "execute", "monitor", "maintain",
        "support", "provide", "assist", "help", "guide", "train", "mentor", "coach", "teach",
        "learn", "study", "research", "investigate", "examine", "inspect", "test", "validate",
        "verify", "confirm", "check", "audit",
    ]
    .into_iter()
    .collect()
});

/// Fragments that mark an email address, URL or header line.
pub const LINK_FRAGMENTS: &[&str] = &["@", "http", "www", ".com", ".org"];

/// Characters that mark a label, range or parenthetical rather than a skill.
pub const STRUCTURAL_PUNCTUATION: &[char] = &['-', ':', ';', '(', ')', '[', ']', '{', '}'];

pub const TECHNICAL_INDICATORS: &[&str] = &[
    "api",
    "sdk",
    "framework",
    "library",
    "tool",
    "platform",
    "system",
    "database",
    "cloud",
    "automation",
    "configuration",
    "deployment",
    "monitoring",
    "logging",
    "testing",
    "ci/cd",
    "devops",
    "infrastructure",
    "frontend",
    "backend",
    "fullstack",
    "mobile",
    "web",
    "desktop",
    "server",
    "client",
    "network",
    "security",
    "data",
    "analytics",
    "machine learning",
    "ai",
    "artificial intelligence",
    "ml",
    "deep learning",
    "blockchain",
    "cryptocurrency",
    "iot",
    "internet of things",
];

/// Programming languages and technologies, matched as substrings of the lowercased name.
pub const TECH_TERMS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "c++",
    "c#",
    "go",
    "rust",
    "php",
    "ruby",
    "swift",
    "kotlin",
    "scala",
    "r",
    "matlab",
    "sql",
    "html",
    "css",
    "sass",
    "less",
    "react",
    "angular",
    "vue",
    "node",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "linux",
    "windows",
    "macos",
    "git",
    "jenkins",
    "terraform",
    "ansible",
    "puppet",
    "chef",
    "next.js",
    "nextjs",
    "clojure",
    "clojurescript",
    "frontend",
    "backend",
];

pub const TECHNICAL_WORDS: &[&str] = &[
    "code",
    "programming",
    "development",
    "engineering",
    "architecture",
    "design",
    "testing",
    "deployment",
    "infrastructure",
    "platform",
    "framework",
    "library",
    "tool",
    "system",
    "database",
    "api",
    "cloud",
    "automation",
    "monitoring",
    "security",
    "network",
    "data",
    "analytics",
    "machine learning",
    "ai",
    "blockchain",
];

/// Names removed from the final list even when a strategy accepted them.
pub static GENERIC_SKILLS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "develop", "evaluate", "identify", "analyze", "implement", "design", "manage",
        "coordinate", "facilitate", "support", "assist", "help", "interview", "process",
        "prescreen", "network", "enterprise", "system", "solution", "project", "team",
        "work", "experience", "knowledge", "ability", "skill", "certification", "level",
        "year", "month",
    ]
    .into_iter()
    .collect()
});

/// Last-resort keyword vocabulary, matched case-insensitively as substrings.
/// Case variants ("JIRA"/"Jira") both match; the final pass keeps one.
pub const KEYWORD_VOCABULARY: &[&str] = &[
    "Python", "Java", "JavaScript", "React", "Angular", "Vue", "Node.js", "SQL", "MongoDB",
    "PostgreSQL", "MySQL", "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Jenkins", "Git",
    "GitHub", "JIRA", "Agile", "Scrum", "CI/CD", "REST API", "GraphQL", "Microservices",
    // Frontend and web
    "TypeScript", "Shopify", "Contentful", "Hydrogen", "Next.js", "Gatsby", "HTML", "CSS",
    "SASS", "LESS", "Webpack", "Babel", "ES6",
    // Backend and DevOps
    "NodeJS", "Express", "Redis", "Elasticsearch", "Heroku", "Vercel",
    // Tools and platforms
    "GitLab", "Jira", "Confluence", "Atlassian", "Slack", "Discord", "Trello", "Asana",
    "Notion",
    // Network and automation
    "Ansible", "Nornir", "Terraform", "Puppet", "Chef", "Salt", "NETCONF", "RESTCONF",
    "YANG", "OpenConfig", "gNMI", "gRPC", "Cisco", "Juniper", "Arista", "F5",
    "Load Balancer", "Load Balancers", "Linux", "Unix", "Windows Server", "VMware",
    "Hyper-V", "KVM", "ServiceNow", "Splunk", "LogicMonitor", "Nagios", "Zabbix", "CCNA",
    "CCNP", "CCIE", "DevNet", "Network Automation", "SDN", "Network Programmability",
    "Network Infrastructure", "Network Security", "SD-WAN", "Nautobot", "Netbox",
    "Microsoft Visio",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_are_lowercase() {
        for word in NON_TECHNICAL
            .iter()
            .chain(ACTION_WORDS.iter())
            .chain(GENERIC_SKILLS.iter())
        {
            assert_eq!(*word, word.to_lowercase(), "{word} should be lowercase");
        }
    }

    #[test]
    fn test_keyword_vocabulary_is_nonempty_and_trimmed() {
        assert!(KEYWORD_VOCABULARY.len() > 50);
        for keyword in KEYWORD_VOCABULARY {
            assert_eq!(*keyword, keyword.trim());
        }
    }
}
