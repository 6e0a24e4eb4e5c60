// Keyword and pattern tables for job-email detection.
// Weights are empirically tuned and overlap on purpose; keep them literal.

use once_cell::sync::Lazy;
use regex::Regex;

pub const KEYWORD_WEIGHT: f64 = 2.0;
pub const STRONG_PATTERN_WEIGHT: f64 = 15.0;
pub const WEAK_PATTERN_WEIGHT: f64 = 5.0;
pub const SUBJECT_PATTERN_WEIGHT: f64 = 8.0;
pub const SENDER_INDICATOR_WEIGHT: f64 = 3.0;
pub const TECH_MENTION_WEIGHT: f64 = 2.0;
pub const MAX_SCORE: f64 = 100.0;
pub const JOB_THRESHOLD: f64 = 0.20;

pub const JOB_KEYWORDS: &[&str] = &[
    "job",
    "position",
    "role",
    "opportunity",
    "opening",
    "vacancy",
    "hiring",
    "recruiting",
    "candidate",
    "applicant",
    "resume",
    "interview",
    "career",
    "employment",
    "work",
    "contract",
    "full-time",
    "part-time",
    "remote",
    "onsite",
    "hybrid",
    "developer",
    "engineer",
    "analyst",
    "manager",
    "specialist",
    "coordinator",
    "assistant",
    "director",
    "lead",
    "senior",
    "junior",
    "entry-level",
    "mid-level",
    "experienced",
    "consultant",
    "looking for",
    "currently looking",
    "seeking",
    "support our client",
    "client need",
    "client summary",
];

pub const RECRUITER_INDICATORS: &[&str] = &[
    "recruiter",
    "talent",
    "hr",
    "human resources",
    "hiring manager",
    "recruitment",
    "staffing",
    "agency",
    "headhunter",
    "sourcer",
];

/// Technologies whose co-occurrence (two or more) is itself a job signal.
pub const TECH_MENTIONS: &[&str] = &[
    "react",
    "python",
    "java",
    "javascript",
    "aws",
    "docker",
    "kubernetes",
    "sql",
    "node.js",
    "angular",
    "vue",
    "shopify",
    "salesforce",
];

/// A compiled detection pattern. `source` is reported back in detection details.
pub struct WeightedPattern {
    pub source: &'static str,
    pub regex: Regex,
    pub weight: f64,
}

const STRONG_JOB_PATTERNS: &[&str] = &[
    r"minimum\s+qualifications",
    r"must-have",
    r"job\s+description",
    r"what\s+you\s+will\s+bring",
    r"pay\s+rate",
    r"bill\s+rate",
    r"role\s+details:",
    r"interview\s+type:",
];

const WEAK_JOB_PATTERNS: &[&str] = &[
    r"requirements:",
    r"qualifications:",
    r"responsibilities:",
    r"experience\s+required",
    r"skills\s+needed",
    r"tech\s+stack",
    r"technologies:",
    r"client\s+need",
    r"client\s+summary",
    r"key\s+details:",
    r"looking\s+for\s+.*\s+developer",
    r"looking\s+for\s+.*\s+engineer",
    r"currently\s+looking\s+for",
    r"support\s+our\s+client",
    r"software\s+engineer",
    r"backend\s+developer",
    r"frontend\s+developer",
    r"full\s+stack\s+developer",
];

const SUBJECT_PATTERNS: &[&str] = &[
    r"job\s+opportunity",
    r"position\s+available",
    r"hiring\s+.*\s+developer",
    r"hiring\s+.*\s+engineer",
    r"new\s+role",
    r"career\s+opportunity",
    r"job\s+opening",
    r"vacancy",
    r"position\s+opening",
];

fn compile(patterns: &[&'static str], weight: f64) -> Vec<WeightedPattern> {
    patterns
        .iter()
        .filter_map(|&source| {
            Regex::new(source)
                .map_err(|e| tracing::error!("invalid detection pattern {source}: {e}"))
                .ok()
                .map(|regex| WeightedPattern {
                    source,
                    regex,
                    weight,
                })
        })
        .collect()
}

/// Body patterns, strong indicators first.
pub static JOB_PATTERNS: Lazy<Vec<WeightedPattern>> = Lazy::new(|| {
    let mut patterns = compile(STRONG_JOB_PATTERNS, STRONG_PATTERN_WEIGHT);
    patterns.extend(compile(WEAK_JOB_PATTERNS, WEAK_PATTERN_WEIGHT));
    patterns
});

pub static SUBJECT_JOB_PATTERNS: Lazy<Vec<WeightedPattern>> =
    Lazy::new(|| compile(SUBJECT_PATTERNS, SUBJECT_PATTERN_WEIGHT));

/// A hand-coded bonus rule over the lowercased body.
pub struct BonusRule {
    pub label: &'static str,
    /// Every inner slice must have at least one phrase present.
    pub requires: &'static [&'static [&'static str]],
    pub weight: f64,
}

impl BonusRule {
    pub fn matches(&self, text: &str) -> bool {
        self.requires
            .iter()
            .all(|any_of| any_of.iter().any(|phrase| text.contains(phrase)))
    }
}

pub const BONUS_RULES: &[BonusRule] = &[
    BonusRule {
        label: "client_mention",
        requires: &[&["client:", "client need"]],
        weight: 15.0,
    },
    BonusRule {
        label: "rate_mention",
        requires: &[&["bill rate", "hourly rate"]],
        weight: 8.0,
    },
    BonusRule {
        label: "duration_mention",
        requires: &[&["duration:", "contract length"]],
        weight: 6.0,
    },
    BonusRule {
        label: "looking_for_developer",
        requires: &[&["looking for"], &["developer", "engineer"]],
        weight: 20.0,
    },
    BonusRule {
        label: "support_client",
        requires: &[&["support our client"]],
        weight: 15.0,
    },
    BonusRule {
        label: "key_details",
        requires: &[&["key details:"]],
        weight: 10.0,
    },
    BonusRule {
        label: "software_engineer",
        requires: &[&["software engineer"]],
        weight: 12.0,
    },
];
