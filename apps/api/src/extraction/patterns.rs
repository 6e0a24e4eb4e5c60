//! Regex-based skill extraction used when no provider produced enough skills.
//!
//! Five independent passes run in a fixed order over the raw description (all patterns are
//! case-insensitive). A name already collected by an earlier pass is skipped, compared
//! exactly, so "React" and "react" can both survive until the final ranking.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::models::{SkillRecord, SkillSource};
use crate::extraction::technical::is_technical_skill;
use crate::extraction::vocabulary::KEYWORD_VOCABULARY;

// ──────────────────────────────────────────────
// Confidence per pass
// ──────────────────────────────────────────────

pub const TECH_CONTEXT_CONFIDENCE: f64 = 0.8;
pub const ROLE_TECH_CONFIDENCE: f64 = 0.7;
pub const YEARS_EXPERIENCE_CONFIDENCE: f64 = 0.7;
pub const BULLET_TECH_CONFIDENCE: f64 = 0.6;
pub const DIRECT_TECH_CONFIDENCE: f64 = 0.9;
pub const KEYWORD_MATCH_CONFIDENCE: f64 = 0.5;

// ──────────────────────────────────────────────
// Patterns
// ──────────────────────────────────────────────

/// Phrases that introduce a technology ("experience with X", "using X"). The last entry has
/// no capture group and yields the matched name itself.
static TECH_CONTEXT: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)(?:experience|knowledge|familiarity|proficiency|expertise)\s+(?:with|in|of)\s+([^,\.\n]+)",
        r"(?i)(?:working|practicing|deploying|implementing)\s+with\s+([^,\.\n]+)",
        r"(?i)(?:using|utilizing|leveraging)\s+([^,\.\n]+)",
        r"(?i)(?:React|TypeScript|JavaScript|Node\.js|NodeJS|Shopify|AWS|Docker|Git|Jira|Atlassian|Contentful|Hydrogen)",
    ])
});

/// Labeled sections such as "Frontend: React, TypeScript".
static ROLE_TECH: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)(?:Frontend|Backend|Full Stack|DevOps|Data|Network|Security|Cloud|Mobile|Web|UI|UX|API|Database|Infrastructure|Platform|System|Tool|Framework|Library):\s*([^,\.\n]+)",
    ])
});

/// Group 2 holds the technology; group 1 (the years) is ignored.
static YEARS_EXPERIENCE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)(\d+)\s*\+\s*years?\s+of\s+experience\s+with\s+([^,\.\n]+)",
        r"(?i)(\d+)\s*years?\s+(?:practicing|deploying|implementing|working\s+with)\s+([^,\.\n]+)",
    ])
});

static BULLET_LINES: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)•\s*([^•\n]*?(?:React|TypeScript|Clojure|JavaScript|Python|Java|AWS|Docker|Kubernetes|Git|CI/CD)[^•\n]*)",
        r"(?i)\*\s*([^*\n]*?(?:React|TypeScript|Clojure|JavaScript|Python|Java|AWS|Docker|Kubernetes|Git|CI/CD)[^*\n]*)",
        r"(?i)-\s*([^-\n]*?(?:React|TypeScript|Clojure|JavaScript|Python|Java|AWS|Docker|Kubernetes|Git|CI/CD)[^-\n]*)",
    ])
});

static BULLET_TOKENS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)(?:React|TypeScript|Clojure|ClojureScript|JavaScript|Python|Java|AWS|Docker|Kubernetes|Git|CI/CD|Next\.js|Nextjs|Frontend|Backend)",
    ])
});

static DIRECT_TECH: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\b(?:React|TypeScript|Clojure|ClojureScript|JavaScript|Python|Java|AWS|Docker|Kubernetes|Git|CI/CD|Next\.js|Nextjs|Frontend|Backend)\b",
    ])
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|source| {
            Regex::new(source)
                .map_err(|e| tracing::error!("invalid extraction pattern {source}: {e}"))
                .ok()
        })
        .collect()
}

/// Capture group `group` when present, otherwise the whole match.
fn captures<'t>(patterns: &[Regex], text: &'t str, group: usize) -> Vec<&'t str> {
    patterns
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| caps.get(group).or_else(|| caps.get(0)))
        .map(|m| m.as_str())
        .collect()
}

/// Accumulates records for one extraction run, skipping exact-name repeats.
#[derive(Debug, Default)]
struct Collected(Vec<SkillRecord>);

impl Collected {
    fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|s| s.name == name)
    }

    fn push(&mut self, name: &str, confidence: f64, source: SkillSource) {
        if !name.is_empty() && !self.contains(name) {
            self.0.push(SkillRecord::new(name, confidence, source));
        }
    }

    /// Pushes `candidate` only when it reads as a technical skill.
    fn push_checked(&mut self, candidate: &str, confidence: f64, source: SkillSource) {
        let skill = candidate.trim();
        if skill.chars().count() > 2 && is_technical_skill(skill) {
            self.push(skill, confidence, source);
        }
    }
}

/// Runs the five pattern passes over `text`.
pub fn extract_intelligent_patterns(text: &str) -> Vec<SkillRecord> {
    let mut found = Collected::default();

    for candidate in captures(&TECH_CONTEXT, text, 1) {
        found.push_checked(candidate, TECH_CONTEXT_CONFIDENCE, SkillSource::TechContext);
    }

    for section in captures(&ROLE_TECH, text, 1) {
        for candidate in section.split(',') {
            found.push_checked(candidate, ROLE_TECH_CONFIDENCE, SkillSource::RoleTech);
        }
    }

    for candidate in captures(&YEARS_EXPERIENCE, text, 2) {
        found.push_checked(
            candidate,
            YEARS_EXPERIENCE_CONFIDENCE,
            SkillSource::YearsExperience,
        );
    }

    for line in captures(&BULLET_LINES, text, 1) {
        let line = line.trim();
        if line.chars().count() <= 5 {
            continue;
        }
        for token in captures(&BULLET_TOKENS, line, 0) {
            found.push(token, BULLET_TECH_CONFIDENCE, SkillSource::BulletTech);
        }
    }

    for token in captures(&DIRECT_TECH, text, 0) {
        found.push(token, DIRECT_TECH_CONFIDENCE, SkillSource::DirectTech);
    }

    found.0
}

/// Vocabulary entries that occur anywhere in `text`, case-insensitively.
pub fn keyword_matches(text: &str) -> Vec<SkillRecord> {
    let lower = text.to_lowercase();
    KEYWORD_VOCABULARY
        .iter()
        .filter(|keyword| lower.contains(&keyword.to_lowercase()))
        .map(|keyword| SkillRecord::new(*keyword, KEYWORD_MATCH_CONFIDENCE, SkillSource::KeywordMatch))
        .collect()
}

/// Last-resort extraction: vocabulary lookup followed by the pattern passes.
pub fn basic_extraction(text: &str) -> Vec<SkillRecord> {
    let mut skills = keyword_matches(text);
    skills.extend(extract_intelligent_patterns(text));
    skills
}
