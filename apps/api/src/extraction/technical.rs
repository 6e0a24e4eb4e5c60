//! Technical-skill heuristics and final list shaping.
//!
//! `is_technical_skill` is the gate every candidate name passes through, whichever
//! strategy produced it. It is pure: the same input always yields the same decision.

use std::collections::HashSet;

use crate::extraction::models::SkillRecord;
use crate::extraction::vocabulary::{
    ACTION_WORDS, GENERIC_SKILLS, LINK_FRAGMENTS, NON_TECHNICAL, NON_TECHNICAL_PREFIXES,
    STRUCTURAL_PUNCTUATION, TECHNICAL_INDICATORS, TECHNICAL_WORDS, TECH_TERMS,
};

/// Maximum number of skills returned to callers.
pub const MAX_SKILLS: usize = 5;

/// Two to six ASCII capitals, nothing else (`SQL`, `CCNP`).
fn is_acronym(skill: &str) -> bool {
    (2..=6).contains(&skill.len()) && skill.bytes().all(|b| b.is_ascii_uppercase())
}

/// Decides whether `skill` names a technology, tool or technical discipline.
///
/// Rejections run first (length outside 2–30, stopwords, generic verbs, links, phrases
/// longer than three words, structural punctuation), then acceptance on technical
/// indicators, technology names, 2–6 letter acronyms or technical words. Anything else is
/// rejected.
pub fn is_technical_skill(skill: &str) -> bool {
    let lower = skill.trim().to_lowercase();
    let length = lower.chars().count();

    if !(2..=30).contains(&length) {
        return false;
    }
    if NON_TECHNICAL.contains(lower.as_str()) {
        return false;
    }
    if NON_TECHNICAL_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return false;
    }
    if ACTION_WORDS.contains(lower.as_str()) {
        return false;
    }
    if LINK_FRAGMENTS.iter().any(|f| lower.contains(f)) {
        return false;
    }
    if lower.split_whitespace().count() > 3 {
        return false;
    }
    if skill.contains(STRUCTURAL_PUNCTUATION) {
        return false;
    }

    TECHNICAL_INDICATORS.iter().any(|i| lower.contains(i))
        || TECH_TERMS.iter().any(|t| lower.contains(t))
        || is_acronym(skill)
        || TECHNICAL_WORDS.iter().any(|w| lower.contains(w))
}

/// Drops generic verbs and nouns that slipped through a strategy.
pub fn filter_generic_skills(skills: Vec<SkillRecord>) -> Vec<SkillRecord> {
    skills
        .into_iter()
        .filter(|s| !GENERIC_SKILLS.contains(s.name.to_lowercase().as_str()))
        .collect()
}

/// Sorts by confidence (highest first, stable for ties), keeps the first record for each
/// case-insensitive name and truncates to `MAX_SKILLS`.
pub fn deduplicate_and_rank(mut skills: Vec<SkillRecord>) -> Vec<SkillRecord> {
    skills.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let mut seen = HashSet::new();
    skills.retain(|s| seen.insert(s.name.to_lowercase()));
    skills.truncate(MAX_SKILLS);
    skills
}
