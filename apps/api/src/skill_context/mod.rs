// Skill context: interview context, probing questions and market insights per skill.
// Curated table first, providers for anything the table does not cover.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
pub mod table;

pub use analyzer::{ContextAnalyzer, SkillContext, SkillContextEntry, SkillInsights};
