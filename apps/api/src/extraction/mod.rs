// Skill extraction: turns a job description into a short, ranked list of technical skills.
// Cascade order: dynamic analysis → provider line lists → regex patterns → keyword lookup.
// Every accepted name passes through technical::is_technical_skill.

pub mod dynamic;
pub mod extractor;
pub mod models;
pub mod patterns;
pub mod prompts;
pub mod strategies;
pub mod technical;
pub mod vocabulary;

pub use dynamic::{DynamicAnalysis, DynamicRecruiterTool};
pub use extractor::SkillExtractor;
pub use models::{ExtractionMethod, SkillRecord, SkillSource};
