// Boolean search generation for recruiter sourcing tools (LinkedIn, Indeed).
// Provider prompts first, then rule-based grouping, then fixed-arity templates.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod templates;
pub mod validation;

pub use generator::BooleanGenerator;
pub use validation::{validate_boolean_search, BooleanValidation};
