// Job email detection: decides whether inbound text is a job posting and pulls out
// the shallow context (title, company, location, duration, rate) for a preview.
// Pure pattern matching, no LLM calls.

pub mod detector;
pub mod handlers;
pub mod job_context;
pub mod patterns;

pub use detector::{DetectionDetails, DetectionResult, JobEmailDetector};
pub use job_context::{get_job_context, JobContext};
