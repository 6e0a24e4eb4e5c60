//! Shallow job-context extraction for a quick preview of a posting.
//! Each field is filled by the first pattern in its family that matches; fields are
//! independent, so overlapping captures are possible.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobContext {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub rate: String,
}

static TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"position:\s*([^\n]+)",
        r"role:\s*([^\n]+)",
        r"job\s+title:\s*([^\n]+)",
        r"hiring\s+([^,\n]+)",
        r"looking\s+for\s+([^,\n]+)",
    ])
});

// The last pattern expects capitalized words but runs on lowercased text.
static COMPANY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"client:\s*([^\n]+)",
        r"company:\s*([^\n]+)",
        r"client\s+summary.*?([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
    ])
});

static LOCATION_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&[r"location:\s*([^\n]+)", r"remote", r"onsite", r"hybrid"]));

static DURATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"duration:\s*([^\n]+)",
        r"contract\s+length:\s*([^\n]+)",
        r"(\d+\s*(?:months?|weeks?|years?))",
    ])
});

static RATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"bill\s+rate:\s*([^\n]+)",
        r"hourly\s+rate:\s*([^\n]+)",
        r"(\$\d+(?:-\d+)?\s*(?:per\s+hour|hr|hourly))",
    ])
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().filter_map(|p| Regex::new(p).ok()).collect()
}

/// First match across `patterns`: capture group 1 when the pattern has one, otherwise the
/// matched text itself.
fn first_match(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|re| {
        let caps = re.captures(text)?;
        let value = caps.get(1).or_else(|| caps.get(0))?;
        Some(value.as_str().trim().to_string())
    })
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Extracts title, company, location, duration and rate from a posting.
/// Matching runs on the lowercased text, so captured values are lowercase except the
/// title, which is title-cased.
pub fn get_job_context(content: &str) -> JobContext {
    let text = content.to_lowercase();

    JobContext {
        job_title: first_match(&TITLE_PATTERNS, &text)
            .map(|t| title_case(&t))
            .unwrap_or_default(),
        company: first_match(&COMPANY_PATTERNS, &text).unwrap_or_default(),
        location: first_match(&LOCATION_PATTERNS, &text).unwrap_or_default(),
        duration: first_match(&DURATION_PATTERNS, &text).unwrap_or_default(),
        rate: first_match(&RATE_PATTERNS, &text).unwrap_or_default(),
    }
}
