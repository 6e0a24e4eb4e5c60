//! Deterministic boolean-string templates and the known job-title table.

/// Most names ever placed in a generated search string.
pub const MAX_BOOLEAN_TERMS: usize = 5;

/// Known job titles, matched as substrings of the lowercased title in this order.
pub const JOB_TITLE_PATTERNS: &[(&str, &str)] = &[
    (
        "workday data conversion",
        r#""Workday" AND ("Data Conversion" OR "Data Migration")"#,
    ),
    (
        "workday developer",
        r#""Workday" AND ("HCM" OR "HRIS" OR "Implementation")"#,
    ),
    (
        "salesforce developer",
        r#""Salesforce" AND ("Apex" OR "Lightning" OR "SOQL")"#,
    ),
    (
        "react developer",
        r#""React" AND ("JavaScript" OR "TypeScript" OR "Frontend")"#,
    ),
    (
        "python developer",
        r#""Python" AND ("Backend" OR "API" OR "Web Development")"#,
    ),
    (
        "java developer",
        r#""Java" AND ("Spring" OR "Backend" OR "Enterprise")"#,
    ),
    (
        "devops engineer",
        r#""DevOps" AND ("Docker" OR "Kubernetes" OR "CI/CD")"#,
    ),
    (
        "data engineer",
        r#""Data Engineering" AND ("SQL" OR "Python" OR "ETL")"#,
    ),
    (
        "aws engineer",
        r#""AWS" AND ("Cloud" OR "Infrastructure" OR "DevOps")"#,
    ),
];

pub fn quote(term: &str) -> String {
    format!("\"{term}\"")
}

fn any_of(terms: &[String]) -> String {
    let quoted: Vec<String> = terms.iter().map(|t| quote(t)).collect();
    format!("({})", quoted.join(" OR "))
}

/// Returns the canned search string for a known job title.
pub fn title_pattern(title: &str) -> Option<&'static str> {
    let title = title.to_lowercase();
    JOB_TITLE_PATTERNS
        .iter()
        .find(|(pattern, _)| title.contains(pattern))
        .map(|(_, boolean)| *boolean)
}

/// Fixed-arity rendering over the first five names:
///
/// | names | result |
/// |-------|--------|
/// | 1 | `"A"` |
/// | 2 | `"A" AND "B"` |
/// | 3 | `"A" AND "B" AND "C"` |
/// | 4 | `"A" AND ("B" OR "C") AND "D"` |
/// | 5 | `"A" AND ("B" OR "C") AND ("D" OR "E")` |
pub fn fixed_arity_boolean(skills: &[String]) -> String {
    let skills = &skills[..skills.len().min(MAX_BOOLEAN_TERMS)];
    match skills {
        [] => String::new(),
        [a] => quote(a),
        [a, b] => format!("{} AND {}", quote(a), quote(b)),
        [a, b, c] => format!("{} AND {} AND {}", quote(a), quote(b), quote(c)),
        [a, rest @ ..] => {
            let (secondary, tertiary) = rest.split_at(2);
            let tertiary = match tertiary {
                [single] => quote(single),
                many => any_of(many),
            };
            format!("{} AND {} AND {}", quote(a), any_of(secondary), tertiary)
        }
    }
}

/// Two anchors ANDed with an OR-group of the remaining names. Needs at least four names.
pub fn grouped_boolean(skills: &[String]) -> Option<String> {
    let skills = &skills[..skills.len().min(MAX_BOOLEAN_TERMS)];
    match skills {
        [a, b, rest @ ..] if rest.len() >= 2 => Some(format!(
            "{} AND {} AND {}",
            quote(a),
            quote(b),
            any_of(rest)
        )),
        _ => None,
    }
}
