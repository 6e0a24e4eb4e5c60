// Shared prompt fragments.
// Each service that calls an LLM keeps its own prompts.rs alongside it; this file holds
// the pieces every recruiter-facing prompt repeats.

/// Focus rules shared by every skill-oriented prompt.
pub const TECHNICAL_FOCUS_RULES: &str = "\
- Focus on TECHNICAL skills only (programming languages, tools, frameworks, platforms)
- Avoid generic terms like \"problem solving\", \"communication\", \"teamwork\"";

/// Boolean grouping rules shared by the boolean and dynamic-analysis prompts.
pub const BOOLEAN_GROUPING_RULES: &str = "\
- Use ONLY 4-5 skills maximum
- Group similar/related skills with OR operator
- Use AND operator between different skill categories
- Use quotes for multi-word terms
- Make it recruiter-friendly and LinkedIn-compatible";

/// Substitutes `{key}` placeholders in one left-to-right pass. Inserted values are never
/// rescanned, so user text that contains a placeholder name stays literal. Braces that do
/// not name a known key are copied through.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let hit = values.iter().find_map(|(key, value)| {
            tail.strip_prefix(*key)
                .and_then(|t| t.strip_prefix('}'))
                .map(|after| (*value, after))
        });
        match hit {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_substitutes_known_keys() {
        let out = fill_template(
            "Title: {title}, Skills: {skills}",
            &[("title", "QA"), ("skills", "Go")],
        );
        assert_eq!(out, "Title: QA, Skills: Go");
    }

    #[test]
    fn test_fill_template_does_not_expand_inserted_values() {
        let out = fill_template(
            "Title: {title}\nSkills: {skills}",
            &[("title", "{skills} Lead"), ("skills", "Rust")],
        );
        assert_eq!(out, "Title: {skills} Lead\nSkills: Rust");
    }

    #[test]
    fn test_fill_template_keeps_unknown_braces() {
        let out = fill_template(r#"{"a": [{x}]} {skill}"#, &[("skill", "SQL")]);
        assert_eq!(out, r#"{"a": [{x}]} SQL"#);
    }
}
