use crate::error::GenerationError;
use crate::models::Rule;

/// Parse model output into rules.
///
/// The model is asked for bare JSON, but a Markdown code fence around it is
/// tolerated. Anything else that is not a JSON array of rule objects fails.
pub fn parse_rules(raw: &str) -> Result<Vec<Rule>, GenerationError> {
    let json = strip_code_fence(raw.trim());
    let rules: Vec<Rule> = serde_json::from_str(json)?;
    Ok(rules)
}

/// Remove a surrounding ```json ... ``` fence if present.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string ("json") on the opening line
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RuleKind;

    #[test]
    fn test_parse_single_business_rule() {
        let rules =
            parse_rules(r#"[{"ruleName":"R1","description":"D1","ruleType":"Business"}]"#).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].kind, RuleKind::Business);
        assert_eq!(rules[0].code_snippet, None);
    }

    #[test]
    fn test_parse_preserves_order() {
        let raw = r#"[
            {"ruleName":"A","description":"a","ruleType":"Technical","codeSnippet":"SELECT 1"},
            {"ruleName":"B","description":"b","ruleType":"Business"}
        ]"#;
        let names: Vec<_> = parse_rules(raw).unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_rules("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_fenced_output() {
        let raw = "```json\n[{\"ruleName\":\"R\",\"description\":\"D\",\"ruleType\":\"Business\"}]\n```";
        assert_eq!(parse_rules(raw).unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(matches!(
            parse_rules("Here are your rules: [oops"),
            Err(GenerationError::Malformed(_))
        ));
    }

    #[test]
    fn test_object_instead_of_array_fails() {
        let raw = r#"{"ruleName":"R","description":"D","ruleType":"Business"}"#;
        assert!(parse_rules(raw).is_err());
    }

    #[test]
    fn test_schema_violation_fails() {
        let raw = r#"[{"ruleName":"R","description":"D","ruleType":"Other"}]"#;
        assert!(parse_rules(raw).is_err());
    }
}
