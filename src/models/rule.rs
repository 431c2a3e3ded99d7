//! Generated data quality rule records.
//!
//! The serde field names match the output schema the model is asked to
//! follow (`ruleName`, `description`, `ruleType`, `codeSnippet`).

use serde::{Deserialize, Serialize};

/// Rule category, rendered as a colored badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleKind {
    Business,
    Technical,
}

impl RuleKind {
    pub const ALL: [RuleKind; 2] = [RuleKind::Business, RuleKind::Technical];

    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::Business => "Business",
            RuleKind::Technical => "Technical",
        }
    }
}

/// One generated data quality rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "ruleName")]
    pub name: String,
    pub description: String,
    #[serde(rename = "ruleType")]
    pub kind: RuleKind,
    #[serde(
        rename = "codeSnippet",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub code_snippet: Option<String>,
}

impl Rule {
    /// The code snippet, treating blank snippets as absent
    pub fn snippet(&self) -> Option<&str> {
        self.code_snippet
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_from_wire_without_snippet() {
        let json = r#"{"ruleName":"R1","description":"D1","ruleType":"Business"}"#;
        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.name, "R1");
        assert_eq!(rule.description, "D1");
        assert_eq!(rule.kind, RuleKind::Business);
        assert_eq!(rule.snippet(), None);
    }

    #[test]
    fn test_rule_from_wire_with_snippet() {
        let json = r#"{
            "ruleName": "Customer ID not null",
            "description": "Every row needs an identifier",
            "ruleType": "Technical",
            "codeSnippet": "SELECT * FROM customers WHERE customer_id IS NULL"
        }"#;
        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.kind, RuleKind::Technical);
        assert!(rule.snippet().unwrap().starts_with("SELECT"));
    }

    #[test]
    fn test_unknown_rule_type_is_rejected() {
        let json = r#"{"ruleName":"R","description":"D","ruleType":"Operational"}"#;
        assert!(serde_json::from_str::<Rule>(json).is_err());
    }

    #[test]
    fn test_missing_rule_name_is_rejected() {
        let json = r#"{"description":"D","ruleType":"Business"}"#;
        assert!(serde_json::from_str::<Rule>(json).is_err());
    }

    #[test]
    fn test_blank_snippet_treated_as_absent() {
        let rule = Rule {
            name: "R".into(),
            description: "D".into(),
            kind: RuleKind::Technical,
            code_snippet: Some("  \n".into()),
        };
        assert_eq!(rule.snippet(), None);
    }
}
