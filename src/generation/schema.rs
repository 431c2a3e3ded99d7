//! Instruction wrapper and the output schema the model must follow.

use serde_json::{json, Value};

use crate::models::RuleKind;

/// Fixed instruction placed in front of the user's prompt
pub const INSTRUCTION: &str = "Generate a list of data quality rules based on this context:";

pub const JSON_MIME_TYPE: &str = "application/json";

pub fn instruction_for(prompt: &str) -> String {
    format!("{INSTRUCTION}\n\n{prompt}")
}

/// Array of rule objects; `codeSnippet` is the only optional field.
pub fn rule_list_schema() -> Value {
    let kinds: Vec<&str> = RuleKind::ALL.iter().map(|k| k.label()).collect();
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "ruleName": {
                    "type": "STRING",
                    "description": "Short name of the data quality rule"
                },
                "description": {
                    "type": "STRING",
                    "description": "What the rule checks and why"
                },
                "ruleType": {
                    "type": "STRING",
                    "enum": kinds,
                    "description": "Business or Technical"
                },
                "codeSnippet": {
                    "type": "STRING",
                    "description": "SQL or Python implementing the rule, for technical rules"
                }
            },
            "required": ["ruleName", "description", "ruleType"],
            "propertyOrdering": ["ruleName", "description", "ruleType", "codeSnippet"]
        }
    })
}
