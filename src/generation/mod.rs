//! Generation boundary: the external model that turns a prompt into rules.
//!
//! - `schema`: instruction text and the structured-output schema
//! - `parse`: model text to `Vec<Rule>`
//! - `gemini`: the concrete HTTP client

mod gemini;
mod parse;
mod schema;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::GenerationError;
use crate::models::Rule;

pub use gemini::{GeminiClient, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use parse::parse_rules;
pub use schema::{instruction_for, rule_list_schema, JSON_MIME_TYPE};

/// Everything the boundary needs for one call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub instruction: String,
    pub response_mime_type: &'static str,
    pub schema: Value,
}

impl GenerationRequest {
    /// Wrap a (possibly edited) prompt. Blank prompts are refused before any I/O.
    pub fn for_prompt(prompt: &str) -> Result<Self, GenerationError> {
        if prompt.trim().is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }
        Ok(Self {
            instruction: instruction_for(prompt),
            response_mime_type: JSON_MIME_TYPE,
            schema: rule_list_schema(),
        })
    }
}

/// A structured-output model that can produce rules
#[async_trait]
pub trait RuleGenerator: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<Rule>, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_prompt_is_refused() {
        assert!(matches!(
            GenerationRequest::for_prompt("  \n "),
            Err(GenerationError::EmptyPrompt)
        ));
    }

    #[test]
    fn test_request_embeds_prompt_and_schema() {
        let request = GenerationRequest::for_prompt("Rules for Finance").unwrap();
        assert!(request.instruction.ends_with("Rules for Finance"));
        assert_eq!(request.response_mime_type, "application/json");
        assert_eq!(request.schema, rule_list_schema());
    }
}
