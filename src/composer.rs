//! Prompt composition from a complete selection.
//!
//! The template is picked by the `operation` value. Unknown operations fall
//! through to a generic phrasing, so composing never fails on content, only
//! on missing fields.

use crate::error::ValidationError;
use crate::models::Selection;

/// Illustrative data elements the rule templates ask about
pub const DATA_ELEMENTS: &str = "First Name, Last Name and Customer ID";

/// Appended to every template that should tie rules back to the user's data
pub const DATASET_CLAUSE: &str = "Also relate these rules to the provided dataset.";

/// Template key derived from the `operation` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    BusinessRules,
    TechnicalRules,
    Estimations,
    Schema,
    Other(String),
}

impl Operation {
    pub fn parse(value: &str) -> Self {
        match value {
            "Business_Rules" => Operation::BusinessRules,
            "Technical_Rules" => Operation::TechnicalRules,
            "Estimations" => Operation::Estimations,
            "Schema" => Operation::Schema,
            other => Operation::Other(other.to_string()),
        }
    }

    pub fn includes_dataset_clause(&self) -> bool {
        !matches!(self, Operation::Estimations | Operation::Schema)
    }
}

/// Build the prompt text for a selection.
pub fn compose(selection: &Selection) -> Result<String, ValidationError> {
    let missing = selection.missing_fields();
    if !missing.is_empty() {
        return Err(ValidationError { missing });
    }

    let Selection {
        application,
        operation,
        domain,
        department,
    } = selection;
    let scope = format!(
        "in the {domain} domain, for the {department} department, used by the {application} application"
    );

    let operation = Operation::parse(operation);
    let mut prompt = match &operation {
        Operation::BusinessRules => format!(
            "Generate business data quality rules for the data elements {DATA_ELEMENTS} {scope}."
        ),
        Operation::TechnicalRules => format!(
            "Generate technical data quality rules for the data elements {DATA_ELEMENTS} {scope}. \
             Express each rule as a SQL or Python code snippet."
        ),
        Operation::Estimations => format!(
            "Estimate the effort and complexity of implementing data quality rules {scope}. \
             Break the estimate down by rule and give an overall figure."
        ),
        Operation::Schema => format!(
            "Define a schema for the data {scope}, as JSON Schema or SQL DDL, \
             including data types, constraints and keys."
        ),
        Operation::Other(name) => format!("Perform the \"{name}\" operation for data quality {scope}."),
    };

    if operation.includes_dataset_clause() {
        prompt.push(' ');
        prompt.push_str(DATASET_CLAUSE);
    }

    Ok(prompt)
}
