//! Option lists backing the four dropdowns.

use serde::{Deserialize, Serialize};

use super::Field;

const DEFAULT_APPLICATIONS: &[&str] = &[
    "CRM",
    "ERP",
    "Data Warehouse",
    "Billing System",
    "Marketing Platform",
];

const DEFAULT_OPERATIONS: &[&str] = &["Business_Rules", "Technical_Rules", "Estimations", "Schema"];

const DEFAULT_DOMAINS: &[&str] = &["Customer", "Finance", "Product", "Supply Chain", "Human Resources"];

const DEFAULT_DEPARTMENTS: &[&str] = &["Sales", "Marketing", "Finance", "Operations", "IT"];

/// The four option lists. Missing keys in an options file load as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSets {
    pub application: Vec<String>,
    pub operation: Vec<String>,
    pub domain: Vec<String>,
    pub department: Vec<String>,
}

impl OptionSets {
    /// Option lists compiled into the binary
    pub fn embedded() -> Self {
        let owned = |values: &[&str]| -> Vec<String> { values.iter().map(|v| v.to_string()).collect() };
        Self {
            application: owned(DEFAULT_APPLICATIONS),
            operation: owned(DEFAULT_OPERATIONS),
            domain: owned(DEFAULT_DOMAINS),
            department: owned(DEFAULT_DEPARTMENTS),
        }
    }

    pub fn list(&self, field: Field) -> &[String] {
        match field {
            Field::Application => &self.application,
            Field::Operation => &self.operation,
            Field::Domain => &self.domain,
            Field::Department => &self.department,
        }
    }
}
