//! Data models for dq-rules
//!
//! This module contains the core data structures:
//! - The four-field selection and its option lists
//! - Generated data quality rules as returned by the model
//! - Enums for focus and fetch state

pub mod enums;
pub mod options;
pub mod rule;
pub mod selection;

// Re-exports for convenient access
pub use enums::{ConfigFocus, FetchStatus, ReviewFocus};
pub use options::OptionSets;
pub use rule::{Rule, RuleKind};
pub use selection::{Field, Selection};
