//! Error types for dq-rules.
//!
//! Each concern gets its own enum; the binary folds them into `anyhow` at the
//! top level only.

use std::path::PathBuf;

use crate::models::Field;

/// Inline message shown when composing with unselected fields
pub const VALIDATION_MESSAGE: &str = "Please select all four fields before generating a prompt.";

/// Banner shown for every failed fetch, whatever the cause
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate rules. The model may have returned an unexpected format.";

/// Composing was attempted with one or more fields unselected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", VALIDATION_MESSAGE)]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

impl ValidationError {
    /// Comma-separated labels of the missing fields, for logging
    pub fn missing_labels(&self) -> String {
        self.missing
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Failure at the generation boundary.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("no API key configured (set GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("model endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("model response contained no text")]
    EmptyResponse,

    #[error("model output did not match the rule schema: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GenerationError::Timeout
        } else {
            GenerationError::Transport(err)
        }
    }
}

impl GenerationError {
    /// The user never sees the technical cause; it goes to the log.
    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILED_MESSAGE
    }
}

/// Startup configuration failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("{0}")]
    InvalidArgument(String),
}
