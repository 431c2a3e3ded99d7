//! Enums used throughout dq-rules
//!
//! This module contains the focus and fetch-status types used for state
//! management and UI rendering.

use std::time::Instant;

use super::Field;

/// Focused control on the configuring screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFocus {
    Field(Field),
    GenerateButton,
}

impl Default for ConfigFocus {
    fn default() -> Self {
        ConfigFocus::Field(Field::Application)
    }
}

impl ConfigFocus {
    /// Focus order: the four dropdowns top to bottom, then the button
    const ORDER: [ConfigFocus; 5] = [
        ConfigFocus::Field(Field::Application),
        ConfigFocus::Field(Field::Operation),
        ConfigFocus::Field(Field::Domain),
        ConfigFocus::Field(Field::Department),
        ConfigFocus::GenerateButton,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Focused pane on the reviewing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewFocus {
    #[default]
    Prompt, // Prompt editor receives keystrokes
    Rules,  // Rules table: selection and snippet copy
}

impl ReviewFocus {
    pub fn toggle(&self) -> Self {
        match self {
            ReviewFocus::Prompt => ReviewFocus::Rules,
            ReviewFocus::Rules => ReviewFocus::Prompt,
        }
    }
}

/// Fetch sub-status, only meaningful while reviewing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading { started: Instant },
    Failed(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}
