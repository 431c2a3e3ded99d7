//! Theme module for dq-rules
//!
//! This module provides a centralized color palette and styling constants
//! for both screens and the rule-type badges.

use ratatui::style::Color;

use crate::models::RuleKind;

/// Rounded border set used for every panel
pub use ratatui::symbols::border::ROUNDED as ROUNDED_BORDERS;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Secondary background color - slightly lighter (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Tertiary background color - code blocks and highlighted rows (#1a1f26)
pub const BG_TERTIARY: Color = Color::Rgb(26, 31, 38);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary cyan accent color (#00d4aa)
pub const CYAN_PRIMARY: Color = Color::Rgb(0, 212, 170);

/// Dimmed cyan for secondary elements (#0a8a6e)
pub const CYAN_DIM: Color = Color::Rgb(10, 138, 110);

// ============================================================================
// Status Colors
// ============================================================================

/// Amber warning color (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Badge Colors
// ============================================================================

/// Business rule badge (#60a5fa)
pub const BADGE_BUSINESS: Color = Color::Rgb(96, 165, 250);

/// Technical rule badge (#c084fc)
pub const BADGE_TECHNICAL: Color = Color::Rgb(192, 132, 252);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

pub fn badge_color(kind: RuleKind) -> Color {
    match kind {
        RuleKind::Business => BADGE_BUSINESS,
        RuleKind::Technical => BADGE_TECHNICAL,
    }
}

/// Alternate between two colors every few animation ticks
pub fn get_pulse_color(tick: u64, bright: Color, dim: Color) -> Color {
    if (tick / 4) % 2 == 0 { bright } else { dim }
}
