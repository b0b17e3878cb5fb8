//! Theme module for watchsac-tui
//!
//! Centralized color palette and border set so every page renders with
//! the same look.

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::border;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Secondary background color, used for cards and inputs (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Highlighted rows and focused buttons (#1a1f26)
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

/// Amber, used for in-flight request indicator (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

/// Red, used for notice borders (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

/// Border style for a focusable element
pub fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(CYAN_PRIMARY)
    } else {
        Style::default().fg(BORDER_SUBTLE)
    }
}

/// Style for a button label
pub fn button_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(BG_PRIMARY)
            .bg(CYAN_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(CYAN_DIM).bg(BG_SECONDARY)
    }
}
