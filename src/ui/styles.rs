//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Conversation list styles
// =============================================================================

/// Style for conversation names (bold, bright).
pub fn conversation_name_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for a checked checkbox marker.
pub fn checked_marker_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Style for an empty checkbox marker.
pub fn unchecked_marker_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the group-chat tag after the name.
pub fn group_tag_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Style for the row under the cursor.
pub fn cursor_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

pub fn list_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

// =============================================================================
// Bars
// =============================================================================

/// Style for key hints like `[d]`.
pub fn key_hint_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style for the label next to a key hint.
pub fn action_label_style() -> Style {
    Style::default().fg(Color::White)
}

/// Destructive action label.
pub fn danger_label_style() -> Style {
    Style::default().fg(Color::Red)
}

pub fn status_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
