//! Style definitions for the form widgets.

use ratatui::style::{Color, Modifier, Style};

use super::status_label::StatusTone;

// =============================================================================
// Text field
// =============================================================================

pub fn focused_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Send button
// =============================================================================

pub fn button_style() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

/// Button while a send is in flight.
pub fn button_busy_style() -> Style {
    Style::default().fg(Color::Gray)
}

// =============================================================================
// Status label and footer
// =============================================================================

pub fn status_style(tone: StatusTone) -> Style {
    match tone {
        StatusTone::Neutral => Style::default().fg(Color::Gray),
        StatusTone::Affirmative => Style::default().fg(Color::Green),
        StatusTone::Error => Style::default().fg(Color::Red),
    }
}

pub fn key_hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
