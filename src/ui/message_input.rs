//! Text field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::message_input_state::MessageInputState;

use super::styles;

const PLACEHOLDER_TEXT: &str = "Insert message here...";
const PROMPT_SYMBOL: &str = "> ";

pub fn render_message_input(frame: &mut Frame<'_>, area: Rect, input_state: &MessageInputState) {
    let paragraph = Paragraph::new(build_input_line(input_state)).block(
        Block::default()
            .title("Message")
            .borders(Borders::ALL)
            .border_style(styles::focused_border_style()),
    );
    frame.render_widget(paragraph, area);

    let caret_offset = PROMPT_SYMBOL.width() + input_state.text_before_cursor().width();
    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(caret_offset.min(u16::MAX as usize) as u16)
        .min(area.right().saturating_sub(2));
    let cursor_y = area.y.saturating_add(1);
    frame.set_cursor_position((cursor_x, cursor_y));
}

fn build_input_line(input_state: &MessageInputState) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if input_state.is_empty() {
        Line::from(vec![
            prompt,
            Span::styled(
                PLACEHOLDER_TEXT.to_owned(),
                styles::input_placeholder_style(),
            ),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(input_state.text().to_owned(), styles::input_text_style()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn empty_field_shows_placeholder() {
        let line = build_input_line(&MessageInputState::default());
        let text = line_text(&line);

        assert!(text.starts_with(PROMPT_SYMBOL));
        assert!(text.contains(PLACEHOLDER_TEXT));
    }

    #[test]
    fn typed_text_replaces_placeholder() {
        let mut state = MessageInputState::default();
        state.insert_char('H');
        state.insert_char('i');

        let text = line_text(&build_input_line(&state));

        assert!(text.contains("Hi"));
        assert!(!text.contains(PLACEHOLDER_TEXT));
    }

    #[test]
    fn whitespace_only_text_is_shown_not_placeholder() {
        let mut state = MessageInputState::default();
        state.insert_char(' ');

        assert!(!line_text(&build_input_line(&state)).contains(PLACEHOLDER_TEXT));
    }
}
