use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::domain::{form_state::FormState, submission::SubmissionState};

use super::{message_input::render_message_input, status_label::status_label, styles};

const KEY_HINTS: &str = "Enter: send | Ctrl+U: clear | Esc: quit";

pub fn render(
    frame: &mut Frame<'_>,
    form: &FormState,
    submission: &SubmissionState,
    pending_sends: usize,
) {
    let [field_area, button_area, status_area, hint_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    render_message_input(frame, field_area, form.message_input());
    render_centered(frame, button_area, send_button_line(pending_sends));
    render_centered(frame, status_area, status_line(submission));
    render_centered(
        frame,
        hint_area,
        Line::from(Span::styled(KEY_HINTS, styles::key_hint_style())),
    );
}

fn render_centered(frame: &mut Frame<'_>, area: Rect, line: Line<'static>) {
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn send_button_line(pending_sends: usize) -> Line<'static> {
    if pending_sends == 0 {
        Line::from(Span::styled("[ Send ]", styles::button_style()))
    } else {
        Line::from(Span::styled(
            format!("[ Sending ({pending_sends})... ]"),
            styles::button_busy_style(),
        ))
    }
}

fn status_line(submission: &SubmissionState) -> Line<'static> {
    let label = status_label(submission);
    Line::from(Span::styled(label.text, styles::status_style(label.tone)))
}
