use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput},
    form_state::FormState,
    submission::SubmissionState,
};

use super::{
    contracts::FormOrchestrator,
    observer::StateObserver,
    send_message::MessageSender,
    submit::{SubmissionOrchestrator, SubmitResult},
    validate_message::MessageValidator,
};

pub struct DefaultFormOrchestrator<V, S, O>
where
    V: MessageValidator,
    S: MessageSender,
    O: StateObserver,
{
    state: FormState,
    submissions: SubmissionOrchestrator<V, S, O>,
}

impl<V, S, O> DefaultFormOrchestrator<V, S, O>
where
    V: MessageValidator,
    S: MessageSender,
    O: StateObserver,
{
    pub fn new(submissions: SubmissionOrchestrator<V, S, O>) -> Self {
        Self {
            state: FormState::default(),
            submissions,
        }
    }

    fn submit_current_text(&mut self) {
        let text = self.state.message_input().text().to_owned();
        if let SubmitResult::Dispatched(ticket) = self.submissions.submit(&text) {
            tracing::debug!(ticket = ticket.0, "submit intent dispatched");
        }
    }

    fn edit_field(&mut self, key: &KeyInput) {
        let input = self.state.message_input_mut();

        if key.ctrl {
            if key.key == "u" {
                input.clear();
            }
            return;
        }

        match key.key.as_str() {
            "backspace" => input.delete_char_before(),
            "delete" => input.delete_char_at(),
            "left" => input.move_cursor_left(),
            "right" => input.move_cursor_right(),
            "home" => input.move_cursor_home(),
            "end" => input.move_cursor_end(),
            other => {
                let mut chars = other.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    input.insert_char(ch);
                }
            }
        }
    }
}

impl<V, S, O> FormOrchestrator for DefaultFormOrchestrator<V, S, O>
where
    V: MessageValidator,
    S: MessageSender,
    O: StateObserver,
{
    fn state(&self) -> &FormState {
        &self.state
    }

    fn submission(&self) -> &SubmissionState {
        self.submissions.state()
    }

    fn pending_sends(&self) -> usize {
        self.submissions.pending_sends()
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => {
                self.state.stop();
                self.submissions.shutdown();
            }
            AppEvent::SubmitRequested => self.submit_current_text(),
            AppEvent::InputKey(key) => self.edit_field(&key),
            AppEvent::SendCompleted(completion) => {
                let disposition = self.submissions.complete(completion);
                tracing::debug!(?disposition, "send completion handled");
            }
        }

        Ok(())
    }
}
