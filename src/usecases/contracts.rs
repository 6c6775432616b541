use anyhow::Result;

use crate::domain::{events::AppEvent, form_state::FormState, submission::SubmissionState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait FormOrchestrator {
    fn state(&self) -> &FormState;
    fn submission(&self) -> &SubmissionState;
    fn pending_sends(&self) -> usize;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}
