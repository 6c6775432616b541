//! Mapping from submission state to what the status label shows.

use crate::domain::submission::SubmissionState;

const IDLE_TEXT: &str = "Ready";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Affirmative,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLabel {
    pub text: String,
    pub tone: StatusTone,
}

pub fn status_label(state: &SubmissionState) -> StatusLabel {
    match state {
        SubmissionState::Idle => StatusLabel {
            text: IDLE_TEXT.to_owned(),
            tone: StatusTone::Neutral,
        },
        SubmissionState::Succeeded(message) => StatusLabel {
            text: message.clone(),
            tone: StatusTone::Affirmative,
        },
        SubmissionState::Failed(reason) => StatusLabel {
            text: format!("Error: {reason}"),
            tone: StatusTone::Error,
        },
    }
}
