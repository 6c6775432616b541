//! Submission lifecycle types shared by the validator, the sender and the
//! orchestrator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response text produced by a successful send.
pub const SENT_RESPONSE: &str = "Message sent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("message is empty")]
    EmptyMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("unable to send message")]
    UnableToSend,
}

/// Reason carried by [`SubmissionState::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Send(#[from] SendError),
}

impl SubmissionError {
    /// Stable code for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::EmptyMessage) => "SUBMIT_EMPTY_MESSAGE",
            Self::Send(SendError::UnableToSend) => "SUBMIT_UNABLE_TO_SEND",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent(String),
    Failed(SendError),
}

/// Observable state of the form's status label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Succeeded(String),
    Failed(SubmissionError),
}

impl SubmissionState {
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Idle => "SUBMISSION_IDLE",
            Self::Succeeded(_) => "SUBMISSION_SUCCEEDED",
            Self::Failed(_) => "SUBMISSION_FAILED",
        }
    }
}

impl From<SendOutcome> for SubmissionState {
    fn from(outcome: SendOutcome) -> Self {
        match outcome {
            SendOutcome::Sent(response) => Self::Succeeded(response),
            SendOutcome::Failed(error) => Self::Failed(error.into()),
        }
    }
}

/// Sequence number assigned to each accepted submit intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionTicket(pub u64);

/// A sender result routed back to the thread that owns the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendCompletion {
    pub ticket: SubmissionTicket,
    pub outcome: SendOutcome,
}

/// How completions of superseded submissions are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleCompletionPolicy {
    /// Every completion is applied; the last one to resolve wins.
    #[default]
    Apply,
    /// Only the completion of the most recent submit intent is applied.
    Discard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }

    #[test]
    fn failure_reasons_are_human_readable() {
        let empty = SubmissionError::from(ValidationError::EmptyMessage);
        let unsent = SubmissionError::from(SendError::UnableToSend);

        assert_eq!(empty.to_string(), "message is empty");
        assert_eq!(unsent.to_string(), "unable to send message");
    }

    #[test]
    fn send_outcome_maps_to_terminal_state() {
        assert_eq!(
            SubmissionState::from(SendOutcome::Sent(SENT_RESPONSE.to_owned())),
            SubmissionState::Succeeded("Message sent".to_owned())
        );
        assert_eq!(
            SubmissionState::from(SendOutcome::Failed(SendError::UnableToSend)),
            SubmissionState::Failed(SubmissionError::Send(SendError::UnableToSend))
        );
    }

    #[test]
    fn stale_policy_parses_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: StaleCompletionPolicy,
        }

        let parsed: Wrapper = toml::from_str("policy = \"discard\"").expect("policy should parse");
        assert_eq!(parsed.policy, StaleCompletionPolicy::Discard);
    }
}
