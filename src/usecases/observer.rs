use crate::domain::submission::SubmissionState;

/// Receives every submission state transition, in order.
pub trait StateObserver {
    fn on_state_changed(&mut self, state: &SubmissionState);
}

impl<F> StateObserver for F
where
    F: FnMut(&SubmissionState),
{
    fn on_state_changed(&mut self, state: &SubmissionState) {
        self(state)
    }
}

/// Records transitions in the structured log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StateObserver for TracingObserver {
    fn on_state_changed(&mut self, state: &SubmissionState) {
        match state {
            SubmissionState::Failed(reason) => tracing::info!(
                state = state.as_label(),
                code = reason.code(),
                reason = %reason,
                "submission state changed"
            ),
            _ => tracing::info!(state = state.as_label(), "submission state changed"),
        }
    }
}
