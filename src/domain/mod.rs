//! Domain layer: form state, submission lifecycle and surface events.

pub mod events;
pub mod form_state;
pub mod message_input_state;
pub mod submission;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
