//! UI layer: terminal form surface, headless surface and the status
//! rendering contract.

mod event_source;
mod message_input;
pub mod oneshot;
pub mod shell;
mod status_label;
mod styles;
mod terminal;
mod view;

pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
