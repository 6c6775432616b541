//! Use case layer: validation, sending contract and submission orchestration.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod form;
pub mod observer;
pub mod send_message;
pub mod submit;
pub mod validate_message;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
