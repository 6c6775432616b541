//! Validation of message text before it is handed to a sender.

use crate::domain::submission::{ValidationError, ValidationOutcome};

/// Checks raw message text. The only rule is that it must not be empty;
/// whitespace counts as content.
pub fn validate(text: &str) -> ValidationOutcome {
    if text.is_empty() {
        return ValidationOutcome::Invalid(ValidationError::EmptyMessage);
    }

    ValidationOutcome::Valid
}

pub trait MessageValidator {
    fn validate(&self, text: &str) -> ValidationOutcome;
}

impl<T: MessageValidator + ?Sized> MessageValidator for &T {
    fn validate(&self, text: &str) -> ValidationOutcome {
        (*self).validate(text)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyMessageValidator;

impl MessageValidator for EmptyMessageValidator {
    fn validate(&self, text: &str) -> ValidationOutcome {
        validate(text)
    }
}
