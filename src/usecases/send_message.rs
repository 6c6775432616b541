//! Contract between the orchestrator and whatever delivers a message.
//!
//! A sender receives the text and an [`OnComplete`] handle and reports back
//! asynchronously with one of two outcomes. The handle guarantees the
//! callback runs exactly once: consuming it with [`OnComplete::complete`]
//! fires the given outcome, and dropping it unfired reports
//! [`SendError::UnableToSend`].

use std::fmt;

use crate::domain::submission::{SendError, SendOutcome};

type Callback = Box<dyn FnOnce(SendOutcome) + Send + 'static>;

pub struct OnComplete {
    callback: Option<Callback>,
}

impl OnComplete {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce(SendOutcome) + Send + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    pub fn complete(mut self, outcome: SendOutcome) {
        if let Some(callback) = self.callback.take() {
            callback(outcome);
        }
    }
}

impl Drop for OnComplete {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            tracing::warn!(
                code = "SEND_COMPLETION_ABANDONED",
                "send finished without reporting; treating as failure"
            );
            callback(SendOutcome::Failed(SendError::UnableToSend));
        }
    }
}

impl fmt::Debug for OnComplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnComplete")
            .field("pending", &self.callback.is_some())
            .finish()
    }
}

/// Delivers message text somewhere and reports the result through `on_complete`.
///
/// Implementations must not block the caller; the callback may run on any
/// thread.
pub trait MessageSender {
    fn send(&self, text: &str, on_complete: OnComplete);
}

impl<T: MessageSender + ?Sized> MessageSender for &T {
    fn send(&self, text: &str, on_complete: OnComplete) {
        (*self).send(text, on_complete)
    }
}
