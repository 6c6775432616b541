//! Headless surface: one submission, status printed as a line.

use std::{
    io::{self, Write},
    sync::mpsc::{self, Receiver},
};

use anyhow::{Context, Result};

use crate::{
    domain::submission::{SendCompletion, SubmissionState},
    usecases::{
        bootstrap,
        context::AppContext,
        observer::StateObserver,
        send_message::MessageSender,
        submit::{SubmissionOrchestrator, SubmitResult},
        validate_message::MessageValidator,
    },
};

use super::status_label::status_label;

/// Writes each rendered status label as its own line.
pub struct PrintObserver<W: Write> {
    out: W,
}

impl<W: Write> PrintObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> StateObserver for PrintObserver<W> {
    fn on_state_changed(&mut self, state: &SubmissionState) {
        let label = status_label(state);
        if let Err(error) = writeln!(self.out, "{}", label.text).and_then(|()| self.out.flush()) {
            tracing::warn!(error = %error, "failed to print submission status");
        }
    }
}

pub fn run(context: &AppContext, message: &str) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let submissions = bootstrap::compose_submissions(
        &context.config,
        PrintObserver::new(io::stdout().lock()),
        tx,
    );

    let state = submit_once(submissions, &rx, message)?;
    tracing::info!(state = state.as_label(), "one-shot submission finished");

    Ok(())
}

/// Submits `text` and, if it was dispatched, blocks until its completion is
/// applied.
pub fn submit_once<V, S, O>(
    mut submissions: SubmissionOrchestrator<V, S, O>,
    completions: &Receiver<SendCompletion>,
    text: &str,
) -> Result<SubmissionState>
where
    V: MessageValidator,
    S: MessageSender,
    O: StateObserver,
{
    if let SubmitResult::Dispatched(ticket) = submissions.submit(text) {
        let completion = completions
            .recv()
            .context("completion channel closed before the send reported back")?;
        debug_assert_eq!(completion.ticket, ticket);
        submissions.complete(completion);
    }

    Ok(submissions.state().clone())
}
