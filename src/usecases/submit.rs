//! Submission state machine.
//!
//! The orchestrator validates submitted text, hands valid text to a
//! [`MessageSender`] and turns outcomes into [`SubmissionState`] transitions.
//! Sender callbacks never touch the orchestrator directly: they push a
//! [`SendCompletion`] onto a channel, and the thread that owns the
//! orchestrator feeds it back through [`SubmissionOrchestrator::complete`].

use std::sync::mpsc;

use crate::domain::submission::{
    SendCompletion, StaleCompletionPolicy, SubmissionState, SubmissionTicket, ValidationError,
    ValidationOutcome,
};

use super::{
    observer::StateObserver,
    send_message::{MessageSender, OnComplete},
    validate_message::MessageValidator,
};

pub type CompletionSink = mpsc::Sender<SendCompletion>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// Validation failed; the state is now `Failed` and nothing was sent.
    Rejected(ValidationError),
    /// Text was handed to the sender; a completion will follow.
    Dispatched(SubmissionTicket),
    /// The orchestrator was shut down.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionDisposition {
    Applied,
    Stale,
    TornDown,
}

pub struct SubmissionOrchestrator<V, S, O>
where
    V: MessageValidator,
    S: MessageSender,
    O: StateObserver,
{
    validator: V,
    sender: S,
    observer: O,
    completions: CompletionSink,
    policy: StaleCompletionPolicy,
    state: SubmissionState,
    next_ticket: u64,
    latest_ticket: Option<SubmissionTicket>,
    pending_sends: usize,
    shut_down: bool,
}

impl<V, S, O> SubmissionOrchestrator<V, S, O>
where
    V: MessageValidator,
    S: MessageSender,
    O: StateObserver,
{
    pub fn new(
        validator: V,
        sender: S,
        observer: O,
        completions: CompletionSink,
        policy: StaleCompletionPolicy,
    ) -> Self {
        Self {
            validator,
            sender,
            observer,
            completions,
            policy,
            state: SubmissionState::Idle,
            next_ticket: 0,
            latest_ticket: None,
            pending_sends: 0,
            shut_down: false,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Sends dispatched whose completion has not been applied yet.
    pub fn pending_sends(&self) -> usize {
        self.pending_sends
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn submit(&mut self, text: &str) -> SubmitResult {
        if self.shut_down {
            tracing::debug!("submit ignored after shutdown");
            return SubmitResult::Ignored;
        }

        let ticket = self.issue_ticket();

        match self.validator.validate(text) {
            ValidationOutcome::Invalid(error) => {
                tracing::debug!(ticket = ticket.0, reason = %error, "submission rejected");
                self.transition(SubmissionState::Failed(error.into()));
                SubmitResult::Rejected(error)
            }
            ValidationOutcome::Valid => {
                self.pending_sends += 1;
                tracing::debug!(
                    ticket = ticket.0,
                    chars = text.chars().count(),
                    pending = self.pending_sends,
                    "dispatching submission"
                );

                let sink = self.completions.clone();
                self.sender.send(
                    text,
                    OnComplete::new(move |outcome| {
                        if sink.send(SendCompletion { ticket, outcome }).is_err() {
                            tracing::debug!(
                                ticket = ticket.0,
                                "completion receiver is gone; dropping outcome"
                            );
                        }
                    }),
                );

                SubmitResult::Dispatched(ticket)
            }
        }
    }

    pub fn complete(&mut self, completion: SendCompletion) -> CompletionDisposition {
        self.pending_sends = self.pending_sends.saturating_sub(1);

        if self.shut_down {
            tracing::debug!(
                ticket = completion.ticket.0,
                "completion arrived after shutdown; ignoring"
            );
            return CompletionDisposition::TornDown;
        }

        if self.policy == StaleCompletionPolicy::Discard
            && self.latest_ticket != Some(completion.ticket)
        {
            tracing::debug!(
                ticket = completion.ticket.0,
                latest = ?self.latest_ticket,
                "discarding stale completion"
            );
            return CompletionDisposition::Stale;
        }

        self.transition(completion.outcome.into());
        CompletionDisposition::Applied
    }

    /// Marks the owning surface as torn down. Sends already in flight still
    /// complete, but their outcomes no longer change the state.
    pub fn shutdown(&mut self) {
        if !self.shut_down {
            tracing::debug!(pending = self.pending_sends, "submission orchestrator shut down");
        }
        self.shut_down = true;
    }

    fn issue_ticket(&mut self) -> SubmissionTicket {
        self.next_ticket += 1;
        let ticket = SubmissionTicket(self.next_ticket);
        self.latest_ticket = Some(ticket);
        ticket
    }

    fn transition(&mut self, next: SubmissionState) {
        self.state = next;
        self.observer.on_state_changed(&self.state);
    }
}

#[cfg(test)]
pub(crate) mod test_doubles {
    use std::cell::RefCell;

    use crate::{
        domain::submission::SendOutcome,
        usecases::send_message::{MessageSender, OnComplete},
    };

    /// Holds every send until the test resolves it.
    #[derive(Default)]
    pub struct DeferredSender {
        texts: RefCell<Vec<String>>,
        handles: RefCell<Vec<Option<OnComplete>>>,
    }

    impl DeferredSender {
        pub fn sent_texts(&self) -> Vec<String> {
            self.texts.borrow().clone()
        }

        pub fn resolve(&self, index: usize, outcome: SendOutcome) {
            let handle = self.handles.borrow_mut()[index]
                .take()
                .expect("send should be unresolved");
            handle.complete(outcome);
        }
    }

    impl MessageSender for DeferredSender {
        fn send(&self, text: &str, on_complete: OnComplete) {
            self.texts.borrow_mut().push(text.to_owned());
            self.handles.borrow_mut().push(Some(on_complete));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, sync::mpsc::Receiver};

    use super::{test_doubles::DeferredSender, *};
    use crate::{
        domain::submission::{SendError, SendOutcome, SubmissionError, SENT_RESPONSE},
        usecases::validate_message::EmptyMessageValidator,
    };

    type History = Rc<RefCell<Vec<SubmissionState>>>;

    fn recorder() -> (History, impl FnMut(&SubmissionState)) {
        let history: History = Rc::default();
        let sink = Rc::clone(&history);
        (history, move |state: &SubmissionState| {
            sink.borrow_mut().push(state.clone())
        })
    }

    fn drain<V, S, O>(
        orchestrator: &mut SubmissionOrchestrator<V, S, O>,
        completions: &Receiver<SendCompletion>,
    ) -> Vec<CompletionDisposition>
    where
        V: MessageValidator,
        S: MessageSender,
        O: StateObserver,
    {
        completions
            .try_iter()
            .map(|completion| orchestrator.complete(completion))
            .collect()
    }

    fn sent() -> SendOutcome {
        SendOutcome::Sent(SENT_RESPONSE.to_owned())
    }

    fn unable() -> SendOutcome {
        SendOutcome::Failed(SendError::UnableToSend)
    }

    #[test]
    fn starts_idle_with_nothing_pending() {
        let sender = DeferredSender::default();
        let (tx, _rx) = mpsc::channel();
        let orchestrator = SubmissionOrchestrator::new(
            EmptyMessageValidator,
            &sender,
            |_: &SubmissionState| {},
            tx,
            StaleCompletionPolicy::Apply,
        );

        assert_eq!(orchestrator.state(), &SubmissionState::Idle);
        assert_eq!(orchestrator.pending_sends(), 0);
    }

    #[test]
    fn empty_submit_fails_without_sending() {
        let sender = DeferredSender::default();
        let (history, observer) = recorder();
        let (tx, rx) = mpsc::channel();
        let mut orchestrator = SubmissionOrchestrator::new(
            EmptyMessageValidator,
            &sender,
            observer,
            tx,
            StaleCompletionPolicy::Apply,
        );

        let result = orchestrator.submit("");

        assert_eq!(result, SubmitResult::Rejected(ValidationError::EmptyMessage));
        assert!(sender.sent_texts().is_empty());
        assert_eq!(orchestrator.pending_sends(), 0);
        assert!(rx.try_recv().is_err());
        assert_eq!(
            *history.borrow(),
            vec![SubmissionState::Failed(SubmissionError::Validation(
                ValidationError::EmptyMessage
            ))]
        );
    }

    #[test]
    fn state_is_unchanged_until_completion_arrives() {
        let sender = DeferredSender::default();
        let (history, observer) = recorder();
        let (tx, _rx) = mpsc::channel();
        let mut orchestrator = SubmissionOrchestrator::new(
            EmptyMessageValidator,
            &sender,
            observer,
            tx,
            StaleCompletionPolicy::Apply,
        );

        let result = orchestrator.submit("hello");

        assert_eq!(result, SubmitResult::Dispatched(SubmissionTicket(1)));
        assert_eq!(sender.sent_texts(), vec!["hello".to_owned()]);
        assert_eq!(orchestrator.state(), &SubmissionState::Idle);
        assert_eq!(orchestrator.pending_sends(), 1);
        assert!(history.borrow().is_empty());
    }

    #[test]
    fn successful_send_sets_succeeded() {
        let sender = DeferredSender::default();
        let (history, observer) = recorder();
        let (tx, rx) = mpsc::channel();
        let mut orchestrator = SubmissionOrchestrator::new(
            EmptyMessageValidator,
            &sender,
            observer,
            tx,
            StaleCompletionPolicy::Apply,
        );

        orchestrator.submit("hi");
        sender.resolve(0, sent());

        assert_eq!(
            drain(&mut orchestrator, &rx),
            vec![CompletionDisposition::Applied]
        );
        assert_eq!(
            orchestrator.state(),
            &SubmissionState::Succeeded("Message sent".to_owned())
        );
        assert_eq!(orchestrator.pending_sends(), 0);
        assert_eq!(history.borrow().len(), 1);
    }

    #[test]
    fn failed_send_sets_failed_with_reason() {
        let sender = DeferredSender::default();
        let (tx, rx) = mpsc::channel();
        let mut orchestrator = SubmissionOrchestrator::new(
            EmptyMessageValidator,
            &sender,
            |_: &SubmissionState| {},
            tx,
            StaleCompletionPolicy::Apply,
        );

        orchestrator.submit("hi");
        sender.resolve(0, unable());
        drain(&mut orchestrator, &rx);

        assert_eq!(
            orchestrator.state(),
            &SubmissionState::Failed(SubmissionError::Send(SendError::UnableToSend))
        );
    }

    #[test]
    fn overlapping_submits_apply_last_resolved_completion() {
        let sender = DeferredSender::default();
        let (history, observer) = recorder();
        let (tx, rx) = mpsc::channel();
        let mut orchestrator = SubmissionOrchestrator::new(
            EmptyMessageValidator,
            &sender,
            observer,
            tx,
            StaleCompletionPolicy::Apply,
        );

        orchestrator.submit("first");
        orchestrator.submit("second");
        assert_eq!(orchestrator.pending_sends(), 2);

        sender.resolve(1, sent());
        sender.resolve(0, unable());

        assert_eq!(
            drain(&mut orchestrator, &rx),
            vec![CompletionDisposition::Applied, CompletionDisposition::Applied]
        );
        assert_eq!(
            *history.borrow(),
            vec![
                SubmissionState::Succeeded("Message sent".to_owned()),
                SubmissionState::Failed(SubmissionError::Send(SendError::UnableToSend)),
            ]
        );
        assert_eq!(orchestrator.pending_sends(), 0);
    }

    #[test]
    fn discard_policy_drops_superseded_completions() {
        let sender = DeferredSender::default();
        let (tx, rx) = mpsc::channel();
        let mut orchestrator = SubmissionOrchestrator::new(
            EmptyMessageValidator,
            &sender,
            |_: &SubmissionState| {},
            tx,
            StaleCompletionPolicy::Discard,
        );

        orchestrator.submit("first");
        orchestrator.submit("second");
        sender.resolve(1, sent());
        sender.resolve(0, unable());

        assert_eq!(
            drain(&mut orchestrator, &rx),
            vec![CompletionDisposition::Applied, CompletionDisposition::Stale]
        );
        assert_eq!(
            orchestrator.state(),
            &SubmissionState::Succeeded("Message sent".to_owned())
        );
        assert_eq!(orchestrator.pending_sends(), 0);
    }

    #[test]
    fn discard_policy_treats_rejected_submit_as_latest() {
        let sender = DeferredSender::default();
        let (tx, rx) = mpsc::channel();
        let mut orchestrator = SubmissionOrchestrator::new(
            EmptyMessageValidator,
            &sender,
            |_: &SubmissionState| {},
            tx,
            StaleCompletionPolicy::Discard,
        );

        orchestrator.submit("hi");
        orchestrator.submit("");
        sender.resolve(0, sent());

        assert_eq!(
            drain(&mut orchestrator, &rx),
            vec![CompletionDisposition::Stale]
        );
        assert_eq!(
            orchestrator.state(),
            &SubmissionState::Failed(SubmissionError::Validation(ValidationError::EmptyMessage))
        );
    }

    #[test]
    fn completions_after_shutdown_leave_state_untouched() {
        let sender = DeferredSender::default();
        let (history, observer) = recorder();
        let (tx, rx) = mpsc::channel();
        let mut orchestrator = SubmissionOrchestrator::new(
            EmptyMessageValidator,
            &sender,
            observer,
            tx,
            StaleCompletionPolicy::Apply,
        );

        orchestrator.submit("hi");
        orchestrator.shutdown();
        sender.resolve(0, sent());

        assert_eq!(
            drain(&mut orchestrator, &rx),
            vec![CompletionDisposition::TornDown]
        );
        assert_eq!(orchestrator.state(), &SubmissionState::Idle);
        assert!(history.borrow().is_empty());
        assert_eq!(orchestrator.submit("again"), SubmitResult::Ignored);
        assert_eq!(sender.sent_texts().len(), 1);
    }

    #[test]
    fn tickets_increase_per_submit_intent() {
        let sender = DeferredSender::default();
        let (tx, _rx) = mpsc::channel();
        let mut orchestrator = SubmissionOrchestrator::new(
            EmptyMessageValidator,
            &sender,
            |_: &SubmissionState| {},
            tx,
            StaleCompletionPolicy::Apply,
        );

        assert_eq!(
            orchestrator.submit("a"),
            SubmitResult::Dispatched(SubmissionTicket(1))
        );
        orchestrator.submit("");
        assert_eq!(
            orchestrator.submit("b"),
            SubmitResult::Dispatched(SubmissionTicket(3))
        );
    }

    #[test]
    fn resubmitting_after_failure_can_succeed() {
        let sender = DeferredSender::default();
        let (tx, rx) = mpsc::channel();
        let mut orchestrator = SubmissionOrchestrator::new(
            EmptyMessageValidator,
            &sender,
            |_: &SubmissionState| {},
            tx,
            StaleCompletionPolicy::Apply,
        );

        orchestrator.submit("hi");
        sender.resolve(0, unable());
        drain(&mut orchestrator, &rx);
        assert!(matches!(orchestrator.state(), SubmissionState::Failed(_)));

        orchestrator.submit("hi");
        sender.resolve(1, sent());
        drain(&mut orchestrator, &rx);
        assert_eq!(
            orchestrator.state(),
            &SubmissionState::Succeeded("Message sent".to_owned())
        );
    }
}
