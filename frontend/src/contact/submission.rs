use std::cell::RefCell;
use std::time::Duration;

use super::dispatch::{ContactMessage, DispatchError, EmailDispatcher};
use super::form::{Field, FieldErrors, FormData};
use super::validate::validate;

/// How long the "Message Sent!" panel stays up before the form comes back.
pub const ACK_DISPLAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Editing,
    Submitted,
}

/// Identifies one acknowledgment window. Only the timer holding the current
/// ticket may bring the form back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AckTicket(u64);

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; errors are stored on the flow.
    Invalid,
    /// A dispatch is already running or the acknowledgment is showing.
    Busy,
    Delivered(AckTicket),
    Failed(DispatchError),
}

/// State behind the contact form: values, inline errors and where the
/// submission is at.
#[derive(Debug, Default)]
pub struct SubmissionFlow {
    data: FormData,
    errors: FieldErrors,
    state: SubmissionState,
    in_flight: bool,
    ack: Option<AckTicket>,
    next_ticket: u64,
}

impl SubmissionFlow {
    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Stores a new value and drops any error shown for that field.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        if self.state == SubmissionState::Submitted {
            return;
        }
        self.data.set(field, value);
        self.errors.clear(field);
    }

    /// Validates and, when clean, marks a dispatch as in flight.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitOutcome> {
        if self.in_flight || self.state == SubmissionState::Submitted {
            log::debug!("Ignoring submit while busy");
            return Err(SubmitOutcome::Busy);
        }
        self.errors = validate(&self.data);
        if !self.errors.is_empty() {
            log::debug!(
                "Contact form has {} invalid field(s): {:?}",
                self.errors.len(),
                self.errors.fields().collect::<Vec<_>>()
            );
            return Err(SubmitOutcome::Invalid);
        }
        self.in_flight = true;
        Ok(ContactMessage::from(&self.data))
    }

    pub fn finish_dispatch(&mut self, result: Result<(), DispatchError>) -> SubmitOutcome {
        self.in_flight = false;
        match result {
            Ok(()) => {
                self.next_ticket += 1;
                let ticket = AckTicket(self.next_ticket);
                self.ack = Some(ticket);
                self.state = SubmissionState::Submitted;
                SubmitOutcome::Delivered(ticket)
            }
            Err(e) => {
                log::error!("Failed to send contact message: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Called when the acknowledgment timer fires. Returns true if the form
    /// was reset; stale tickets are ignored.
    pub fn acknowledgement_elapsed(&mut self, ticket: AckTicket) -> bool {
        if self.ack != Some(ticket) {
            return false;
        }
        self.ack = None;
        self.state = SubmissionState::Editing;
        self.data = FormData::default();
        self.errors = FieldErrors::default();
        true
    }
}

/// Runs one submit attempt end to end. `changed` is called whenever the flow
/// was mutated so the view can re-render. No borrow is held across the
/// dispatch await.
pub async fn submit<D>(flow: &RefCell<SubmissionFlow>, dispatcher: &D, changed: impl Fn()) -> SubmitOutcome
where
    D: EmailDispatcher + ?Sized,
{
    let started = flow.borrow_mut().begin_submit();
    changed();
    let message = match started {
        Ok(message) => message,
        Err(outcome) => return outcome,
    };

    let result = dispatcher.dispatch(&message).await;
    let outcome = flow.borrow_mut().finish_dispatch(result);
    changed();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::dispatch::MockEmailDispatcher;
    use crate::contact::form::FieldError;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn filled() -> SubmissionFlow {
        let mut flow = SubmissionFlow::default();
        flow.edit(Field::Name, "Ravi Kumar");
        flow.edit(Field::Email, "ravi@example.in");
        flow.edit(Field::Phone, "9123456780");
        flow.edit(Field::Message, "Looking for help with an NLP pipeline.");
        flow
    }

    fn accepting() -> MockEmailDispatcher {
        let mut mock = MockEmailDispatcher::new();
        mock.expect_dispatch()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        mock
    }

    #[test]
    fn valid_submit_acknowledges_then_resets() {
        let flow = RefCell::new(filled());
        let mut mock = MockEmailDispatcher::new();
        mock.expect_dispatch()
            .withf(|m| m.name == "Ravi Kumar" && m.phone == "9123456780")
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        let renders = Cell::new(0);

        let outcome = block_on(submit(&flow, &mock, || renders.set(renders.get() + 1)));
        let ticket = match outcome {
            SubmitOutcome::Delivered(ticket) => ticket,
            other => panic!("expected delivery, got {other:?}"),
        };
        assert_eq!(renders.get(), 2);
        assert_eq!(flow.borrow().state(), SubmissionState::Submitted);
        assert!(!flow.borrow().is_in_flight());

        assert_eq!(ACK_DISPLAY, Duration::from_secs(3));
        assert!(flow.borrow_mut().acknowledgement_elapsed(ticket));
        let flow = flow.into_inner();
        assert_eq!(flow.state(), SubmissionState::Editing);
        assert_eq!(flow.data(), &FormData::default());
        assert!(flow.errors().is_empty());
    }

    #[test]
    fn failed_dispatch_keeps_values() {
        let flow = RefCell::new(filled());
        let before = flow.borrow().data().clone();
        let mut mock = MockEmailDispatcher::new();
        mock.expect_dispatch().times(1).returning(|_| {
            Box::pin(async {
                Err(DispatchError::Rejected {
                    status: 400,
                    body: "The template ID is invalid".into(),
                })
            })
        });

        let outcome = block_on(submit(&flow, &mock, || {}));
        assert!(matches!(outcome, SubmitOutcome::Failed(DispatchError::Rejected { status: 400, .. })));
        let flow = flow.into_inner();
        assert_eq!(flow.state(), SubmissionState::Editing);
        assert_eq!(flow.data(), &before);
        assert!(!flow.is_in_flight());
    }

    #[test]
    fn failure_can_be_retried() {
        let flow = RefCell::new(filled());
        let mut mock = MockEmailDispatcher::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_dispatch()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Box::pin(async { Err(DispatchError::Network("offline".into())) }));
        mock.expect_dispatch()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Box::pin(async { Ok(()) }));

        assert!(matches!(block_on(submit(&flow, &mock, || {})), SubmitOutcome::Failed(_)));
        assert!(matches!(block_on(submit(&flow, &mock, || {})), SubmitOutcome::Delivered(_)));
    }

    #[test]
    fn invalid_submit_never_dispatches() {
        let flow = RefCell::new(SubmissionFlow::default());
        flow.borrow_mut().edit(Field::Email, "foo");
        let mut mock = MockEmailDispatcher::new();
        mock.expect_dispatch().times(0);

        let outcome = block_on(submit(&flow, &mock, || {}));
        assert!(matches!(outcome, SubmitOutcome::Invalid));
        let flow = flow.into_inner();
        assert_eq!(flow.errors().len(), 4);
        assert_eq!(flow.errors().get(Field::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(flow.state(), SubmissionState::Editing);
    }

    #[test]
    fn editing_clears_only_that_field() {
        let mut flow = SubmissionFlow::default();
        assert!(matches!(flow.begin_submit(), Err(SubmitOutcome::Invalid)));
        assert_eq!(flow.errors().len(), 4);

        flow.edit(Field::Phone, "1");
        assert!(flow.errors().get(Field::Phone).is_none());
        assert_eq!(flow.errors().len(), 3);
    }

    #[test]
    fn second_submit_while_in_flight_is_busy() {
        let mut flow = filled();
        assert!(flow.begin_submit().is_ok());
        assert!(flow.is_in_flight());
        assert!(matches!(flow.begin_submit(), Err(SubmitOutcome::Busy)));
        assert!(matches!(flow.finish_dispatch(Ok(())), SubmitOutcome::Delivered(_)));
        // acknowledgment panel showing
        assert!(matches!(flow.begin_submit(), Err(SubmitOutcome::Busy)));
    }

    #[test]
    fn stale_ticket_does_not_reset() {
        let mut flow = filled();
        flow.begin_submit().unwrap();
        let first = match flow.finish_dispatch(Ok(())) {
            SubmitOutcome::Delivered(t) => t,
            other => panic!("unexpected {other:?}"),
        };
        assert!(flow.acknowledgement_elapsed(first));
        assert!(!flow.acknowledgement_elapsed(first));

        let mut flow = filled();
        flow.begin_submit().unwrap();
        flow.finish_dispatch(Ok(()));
        assert!(!flow.acknowledgement_elapsed(AckTicket(99)));
        assert_eq!(flow.state(), SubmissionState::Submitted);
        assert_eq!(flow.data().name, "Ravi Kumar");
    }

    #[test]
    fn edits_are_ignored_during_acknowledgment() {
        let flow = RefCell::new(filled());
        let mock = accepting();
        block_on(submit(&flow, &mock, || {}));
        flow.borrow_mut().edit(Field::Name, "Someone else");
        assert_eq!(flow.borrow().data().name, "Ravi Kumar");
    }
}
