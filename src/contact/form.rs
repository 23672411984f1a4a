use thiserror::Error;

use super::{ContactMessage, DispatchError, EmailDispatcher, Field, ValidationError};

const SENT_TEXT: &str = "Thank you for your message! I'll get back to you soon.";
const FAILED_TEXT: &str = "Sorry, there was an error sending your message. Please try again later.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed(DispatchError),
}

/// Feedback shown to the visitor after a submission resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::Sent => SENT_TEXT,
            Notice::Failed => FAILED_TEXT,
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, Notice::Failed)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a message is already being sent")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Draft and submission lifecycle of the contact form.
///
/// `Idle -> Sending -> Succeeded | Failed`, and back to `Idle` once the visitor
/// edits a field or dismisses the notice. Only `Sending` blocks a new submit.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: ContactMessage,
    state: SubmissionState,
    invalid: Option<ValidationError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactMessage {
        &self.draft
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Inline error from the last rejected submit, until the next edit.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.invalid.as_ref()
    }

    pub fn is_sending(&self) -> bool {
        self.state == SubmissionState::Sending
    }

    pub fn can_submit(&self) -> bool {
        !self.is_sending()
    }

    pub fn notice(&self) -> Option<Notice> {
        match self.state {
            SubmissionState::Succeeded => Some(Notice::Sent),
            SubmissionState::Failed(_) => Some(Notice::Failed),
            SubmissionState::Idle | SubmissionState::Sending => None,
        }
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.invalid = None;
        self.dismiss_notice();
    }

    pub fn dismiss_notice(&mut self) {
        if self.notice().is_some() {
            self.state = SubmissionState::Idle;
        }
    }

    /// Validates the draft and moves to `Sending`, handing back the snapshot to dispatch.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitError> {
        if self.is_sending() {
            log::debug!("contact form submit ignored, already sending");
            return Err(SubmitError::InFlight);
        }
        if let Err(err) = self.draft.validate() {
            log::debug!("contact form submit rejected: {err}");
            self.state = SubmissionState::Idle;
            self.invalid = Some(err.clone());
            return Err(err.into());
        }
        self.invalid = None;
        self.state = SubmissionState::Sending;
        Ok(self.draft.trimmed())
    }

    /// Applies the dispatch result. The draft is kept when sending failed.
    pub fn complete_submit(&mut self, result: Result<(), DispatchError>) -> Option<Notice> {
        if !self.is_sending() {
            log::warn!("contact form got a dispatch result while not sending");
            return self.notice();
        }
        match result {
            Ok(()) => {
                log::info!("contact message sent");
                self.draft = ContactMessage::default();
                self.state = SubmissionState::Succeeded;
            }
            Err(err) => {
                log::warn!("contact message failed to send: {err}");
                self.state = SubmissionState::Failed(err);
            }
        }
        self.notice()
    }

    pub async fn submit<D>(&mut self, dispatcher: &D) -> Result<Notice, SubmitError>
    where
        D: EmailDispatcher,
    {
        let message = self.begin_submit()?;
        let result = dispatcher.send(message).await;
        Ok(self.complete_submit(result).unwrap_or(Notice::Failed))
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use mockall::predicate::eq;

    use super::*;
    use crate::contact::MockEmailDispatcher;

    fn jane() -> ContactMessage {
        ContactMessage {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Hello".to_string(),
            body: "Let's talk".to_string(),
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        let message = jane();
        for field in Field::ALL {
            form.update_field(field, message.get(field));
        }
        form
    }

    fn dispatcher_returning(result: Result<(), DispatchError>) -> MockEmailDispatcher {
        let mut dispatcher = MockEmailDispatcher::new();
        dispatcher
            .expect_send()
            .once()
            .with(eq(jane()))
            .return_once(move |_| Box::pin(ready(result)));
        dispatcher
    }

    #[tokio::test]
    async fn test_empty_field_never_dispatches() {
        for field in Field::ALL {
            let mut dispatcher = MockEmailDispatcher::new();
            dispatcher.expect_send().never();

            let mut form = filled_form();
            form.update_field(field, "");
            let res = form.submit(&dispatcher).await;

            assert_eq!(res, Err(SubmitError::Invalid(ValidationError::Empty(field))));
            assert_eq!(form.state(), &SubmissionState::Idle);
            assert_eq!(form.validation_error(), Some(&ValidationError::Empty(field)));
            assert!(form.can_submit());
        }
    }

    #[tokio::test]
    async fn test_success_clears_draft() {
        let dispatcher = dispatcher_returning(Ok(()));
        let mut form = filled_form();

        let res = form.submit(&dispatcher).await;

        assert_eq!(res, Ok(Notice::Sent));
        assert_eq!(form.draft(), &ContactMessage::default());
        assert_eq!(form.state(), &SubmissionState::Succeeded);
        assert_eq!(
            form.notice().map(Notice::text),
            Some("Thank you for your message! I'll get back to you soon.")
        );
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn test_failure_keeps_draft() {
        let err = DispatchError::Network("connection reset".to_string());
        let dispatcher = dispatcher_returning(Err(err.clone()));
        let mut form = filled_form();

        let res = form.submit(&dispatcher).await;

        assert_eq!(res, Ok(Notice::Failed));
        assert_eq!(form.draft(), &jane());
        assert_eq!(form.state(), &SubmissionState::Failed(err));
        assert!(form.notice().is_some_and(Notice::is_error));
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let mut dispatcher = MockEmailDispatcher::new();
        let mut seq = mockall::Sequence::new();
        dispatcher
            .expect_send()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_| Box::pin(ready(Err(DispatchError::Unavailable))));
        dispatcher
            .expect_send()
            .once()
            .in_sequence(&mut seq)
            .with(eq(jane()))
            .return_once(|_| Box::pin(ready(Ok(()))));
        let mut form = filled_form();

        assert_eq!(form.submit(&dispatcher).await, Ok(Notice::Failed));
        assert_eq!(form.submit(&dispatcher).await, Ok(Notice::Sent));
        assert!(form.draft().is_empty());
    }

    #[test]
    fn test_no_second_dispatch_while_sending() {
        let mut form = filled_form();

        let first = form.begin_submit();
        assert_eq!(first, Ok(jane()));
        assert!(form.is_sending());
        assert!(!form.can_submit());

        assert_eq!(form.begin_submit(), Err(SubmitError::InFlight));
        assert!(form.is_sending());

        assert_eq!(form.complete_submit(Ok(())), Some(Notice::Sent));
        assert!(form.can_submit());
    }

    #[test]
    fn test_snapshot_is_trimmed_but_draft_is_not() {
        let mut form = filled_form();
        form.update_field(Field::Name, "  Jane Doe \n");

        assert_eq!(form.begin_submit(), Ok(jane()));
        assert_eq!(form.draft().name, "  Jane Doe \n");
    }

    #[test]
    fn test_stray_result_is_ignored() {
        let mut form = filled_form();
        assert_eq!(form.complete_submit(Ok(())), None);
        assert_eq!(form.draft(), &jane());
        assert_eq!(form.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_editing_dismisses_notice() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.complete_submit(Err(DispatchError::Unavailable));
        assert_eq!(form.notice(), Some(Notice::Failed));

        form.update_field(Field::Subject, "Hello again");
        assert_eq!(form.notice(), None);
        assert_eq!(form.state(), &SubmissionState::Idle);
        assert_eq!(form.draft().subject, "Hello again");
        assert_eq!(form.draft().name, "Jane Doe");
    }

    #[test]
    fn test_dismiss_after_success() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.complete_submit(Ok(()));

        form.dismiss_notice();
        assert_eq!(form.state(), &SubmissionState::Idle);
        assert!(form.draft().is_empty());

        // nothing to dismiss while sending
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.dismiss_notice();
        assert!(form.is_sending());
    }

    #[test]
    fn test_validation_error_cleared_by_edit() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_err());
        assert!(form.validation_error().is_some());

        form.update_field(Field::Name, "J");
        assert_eq!(form.validation_error(), None);
    }
}
