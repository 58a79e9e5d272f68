//! Contact form state machine.
//!
//! The form is only ever "sent" locally: a successful submit clears the
//! fields and raises a confirmation flag that the view drops again after
//! [`CONFIRMATION_WINDOW`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long the confirmation stays visible after a successful submit.
pub const CONFIRMATION_WINDOW: Duration = Duration::from_secs(3);

pub const SENT_MESSAGE: &str = "✅ Your message has been simulated as sent! (Backend not integrated)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// Display is the fixed inline warning; the field list is for logs only.
    #[error("⚠️ Please fill in all the required fields.")]
    MissingFields(Vec<Field>),
}

/// Which of the three UI states the form is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Invalid,
    Submitted,
}

/// Identifies one successful submission. Only the latest ticket may clear
/// the confirmation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    error: Option<ContactError>,
    sent: bool,
    submissions: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Replace one field. Leaves the error and confirmation untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.value(*f).is_empty())
            .collect()
    }

    /// Validate and "send".
    ///
    /// On failure the fields are kept, the warning is stored and the
    /// confirmation flag is left as it was. On success the fields and the
    /// warning are cleared, the flag is raised, and the returned ticket must
    /// be handed back to [`ContactForm::dismiss`] once the window elapses.
    pub fn submit(&mut self) -> Result<Ticket, ContactError> {
        let missing = self.missing();
        if !missing.is_empty() {
            tracing::debug!(?missing, "contact form rejected");
            let err = ContactError::MissingFields(missing);
            self.error = Some(err.clone());
            return Err(err);
        }

        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.error = None;
        self.sent = true;
        self.submissions += 1;
        tracing::debug!(submission = self.submissions, "contact form sent");
        Ok(Ticket(self.submissions))
    }

    /// [`ContactForm::submit`], then hand the ticket to `schedule` so it can
    /// arrange the dismissal. If nothing could be scheduled the confirmation
    /// is dropped straight away rather than left up indefinitely.
    pub fn submit_scheduled<E: std::fmt::Debug>(
        &mut self,
        schedule: impl FnOnce(Ticket) -> Result<(), E>,
    ) -> Result<Ticket, ContactError> {
        let ticket = self.submit()?;
        if let Err(err) = schedule(ticket) {
            tracing::warn!(?err, "could not schedule confirmation dismissal");
            self.dismiss(ticket);
        }
        Ok(ticket)
    }

    /// Drop the confirmation raised by `ticket`. Returns false when a later
    /// submission has superseded it, or there is nothing to dismiss.
    pub fn dismiss(&mut self, ticket: Ticket) -> bool {
        if !self.sent || ticket.0 != self.submissions {
            return false;
        }
        self.sent = false;
        true
    }

    pub fn error(&self) -> Option<&ContactError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }

    pub fn is_sent(&self) -> bool {
        self.sent
    }

    pub fn state(&self) -> FormState {
        if self.sent {
            FormState::Submitted
        } else if self.error.is_some() {
            FormState::Invalid
        } else {
            FormState::Editing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, name);
        form.set(Field::Email, email);
        form.set(Field::Message, message);
        form
    }

    #[test]
    fn starts_empty_and_editing() {
        let form = ContactForm::new();
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.missing(), Field::ALL.to_vec());
        assert!(form.error_message().is_none());
        assert!(!form.is_sent());
    }

    #[test]
    fn empty_name_is_rejected_and_fields_kept() {
        let mut form = filled("", "a@b.com", "hi");
        let err = form.submit().unwrap_err();
        assert_eq!(err, ContactError::MissingFields(vec![Field::Name]));
        assert_eq!(form.state(), FormState::Invalid);
        assert_eq!(
            form.error_message().as_deref(),
            Some("⚠️ Please fill in all the required fields.")
        );
        assert_eq!((form.name.as_str(), form.email.as_str(), form.message.as_str()), ("", "a@b.com", "hi"));
        assert!(!form.is_sent());
    }

    #[test]
    fn any_single_empty_field_is_rejected() {
        for field in Field::ALL {
            let mut form = filled("Ali", "a@b.com", "hi");
            form.set(field, "");
            let before = form.clone();
            assert!(form.submit().is_err());
            assert_eq!(form.name, before.name);
            assert_eq!(form.email, before.email);
            assert_eq!(form.message, before.message);
            assert!(!form.is_sent());
            assert!(form.error_message().is_some_and(|m| !m.is_empty()));
        }
    }

    #[test]
    fn complete_form_is_sent_and_cleared() {
        let mut form = filled("Ali", "a@b.com", "hi");
        assert!(form.submit().is_ok());
        assert_eq!((form.name.as_str(), form.email.as_str(), form.message.as_str()), ("", "", ""));
        assert!(form.error().is_none());
        assert!(form.is_sent());
        assert_eq!(form.state(), FormState::Submitted);
    }

    #[test]
    fn dismiss_returns_to_editing() {
        let mut form = filled("Ali", "a@b.com", "hi");
        let ticket = form.submit().unwrap();
        assert!(form.dismiss(ticket));
        assert!(!form.is_sent());
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.name, "");
        assert!(!form.dismiss(ticket));
    }

    #[test]
    fn error_clears_on_successful_retry() {
        let mut form = filled("Ali", "", "hi");
        assert!(form.submit().is_err());
        form.set(Field::Email, "a@b.com");
        assert!(form.submit().is_ok());
        assert!(form.error().is_none());
    }

    #[test]
    fn editing_does_not_touch_error_or_other_fields() {
        let mut form = filled("", "a@b.com", "hi");
        let _ = form.submit();
        form.set(Field::Name, "A");
        assert!(form.error().is_some());
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.message, "hi");
        assert_eq!(form.name, "A");
        assert_eq!(form.state(), FormState::Invalid);
    }

    #[test]
    fn editing_during_confirmation_keeps_flag() {
        let mut form = filled("Ali", "a@b.com", "hi");
        form.submit().unwrap();
        form.set(Field::Message, "again");
        assert!(form.is_sent());
    }

    #[test]
    fn stale_ticket_does_not_cut_later_confirmation_short() {
        let mut form = filled("Ali", "a@b.com", "hi");
        let first = form.submit().unwrap();
        form.set(Field::Name, "Ali");
        form.set(Field::Email, "a@b.com");
        form.set(Field::Message, "second");
        let second = form.submit().unwrap();
        assert!(!form.dismiss(first));
        assert!(form.is_sent());
        assert!(form.dismiss(second));
        assert!(!form.is_sent());
    }

    #[test]
    fn failed_submit_during_confirmation_keeps_flag() {
        let mut form = filled("Ali", "a@b.com", "hi");
        let ticket = form.submit().unwrap();
        assert!(form.submit().is_err());
        assert!(form.is_sent());
        assert!(form.error().is_some());
        assert!(form.dismiss(ticket));
        assert_eq!(form.state(), FormState::Invalid);
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut form = filled(" ", "not-an-email", "\n");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn scheduled_submit_keeps_confirmation_until_dismissed() {
        let mut form = filled("Ali", "a@b.com", "hi");
        let mut scheduled = None;
        let ticket = form
            .submit_scheduled(|t| {
                scheduled = Some(t);
                Ok::<(), ()>(())
            })
            .unwrap();
        assert_eq!(scheduled, Some(ticket));
        assert!(form.is_sent());
        assert!(form.dismiss(ticket));
    }

    #[test]
    fn unschedulable_dismissal_drops_confirmation_at_once() {
        let mut form = filled("Ali", "a@b.com", "hi");
        let ticket = form.submit_scheduled(|_| Err("no timer")).unwrap();
        assert!(!form.is_sent());
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.name, "");
        assert!(!form.dismiss(ticket));
    }

    #[test]
    fn scheduler_not_called_for_invalid_submit() {
        let mut form = filled("", "a@b.com", "hi");
        let mut called = false;
        let result = form.submit_scheduled(|_| {
            called = true;
            Ok::<(), ()>(())
        });
        assert!(result.is_err());
        assert!(!called);
        assert_eq!(form.email, "a@b.com");
    }

    #[test]
    fn confirmation_window_is_three_seconds() {
        assert_eq!(CONFIRMATION_WINDOW, Duration::from_secs(3));
    }
}
