use crate::components::toaster::Toast;

use super::error::SubmitError;
use super::gate::Accepted;

/// What the notify-me form holds between keystrokes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub email: String,
    pub honeypot: String,
    pub submitting: bool,
}

impl FormState {
    pub fn with_email(&self, email: String) -> Self {
        Self { email, ..self.clone() }
    }

    pub fn with_honeypot(&self, honeypot: String) -> Self {
        Self { honeypot, ..self.clone() }
    }

    /// `None` while an attempt is already out; the trigger stays disabled until it settles.
    pub fn start(&self) -> Option<Self> {
        if self.submitting {
            return None;
        }
        Some(Self { submitting: true, ..self.clone() })
    }

    /// Ends the attempt. The email is only cleared when the backend took it.
    pub fn settle(&self, result: &Result<Accepted, SubmitError>) -> (Self, Toast) {
        match result {
            Ok(_) => (
                Self { email: String::new(), submitting: false, ..self.clone() },
                Toast::success(
                    "Success! We will keep you posted",
                    Some("You'll be notified when we launch"),
                ),
            ),
            Err(e) => (
                Self { submitting: false, ..self.clone() },
                Toast::error(e.user_message()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::toaster::ToastKind;
    use crate::notify::error::TransportError;
    use crate::notify::record::SubmissionRecord;

    fn typed(email: &str) -> FormState {
        FormState::default().with_email(email.to_string())
    }

    #[test]
    fn cannot_start_twice() {
        let sending = typed("a@b.com").start().unwrap();
        assert!(sending.submitting);
        assert!(sending.start().is_none());
    }

    #[test]
    fn success_clears_the_email() {
        let sending = typed("a@b.com").start().unwrap();
        let accepted = Accepted { record: SubmissionRecord { last_submission: Some(1), count: 1 } };

        let (next, toast) = sending.settle(&Ok(accepted));

        assert_eq!(next.email, "");
        assert!(!next.submitting);
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.description.as_deref(), Some("You'll be notified when we launch"));
    }

    #[test]
    fn failure_keeps_the_email() {
        let sending = typed("a@b.com").start().unwrap();
        let failed = Err(SubmitError::TransportFailure(TransportError::Status {
            status: 500,
            body: "boom".to_string(),
        }));

        let (next, toast) = sending.settle(&failed);

        assert_eq!(next.email, "a@b.com");
        assert!(!next.submitting);
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Something went wrong. Please try again.");
    }

    #[test]
    fn each_rejection_has_its_own_message() {
        let messages = [
            SubmitError::EmptyInput,
            SubmitError::InvalidFormat,
            SubmitError::BotDetected,
            SubmitError::RateLimited { retry_after_ms: 1 },
            SubmitError::TransportFailure(TransportError::Network("offline".to_string())),
        ]
        .iter()
        .map(SubmitError::user_message)
        .collect::<std::collections::HashSet<_>>();
        assert_eq!(messages.len(), 5);
    }
}
