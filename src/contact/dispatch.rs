use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ContactMessage, ValidationError};

/// Sends one contact message to the email relay.
///
/// Implementations make a single attempt per call and never retry: the relay
/// has no idempotency key, so a retry could deliver the same message twice.
#[cfg_attr(test, mockall::automock)]
pub trait EmailDispatcher {
    fn send(&self, message: ContactMessage) -> impl Future<Output = Result<(), DispatchError>>;
}

/// Why a dispatch failed. Safe to log, never shown to the visitor verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchError {
    #[error("couldn't reach the email relay: {0}")]
    Network(String),
    #[error("email relay rejected the message ({status}): {reason}")]
    Rejected { status: u16, reason: String },
    #[error("message was refused: {0}")]
    Refused(ValidationError),
    #[error("email relay is not configured")]
    Unavailable,
    #[error("contact request failed: {0}")]
    Transport(String),
}

impl DispatchError {
    /// Same kind of failure with the relay's own wording replaced by fixed text.
    pub fn redacted(self) -> Self {
        match self {
            DispatchError::Network(_) => DispatchError::Network("relay unreachable".to_string()),
            DispatchError::Rejected { status, .. } => DispatchError::Rejected {
                status,
                reason: "message not accepted".to_string(),
            },
            other => other,
        }
    }
}

/// Template variables the relay's email template expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

impl From<ContactMessage> for TemplateParams {
    fn from(value: ContactMessage) -> Self {
        Self {
            from_name: value.name,
            from_email: value.email,
            subject: value.subject,
            message: value.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacted_drops_relay_wording() {
        let rejected = DispatchError::Rejected {
            status: 400,
            reason: "The template ID [redacted] is invalid".to_string(),
        };
        assert_eq!(
            rejected.redacted(),
            DispatchError::Rejected {
                status: 400,
                reason: "message not accepted".to_string(),
            }
        );

        let network = DispatchError::Network("error sending request: tcp connect error".to_string());
        assert_eq!(
            network.redacted(),
            DispatchError::Network("relay unreachable".to_string())
        );

        assert_eq!(DispatchError::Unavailable.redacted(), DispatchError::Unavailable);
    }

    #[test]
    fn test_template_params_mapping() {
        let params = TemplateParams::from(ContactMessage {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Hello".to_string(),
            body: "Let's talk".to_string(),
        });

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "from_name": "Jane Doe",
                "from_email": "jane@example.com",
                "subject": "Hello",
                "message": "Let's talk",
            })
        );
    }
}
