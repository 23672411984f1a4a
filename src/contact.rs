mod dispatch;
mod form;
#[cfg(feature = "ssr")]
pub mod relay;

pub use dispatch::{DispatchError, EmailDispatcher, TemplateParams};
#[cfg(test)]
pub use dispatch::MockEmailDispatcher;
pub use form::{ContactForm, Notice, SubmissionState, SubmitError};

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Same shape the browser accepts for `<input type="email">`, plus a dotted domain.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .expect("email pattern should compile")
});

/// A message written into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Subject,
    Body,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Body];

    /// Form control name, also used as the input `id`.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Body => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Body => "Message",
        }
    }

    pub fn max_len(self) -> usize {
        match self {
            Field::Name | Field::Email | Field::Subject => 256,
            Field::Body => 4096,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("{0} is required")]
    Empty(Field),
    #[error("Email address doesn't look right")]
    InvalidEmail,
    #[error("{field} must be at most {max} characters")]
    TooLong { field: Field, max: usize },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Empty(field) | ValidationError::TooLong { field, .. } => *field,
            ValidationError::InvalidEmail => Field::Email,
        }
    }
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Body => &self.body,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Body => self.body = value,
        }
    }

    /// Copy with surrounding whitespace stripped from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            body: self.body.trim().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Checks the fields in form order and reports the first problem found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in Field::ALL {
            let value = self.get(field).trim();
            if value.is_empty() {
                return Err(ValidationError::Empty(field));
            }
            if value.chars().count() > field.max_len() {
                return Err(ValidationError::TooLong {
                    field,
                    max: field.max_len(),
                });
            }
            if field == Field::Email && !EMAIL_RE.is_match(value) {
                return Err(ValidationError::InvalidEmail);
            }
        }
        Ok(())
    }
}
