use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

// Same shape the browser applies to <input type="email">.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

pub const DEMO_NOTE: &str = "This demo form only shows an on-page acknowledgement. Connect it to your backend or a form service when deploying.";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

pub fn is_valid_email(s: &str) -> bool {
    email_regex().is_match(s)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email.")]
    MissingEmail,
    #[error("\"{0}\" is not a valid email address.")]
    InvalidEmail(String),
    #[error("Please enter a message.")]
    MissingMessage,
}

/// What the form shows under its Send button.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Acknowledged(String),
    Rejected(FormError),
}

/// What the quick-message form holds at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuickMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl QuickMessage {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MissingMessage);
        }
        Ok(())
    }

    /// Acknowledgement for a valid draft. Nothing is sent anywhere.
    pub fn acknowledge(&self) -> Result<String, FormError> {
        self.validate()?;
        Ok(format!(
            "Thanks! We'll get back to you at {}. (Demo form: nothing was sent, it isn't connected to a backend yet.)",
            self.email.trim()
        ))
    }

    /// Status the submit handler stores after a submit.
    pub fn submit(&self) -> FormStatus {
        match self.acknowledge() {
            Ok(text) => FormStatus::Acknowledged(text),
            Err(reason) => FormStatus::Rejected(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> QuickMessage {
        QuickMessage {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn valid_draft_acknowledges_with_literal_email() {
        let ack = draft("Jane", "jane@example.com", "Hello").acknowledge().unwrap();
        assert!(ack.contains("jane@example.com"));
        assert!(ack.contains("isn't connected to a backend"));
    }

    #[test]
    fn empty_name_blocks_acknowledgement() {
        assert_eq!(
            draft("", "jane@example.com", "Hello").acknowledge(),
            Err(FormError::MissingName)
        );
        assert_eq!(
            draft("   ", "jane@example.com", "Hello").acknowledge(),
            Err(FormError::MissingName)
        );
    }

    #[test]
    fn empty_message_and_email_are_rejected() {
        assert_eq!(
            draft("Jane", "", "Hello").validate(),
            Err(FormError::MissingEmail)
        );
        assert_eq!(
            draft("Jane", "jane@example.com", "\n").validate(),
            Err(FormError::MissingMessage)
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["jane", "jane@", "@example.com", "jane doe@example.com", "jane@-example.com"] {
            assert_eq!(
                draft("Jane", bad, "Hello").validate(),
                Err(FormError::InvalidEmail(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn browser_style_emails_pass() {
        for ok in ["jane@example.com", "j.doe+news@mail.example.co.in", "root@localhost"] {
            assert!(is_valid_email(ok), "{ok}");
        }
    }

    #[test]
    fn submit_maps_drafts_to_status() {
        match draft("Jane", "jane@example.com", "Hello").submit() {
            FormStatus::Acknowledged(text) => assert!(text.contains("jane@example.com")),
            other => panic!("expected acknowledgement, got {other:?}"),
        }
        assert_eq!(
            draft("", "jane@example.com", "Hello").submit(),
            FormStatus::Rejected(FormError::MissingName)
        );
        assert_eq!(FormStatus::default(), FormStatus::Idle);
    }

    #[test]
    fn error_text_is_user_facing() {
        assert_eq!(
            FormError::InvalidEmail("nope".into()).to_string(),
            "\"nope\" is not a valid email address."
        );
    }
}
