//! Delivery of generated reports
//!
//! The pipeline hands over a file path and nothing else. Who receives the
//! message and what it is called is decided by the sender's [`MailPolicy`].

mod outbox;

pub use outbox::{Envelope, OutboxMailSender};

use crate::error::MailError;
use std::path::Path;

pub const DEFAULT_RECIPIENT: &str = "survey-results@localhost";
pub const DEFAULT_SUBJECT: &str = "Survey results";

pub trait MailSender: Send + Sync {
    /// Send one message with `attachment` as its only attachment
    fn send(&self, attachment: &Path) -> Result<(), MailError>;
}

/// Fixed addressing applied to every message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailPolicy {
    pub recipient: String,
    pub subject: String,
}

impl Default for MailPolicy {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }
}
