use super::{MailPolicy, MailSender};
use crate::error::MailError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

/// Message metadata stored next to the attachment copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub message_id: String,
    pub to: String,
    pub subject: String,
    pub attachment: String,
    pub sent_at: DateTime<Utc>,
}

/// Mail drop: every message becomes a directory under `outbox` holding
/// `envelope.json` and a copy of the attachment, for a relay to pick up.
#[derive(Debug, Clone)]
pub struct OutboxMailSender {
    outbox: PathBuf,
    policy: MailPolicy,
}

impl OutboxMailSender {
    pub fn new(outbox: impl Into<PathBuf>, policy: MailPolicy) -> Self {
        Self {
            outbox: outbox.into(),
            policy,
        }
    }

    pub fn outbox(&self) -> &Path {
        &self.outbox
    }

    pub fn policy(&self) -> &MailPolicy {
        &self.policy
    }

    /// Envelopes of all queued messages, oldest first
    pub fn queued(&self) -> Result<Vec<Envelope>, MailError> {
        let mut envelopes = Vec::new();
        if !self.outbox.exists() {
            return Ok(envelopes);
        }
        for entry in fs::read_dir(&self.outbox)? {
            let envelope_path = entry?.path().join("envelope.json");
            if envelope_path.is_file() {
                let content = fs::read_to_string(&envelope_path)?;
                envelopes.push(serde_json::from_str(&content)?);
            }
        }
        envelopes.sort_by_key(|e: &Envelope| e.sent_at);
        Ok(envelopes)
    }
}

impl MailSender for OutboxMailSender {
    fn send(&self, attachment: &Path) -> Result<(), MailError> {
        let file_name = attachment
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                MailError::Rejected(format!("attachment has no file name: {}", attachment.display()))
            })?;
        if !attachment.is_file() {
            return Err(MailError::Rejected(format!(
                "attachment not found: {}",
                attachment.display()
            )));
        }

        let envelope = Envelope {
            message_id: Uuid::new_v4().to_string(),
            to: self.policy.recipient.clone(),
            subject: self.policy.subject.clone(),
            attachment: file_name.to_string(),
            sent_at: Utc::now(),
        };

        let message_dir = self.outbox.join(&envelope.message_id);
        fs::create_dir_all(&message_dir)?;
        fs::copy(attachment, message_dir.join(file_name))?;
        fs::write(
            message_dir.join("envelope.json"),
            serde_json::to_string_pretty(&envelope)?,
        )?;

        info!(
            message_id = %envelope.message_id,
            to = %envelope.to,
            attachment = %envelope.attachment,
            "mail queued"
        );
        Ok(())
    }
}
