//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use survey_export::client::{DataClient, InMemoryDataClient};
use survey_export::error::{ExportResult, MailError};
use survey_export::mail::MailSender;
use survey_export::types::{Address, Campaign, Status, Survey};

pub fn acme_survey() -> Survey {
    Survey::new("S1", "Acme", Address::new("12", "Main St", "75000", "Paris"))
}

/// Campaign C1: two entries, VALID then INVALID
pub fn campaign_c1() -> Campaign {
    Campaign::new("C1", "S1")
        .with_status(
            Address::new("1", "Rue de Rivoli", "75001", "Paris"),
            Status::Valid,
        )
        .with_status(
            Address::new("8", "Avenue Foch", "75116", "Paris"),
            Status::Invalid,
        )
}

/// Campaign C2: no entries
pub fn campaign_c2() -> Campaign {
    Campaign::new("C2", "S1")
}

/// Campaign C3: references a survey that does not exist
pub fn campaign_c3() -> Campaign {
    Campaign::new("C3", "S404")
}

pub fn campaign_with(n: usize) -> Campaign {
    (0..n).fold(Campaign::new("CN", "S1"), |campaign, i| {
        campaign.with_status(
            Address::new(
                (i + 1).to_string(),
                format!("Street {}", i),
                format!("{:05}", 10000 + i),
                "Lyon",
            ),
            if i % 2 == 0 { "VALID" } else { "UNREACHABLE" },
        )
    })
}

/// Data client that counts lookups
#[derive(Default)]
pub struct RecordingClient {
    inner: InMemoryDataClient,
    pub campaign_lookups: AtomicUsize,
    pub survey_lookups: AtomicUsize,
}

impl RecordingClient {
    pub fn seeded() -> Self {
        let client = Self::default();
        client.inner.create_survey(acme_survey()).unwrap();
        for campaign in [campaign_c1(), campaign_c2(), campaign_c3()] {
            client.inner.create_campaign(campaign).unwrap();
        }
        client
    }

    pub fn survey_lookups(&self) -> usize {
        self.survey_lookups.load(Ordering::SeqCst)
    }

    pub fn campaign_lookups(&self) -> usize {
        self.campaign_lookups.load(Ordering::SeqCst)
    }
}

impl DataClient for RecordingClient {
    fn get_survey(&self, id: &str) -> ExportResult<Option<Survey>> {
        self.survey_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.get_survey(id)
    }

    fn create_survey(&self, survey: Survey) -> ExportResult<()> {
        self.inner.create_survey(survey)
    }

    fn get_campaign(&self, id: &str) -> ExportResult<Option<Campaign>> {
        self.campaign_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.get_campaign(id)
    }

    fn create_campaign(&self, campaign: Campaign) -> ExportResult<()> {
        self.inner.create_campaign(campaign)
    }
}

/// What the mailer saw for one message
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub file_name: String,
    pub size: u64,
    pub starts_with_zip_magic: bool,
}

/// Mail sender that records attachments, optionally failing every send
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<SentMessage>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl MailSender for RecordingMailer {
    fn send(&self, attachment: &Path) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Rejected("smtp relay unavailable".to_string()));
        }
        let bytes = std::fs::read(attachment)?;
        self.sent.lock().unwrap().push(SentMessage {
            file_name: attachment
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            size: bytes.len() as u64,
            starts_with_zip_magic: bytes.starts_with(b"PK"),
        });
        Ok(())
    }
}
