//! Survey Export - campaign results to Excel, delivered by mail
//!
//! This library turns a survey campaign's address-level results into a styled
//! `.xlsx` report and hands it to a mail sender.
//!
//! # Features
//!
//! - Fixed "Survey" report layout built as an in-memory document tree
//! - Excel serialization with fonts, fills and column widths
//! - Transient artifacts removed on every exit path
//! - Pluggable data source and mail transport
//! - HTTP API and CLI front ends
//!
//! # Example
//!
//! ```no_run
//! use survey_export::client::InMemoryDataClient;
//! use survey_export::mail::{MailPolicy, OutboxMailSender};
//! use survey_export::pipeline::ExportPipeline;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let client = InMemoryDataClient::from_yaml_file(Path::new("campaigns.yaml"))?;
//! let mailer = OutboxMailSender::new("outbox", MailPolicy::default());
//! let pipeline = ExportPipeline::new(Arc::new(client), Arc::new(mailer));
//!
//! pipeline.export_campaign("C1")?;
//! # Ok::<(), survey_export::error::ExportError>(())
//! ```

pub mod api;
pub mod cli;
pub mod client;
pub mod error;
pub mod excel;
pub mod mail;
pub mod pipeline;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{ExportError, ExportResult, MailError};
pub use pipeline::ExportPipeline;
pub use types::{Address, AddressStatus, Campaign, Status, Survey};
