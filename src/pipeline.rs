//! Campaign export orchestration
//!
//! `export_campaign` runs fetch campaign → fetch survey → build → write →
//! send → remove artifact. Every call is independent; the pipeline keeps no
//! state between calls.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::client::DataClient;
use crate::error::{ExportError, ExportResult};
use crate::excel::{save_document, ArtifactWriter};
use crate::mail::MailSender;
use crate::report::{ReportBuilder, WorkbookDocument};
use crate::types::{Campaign, Survey};

/// Operation named by serialization failures
pub const OP_SENDING_RESULTS: &str = "sending survey results";
/// Operation named by mail transport failures
pub const OP_SENDING_EMAIL: &str = "sending email";

#[derive(Clone)]
pub struct ExportPipeline {
    client: Arc<dyn DataClient>,
    mailer: Arc<dyn MailSender>,
    writer: ArtifactWriter,
}

impl ExportPipeline {
    /// Pipeline writing artifacts to the platform temp directory
    pub fn new(client: Arc<dyn DataClient>, mailer: Arc<dyn MailSender>) -> Self {
        Self::with_writer(client, mailer, ArtifactWriter::default())
    }

    pub fn with_writer(
        client: Arc<dyn DataClient>,
        mailer: Arc<dyn MailSender>,
        writer: ArtifactWriter,
    ) -> Self {
        Self {
            client,
            mailer,
            writer,
        }
    }

    pub fn writer(&self) -> &ArtifactWriter {
        &self.writer
    }

    // ------------------------------------------------------------------
    // Pass-throughs
    // ------------------------------------------------------------------

    pub fn create_survey(&self, survey: Survey) -> ExportResult<()> {
        self.client.create_survey(survey)
    }

    pub fn get_survey(&self, id: &str) -> ExportResult<Option<Survey>> {
        self.client.get_survey(id)
    }

    pub fn create_campaign(&self, campaign: Campaign) -> ExportResult<()> {
        self.client.create_campaign(campaign)
    }

    pub fn get_campaign(&self, id: &str) -> ExportResult<Option<Campaign>> {
        self.client.get_campaign(id)
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Build the campaign report and mail it as an .xlsx attachment.
    ///
    /// Fails with `NotFound` when the campaign or its survey does not resolve,
    /// and with `Delivery` when the file cannot be written or sent. The
    /// temporary file is gone when this returns, whatever the outcome.
    pub fn export_campaign(&self, campaign_id: &str) -> ExportResult<()> {
        let started = Instant::now();
        info!(campaign_id, "starting campaign export");

        let (survey, document) = self.fetch_and_build(campaign_id)?;

        let artifact = self
            .writer
            .write(&document, &survey)
            .map_err(|e| ExportError::delivery(OP_SENDING_RESULTS, e))?;
        debug!(path = %artifact.path().display(), "sending artifact");

        let sent = self
            .mailer
            .send(artifact.path())
            .map_err(|e| ExportError::delivery(OP_SENDING_EMAIL, e));

        if let Err(err) = artifact.discard() {
            warn!(error = %err, "artifact cleanup failed");
        }

        sent?;
        info!(
            campaign_id,
            survey_id = %survey.id,
            duration_ms = started.elapsed().as_millis() as u64,
            "campaign export sent"
        );
        Ok(())
    }

    /// Build the campaign report and save it to `output` without mailing it
    pub fn render_campaign(&self, campaign_id: &str, output: &Path) -> ExportResult<()> {
        let (_, document) = self.fetch_and_build(campaign_id)?;
        save_document(&document, output)?;
        info!(campaign_id, output = %output.display(), "campaign report rendered");
        Ok(())
    }

    fn fetch_and_build(&self, campaign_id: &str) -> ExportResult<(Survey, WorkbookDocument)> {
        let campaign = self
            .client
            .get_campaign(campaign_id)?
            .ok_or_else(|| ExportError::not_found("Campaign", campaign_id))?;
        debug!(campaign_id, survey_id = %campaign.survey_id, "campaign fetched");

        let survey = self
            .client
            .get_survey(&campaign.survey_id)?
            .ok_or_else(|| ExportError::not_found("Survey", campaign.survey_id.as_str()))?;
        debug!(survey_id = %survey.id, "survey fetched");

        let document = ReportBuilder::build(&survey, &campaign)?;
        debug!(
            rows = campaign.address_statuses.len(),
            "report document built"
        );
        Ok((survey, document))
    }
}
