use crate::client::{DataClient, InMemoryDataClient};
use crate::error::{ExportError, ExportResult};
use crate::excel::ArtifactWriter;
use crate::mail::{MailPolicy, OutboxMailSender};
use crate::pipeline::ExportPipeline;
use crate::report::client_address_line;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn load_client(data: &Path, verbose: bool) -> ExportResult<InMemoryDataClient> {
    if verbose {
        println!("{}", "📖 Loading campaign data...".cyan());
    }
    let client = InMemoryDataClient::from_yaml_file(data)?;
    if verbose {
        println!(
            "   Found {} surveys, {} campaigns\n",
            client.survey_count(),
            client.campaign_count()
        );
    }
    Ok(client)
}

/// Execute the export command
pub fn export(
    data: PathBuf,
    campaign_id: String,
    outbox: PathBuf,
    policy: MailPolicy,
    artifact_dir: Option<PathBuf>,
    verbose: bool,
) -> ExportResult<()> {
    println!("{}", "📨 Survey Export - Campaign export".bold().green());
    println!("   Data:     {}", data.display());
    println!("   Campaign: {}", campaign_id.bright_blue().bold());
    println!("   Outbox:   {}\n", outbox.display());

    let client = load_client(&data, verbose)?;
    let mailer = OutboxMailSender::new(&outbox, policy);
    let writer = artifact_dir.map(ArtifactWriter::new).unwrap_or_default();

    if verbose {
        println!("{}", "📊 Building report and sending...".cyan());
    }

    let pipeline = ExportPipeline::with_writer(Arc::new(client), Arc::new(mailer.clone()), writer);
    pipeline.export_campaign(&campaign_id)?;

    println!("{}", "✅ Export Complete!".bold().green());
    println!(
        "   Sent to {} ({})\n",
        mailer.policy().recipient.bright_blue(),
        mailer.policy().subject
    );

    Ok(())
}

/// Execute the render command
pub fn render(data: PathBuf, campaign_id: String, output: PathBuf, verbose: bool) -> ExportResult<()> {
    println!("{}", "📊 Survey Export - Render report".bold().green());
    println!("   Data:     {}", data.display());
    println!("   Campaign: {}", campaign_id.bright_blue().bold());
    println!("   Output:   {}\n", output.display());

    let client = load_client(&data, verbose)?;
    let pipeline = ExportPipeline::new(
        Arc::new(client),
        // Rendering never mails; the sender is only there to complete the pipeline
        Arc::new(OutboxMailSender::new(
            std::env::temp_dir().join("survey-outbox"),
            MailPolicy::default(),
        )),
    );
    pipeline.render_campaign(&campaign_id, &output)?;

    println!("{}", "✅ Report written!".bold().green());
    println!("   Excel file: {}\n", output.display());

    Ok(())
}

/// Execute the show command - print a campaign and its survey
pub fn show(data: PathBuf, campaign_id: String) -> ExportResult<()> {
    let client = load_client(&data, false)?;

    let campaign = client
        .get_campaign(&campaign_id)?
        .ok_or_else(|| ExportError::not_found("Campaign", campaign_id.as_str()))?;
    let survey = client
        .get_survey(&campaign.survey_id)?
        .ok_or_else(|| ExportError::not_found("Survey", campaign.survey_id.as_str()))?;

    println!("{}", format!("📋 Campaign {}", campaign.id).bold().green());
    println!("   Survey:  {}", survey.id.bright_blue());
    println!("   Client:  {}", survey.client);
    println!("   Address: {}", client_address_line(&survey.client_address));
    println!(
        "   Number of surveys: {}\n",
        campaign.address_statuses.len().to_string().bold()
    );

    for entry in &campaign.address_statuses {
        let address = &entry.address;
        println!(
            "   {:<8} {:<24} {:<10} {:<16} {}",
            address.street_number,
            address.street_name,
            address.postal_code,
            address.city,
            entry.status.as_str().cyan()
        );
    }
    println!();

    Ok(())
}
