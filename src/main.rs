use clap::{Parser, Subcommand};
use std::path::PathBuf;
use survey_export::cli;
use survey_export::error::ExportResult;
use survey_export::mail::{MailPolicy, DEFAULT_RECIPIENT, DEFAULT_SUBJECT};

#[derive(Parser)]
#[command(name = "survey-export")]
#[command(about = "Render survey campaign results to Excel and mail the report.")]
#[command(long_about = "Survey Export - campaign results to Excel, delivered by mail

COMMANDS:
  export  - Build the campaign report and send it through the outbox
  render  - Build the campaign report and save it locally (no mail)
  show    - Print a campaign and its survey

DATA FILE:
  Campaigns and surveys are read from a YAML file:

  surveys:
    - id: S1
      client: Acme
      clientAddress: { streetNumber: \"12\", streetName: Main St, postalCode: \"75000\", city: Paris }
  campaigns:
    - id: C1
      surveyId: S1
      addressStatuses:
        - address: { streetNumber: \"1\", streetName: Rue A, postalCode: \"75001\", city: Paris }
          status: VALID

EXAMPLES:
  survey-export export C1 --data campaigns.yaml --outbox ./outbox
  survey-export render C1 --data campaigns.yaml -o report.xlsx
  survey-export show C1 --data campaigns.yaml")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Build the campaign report and send it through the outbox.

The report is written to a temporary file named
survey-<surveyId>-<yyyy-MM-dd>.xlsx, handed to the mail sender, and
removed again whether or not sending succeeded.")]
    /// Export a campaign report by mail
    Export {
        /// Campaign identifier
        campaign_id: String,

        /// YAML file with surveys and campaigns
        #[arg(short, long, env = "SURVEY_DATA")]
        data: PathBuf,

        /// Outbox directory messages are dropped into
        #[arg(long, env = "SURVEY_OUTBOX")]
        outbox: PathBuf,

        /// Recipient address
        #[arg(long, env = "SURVEY_MAIL_TO", default_value = DEFAULT_RECIPIENT)]
        recipient: String,

        /// Message subject
        #[arg(long, env = "SURVEY_MAIL_SUBJECT", default_value = DEFAULT_SUBJECT)]
        subject: String,

        /// Directory for the temporary report (default: system temp dir)
        #[arg(long, env = "SURVEY_ARTIFACT_DIR")]
        artifact_dir: Option<PathBuf>,

        /// Show verbose export steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render a campaign report to a local .xlsx file
    Render {
        /// Campaign identifier
        campaign_id: String,

        /// YAML file with surveys and campaigns
        #[arg(short, long, env = "SURVEY_DATA")]
        data: PathBuf,

        /// Output Excel file path (.xlsx)
        #[arg(short, long)]
        output: PathBuf,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print a campaign and its survey
    Show {
        /// Campaign identifier
        campaign_id: String,

        /// YAML file with surveys and campaigns
        #[arg(short, long, env = "SURVEY_DATA")]
        data: PathBuf,
    },
}

fn main() -> ExportResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            campaign_id,
            data,
            outbox,
            recipient,
            subject,
            artifact_dir,
            verbose,
        } => cli::export(
            data,
            campaign_id,
            outbox,
            MailPolicy { recipient, subject },
            artifact_dir,
            verbose,
        ),

        Commands::Render {
            campaign_id,
            data,
            output,
            verbose,
        } => cli::render(data, campaign_id, output, verbose),

        Commands::Show { campaign_id, data } => cli::show(data, campaign_id),
    }
}
