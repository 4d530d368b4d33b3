//! Survey API Server binary
//!
//! HTTP REST API for survey and campaign management and campaign export.

use clap::Parser;
use std::path::PathBuf;
use survey_export::api::{run_api_server, ApiConfig};
use survey_export::mail::{MailPolicy, DEFAULT_RECIPIENT, DEFAULT_SUBJECT};

#[derive(Parser, Debug)]
#[command(name = "survey-server")]
#[command(version)]
#[command(about = "Survey API Server - HTTP REST API for survey campaign exports")]
#[command(long_about = r#"
Survey API Server - HTTP REST API

Endpoints:
  - POST /api/survey/create                          - Create a survey
  - GET  /api/survey/get?id=                         - Get a survey (404 if unknown)
  - POST /api/survey/campaign/create                 - Create a campaign
  - GET  /api/survey/campaign/get?id=                - Get a campaign (404 if unknown)
  - POST /api/survey/campaign/export?campaignId=     - Mail the campaign report

Additional endpoints:
  - GET  /health           - Health check
  - GET  /version          - Server version info
  - GET  /                 - API documentation

Example usage:
  survey-server --data campaigns.yaml --outbox ./outbox
  survey-server --host 0.0.0.0 --port 3000

  curl -X POST "http://localhost:8080/api/survey/campaign/export?campaignId=C1"
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "SURVEY_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "SURVEY_PORT")]
    port: u16,

    /// YAML file to seed surveys and campaigns from
    #[arg(short, long, env = "SURVEY_DATA")]
    data: Option<PathBuf>,

    /// Outbox directory messages are dropped into (default: <tmp>/survey-outbox)
    #[arg(long, env = "SURVEY_OUTBOX")]
    outbox: Option<PathBuf>,

    /// Directory for temporary reports (default: system temp dir)
    #[arg(long, env = "SURVEY_ARTIFACT_DIR")]
    artifact_dir: Option<PathBuf>,

    /// Recipient address
    #[arg(long, env = "SURVEY_MAIL_TO", default_value = DEFAULT_RECIPIENT)]
    recipient: String,

    /// Message subject
    #[arg(long, env = "SURVEY_MAIL_SUBJECT", default_value = DEFAULT_SUBJECT)]
    subject: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let defaults = ApiConfig::default();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        data_file: args.data,
        outbox_dir: args.outbox.unwrap_or(defaults.outbox_dir),
        artifact_dir: args.artifact_dir.unwrap_or(defaults.artifact_dir),
        mail: MailPolicy {
            recipient: args.recipient,
            subject: args.subject,
        },
    };

    run_api_server(config).await
}
