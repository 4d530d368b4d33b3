use std::path::PathBuf;
use thiserror::Error;

pub type ExportResult<T> = Result<T, ExportError>;

/// Boxed cause carried by a delivery failure.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Report build error: {0}")]
    Build(String),

    #[error("Error while {operation}: {source}")]
    Delivery {
        operation: &'static str,
        #[source]
        source: Cause,
    },

    #[error("Failed to remove artifact {}: {source}", path.display())]
    ArtifactCleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Data client error: {0}")]
    Client(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Excel error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl ExportError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        ExportError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Wrap a lower-level failure, naming the operation that was under way.
    pub fn delivery(operation: &'static str, cause: impl Into<Cause>) -> Self {
        ExportError::Delivery {
            operation,
            source: cause.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ExportError::NotFound { .. })
    }
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Envelope serialization error: {0}")]
    Envelope(#[from] serde_json::Error),

    #[error("Message rejected: {0}")]
    Rejected(String),
}
