//! Excel serialization for report documents
//!
//! Writes a [`WorkbookDocument`](crate::report::WorkbookDocument) to `.xlsx`
//! and hands back a scoped [`Artifact`] that deletes the file when released.

mod artifact;
mod exporter;

pub use artifact::Artifact;
pub use exporter::{
    artifact_file_name, document_to_buffer, save_document, ArtifactWriter, DATE_FORMAT,
};
