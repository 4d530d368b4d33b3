//! Scoped handle on a generated spreadsheet file

use crate::error::{ExportError, ExportResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A spreadsheet file on transient storage.
///
/// The file is removed by [`Artifact::discard`], or by `Drop` if the handle is
/// released without being discarded, so it never outlives its owner.
#[derive(Debug)]
pub struct Artifact {
    path: PathBuf,
    discarded: bool,
}

impl Artifact {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            discarded: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the file now, reporting a failure instead of only logging it
    pub fn discard(mut self) -> ExportResult<()> {
        self.discarded = true;
        remove(&self.path)
    }
}

impl Drop for Artifact {
    fn drop(&mut self) {
        if self.discarded {
            return;
        }
        if let Err(err) = remove(&self.path) {
            warn!(error = %err, "artifact cleanup failed");
        }
    }
}

/// Delete `path`; a file that is already gone counts as removed
fn remove(path: &Path) -> ExportResult<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "artifact removed");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ExportError::ArtifactCleanup {
            path: path.to_path_buf(),
            source,
        }),
    }
}
