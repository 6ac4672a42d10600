//! Single-file CSV import: selection buffer and submission.
//!
//! The uploader holds at most one [`UploadedFile`]. Selecting replaces it,
//! a successful submit clears it and navigates to the dashboard, a failed
//! submit leaves it in place for a retry.

use std::path::{Path, PathBuf};

use gofin_core::readable_size;
use tracing::{error, info, warn};

use crate::api::{ImportPayload, TransactionsApi};
use crate::error::UploadError;

/// A file the user picked, waiting to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Where the bytes are read from at submit time
    pub file: PathBuf,
    pub name: String,
    pub size: u64,
    pub readable_size: String,
}

impl UploadedFile {
    /// Describe a picked file whose size the picker already knows.
    pub fn new(file: impl Into<PathBuf>, size: u64) -> Self {
        let file = file.into();
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        Self {
            file,
            name,
            size,
            readable_size: readable_size(size),
        }
    }

    /// Stat a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let meta = std::fs::metadata(path)?;
        Ok(Self::new(path, meta.len()))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Where the uploader sends the user after a completed import.
pub trait Navigator {
    fn to_dashboard(&mut self);
}

/// Result of a selection: the file kept and how many were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub kept: Option<UploadedFile>,
    pub discarded: Vec<UploadedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submit pressed with nothing selected; no request was made
    NothingSelected,
    Imported { name: String },
}

pub struct ImportUploader<A, N> {
    api: A,
    navigator: N,
    selected: Option<UploadedFile>,
    last_error: Option<UploadError>,
}

impl<A: TransactionsApi, N: Navigator> ImportUploader<A, N> {
    pub fn new(api: A, navigator: N) -> Self {
        Self {
            api,
            navigator,
            selected: None,
            last_error: None,
        }
    }

    /// Keep the first picked file and drop the rest. Replaces any earlier selection.
    pub fn select(&mut self, files: impl IntoIterator<Item = UploadedFile>) -> Selection {
        let mut files = files.into_iter();
        let kept = files.next();
        let discarded: Vec<UploadedFile> = files.collect();

        if !discarded.is_empty() {
            warn!(
                kept = kept.as_ref().map(|f| f.name.as_str()).unwrap_or_default(),
                discarded = discarded.len(),
                "only one file is imported at a time; extra files dropped"
            );
        }

        self.selected = kept.clone();
        self.last_error = None;
        Selection { kept, discarded }
    }

    pub fn selected(&self) -> Option<&UploadedFile> {
        self.selected.as_ref()
    }

    /// Error from the most recent failed submit, cleared by the next selection or success.
    pub fn last_error(&self) -> Option<&UploadError> {
        self.last_error.as_ref()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Send the selected file to the import endpoint.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, UploadError> {
        let Some(file) = self.selected.clone() else {
            return Ok(SubmitOutcome::NothingSelected);
        };

        match self.send(&file).await {
            Ok(()) => {
                info!(file = %file.name, size = %file.readable_size, "import complete");
                self.selected = None;
                self.last_error = None;
                self.navigator.to_dashboard();
                Ok(SubmitOutcome::Imported { name: file.name })
            }
            Err(e) => {
                error!(error = %e, "import failed");
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    async fn send(&self, file: &UploadedFile) -> Result<(), UploadError> {
        let bytes = tokio::fs::read(&file.file)
            .await
            .map_err(|e| UploadError::Read {
                name: file.name.clone(),
                message: e.to_string(),
            })?;

        let payload = ImportPayload::new(file.name.clone(), bytes);
        self.api
            .import_transactions(payload)
            .await
            .map_err(|source| UploadError::Api {
                name: file.name.clone(),
                source,
            })
    }
}
