use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{ContentError, ContentResult};

const DEFAULT_FILE_NAME: &str = "resume.pdf";

/// Resume document bytes plus the name offered to the browser
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    /// `Content-Disposition` value; attachment when the caller asked to download
    pub fn content_disposition(&self, download: bool) -> String {
        let kind = if download { "attachment" } else { "inline" };
        format!("{}; filename=\"{}\"", kind, self.file_name)
    }
}

#[derive(Debug, Clone)]
pub struct ResumeStore {
    path: PathBuf,
}

impl ResumeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document from disk on every call
    pub async fn load(&self) -> ContentResult<ResumeFile> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            tracing::debug!(path = %self.path.display(), "Resume unavailable: {}", e);
            ContentError::ResumeNotFound
        })?;

        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.contains('"'))
            .unwrap_or(DEFAULT_FILE_NAME)
            .to_string();

        Ok(ResumeFile { file_name, bytes })
    }
}
