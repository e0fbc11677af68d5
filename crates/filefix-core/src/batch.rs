//! Input files and batch selection.
//!
//! A [`FileBatch`] is what a caller accumulates before asking for an archive:
//! re-adding a file with the same name and size is ignored, and the batch
//! never grows past its configured cap.

use anyhow::{Context, Result};
use std::path::Path;

/// Default maximum number of files in one batch.
pub const DEFAULT_MAX_FILES: usize = 10;

/// One user-supplied file: its raw name and exact bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl RawFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read a file from disk, keeping only its final path component as the name.
    pub fn read(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("no file name in {}", path.display()))?;
        let content = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
        Ok(Self { name, content })
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    /// Adding the files would exceed the batch cap; nothing was added.
    #[error("maximum {max} files allowed; {incoming} new files would exceed the limit")]
    TooManyFiles { max: usize, incoming: usize },
    /// Every offered file was already in the batch.
    #[error("all selected files are already in the batch")]
    AllDuplicates,
}

/// Ordered set of files awaiting normalization and archiving.
#[derive(Debug, Clone)]
pub struct FileBatch {
    files: Vec<RawFile>,
    max_files: usize,
}

impl Default for FileBatch {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILES)
    }
}

impl FileBatch {
    pub fn new(max_files: usize) -> Self {
        Self {
            files: Vec::new(),
            max_files: max_files.max(1),
        }
    }

    fn contains(&self, file: &RawFile) -> bool {
        self.files
            .iter()
            .any(|f| f.name == file.name && f.size() == file.size())
    }

    /// Add `incoming` in order, skipping any whose name and size match a file
    /// already present (or earlier in `incoming`). Returns how many were added.
    ///
    /// All-or-nothing: if the new files would push the batch past its cap the
    /// batch is left unchanged.
    pub fn add(&mut self, incoming: Vec<RawFile>) -> Result<usize, BatchError> {
        let mut fresh: Vec<RawFile> = Vec::with_capacity(incoming.len());
        for file in incoming {
            let seen = self.contains(&file)
                || fresh
                    .iter()
                    .any(|f| f.name == file.name && f.size() == file.size());
            if seen {
                tracing::debug!(name = %file.name, "skipping duplicate file");
            } else {
                fresh.push(file);
            }
        }

        if fresh.is_empty() {
            return Err(BatchError::AllDuplicates);
        }
        if self.files.len() + fresh.len() > self.max_files {
            return Err(BatchError::TooManyFiles {
                max: self.max_files,
                incoming: fresh.len(),
            });
        }

        let added = fresh.len();
        self.files.extend(fresh);
        Ok(added)
    }

    /// Remove the file at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<RawFile> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    pub fn files(&self) -> &[RawFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn max_files(&self) -> usize {
        self.max_files
    }

    pub fn into_files(self) -> Vec<RawFile> {
        self.files
    }
}
