//! Collision-safe ZIP assembly.
//!
//! Every input file is normalized under one [`CasingStyle`], given a unique
//! entry name (later duplicates get `-1`, `-2`, ... before the extension) and
//! written byte for byte into an in-memory ZIP. The archive is only handed
//! back once it is complete.

mod error;
mod plan;
mod save;
mod writer;

pub use error::ArchiveError;
pub use plan::{plan_entries, plan_names, NameResolver, PlannedEntry};
pub use save::{temp_path, write_archive};
pub use writer::ArchiveCompression;

use crate::batch::RawFile;
use crate::casing::CasingStyle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Default download name for an assembled archive.
pub const DEFAULT_ARCHIVE_NAME: &str = "cleaned-files.zip";

/// Settings for one archive build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveOptions {
    pub style: CasingStyle,
    pub compression: ArchiveCompression,
}

impl ArchiveOptions {
    pub fn new(style: CasingStyle) -> Self {
        Self {
            style,
            compression: ArchiveCompression::default(),
        }
    }

    pub fn with_compression(mut self, compression: ArchiveCompression) -> Self {
        self.compression = compression;
        self
    }
}

/// Build a ZIP of `files` with cleaned, unique names under `style`.
pub fn assemble(files: &[RawFile], style: CasingStyle) -> Result<Vec<u8>, ArchiveError> {
    assemble_with(files, &ArchiveOptions::new(style), None)
}

/// Build a ZIP of `files` with explicit options.
///
/// If `abort` is set while the build is running, the partial archive is
/// discarded and [`ArchiveError::Cancelled`] is returned.
pub fn assemble_with(
    files: &[RawFile],
    options: &ArchiveOptions,
    abort: Option<&AtomicBool>,
) -> Result<Vec<u8>, ArchiveError> {
    let plan = plan_entries(files, options.style);
    let entries = plan
        .iter()
        .zip(files)
        .map(|(entry, file)| (entry.name.as_str(), file.content.as_slice()));

    let blob = writer::write_zip(entries, options.compression, abort)?;
    tracing::info!(
        entries = plan.len(),
        renamed = plan.iter().filter(|e| e.collided).count(),
        bytes = blob.len(),
        style = %options.style,
        "archive assembled"
    );
    Ok(blob)
}

/// Run [`assemble_with`] on the blocking pool as a single awaitable unit.
pub async fn assemble_async(
    files: Vec<RawFile>,
    options: ArchiveOptions,
    abort: Option<Arc<AtomicBool>>,
) -> Result<Vec<u8>, ArchiveError> {
    tokio::task::spawn_blocking(move || assemble_with(&files, &options, abort.as_deref())).await?
}
