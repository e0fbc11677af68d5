//! In-memory ZIP writer.

use super::error::ArchiveError;
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use zip::write::{FileOptions, ZipWriter};
use zip::{CompressionMethod, DateTime};

/// Compression applied to every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveCompression {
    #[default]
    Deflated,
    Stored,
}

impl ArchiveCompression {
    fn method(self) -> CompressionMethod {
        match self {
            ArchiveCompression::Deflated => CompressionMethod::Deflated,
            ArchiveCompression::Stored => CompressionMethod::Stored,
        }
    }
}

fn aborted(abort: Option<&AtomicBool>) -> bool {
    abort.map_or(false, |a| a.load(Ordering::Relaxed))
}

/// Write `entries` into a fresh ZIP and return its bytes.
///
/// Entries get a fixed timestamp and `0o644` permissions so the output depends
/// only on names, contents and compression.
pub(super) fn write_zip<'a, I>(
    entries: I,
    compression: ArchiveCompression,
    abort: Option<&AtomicBool>,
) -> Result<Vec<u8>, ArchiveError>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    for (name, content) in entries {
        if aborted(abort) {
            tracing::debug!("archive build aborted before {}", name);
            return Err(ArchiveError::Cancelled);
        }

        let options = FileOptions::default()
            .compression_method(compression.method())
            .unix_permissions(0o644)
            .last_modified_time(DateTime::default())
            .large_file(content.len() as u64 >= u64::from(u32::MAX));

        zip.start_file(name, options)
            .map_err(|e| ArchiveError::build(format!("adding entry {name}"), e))?;
        zip.write_all(content)
            .map_err(|e| ArchiveError::build(format!("writing entry {name}"), e))?;
    }

    if aborted(abort) {
        return Err(ArchiveError::Cancelled);
    }

    let cursor = zip
        .finish()
        .map_err(|e| ArchiveError::build("finalizing archive", e))?;
    Ok(cursor.into_inner())
}
