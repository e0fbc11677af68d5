//! Writing a finished archive to disk.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path
/// (e.g. `cleaned-files.zip` → `cleaned-files.zip.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Write `blob` next to `final_path` and rename it into place, so readers
/// never see a half-written archive. The temp file is removed on failure.
pub fn write_archive(final_path: &Path, blob: &[u8]) -> Result<()> {
    let tmp = temp_path(final_path);
    if let Err(e) = std::fs::write(&tmp, blob) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("failed to write {}", tmp.display()));
    }
    if let Err(e) = std::fs::rename(&tmp, final_path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e).with_context(|| {
            format!("failed to rename {} to {}", tmp.display(), final_path.display())
        });
    }
    Ok(())
}
