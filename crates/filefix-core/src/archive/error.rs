//! Archive build failures.

use zip::result::ZipError;

/// Terminal failure of one archive build. No partial archive is ever returned
/// alongside it.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The ZIP writer failed (I/O, allocation, format limits).
    #[error("archive build failed while {stage}: {source}")]
    Build {
        stage: String,
        #[source]
        source: ZipError,
    },
    /// The abort token was set before the build finished.
    #[error("archive build cancelled")]
    Cancelled,
    /// The blocking build task panicked or was dropped by the runtime.
    #[error("archive build task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ArchiveError {
    pub(super) fn build(stage: impl Into<String>, source: impl Into<ZipError>) -> Self {
        ArchiveError::Build {
            stage: stage.into(),
            source: source.into(),
        }
    }
}
