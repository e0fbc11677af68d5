//! CLI command handlers. Each command is in its own file.

mod bundle;
mod checksum;
mod preview;
mod reset_usage;
mod usage;

pub use bundle::{run_zip, ZipRequest};
pub use checksum::run_checksum;
pub use preview::run_preview;
pub use reset_usage::run_reset_usage;
pub use usage::run_usage;
