pub mod config;
pub mod logging;

pub mod archive;
pub mod batch;
pub mod casing;
pub mod checksum;
pub mod entitlement;
pub mod name_model;
pub mod usage;

pub use casing::CasingStyle;
pub use name_model::{clean_name, normalize, CleanedName};
