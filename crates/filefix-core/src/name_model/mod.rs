//! Filename normalization.
//!
//! Turns an arbitrary user-supplied filename into a web-safe name under a
//! [`CasingStyle`]: the base is reduced to ASCII word tokens and re-cased, the
//! extension (after the last `.`) is kept but lowercased.

mod sanitize;
mod split;
mod tokenize;

pub use sanitize::{fit_entry_name, sanitize_extension, DEFAULT_BASE, NAME_MAX};
pub use split::split_extension;
pub use tokenize::tokenize;

use crate::casing::CasingStyle;
use std::fmt;

/// A normalized filename split into its base and lowercased extension.
///
/// Either part may be empty: a name made only of punctuation keeps an empty
/// base, and a name without a `.` has no extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CleanedName {
    pub base: String,
    pub extension: String,
}

impl CleanedName {
    /// True when no word characters survived in the base.
    pub fn base_is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

impl fmt::Display for CleanedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.extension.is_empty() {
            f.write_str(&self.base)
        } else {
            write!(f, "{}.{}", self.base, self.extension)
        }
    }
}

/// Normalizes `raw_name` into its base and extension parts.
///
/// Total over all strings; never panics. Surrounding whitespace is ignored.
pub fn clean_name(raw_name: &str, style: CasingStyle) -> CleanedName {
    let (base, extension) = split_extension(raw_name.trim());
    let tokens = tokenize(base);
    CleanedName {
        base: style.apply(&tokens),
        extension: extension.to_lowercase(),
    }
}

/// Normalizes `raw_name` and renders it as a filename.
///
/// # Examples
///
/// - `normalize("My File.JPG", CasingStyle::Kebab)` → `"my-file.jpg"`
/// - `normalize("My File.JPG", CasingStyle::Camel)` → `"myFile.jpg"`
/// - `normalize("a...b.txt", CasingStyle::Kebab)` → `"a-b.txt"`
pub fn normalize(raw_name: &str, style: CasingStyle) -> String {
    clean_name(raw_name, style).to_string()
}
