//! Entry naming and collision resolution.

use crate::batch::RawFile;
use crate::casing::CasingStyle;
use crate::name_model::{clean_name, fit_entry_name, sanitize_extension, CleanedName};
use std::collections::HashSet;

/// The name one input file will carry inside the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    /// Name as supplied by the caller.
    pub original: String,
    /// Output of the normalizer, before any disambiguation.
    pub cleaned: String,
    /// Unique entry name written to the archive.
    pub name: String,
    /// True when `name` carries a `-N` suffix because an earlier file took the
    /// cleaned name.
    pub collided: bool,
}

/// Hands out unique entry names in call order.
///
/// Names are compared ASCII case-insensitively so `Photo.jpg` and `photo.jpg`
/// cannot both land in one archive and clobber each other on extraction.
#[derive(Debug, Default)]
pub struct NameResolver {
    taken: HashSet<String>,
}

impl NameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a unique entry name for `cleaned`. Returns the name and whether
    /// a suffix was needed.
    pub fn resolve(&mut self, cleaned: &CleanedName) -> (String, bool) {
        let extension = sanitize_extension(&cleaned.extension);
        let first = fit_entry_name(&cleaned.base, &extension, None);
        if self.taken.insert(first.to_ascii_lowercase()) {
            return (first, false);
        }

        let mut n = 1usize;
        loop {
            let candidate = fit_entry_name(&cleaned.base, &extension, Some(n));
            if self.taken.insert(candidate.to_ascii_lowercase()) {
                tracing::debug!(name = %first, renamed = %candidate, "entry name collision resolved");
                return (candidate, true);
            }
            n += 1;
        }
    }
}

/// Plan entry names for raw `names` in order.
pub fn plan_names<'a, I>(names: I, style: CasingStyle) -> Vec<PlannedEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut resolver = NameResolver::new();
    names
        .into_iter()
        .map(|original| {
            let cleaned = clean_name(original, style);
            let (name, collided) = resolver.resolve(&cleaned);
            PlannedEntry {
                original: original.to_string(),
                cleaned: cleaned.to_string(),
                name,
                collided,
            }
        })
        .collect()
}

/// Plan entry names for `files` in order.
pub fn plan_entries(files: &[RawFile], style: CasingStyle) -> Vec<PlannedEntry> {
    plan_names(files.iter().map(|f| f.name.as_str()), style)
}
