//! Archive-safe entry names.
//!
//! A cleaned base only ever holds `[A-Za-z0-9_-]`, but the extension keeps
//! whatever followed the last dot. Before a name goes into an archive, path
//! separators and control characters in the extension are neutralized and the
//! whole name is kept within NAME_MAX.

/// Linux NAME_MAX; longest entry name we emit, in bytes.
pub const NAME_MAX: usize = 255;

/// Base used when a file normalizes to nothing at all.
pub const DEFAULT_BASE: &str = "file";

/// Replaces NUL, `/`, `\` and control characters with `_`, collapsing runs of
/// replacements into one.
pub fn sanitize_extension(extension: &str) -> String {
    let mut out = String::with_capacity(extension.len());
    let mut prev_replaced = false;

    for c in extension.chars() {
        if c == '\0' || c == '/' || c == '\\' || c.is_control() {
            if !prev_replaced {
                out.push('_');
            }
            prev_replaced = true;
        } else {
            out.push(c);
            prev_replaced = false;
        }
    }
    out
}

/// Joins `base`, an optional `-N` disambiguation suffix and `extension` into an
/// entry name of at most [`NAME_MAX`] bytes.
///
/// The base is shortened first so the suffix and extension survive. A name with
/// neither base nor extension falls back to [`DEFAULT_BASE`].
pub fn fit_entry_name(base: &str, extension: &str, suffix: Option<usize>) -> String {
    let base = if base.is_empty() && extension.is_empty() {
        DEFAULT_BASE
    } else {
        base
    };
    let tail = suffix.map(|n| format!("-{n}")).unwrap_or_default();

    if extension.is_empty() {
        let budget = NAME_MAX.saturating_sub(tail.len());
        return format!("{}{}", truncate_at_boundary(base, budget), tail);
    }

    let extension = truncate_at_boundary(extension, NAME_MAX.saturating_sub(tail.len() + 1));
    let budget = NAME_MAX.saturating_sub(tail.len() + 1 + extension.len());
    format!("{}{}.{}", truncate_at_boundary(base, budget), tail, extension)
}

fn truncate_at_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut take = max;
    while take > 0 && !s.is_char_boundary(take) {
        take -= 1;
    }
    &s[..take]
}
