//! Base/extension split.

/// Splits `name` at its last `.` into `(base, extension)`.
///
/// Without any `.` the whole name is the base and the extension is empty.
pub fn split_extension(name: &str) -> (&str, &str) {
    name.rsplit_once('.').unwrap_or((name, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_dot_wins() {
        assert_eq!(split_extension("a...b.txt"), ("a...b", "txt"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", "gz"));
    }

    #[test]
    fn no_dot() {
        assert_eq!(split_extension("Makefile"), ("Makefile", ""));
        assert_eq!(split_extension(""), ("", ""));
    }

    #[test]
    fn edge_dots() {
        assert_eq!(split_extension(".env"), ("", "env"));
        assert_eq!(split_extension("name."), ("name", ""));
        assert_eq!(split_extension("."), ("", ""));
    }
}
