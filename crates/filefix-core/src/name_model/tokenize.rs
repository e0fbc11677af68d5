//! Word tokenization of a filename base.

/// ASCII word character: `[A-Za-z0-9_]`.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters that end a word. `.` and `-` count so that `a...b` stays two
/// words and kebab output re-tokenizes into the words it was built from.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '.' || c == '-'
}

/// Splits `base` into ASCII word tokens.
///
/// - Word characters are kept, case untouched.
/// - Whitespace, `.` and `-` end the current token.
/// - Anything else (`'`, brackets, non-ASCII letters, emoji, ...) is dropped
///   without splitting the word it sits in, so `don't` is one token.
///
/// Returned tokens are never empty.
pub fn tokenize(base: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in base.chars() {
        if is_word_char(c) {
            current.push(c);
        } else if is_separator(c) && !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
