//! Casing styles applied to the word tokens of a filename base.
//!
//! Each style is a row in a static rule table (separator plus how the first
//! and the remaining tokens are cased) so every consumer dispatches the same
//! way instead of re-matching on the enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output casing convention for cleaned filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasingStyle {
    #[default]
    Lowercase,
    Kebab,
    Camel,
    Pascal,
}

/// How a single token is cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenCase {
    Lower,
    Capitalized,
}

#[derive(Debug, Clone, Copy)]
struct StyleRule {
    separator: &'static str,
    first: TokenCase,
    rest: TokenCase,
}

const LOWERCASE: StyleRule = StyleRule {
    separator: "",
    first: TokenCase::Lower,
    rest: TokenCase::Lower,
};

const KEBAB: StyleRule = StyleRule {
    separator: "-",
    first: TokenCase::Lower,
    rest: TokenCase::Lower,
};

const CAMEL: StyleRule = StyleRule {
    separator: "",
    first: TokenCase::Lower,
    rest: TokenCase::Capitalized,
};

const PASCAL: StyleRule = StyleRule {
    separator: "",
    first: TokenCase::Capitalized,
    rest: TokenCase::Capitalized,
};

impl CasingStyle {
    pub const ALL: [CasingStyle; 4] = [
        CasingStyle::Lowercase,
        CasingStyle::Kebab,
        CasingStyle::Camel,
        CasingStyle::Pascal,
    ];

    fn rule(self) -> &'static StyleRule {
        match self {
            CasingStyle::Lowercase => &LOWERCASE,
            CasingStyle::Kebab => &KEBAB,
            CasingStyle::Camel => &CAMEL,
            CasingStyle::Pascal => &PASCAL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CasingStyle::Lowercase => "lowercase",
            CasingStyle::Kebab => "kebab",
            CasingStyle::Camel => "camel",
            CasingStyle::Pascal => "pascal",
        }
    }

    /// Join `tokens` under this style. Tokens are expected to be non-empty
    /// ASCII words; an empty slice yields an empty string.
    pub fn apply<S: AsRef<str>>(self, tokens: &[S]) -> String {
        let rule = self.rule();
        let mut out = String::new();
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                out.push_str(rule.separator);
            }
            let case = if i == 0 { rule.first } else { rule.rest };
            push_cased(&mut out, token.as_ref(), case);
        }
        out
    }
}

fn push_cased(out: &mut String, token: &str, case: TokenCase) {
    match case {
        TokenCase::Lower => out.extend(token.chars().flat_map(char::to_lowercase)),
        TokenCase::Capitalized => {
            let mut chars = token.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.extend(chars.flat_map(char::to_lowercase));
            }
        }
    }
}

impl fmt::Display for CasingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown style name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown casing style `{0}` (expected lowercase, kebab, camel or pascal)")]
pub struct UnknownStyle(pub String);

impl FromStr for CasingStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lowercase" | "lower" => Ok(CasingStyle::Lowercase),
            "kebab" | "kebab-case" => Ok(CasingStyle::Kebab),
            "camel" | "camelcase" => Ok(CasingStyle::Camel),
            "pascal" | "pascalcase" => Ok(CasingStyle::Pascal),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}
