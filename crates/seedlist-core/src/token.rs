// Seed tokens: the sanitized unit of personal input

use std::fmt;
use std::ops::Deref;

use crate::character::{is_placeholder, is_seed_char};

/// One sanitized piece of personal information (a name, a date, a handle).
///
/// A `SeedToken` never contains characters outside the seed alphabet
/// (alphanumerics plus `_`, `-`, `@`) and is never a bracket-delimited
/// placeholder. The only way to build one is [`SeedToken::sanitize`], so the
/// invariant holds for every value in circulation.
///
/// A token may be empty when every character of the raw input was stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeedToken(String);

impl SeedToken {
    /// Sanitize one raw token.
    ///
    /// Returns `None` for a fully bracket-delimited placeholder such as
    /// `<PHONE>`; otherwise strips every character that is not alphanumeric or
    /// one of `_`, `-`, `@`.
    pub fn sanitize(raw: &str) -> Option<Self> {
        if is_placeholder(raw) {
            return None;
        }
        Some(Self(raw.chars().filter(|&c| is_seed_char(c)).collect()))
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the token in characters.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Consume the token and return its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for SeedToken {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SeedToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_dropped() {
        assert_eq!(SeedToken::sanitize("<SPORTS_TEAM/HOBBY>"), None);
    }

    #[test]
    fn disallowed_characters_are_stripped() {
        let token = SeedToken::sanitize("John Doe!").unwrap();
        assert_eq!(token.as_str(), "JohnDoe");

        let token = SeedToken::sanitize("1990-05-12").unwrap();
        assert_eq!(token.as_str(), "1990-05-12");

        let token = SeedToken::sanitize("j.doe@mail.com").unwrap();
        assert_eq!(token.as_str(), "jdoe@mailcom");
    }

    #[test]
    fn partial_brackets_are_stripped_not_dropped() {
        let token = SeedToken::sanitize("<NAME").unwrap();
        assert_eq!(token.as_str(), "NAME");
    }

    #[test]
    fn fully_stripped_token_is_empty() {
        let token = SeedToken::sanitize("!!!").unwrap();
        assert!(token.is_empty());
        assert_eq!(token.char_len(), 0);
    }

    #[test]
    fn deref_exposes_str_api() {
        let token = SeedToken::sanitize("Kalle").unwrap();
        assert!(token.starts_with('K'));
        assert_eq!(token.to_string(), "Kalle");
        assert_eq!(token.into_string(), "Kalle");
    }
}
