// Character classification for seed tokens and candidate strings

// ---------------------------------------------------------------------------
// Seed token alphabet
// ---------------------------------------------------------------------------

/// Punctuation kept by sanitization in addition to alphanumerics.
pub const SEED_PUNCTUATION: &[char] = &['_', '-', '@'];

/// Opening delimiter of an upstream "missing data" placeholder such as `<PHONE>`.
pub const PLACEHOLDER_OPEN: char = '<';

/// Closing delimiter of an upstream placeholder.
pub const PLACEHOLDER_CLOSE: char = '>';

/// Returns `true` if `c` may appear in a sanitized seed token.
///
/// Any Unicode alphanumeric is accepted, so names with diacritics
/// ("Jürgen", "Åsa") survive sanitization intact.
pub fn is_seed_char(c: char) -> bool {
    c.is_alphanumeric() || SEED_PUNCTUATION.contains(&c)
}

/// Returns `true` if the whole token is a bracket-delimited placeholder.
///
/// Only fully delimited tokens qualify: `"<NAME>"` is a placeholder,
/// `"<NAME"` and `"a<b>"` are not.
pub fn is_placeholder(token: &str) -> bool {
    token.starts_with(PLACEHOLDER_OPEN) && token.ends_with(PLACEHOLDER_CLOSE)
}

// ---------------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------------

/// Coarse character class used when sizing the alphabet of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Symbol,
    /// Non-ASCII letters and anything else outside the printable ASCII range.
    Other,
}

impl CharClass {
    /// Number of distinct characters an attacker has to consider for this class.
    pub fn pool_size(self) -> u32 {
        match self {
            CharClass::Lower | CharClass::Upper => 26,
            CharClass::Digit => 10,
            CharClass::Symbol => 33,
            CharClass::Other => 100,
        }
    }
}

/// Returns the character class of `c`.
pub fn char_class(c: char) -> CharClass {
    if c.is_ascii_lowercase() {
        CharClass::Lower
    } else if c.is_ascii_uppercase() {
        CharClass::Upper
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else if c.is_ascii_punctuation() || c == ' ' {
        CharClass::Symbol
    } else {
        CharClass::Other
    }
}

/// Returns `true` if `a` and `b` are consecutive in ASCII order, in either direction.
///
/// Used to spot keyboard-walk style runs such as `abc` or `987`.
pub fn is_sequential(a: char, b: char) -> bool {
    if !(a.is_ascii_alphanumeric() && b.is_ascii_alphanumeric()) {
        return false;
    }
    let (a, b) = (a.to_ascii_lowercase() as i32, b.to_ascii_lowercase() as i32);
    (a - b).abs() == 1
}
