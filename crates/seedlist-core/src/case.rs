// Case type detection and the case transforms applied to seed tokens

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "john".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "John".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "joHn".
    Complex,
    /// All letters are uppercase: "JOHN".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Non-letter characters (digits, punctuation) are ignored when
/// determining the case pattern, so "John1990" is `FirstUpper`.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if first.is_uppercase() {
        first_uc = true;
        no_letters = false;
    }
    if first.is_lowercase() {
        all_uc = false;
        no_letters = false;
    }

    for c in chars {
        if c.is_uppercase() {
            no_letters = false;
            rest_lc = false;
        }
        if c.is_lowercase() {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Return `word` converted to the given case pattern.
///
/// `NoLetters` and `Complex` leave the word unchanged.
pub fn apply_case(word: &str, case_type: CaseType) -> String {
    match case_type {
        CaseType::NoLetters | CaseType::Complex => word.to_string(),
        CaseType::AllLower => word.to_lowercase(),
        CaseType::AllUpper => word.to_uppercase(),
        CaseType::FirstUpper => capitalize(word),
    }
}

/// Uppercase the first character and lowercase the rest: "jOHN" -> "John".
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
    }
}

/// Title-case a word: every letter that follows a non-letter starts a new
/// word and is uppercased, all other letters are lowercased.
///
/// "john_doe" -> "John_Doe", "1990abc" -> "1990Abc".
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut in_word = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Lowercase the word, then uppercase every character at an odd index:
/// "summer" -> "sUmMeR".
pub fn alternating_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for (i, c) in word.to_lowercase().chars().enumerate() {
        if i % 2 == 1 {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Reverse a word by characters.
pub fn reverse(word: &str) -> String {
    word.chars().rev().collect()
}

/// The first `n` characters of `word` (the whole word if shorter).
pub fn prefix(word: &str, n: usize) -> &str {
    match word.char_indices().nth(n) {
        Some((idx, _)) => &word[..idx],
        None => word,
    }
}
