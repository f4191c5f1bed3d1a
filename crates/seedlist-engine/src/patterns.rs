// Token-level pattern streams: cross-token patterns and token transforms
//
// Both are small, fixed-shape expansions that run over the whole prepared
// token list regardless of the selected method. They occupy their own
// priority slots in the aggregator.

use std::iter;

use seedlist_core::SeedToken;
use seedlist_core::case::{alternating_case, capitalize, reverse};

use crate::pairwise::pairs;
use crate::tables::{PATTERN_NUMBER_COUNT, PATTERN_SUBSTITUTIONS};

/// Minimum token length, in characters, for [`token_transforms`].
pub const TRANSFORM_MIN_CHARS: usize = 3;

/// Number of strings [`token_transforms`] emits per eligible token.
pub const TRANSFORMS_PER_TOKEN: usize = 4;

/// Joins emitted per token pair by [`cross_token_patterns`].
pub const PATTERN_JOINS_PER_PAIR: usize = 3;

/// Case forms and numeric suffixes per token, one replace-all substitution
/// per vowel/`s` present, then plain, `_` and `-` joins of every pair.
pub fn cross_token_patterns(tokens: &[SeedToken]) -> impl Iterator<Item = String> + '_ {
    let per_token = tokens.iter().flat_map(|token| {
        let word = token.as_str();
        let lower = word.to_lowercase();
        let cases = [lower.clone(), word.to_uppercase(), capitalize(word)];
        let numbered = {
            let word = word.to_string();
            (0..PATTERN_NUMBER_COUNT).map(move |i| format!("{word}{i}"))
        };
        let substituted = PATTERN_SUBSTITUTIONS
            .iter()
            .filter(|(from, _)| lower.contains(*from))
            .map(|&(from, to)| lower.replace(from, &to.to_string()))
            .collect::<Vec<_>>();
        cases.into_iter().chain(numbered).chain(substituted)
    });
    let joined = pairs(tokens).flat_map(|(a, b)| [format!("{a}{b}"), format!("{a}_{b}"), format!("{a}-{b}")]);
    per_token.chain(joined)
}

/// Number of strings [`cross_token_patterns`] yields for one token.
pub fn patterns_per_token(token: &str) -> u64 {
    let lower = token.to_lowercase();
    let present = PATTERN_SUBSTITUTIONS
        .iter()
        .filter(|(from, _)| lower.contains(*from))
        .count();
    3 + u64::from(PATTERN_NUMBER_COUNT) + present as u64
}

/// Doubling, mirroring, per-character doubling and alternating case for
/// every token of at least [`TRANSFORM_MIN_CHARS`] characters.
pub fn token_transforms(tokens: &[SeedToken]) -> impl Iterator<Item = String> + '_ {
    tokens
        .iter()
        .filter(|token| token.char_len() >= TRANSFORM_MIN_CHARS)
        .flat_map(|token| {
            let word = token.as_str();
            let doubled_chars: String = word.chars().flat_map(|c| iter::repeat_n(c, 2)).collect();
            [
                word.repeat(2),
                format!("{word}{}", reverse(word)),
                doubled_chars,
                alternating_case(word),
            ]
        })
}
