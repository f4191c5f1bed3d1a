// Token sanitizer: raw input strings -> seed tokens

use seedlist_core::SeedToken;

/// Sanitize raw seed tokens.
///
/// Fully bracket-delimited tokens (`<PHONE>`, the upstream marker for missing
/// data) are dropped; every other token keeps only alphanumerics and `_`, `-`,
/// `@`. Order is preserved and nothing is deduplicated. Tokens that end up
/// empty are kept; see [`prepare_tokens`].
pub fn sanitize<S: AsRef<str>>(raw: &[S]) -> Vec<SeedToken> {
    raw.iter()
        .filter_map(|token| SeedToken::sanitize(token.as_ref()))
        .collect()
}

/// Sanitize raw tokens and discard the ones left empty.
///
/// This is the token set every generation stream and the size estimator work
/// from. An empty result means there is nothing to generate.
pub fn prepare_tokens<S: AsRef<str>>(raw: &[S]) -> Vec<SeedToken> {
    let mut tokens = sanitize(raw);
    tokens.retain(|token| !token.is_empty());
    tokens
}
