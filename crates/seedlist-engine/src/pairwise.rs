// Pairwise combiner: fixed join operators over every unordered token pair

use seedlist_core::SeedToken;
use seedlist_core::case::{capitalize, prefix};

/// Number of strings emitted per token pair.
pub const JOINS_PER_PAIR: usize = 7;

/// Every unordered pair `(tokens[i], tokens[j])` with `i < j`, in row order.
pub fn pairs(tokens: &[SeedToken]) -> impl Iterator<Item = (&SeedToken, &SeedToken)> {
    tokens
        .iter()
        .enumerate()
        .flat_map(move |(i, a)| tokens[i + 1..].iter().map(move |b| (a, b)))
}

/// Number of unordered pairs among `n` tokens.
pub fn pair_count(n: usize) -> u64 {
    let n = n as u64;
    n.saturating_mul(n.saturating_sub(1)) / 2
}

/// The seven joins of one pair, in emission order.
///
/// Prefixes are taken by characters, so multi-byte input is never split.
pub fn join_pair(a: &str, b: &str) -> [String; JOINS_PER_PAIR] {
    [
        format!("{a}{b}"),
        format!("{a}_{b}"),
        format!("{a}-{b}"),
        format!("{}{b}", capitalize(a)),
        format!("{}{}", prefix(a, 3), prefix(b, 3)),
        format!("{a}{}", prefix(b, 3)),
        format!("{}{b}", prefix(a, 1)),
    ]
}

/// Joins for every unordered pair of tokens. Quadratic in the token count;
/// the aggregator stops pulling once it is full.
pub fn combine_pairs(tokens: &[SeedToken]) -> impl Iterator<Item = String> + '_ {
    pairs(tokens).flat_map(|(a, b)| join_pair(a, b))
}
