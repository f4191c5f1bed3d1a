// Size estimator: closed-form upper bound on the candidate count
//
// The bound is computed from table sizes and per-token substitution counts
// alone, so it costs O(total token length) no matter how large the output
// would be. It ignores dedup and the length floor; the real pre-filter list
// is never longer than `bounded()`.

use seedlist_core::{GenerationConfig, SeedToken, TransformMethod};
use serde::Serialize;

use crate::aggregator::StreamSource;
use crate::pairwise::{JOINS_PER_PAIR, pair_count};
use crate::patterns::{
    PATTERN_JOINS_PER_PAIR, TRANSFORM_MIN_CHARS, TRANSFORMS_PER_TOKEN, patterns_per_token,
};
use crate::sanitizer::prepare_tokens;
use crate::substitution::{leet_variant_count, powerset_variant_count};
use crate::tables::{ADVANCED_INDEX_COUNT, AUGMENTATION};

/// Upper bound on generated candidates, broken down by stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SizeEstimate {
    /// Number of tokens left after sanitization.
    pub tokens: usize,
    pub method_transforms: u64,
    pub cross_token_patterns: u64,
    pub external_model: u64,
    pub pairwise: u64,
    pub token_transforms: u64,
    /// The configured cap.
    pub max_count: usize,
}

impl SizeEstimate {
    /// Saturating sum over all streams.
    pub fn raw(&self) -> u64 {
        StreamSource::ALL
            .iter()
            .map(|&source| self.stream(source))
            .fold(0u64, u64::saturating_add)
    }

    /// The raw bound clipped to the configured cap.
    pub fn bounded(&self) -> u64 {
        self.raw().min(self.max_count as u64)
    }

    pub fn stream(&self, source: StreamSource) -> u64 {
        match source {
            StreamSource::MethodTransforms => self.method_transforms,
            StreamSource::CrossTokenPatterns => self.cross_token_patterns,
            StreamSource::ExternalModel => self.external_model,
            StreamSource::Pairwise => self.pairwise,
            StreamSource::TokenTransforms => self.token_transforms,
        }
    }
}

/// Multiplier of the contextual-suffix pass: each base candidate plus one
/// copy per suffix.
fn context_factor() -> u64 {
    1 + AUGMENTATION.contextual_suffixes.len() as u64
}

fn years() -> u64 {
    AUGMENTATION.year_count()
}

fn numbers() -> u64 {
    AUGMENTATION.common_numbers.len() as u64
}

fn specials() -> u64 {
    AUGMENTATION.special_chars.len() as u64
}

/// Upper bound for `Basic` on one token.
pub fn basic_bound() -> u64 {
    6 * (1 + years() + numbers() + specials()) * context_factor()
}

/// Upper bound for `Advanced` on one token.
pub fn advanced_bound() -> u64 {
    let indexed = 3 * specials() * u64::from(ADVANCED_INDEX_COUNT);
    let wrapping = AUGMENTATION.year_wrapping_chars().len() as u64;
    let dated = years() * (1 + 2 * wrapping);
    2 * (indexed + dated) * context_factor()
}

/// Upper bound for `Complex` on `token`.
pub fn complex_bound(token: &str) -> u64 {
    let per_variant = 1 + years() + specials() * (1 + 2 * numbers());
    powerset_variant_count(token)
        .saturating_mul(per_variant)
        .saturating_mul(context_factor())
}

/// Upper bound for `Leet` on `token`.
pub fn leet_bound(token: &str) -> u64 {
    leet_variant_count(token)
        .saturating_mul(1 + years() + numbers())
        .saturating_mul(context_factor())
}

/// Upper bound for `method` on `token`.
pub fn method_bound(token: &str, method: &TransformMethod) -> u64 {
    match method {
        TransformMethod::Basic => basic_bound(),
        TransformMethod::Advanced => advanced_bound(),
        TransformMethod::Complex => complex_bound(token),
        TransformMethod::Leet => leet_bound(token),
        TransformMethod::Custom(pattern) => u64::from(!pattern.is_empty()),
        TransformMethod::Random => basic_bound()
            .max(advanced_bound())
            .max(complex_bound(token))
            .max(leet_bound(token)),
    }
}

/// Per-stream bound for an already prepared token list.
pub fn estimate_tokens(tokens: &[SeedToken], config: &GenerationConfig) -> SizeEstimate {
    let mut estimate = SizeEstimate {
        tokens: tokens.len(),
        max_count: config.max_count,
        ..SizeEstimate::default()
    };
    if tokens.is_empty() {
        return estimate;
    }

    let pairs = pair_count(tokens.len());
    estimate.method_transforms = tokens
        .iter()
        .map(|token| method_bound(token, &config.method))
        .fold(0u64, u64::saturating_add);
    estimate.cross_token_patterns = tokens
        .iter()
        .map(|token| patterns_per_token(token))
        .fold(0u64, u64::saturating_add)
        .saturating_add(pairs.saturating_mul(PATTERN_JOINS_PER_PAIR as u64));
    if config.use_model {
        estimate.external_model = config.model_count as u64;
    }
    estimate.pairwise = pairs.saturating_mul(JOINS_PER_PAIR as u64);
    estimate.token_transforms = tokens
        .iter()
        .filter(|token| token.char_len() >= TRANSFORM_MIN_CHARS)
        .count() as u64
        * TRANSFORMS_PER_TOKEN as u64;
    estimate
}

/// Per-stream bound for `config`. Sanitizes the configured tokens first.
pub fn estimate(config: &GenerationConfig) -> SizeEstimate {
    let tokens = prepare_tokens(&config.tokens);
    estimate_tokens(&tokens, config)
}

/// Raw upper bound on the number of candidates `config` generates before
/// dedup, floor and cap. `0` when no token survives sanitization.
pub fn estimate_size(config: &GenerationConfig) -> u64 {
    estimate(config).raw()
}
