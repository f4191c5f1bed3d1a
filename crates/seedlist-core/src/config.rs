// Run configuration and engine-wide constants

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::method::TransformMethod;

/// Engine-wide minimum candidate length. Applied before, and independently
/// of, the caller's own minimum.
pub const ENGINE_MIN_LENGTH: usize = 8;

/// Minimum strength score (on the 0-4 scale) a candidate needs to be kept.
pub const STRENGTH_THRESHOLD: u8 = 3;

/// Highest score a strength judge may report.
pub const MAX_STRENGTH_SCORE: u8 = 4;

/// Default cap on the number of unique candidates.
pub const DEFAULT_MAX_COUNT: usize = 100_000;

/// Default number of strings requested from the sequence model.
pub const DEFAULT_MODEL_COUNT: usize = 10;

/// Default maximum length of a sequence-model proposal.
pub const DEFAULT_MODEL_MAX_LENGTH: usize = 16;

/// Everything a single generation run needs.
///
/// Values typically originate from the command line or a JSON file; the
/// engine validates them with [`GenerationConfig::validate`] before a run.
/// Missing JSON fields take their defaults:
///
/// ```text
/// { "tokens": ["John", "1990"], "method": "leet", "max_count": 5000 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Raw seed tokens, sanitized by the engine.
    pub tokens: Vec<String>,
    /// Augmentation recipe applied to every token.
    pub method: TransformMethod,
    /// Upper bound on unique candidates handed to the strength filter.
    pub max_count: usize,
    /// Caller's minimum length. The effective minimum is never below
    /// [`ENGINE_MIN_LENGTH`].
    pub min_length: usize,
    /// Whether the sequence-model collaborator is consulted.
    pub use_model: bool,
    /// Number of proposals requested from the sequence model.
    pub model_count: usize,
    /// Maximum length of a sequence-model proposal.
    pub model_max_length: usize,
    /// Seed for the run-scoped random source. `None` draws from OS entropy,
    /// which makes `Custom` and `Random` runs non-reproducible.
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            tokens: Vec::new(),
            method: TransformMethod::Basic,
            max_count: DEFAULT_MAX_COUNT,
            min_length: ENGINE_MIN_LENGTH,
            use_model: false,
            model_count: DEFAULT_MODEL_COUNT,
            model_max_length: DEFAULT_MODEL_MAX_LENGTH,
            seed: None,
        }
    }
}

impl GenerationConfig {
    /// Create a configuration with default settings for the given raw tokens.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: TransformMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_model(mut self, count: usize, max_length: usize) -> Self {
        self.use_model = true;
        self.model_count = count;
        self.model_max_length = max_length;
        self
    }

    /// Check the invariants a run depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_count == 0 {
            return Err(ConfigError::ZeroMaxCount);
        }
        if self.min_length == 0 {
            return Err(ConfigError::ZeroMinLength);
        }
        Ok(())
    }

    /// The minimum length actually enforced on final output:
    /// `max(ENGINE_MIN_LENGTH, min_length)`.
    pub fn effective_min_length(&self) -> usize {
        self.min_length.max(ENGINE_MIN_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GenerationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_count, DEFAULT_MAX_COUNT);
        assert_eq!(config.method, TransformMethod::Basic);
        assert!(!config.use_model);
    }

    #[test]
    fn zero_max_count_is_rejected() {
        let config = GenerationConfig::new(["john"]).with_max_count(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxCount));
    }

    #[test]
    fn zero_min_length_is_rejected() {
        let config = GenerationConfig::new(["john"]).with_min_length(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMinLength));
    }

    #[test]
    fn effective_min_length_never_below_engine_floor() {
        let config = GenerationConfig::new(["john"]).with_min_length(6);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.effective_min_length(), ENGINE_MIN_LENGTH);

        let config = config.with_min_length(12);
        assert_eq!(config.effective_min_length(), 12);
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config: GenerationConfig = serde_json::from_str(
            r#"{ "tokens": ["John", "1990"], "method": "leet", "max_count": 5000 }"#,
        )
        .unwrap();
        assert_eq!(config.tokens, vec!["John", "1990"]);
        assert_eq!(config.method, TransformMethod::Leet);
        assert_eq!(config.max_count, 5000);
        assert_eq!(config.min_length, ENGINE_MIN_LENGTH);
        assert_eq!(config.model_count, DEFAULT_MODEL_COUNT);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn builder_sets_model_options() {
        let config = GenerationConfig::new(["a"]).with_model(25, 20).with_seed(7);
        assert!(config.use_model);
        assert_eq!(config.model_count, 25);
        assert_eq!(config.model_max_length, 20);
        assert_eq!(config.seed, Some(7));
    }
}
