// Transform method tag: selects the augmentation recipe applied per token

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Placeholder replaced with the token verbatim in a custom pattern.
pub const PLACEHOLDER_WORD: &str = "[word]";
/// Placeholder replaced with the capitalized token.
pub const PLACEHOLDER_NAME: &str = "[name]";
/// Placeholder replaced with a random integer in `0..=999`.
pub const PLACEHOLDER_NUMBER: &str = "[number]";
/// Placeholder replaced with one random symbol.
pub const PLACEHOLDER_SYMBOL: &str = "[symbol]";

/// Which augmentation recipe is applied to each seed token.
///
/// Serialized in lowercase; `Custom` carries its template:
///
/// ```text
/// "basic"
/// { "custom": "[name][number][symbol]" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMethod {
    /// Case forms crossed with years, common numbers and symbols.
    #[default]
    Basic,
    /// Indexed symbol arrangements and symbol-wrapped years.
    Advanced,
    /// Single-glyph substitution power set crossed with years, symbols and numbers.
    Complex,
    /// Multi-glyph leetspeak expansion crossed with years and numbers.
    #[serde(alias = "l33t")]
    Leet,
    /// Template substitution of `[word]`, `[name]`, `[number]`, `[symbol]`.
    Custom(String),
    /// One of `Basic`, `Advanced`, `Complex`, `Leet`, picked per token.
    Random,
}

impl TransformMethod {
    /// The lowercase name of the method, without any custom pattern.
    pub fn name(&self) -> &'static str {
        match self {
            TransformMethod::Basic => "basic",
            TransformMethod::Advanced => "advanced",
            TransformMethod::Complex => "complex",
            TransformMethod::Leet => "leet",
            TransformMethod::Custom(_) => "custom",
            TransformMethod::Random => "random",
        }
    }

    /// Replace the template of a `Custom` method; other methods are returned unchanged.
    pub fn with_pattern(self, pattern: impl Into<String>) -> Self {
        match self {
            TransformMethod::Custom(_) => TransformMethod::Custom(pattern.into()),
            other => other,
        }
    }

    /// `true` for the methods whose output depends on the run's random source.
    pub fn is_randomized(&self) -> bool {
        matches!(self, TransformMethod::Custom(_) | TransformMethod::Random)
    }
}

impl fmt::Display for TransformMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformMethod {
    type Err = ConfigError;

    /// Parse a method name. `"custom"` yields an empty template; set it with
    /// [`TransformMethod::with_pattern`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(TransformMethod::Basic),
            "advanced" => Ok(TransformMethod::Advanced),
            "complex" => Ok(TransformMethod::Complex),
            "leet" | "l33t" => Ok(TransformMethod::Leet),
            "custom" => Ok(TransformMethod::Custom(String::new())),
            "random" => Ok(TransformMethod::Random),
            _ => Err(ConfigError::UnknownMethod(s.to_string())),
        }
    }
}
