// seedlist-cli: shared utilities for the command-line tools.

pub mod input;
pub mod judge;
pub mod markov;
pub mod output;

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use seedlist_core::{ConfigError, GenerationConfig, TransformMethod};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::input::{SeedClassifier, parse_user_data};

/// Errors surfaced by the command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("bad seed pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("{0}")]
    Usage(String),
}

/// Seed and run options shared by every tool.
#[derive(Debug, Clone, Default, Args)]
pub struct SeedArgs {
    /// Seed tokens (names, dates, words)
    #[arg(value_name = "TOKEN")]
    pub tokens: Vec<String>,

    /// Personal information: a JSON object of category -> values, or comma
    /// or newline separated values
    #[arg(long, value_name = "TEXT")]
    pub user_data: Option<String>,

    /// Transform method: basic, advanced, complex, leet, custom or random
    #[arg(short, long)]
    pub method: Option<String>,

    /// Template for the custom method, e.g. "[name][number][symbol]"
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Maximum number of unique candidates
    #[arg(long = "max", value_name = "N")]
    pub max_count: Option<usize>,

    /// Minimum password length (never below 8)
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Seed for the random source of custom and random runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON run configuration; flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Consult the sequence model
    #[arg(long)]
    pub use_model: bool,

    /// Number of sequence model proposals
    #[arg(long, value_name = "N")]
    pub model_count: Option<usize>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();
}

/// Read a JSON [`GenerationConfig`]; missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<GenerationConfig, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        context: path.display().to_string(),
        source,
    })
}

/// Raw tokens from `--user-data` followed by the positional tokens.
pub fn seed_tokens(args: &SeedArgs) -> Result<Vec<String>, CliError> {
    let mut tokens = Vec::new();
    if let Some(text) = &args.user_data {
        let classifier = SeedClassifier::new()?;
        let data = parse_user_data(text, &classifier)?;
        for category in data.category_names() {
            tracing::debug!(category, values = data.values(category).len(), "user data");
        }
        tokens.extend(data.into_tokens());
    }
    tokens.extend(args.tokens.iter().cloned());
    Ok(tokens)
}

/// Assemble and validate the run configuration.
///
/// The `--config` file is read first and flags override it. Tokens from the
/// command line replace the file's tokens when any are given. `--pattern`
/// without `--method` selects the custom method.
pub fn build_config(args: &SeedArgs) -> Result<GenerationConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GenerationConfig::default(),
    };

    let tokens = seed_tokens(args)?;
    if !tokens.is_empty() {
        config.tokens = tokens;
    }

    let method = args
        .method
        .as_deref()
        .map(str::parse::<TransformMethod>)
        .transpose()?;
    match (method, &args.pattern) {
        (Some(method), Some(pattern)) => {
            if !matches!(method, TransformMethod::Custom(_)) {
                tracing::warn!(%method, "--pattern only applies to the custom method");
            }
            config.method = method.with_pattern(pattern.as_str());
        }
        (Some(method), None) => config.method = method,
        (None, Some(pattern)) => config.method = TransformMethod::Custom(pattern.clone()),
        (None, None) => {}
    }

    if let Some(max_count) = args.max_count {
        config.max_count = max_count;
    }
    if let Some(min_length) = args.min_length {
        config.min_length = min_length;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if args.use_model {
        config.use_model = true;
    }
    if let Some(count) = args.model_count {
        config.model_count = count;
    }

    if config.method == TransformMethod::Custom(String::new()) {
        return Err(CliError::Usage(
            "the custom method needs a template (--pattern)".to_string(),
        ));
    }
    config.validate()?;
    Ok(config)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
