//! Deterministic password candidate synthesis.
//!
//! Expands a small set of personal seed tokens into a prioritized, bounded
//! list of password candidates through case folding, leetspeak substitution,
//! suffix augmentation and pairwise combination, then keeps the candidates an
//! external strength judge scores as strong.
//!
//! # Architecture
//!
//! - [`tables`] -- Fixed substitution tables and augmentation sets
//! - [`sanitizer`] -- Raw input to [`SeedToken`](seedlist_core::SeedToken)s
//! - [`substitution`] -- Leetspeak expansion and single-glyph power sets
//! - [`augmentation`] -- Per-method cross-product recipes and suffix pass
//! - [`patterns`] -- Cross-token patterns and token transforms
//! - [`pairwise`] -- Joins over every unordered token pair
//! - [`aggregator`] -- Priority merge, length floor, dedup, cap
//! - [`filter`] -- Strength filter
//! - [`estimator`] -- Closed-form output size bound
//! - [`collaborator`] -- Strength judge and sequence model traits
//! - [`rng`] -- Run-scoped random source
//! - [`generator`] -- [`Generator`] handle tying the stages together
//!
//! Every stream is lazy. The aggregator stops pulling as soon as it holds
//! `max_count` unique candidates, so a large method expansion costs only
//! what is actually kept.

pub mod aggregator;
pub mod augmentation;
pub mod collaborator;
pub mod estimator;
pub mod filter;
pub mod generator;
pub mod pairwise;
pub mod patterns;
pub mod rng;
pub mod sanitizer;
pub mod substitution;
pub mod tables;

pub use aggregator::{Aggregate, AggregateReport, StreamSource, aggregate};
pub use collaborator::{SequenceModel, StrengthJudge};
pub use estimator::{SizeEstimate, estimate, estimate_size};
pub use filter::{FilterOutcome, filter};
pub use generator::{GenerationReport, Generator, RunWarning};
pub use sanitizer::{prepare_tokens, sanitize};
