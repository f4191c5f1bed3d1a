//! Shared types for the seedlist candidate generator.
//!
//! This crate holds the vocabulary used by the engine and the command-line
//! tools: sanitized seed tokens, the transform method tag, the validated run
//! configuration and the error taxonomy.
//!
//! # Architecture
//!
//! - [`character`] -- Character classes for seed tokens and strength heuristics
//! - [`case`] -- Case detection and the case transforms used by generation
//! - [`token`] -- [`SeedToken`](token::SeedToken), the sanitized unit of input
//! - [`method`] -- [`TransformMethod`](method::TransformMethod)
//! - [`config`] -- [`GenerationConfig`](config::GenerationConfig) and engine constants
//! - [`error`] -- Configuration and collaborator errors

pub mod case;
pub mod character;
pub mod config;
pub mod error;
pub mod method;
pub mod token;

pub use config::GenerationConfig;
pub use error::{CollaboratorError, ConfigError};
pub use method::TransformMethod;
pub use token::SeedToken;
