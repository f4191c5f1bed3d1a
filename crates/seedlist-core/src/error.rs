// Error taxonomy shared by the engine and the command-line tools

/// A run configuration that cannot be executed.
///
/// Invalid configurations fail a run before any candidate is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("maximum candidate count must be greater than zero")]
    ZeroMaxCount,
    #[error("minimum length must be greater than zero")]
    ZeroMinLength,
    #[error("unknown transform method: {0} (expected basic, advanced, complex, leet, custom or random)")]
    UnknownMethod(String),
}

/// Failure reported by an external collaborator (strength judge or
/// sequence model).
///
/// The engine never aborts on these; it isolates the failing stream or
/// candidate and surfaces a warning in the run report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorError {
    #[error("strength judge failed: {0}")]
    Judge(String),
    #[error("sequence model failed: {0}")]
    Model(String),
}
