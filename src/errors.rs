use mise_config::ConfigError;
use mise_core::{CoreError, ToolKind, ValidationError};
use thiserror::Error;

/// Failures surfaced by [`crate::AppContext`].
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Preferences error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("{0} is not open")]
    ToolNotOpen(ToolKind),
}
