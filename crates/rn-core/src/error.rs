//! Configuration error type.
//!
//! `RnError` is returned by [`PipelineConfig::validate`](crate::PipelineConfig::validate).
//! Graph and export failures have their own enums in `rn-graph` and
//! `rn-export`.

use thiserror::Error;

/// A rejected pipeline configuration.
#[derive(Debug, Error)]
pub enum RnError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rn-core`.
pub type RnResult<T> = Result<T, RnError>;
