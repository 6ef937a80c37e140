//! Cross-cutting error types for Ward.
//!
//! Domain-specific errors (`ConfigError`, `RecordsError`, `AuditError`) live
//! in their respective crates. `ward-cli` converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Ward crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
