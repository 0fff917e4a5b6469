// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Alchemist workflow plugin.

use thiserror::Error;

/// The error type shared by every collaborator trait and plugin operation.
///
/// Errors raised by the data adapter or the transmutation engine are passed
/// through the plugin untouched, so hosts see exactly what the collaborator
/// produced.
#[derive(Debug, Error)]
pub enum AlchemistError {
    /// Plugin options did not match the expected shape.
    #[error("invalid plugin options: {0}")]
    Validation(String),

    /// The manifest could not be resolved, read, or parsed.
    #[error("failed to load manifest `{location}`: {source}")]
    ManifestLoad {
        location: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The transmutation engine reported a failure.
    #[error("transmutation failed: {message}")]
    Transmutation {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The host could not load its project configuration.
    #[error("failed to load project configuration: {message}")]
    ConfigLoad {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AlchemistError {
    /// Builds a [`AlchemistError::ManifestLoad`] from any error source.
    pub fn manifest_load(
        location: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ManifestLoad {
            location: location.into(),
            source: source.into(),
        }
    }
}
