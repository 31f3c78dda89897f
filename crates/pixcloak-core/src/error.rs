// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for PixCloak.

use thiserror::Error;

/// Top-level error type for all PixCloak operations.
#[derive(Debug, Error)]
pub enum CloakError {
    // -- Pipeline errors --
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("buffer shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    // -- Image adapter errors --
    #[error("image processing failed: {0}")]
    Image(String),

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("integrity check failed: expected {expected}, got {actual}")]
    IntegrityMismatch { expected: String, actual: String },

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CloakError>;
