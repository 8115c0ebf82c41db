// ABOUTME: Estimator error types for parameter loading and training failures
// ABOUTME: None of these are fatal; callers fall back to the untrained heuristic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised by the volume estimator network
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// Persisted blob was written by a different schema version
    #[error("parameter schema version {found} does not match expected {expected}")]
    SchemaVersion {
        /// Version found in the blob
        found: u32,
        /// Version this build understands
        expected: u32,
    },

    /// Persisted layer shapes do not match the network architecture
    #[error("layer {layer} shape mismatch: {detail}")]
    ShapeMismatch {
        /// Zero-based layer index
        layer: usize,
        /// What differed
        detail: String,
    },

    /// Persisted weights contain NaN or infinity
    #[error("parameters contain non-finite values")]
    NonFiniteParameters,

    /// Training diverged
    #[error("training loss became non-finite at epoch {epoch}")]
    NonFiniteLoss {
        /// Zero-based epoch at which divergence was detected
        epoch: usize,
    },

    /// Training called with no samples
    #[error("training dataset is empty")]
    EmptyDataset,

    /// Blob is not valid JSON for the parameter schema
    #[error("invalid parameter blob: {0}")]
    Serialization(#[from] serde_json::Error),
}
