// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Error types for text analysis
//!
//! Most analysis failures are expected on noisy input and are returned as
//! advisory values (`SummaryOutcome`, empty keyword lists). These variants
//! exist for callers that prefer `?` propagation over branching.

use thiserror::Error;

use crate::keywords::KeywordAlgorithm;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextError {
    /// Input is below the minimum length for the requested operation
    #[error("Text too short: {length} characters, at least {minimum} required")]
    InputTooShort { length: usize, minimum: usize },

    /// The algorithm ran but produced a degenerate result
    #[error("Extraction produced no usable result: {0}")]
    EmptyExtraction(String),

    /// The requested keyword strategy is not available in this build/config
    #[error("Keyword extraction method unavailable: {0}")]
    ExtractionUnavailable(KeywordAlgorithm),
}

impl TextError {
    /// Whether the user can fix this by supplying different input
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::InputTooShort { .. } | Self::EmptyExtraction(_))
    }
}
