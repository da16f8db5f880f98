// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-request document holding raw and normalized text

use super::normalizer::normalize;

/// Raw input text plus its normalized form
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    raw: String,
    normalized: String,
}

impl Document {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Trimmed raw length in characters
    pub fn raw_len(&self) -> usize {
        self.raw.trim().chars().count()
    }

    /// Normalized length in characters
    pub fn normalized_len(&self) -> usize {
        self.normalized.chars().count()
    }
}
