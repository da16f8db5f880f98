// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for extractive summarization

use std::env;

/// Thresholds for the frequency-based summarizer
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizerConfig {
    /// Sentences kept in a summary (default: 5)
    pub max_sentences: usize,
    /// Minimum trimmed length of the raw input in characters (default: 100)
    pub min_input_chars: usize,
    /// Minimum length of the normalized text in characters (default: 50)
    pub min_normalized_chars: usize,
    /// Minimum length of a produced summary in characters (default: 20)
    pub min_summary_chars: usize,
    /// A sentence must be longer than this to be scored (default: 20)
    pub min_sentence_chars: usize,
    /// A word must be longer than this to be counted (default: 3)
    pub min_word_chars: usize,
    /// Leading/trailing sentences that receive the position bonus (default: 3)
    pub boundary_window: usize,
    /// Score multiplier for boundary sentences (default: 1.5)
    pub boundary_bonus: f64,
}

impl SummarizerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_sentences: env::var("SUMMARY_MAX_SENTENCES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_sentences),
            min_input_chars: env::var("SUMMARY_MIN_INPUT_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_input_chars),
            min_normalized_chars: env::var("SUMMARY_MIN_NORMALIZED_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_normalized_chars),
            boundary_bonus: env::var("SUMMARY_BOUNDARY_BONUS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.boundary_bonus),
            ..defaults
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_sentences == 0 {
            return Err("max_sentences must be at least 1".to_string());
        }
        if !self.boundary_bonus.is_finite() || self.boundary_bonus <= 0.0 {
            return Err("boundary_bonus must be a positive number".to_string());
        }
        Ok(())
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            max_sentences: 5,
            min_input_chars: 100,
            min_normalized_chars: 50,
            min_summary_chars: 20,
            min_sentence_chars: 20,
            min_word_chars: 3,
            boundary_window: 3,
            boundary_bonus: 1.5,
        }
    }
}
