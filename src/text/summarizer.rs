// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Frequency-based extractive summarization
//!
//! Selects existing sentences; never generates text. Scoring:
//!
//! 1. Split normalized text on `.` and keep sentences longer than the floor
//! 2. Count words (alphabetic, longer than the word floor) over the whole text
//! 3. Score each sentence by the mean frequency of its counted words, with a
//!    bonus for sentences in the leading/trailing window
//! 4. Keep the best `max_sentences` (stable on ties), restore source order

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::config::SummarizerConfig;
use super::document::Document;
use super::errors::TextError;

/// Outcome of a summarization request
///
/// Only `Summary` carries text; the other variants are terminal advisories
/// for input that cannot be summarized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SummaryOutcome {
    Summary { text: String },
    /// Raw input below the minimum length
    InputTooShort { length: usize, minimum: usize },
    /// Input became too short after normalization
    CleanedTooShort { length: usize, minimum: usize },
    /// Scoring produced nothing usable
    Empty,
}

impl SummaryOutcome {
    pub fn is_summary(&self) -> bool {
        matches!(self, Self::Summary { .. })
    }

    /// Summary text, if one was produced
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Summary { text } => Some(text),
            _ => None,
        }
    }

    /// User-facing message for the non-summary outcomes
    pub fn advisory(&self) -> Option<String> {
        match self {
            Self::Summary { .. } => None,
            Self::InputTooShort { minimum, .. } => Some(format!(
                "⚠️ Text is too short to summarize. At least {} characters are required.",
                minimum
            )),
            Self::CleanedTooShort { .. } => Some(
                "⚠️ Text is too short after cleanup. Please provide a longer text.".to_string(),
            ),
            Self::Empty => Some(
                "⚠️ No summary could be produced. Please check the text and try again."
                    .to_string(),
            ),
        }
    }

    /// Summary text or the advisory message, for display
    pub fn display_text(&self) -> String {
        match self {
            Self::Summary { text } => text.clone(),
            other => other.advisory().unwrap_or_default(),
        }
    }

    pub fn into_result(self) -> Result<String, TextError> {
        match self {
            Self::Summary { text } => Ok(text),
            Self::InputTooShort { length, minimum } | Self::CleanedTooShort { length, minimum } => {
                Err(TextError::InputTooShort { length, minimum })
            }
            Self::Empty => Err(TextError::EmptyExtraction(
                "summary below minimum length".to_string(),
            )),
        }
    }
}

/// A sentence of the normalized text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceUnit<'a> {
    /// Position in the raw split, assigned before length filtering
    pub ordinal: usize,
    /// Trimmed sentence text, without the delimiter
    pub text: &'a str,
}

/// Word counts over a whole document
pub type WordFrequencyTable = HashMap<String, usize>;

/// Extractive summarizer; holds only immutable thresholds
#[derive(Debug, Clone, Default)]
pub struct ExtractiveSummarizer {
    config: SummarizerConfig,
}

impl ExtractiveSummarizer {
    pub fn new(config: SummarizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize raw text using the configured sentence count
    pub fn summarize(&self, text: &str) -> SummaryOutcome {
        self.summarize_with(text, self.config.max_sentences)
    }

    /// Summarize raw text keeping at most `max_sentences` sentences
    pub fn summarize_with(&self, text: &str, max_sentences: usize) -> SummaryOutcome {
        self.summarize_document(&Document::new(text), max_sentences)
    }

    pub fn summarize_document(&self, document: &Document, max_sentences: usize) -> SummaryOutcome {
        let raw_len = document.raw_len();
        if raw_len < self.config.min_input_chars {
            debug!("Summary skipped: input {} chars", raw_len);
            return SummaryOutcome::InputTooShort {
                length: raw_len,
                minimum: self.config.min_input_chars,
            };
        }

        let normalized_len = document.normalized_len();
        if normalized_len < self.config.min_normalized_chars {
            debug!("Summary skipped: normalized text {} chars", normalized_len);
            return SummaryOutcome::CleanedTooShort {
                length: normalized_len,
                minimum: self.config.min_normalized_chars,
            };
        }

        let summary = self.select_sentences(document.normalized(), max_sentences);
        if summary.trim().chars().count() < self.config.min_summary_chars {
            return SummaryOutcome::Empty;
        }

        SummaryOutcome::Summary { text: summary }
    }

    /// Core selection over already-normalized text
    ///
    /// Returns the chosen sentences joined with `". "` and a trailing period.
    pub fn select_sentences(&self, normalized: &str, max_sentences: usize) -> String {
        let sentences = self.split_sentences(normalized);

        if sentences.len() <= max_sentences {
            return join_sentences(sentences.iter().map(|s| s.text));
        }

        let frequencies = self.word_frequencies(normalized);
        let last_window_start = sentences.len().saturating_sub(self.config.boundary_window);

        let mut scored: Vec<(SentenceUnit<'_>, f64)> = Vec::with_capacity(sentences.len());
        for (position, sentence) in sentences.iter().enumerate() {
            let mut total = 0usize;
            let mut counted = 0usize;
            for word in sentence.text.split_whitespace() {
                let Some(token) = self.scoring_token(word) else {
                    continue;
                };
                if let Some(count) = frequencies.get(&token) {
                    total += count;
                    counted += 1;
                }
            }
            if counted == 0 {
                continue;
            }

            let mut score = total as f64 / counted as f64;
            if position < self.config.boundary_window || position >= last_window_start {
                score *= self.config.boundary_bonus;
            }
            scored.push((*sentence, score));
        }

        // Vec::sort_by is stable: equal scores keep source order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(max_sentences);
        scored.sort_by_key(|(sentence, _)| sentence.ordinal);

        debug!(
            "Selected {} of {} sentences ({} distinct words)",
            scored.len(),
            sentences.len(),
            frequencies.len()
        );

        join_sentences(scored.iter().map(|(s, _)| s.text))
    }

    /// Split on `.`, assign ordinals, then drop sentences at or below the floor
    pub fn split_sentences<'a>(&self, normalized: &'a str) -> Vec<SentenceUnit<'a>> {
        normalized
            .split('.')
            .enumerate()
            .map(|(ordinal, raw)| SentenceUnit {
                ordinal,
                text: raw.trim(),
            })
            .filter(|s| s.text.chars().count() > self.config.min_sentence_chars)
            .collect()
    }

    /// Count scoring words across the entire text
    pub fn word_frequencies(&self, normalized: &str) -> WordFrequencyTable {
        let mut table = WordFrequencyTable::new();
        for word in normalized.split_whitespace() {
            if let Some(token) = self.scoring_token(word) {
                *table.entry(token).or_insert(0) += 1;
            }
        }
        table
    }

    /// Lower-cased word with surrounding punctuation removed, if it qualifies
    fn scoring_token(&self, word: &str) -> Option<String> {
        let token = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        let long_enough = token.chars().count() > self.config.min_word_chars;
        (long_enough && token.chars().all(char::is_alphabetic)).then_some(token)
    }
}

fn join_sentences<'a>(sentences: impl Iterator<Item = &'a str>) -> String {
    let mut joined = sentences.collect::<Vec<_>>().join(". ");
    joined.push('.');
    joined
}
