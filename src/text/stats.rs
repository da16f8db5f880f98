// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Summary statistics and word-overlap comparison

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Characters per page used for page-count estimates
pub const CHARS_PER_PAGE: usize = 2000;

/// Maximum common words reported by `compare_texts`
pub const MAX_COMMON_WORDS: usize = 20;

/// Size statistics for an original text and its summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    pub original_length: usize,
    pub summary_length: usize,
    /// Summary length as a percentage of the original, two decimals
    pub compression_ratio: f64,
    pub word_count: usize,
    pub summary_word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_pages: Option<usize>,
}

impl TextStatistics {
    pub fn compute(original: &str, summary: &str) -> Self {
        let original_length = original.chars().count();
        let summary_length = summary.chars().count();
        let compression_ratio = if original_length == 0 {
            0.0
        } else {
            round2(summary_length as f64 / original_length as f64 * 100.0)
        };

        Self {
            original_length,
            summary_length,
            compression_ratio,
            word_count: original.split_whitespace().count(),
            summary_word_count: summary.split_whitespace().count(),
            estimated_pages: None,
        }
    }

    /// Attach a page estimate (about 2000 characters per page, halves to even)
    pub fn with_page_estimate(mut self) -> Self {
        let pages = (self.original_length as f64 / CHARS_PER_PAGE as f64).round_ties_even() as usize;
        self.estimated_pages = Some(pages);
        self
    }
}

/// Word-set overlap between two texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextComparison {
    pub word_count_1: usize,
    pub word_count_2: usize,
    pub common_word_count: usize,
    /// Jaccard similarity of the lower-cased word sets, as a percentage
    pub similarity_ratio: f64,
    pub difference_ratio: f64,
    /// Up to 20 shared words, alphabetically
    pub common_words: Vec<String>,
}

/// Compare two texts by their lower-cased whitespace-separated word sets
pub fn compare_texts(first: &str, second: &str) -> TextComparison {
    let words_1: BTreeSet<String> = first.split_whitespace().map(str::to_lowercase).collect();
    let words_2: BTreeSet<String> = second.split_whitespace().map(str::to_lowercase).collect();

    let common: Vec<String> = words_1.intersection(&words_2).cloned().collect();
    let union_len = words_1.union(&words_2).count();
    let similarity = if union_len == 0 {
        0.0
    } else {
        common.len() as f64 / union_len as f64 * 100.0
    };

    TextComparison {
        word_count_1: first.split_whitespace().count(),
        word_count_2: second.split_whitespace().count(),
        common_word_count: common.len(),
        similarity_ratio: round2(similarity),
        difference_ratio: round2(100.0 - similarity),
        common_words: common.into_iter().take(MAX_COMMON_WORDS).collect(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
