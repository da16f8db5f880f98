// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! YAKE keyword extraction (StatisticalNGram)
//!
//! Scores 1-3 word n-grams by position, frequency, casing and spread across
//! sentences, and drops near-duplicate phrases above the similarity limit.

use std::collections::HashSet;
use yake_rust::{get_n_best, Config, StopWords};

use super::extractor::KeywordStrategy;
use super::types::{Keyword, KeywordAlgorithm};

/// Settings for the YAKE strategy
#[derive(Debug, Clone)]
pub struct YakeParams {
    /// Maximum n-gram size
    pub ngrams: usize,
    /// Near-duplicate suppression threshold (0.0-1.0)
    pub dedup_threshold: f64,
    /// Language code for the stop-word list
    pub language: String,
    pub min_chars: usize,
}

impl Default for YakeParams {
    fn default() -> Self {
        Self {
            ngrams: 3,
            dedup_threshold: 0.7,
            language: "tr".to_string(),
            min_chars: 3,
        }
    }
}

pub struct YakeStrategy {
    params: YakeParams,
    stopwords: StopWords,
}

impl YakeStrategy {
    pub fn new(params: YakeParams) -> Self {
        // Fall back to English, then to no stop words
        let stopwords = StopWords::predefined(&params.language)
            .or_else(|| StopWords::predefined("en"))
            .unwrap_or_else(|| StopWords::custom(HashSet::new()));
        Self { params, stopwords }
    }
}

impl Default for YakeStrategy {
    fn default() -> Self {
        Self::new(YakeParams::default())
    }
}

impl KeywordStrategy for YakeStrategy {
    fn algorithm(&self) -> KeywordAlgorithm {
        KeywordAlgorithm::StatisticalNGram
    }

    fn extract(&self, text: &str, max_keywords: usize) -> Vec<Keyword> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let punctuation: HashSet<char> = [
            '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';',
            '<', '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
        ]
        .into_iter()
        .collect();

        let config = Config {
            ngrams: self.params.ngrams,
            punctuation,
            remove_duplicates: true,
            deduplication_threshold: self.params.dedup_threshold,
            minimum_chars: self.params.min_chars,
            ..Config::default()
        };

        // YAKE scores are lower-is-better; invert so higher means more relevant
        get_n_best(max_keywords, text, &self.stopwords, &config)
            .into_iter()
            .map(|item| Keyword {
                text: item.keyword,
                score: 1.0 / (1.0 + item.score),
                algorithm: KeywordAlgorithm::StatisticalNGram,
            })
            .collect()
    }
}
