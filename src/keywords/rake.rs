// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! RAKE keyword extraction (GraphRanking)
//!
//! Scoring is done by the `rake` crate over a Turkish stop-word list from
//! `stop-words`. Phrases longer than `MAX_PHRASE_WORDS` are cut into
//! consecutive chunks that keep the phrase score.

use rake::{Rake, StopWords};
use std::collections::HashSet;

use super::extractor::KeywordStrategy;
use super::types::{Keyword, KeywordAlgorithm};

/// Longest phrase emitted
pub const MAX_PHRASE_WORDS: usize = 3;

pub struct RakeStrategy {
    rake: Rake,
}

impl RakeStrategy {
    /// RAKE with the Turkish stop-word list
    pub fn turkish() -> Self {
        Self::with_stopwords(stop_words::get(stop_words::LANGUAGE::Turkish))
    }

    pub fn with_stopwords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stopwords = StopWords::new();
        for word in words {
            stopwords.insert(word.as_ref().to_lowercase());
        }
        Self {
            rake: Rake::new(stopwords),
        }
    }
}

impl KeywordStrategy for RakeStrategy {
    fn algorithm(&self) -> KeywordAlgorithm {
        KeywordAlgorithm::GraphRanking
    }

    fn extract(&self, text: &str, max_keywords: usize) -> Vec<Keyword> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let lowered = text.to_lowercase();

        let mut seen = HashSet::new();
        let mut ranked: Vec<(usize, Keyword)> = Vec::new();
        for scored in self.rake.run(text) {
            let words: Vec<&str> = scored.keyword.split_whitespace().collect();
            for chunk in words.chunks(MAX_PHRASE_WORDS) {
                let phrase = chunk.join(" ").to_lowercase();
                if !seen.insert(phrase.clone()) {
                    continue;
                }
                let position = lowered.find(&phrase).unwrap_or(usize::MAX);
                ranked.push((
                    position,
                    Keyword {
                        text: phrase,
                        score: scored.score,
                        algorithm: KeywordAlgorithm::GraphRanking,
                    },
                ));
            }
        }

        // Ties keep first occurrence in the text
        ranked.sort_by(|(pa, a), (pb, b)| b.score.total_cmp(&a.score).then(pa.cmp(pb)));
        ranked
            .into_iter()
            .take(max_keywords)
            .map(|(_, keyword)| keyword)
            .collect()
    }
}
