// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Keyword extraction dispatch
//!
//! Keywords are optional enrichment: `extract` never fails the caller. An
//! unavailable strategy yields an empty list; `try_extract` exposes the
//! reason for callers that want it.

use std::collections::HashSet;
use tracing::{debug, warn};

use super::registry::KeywordCapabilities;
use super::types::{Keyword, KeywordAlgorithm, MAX_KEYWORDS};
use crate::text::TextError;

/// A keyword extraction algorithm
///
/// Implementations are pure functions of the input text.
pub trait KeywordStrategy: Send + Sync {
    fn algorithm(&self) -> KeywordAlgorithm;

    /// Ranked keywords, most relevant first, at most `max_keywords`
    fn extract(&self, text: &str, max_keywords: usize) -> Vec<Keyword>;
}

/// Dispatches to the strategies enabled in a `KeywordCapabilities` set
pub struct KeywordExtractor {
    capabilities: KeywordCapabilities,
    strategies: Vec<Box<dyn KeywordStrategy>>,
}

impl KeywordExtractor {
    /// Build the built-in strategies for every available algorithm
    pub fn new(capabilities: KeywordCapabilities) -> Self {
        let mut strategies: Vec<Box<dyn KeywordStrategy>> = Vec::new();
        for algorithm in capabilities.available() {
            match builtin_strategy(*algorithm) {
                Some(strategy) => strategies.push(strategy),
                None => warn!("No built-in strategy for keyword method '{}'", algorithm),
            }
        }
        Self {
            capabilities,
            strategies,
        }
    }

    /// Extractor with explicitly supplied strategies
    pub fn with_strategies(strategies: Vec<Box<dyn KeywordStrategy>>) -> Self {
        let capabilities = KeywordCapabilities::with(strategies.iter().map(|s| s.algorithm()));
        Self {
            capabilities,
            strategies,
        }
    }

    pub fn capabilities(&self) -> &KeywordCapabilities {
        &self.capabilities
    }

    /// Keyword phrases for `method`, or an empty list if it is unavailable
    pub fn extract(&self, text: &str, method: KeywordAlgorithm) -> Vec<String> {
        match self.try_extract(text, method) {
            Ok(keywords) => keywords,
            Err(e) => {
                warn!("Keyword extraction skipped: {}", e);
                Vec::new()
            }
        }
    }

    /// Keyword phrases using the preferred available strategy
    pub fn extract_default(&self, text: &str) -> Vec<String> {
        match self.capabilities.preferred() {
            Some(method) => self.extract(text, method),
            None => Vec::new(),
        }
    }

    pub fn try_extract(&self, text: &str, method: KeywordAlgorithm) -> Result<Vec<String>, TextError> {
        Ok(self
            .try_extract_ranked(text, method)?
            .into_iter()
            .map(|k| k.text)
            .collect())
    }

    /// Ranked keywords with scores, de-duplicated and capped at `MAX_KEYWORDS`
    pub fn try_extract_ranked(
        &self,
        text: &str,
        method: KeywordAlgorithm,
    ) -> Result<Vec<Keyword>, TextError> {
        let strategy = self
            .strategies
            .iter()
            .find(|s| s.algorithm() == method)
            .ok_or(TextError::ExtractionUnavailable(method))?;

        let mut seen = HashSet::new();
        let keywords: Vec<Keyword> = strategy
            .extract(text, MAX_KEYWORDS)
            .into_iter()
            .filter(|k| !k.text.trim().is_empty() && seen.insert(k.text.to_lowercase()))
            .take(MAX_KEYWORDS)
            .collect();

        debug!("{} keywords extracted with {}", keywords.len(), method);
        Ok(keywords)
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(KeywordCapabilities::compiled())
    }
}

fn builtin_strategy(algorithm: KeywordAlgorithm) -> Option<Box<dyn KeywordStrategy>> {
    match algorithm {
        #[cfg(feature = "keywords-yake")]
        KeywordAlgorithm::StatisticalNGram => Some(Box::new(super::yake::YakeStrategy::default())),
        #[cfg(feature = "keywords-rake")]
        KeywordAlgorithm::GraphRanking => Some(Box::new(super::rake::RakeStrategy::turkish())),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}
