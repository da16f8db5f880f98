// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Keyword strategy availability
//!
//! Which strategies exist is decided once at start-up: a strategy must be
//! compiled in (cargo features `keywords-yake` / `keywords-rake`) and, when
//! `KEYWORD_METHODS` is set, listed there. The resulting capability set is
//! injected into `KeywordExtractor`; availability is not rechecked at call time.

use std::env;
use tracing::{debug, warn};

use super::types::KeywordAlgorithm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCapabilities {
    available: Vec<KeywordAlgorithm>,
}

impl KeywordCapabilities {
    /// Strategies compiled into this build
    pub fn compiled() -> Self {
        let mut available = Vec::new();
        if cfg!(feature = "keywords-yake") {
            available.push(KeywordAlgorithm::StatisticalNGram);
        }
        if cfg!(feature = "keywords-rake") {
            available.push(KeywordAlgorithm::GraphRanking);
        }
        Self { available }
    }

    /// Compiled strategies, restricted by the `KEYWORD_METHODS` allow-list
    pub fn from_env() -> Self {
        let compiled = Self::compiled();
        let Ok(list) = env::var("KEYWORD_METHODS") else {
            return compiled;
        };

        let mut allowed = Vec::new();
        for name in list.split(',').filter(|n| !n.trim().is_empty()) {
            match name.parse::<KeywordAlgorithm>() {
                Ok(algorithm) if compiled.is_available(algorithm) => allowed.push(algorithm),
                Ok(algorithm) => warn!("Keyword method '{}' is not compiled in", algorithm),
                Err(e) => warn!("{}", e),
            }
        }
        debug!("Keyword methods enabled: {:?}", allowed);
        Self::with(allowed)
    }

    /// Explicit capability set, duplicates removed
    pub fn with(algorithms: impl IntoIterator<Item = KeywordAlgorithm>) -> Self {
        let mut available = Vec::new();
        for algorithm in algorithms {
            if !available.contains(&algorithm) {
                available.push(algorithm);
            }
        }
        Self { available }
    }

    pub fn none() -> Self {
        Self {
            available: Vec::new(),
        }
    }

    pub fn is_available(&self, algorithm: KeywordAlgorithm) -> bool {
        self.available.contains(&algorithm)
    }

    pub fn available(&self) -> &[KeywordAlgorithm] {
        &self.available
    }

    /// YAKE when present, else the first available strategy
    pub fn preferred(&self) -> Option<KeywordAlgorithm> {
        if self.is_available(KeywordAlgorithm::StatisticalNGram) {
            Some(KeywordAlgorithm::StatisticalNGram)
        } else {
            self.available.first().copied()
        }
    }
}

impl Default for KeywordCapabilities {
    fn default() -> Self {
        Self::compiled()
    }
}
