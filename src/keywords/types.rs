// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for keyword extraction

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on keywords returned by any strategy
pub const MAX_KEYWORDS: usize = 20;

/// Named keyword extraction strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeywordAlgorithm {
    /// YAKE: statistical scoring of 1-3 word n-grams
    #[serde(rename = "yake", alias = "statistical_ngram")]
    StatisticalNGram,
    /// RAKE: co-occurrence degree ranking of stop-word separated phrases
    #[serde(rename = "rake", alias = "graph_ranking")]
    GraphRanking,
}

impl KeywordAlgorithm {
    pub const ALL: [KeywordAlgorithm; 2] = [Self::StatisticalNGram, Self::GraphRanking];

    pub fn name(&self) -> &'static str {
        match self {
            Self::StatisticalNGram => "yake",
            Self::GraphRanking => "rake",
        }
    }
}

impl Default for KeywordAlgorithm {
    fn default() -> Self {
        Self::StatisticalNGram
    }
}

impl fmt::Display for KeywordAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeywordAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yake" | "statistical" | "statistical_ngram" | "statisticalngram" => {
                Ok(Self::StatisticalNGram)
            }
            "rake" | "graph" | "graph_ranking" | "graphranking" => Ok(Self::GraphRanking),
            other => Err(format!("Unknown keyword method: {}", other)),
        }
    }
}

/// A ranked keyword phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub text: String,
    /// Strategy-specific relevance, higher is better
    pub score: f64,
    pub algorithm: KeywordAlgorithm,
}
