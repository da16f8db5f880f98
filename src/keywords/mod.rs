// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Keyword extraction with interchangeable strategies
//!
//! - `StatisticalNGram` (YAKE) - feature `keywords-yake`
//! - `GraphRanking` (RAKE) - feature `keywords-rake`
//!
//! ```ignore
//! let extractor = KeywordExtractor::new(KeywordCapabilities::from_env());
//! let keywords = extractor.extract(text, KeywordAlgorithm::StatisticalNGram);
//! ```

pub mod extractor;
pub mod registry;
pub mod types;

#[cfg(feature = "keywords-rake")]
pub mod rake;

#[cfg(feature = "keywords-yake")]
pub mod yake;

pub use extractor::{KeywordExtractor, KeywordStrategy};
pub use registry::KeywordCapabilities;
pub use types::{Keyword, KeywordAlgorithm, MAX_KEYWORDS};
