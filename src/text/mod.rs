// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text analysis: normalization, extractive summarization and statistics
//!
//! All operations are synchronous, pure functions over their input. Nothing
//! here holds state between calls, so one `ExtractiveSummarizer` can be
//! shared across threads.

pub mod config;
pub mod document;
pub mod errors;
pub mod normalizer;
pub mod report;
pub mod stats;
pub mod summarizer;

pub use config::SummarizerConfig;
pub use document::Document;
pub use errors::TextError;
pub use normalizer::normalize;
pub use report::render_report;
pub use stats::{compare_texts, TextComparison, TextStatistics};
pub use summarizer::{ExtractiveSummarizer, SentenceUnit, SummaryOutcome, WordFrequencyTable};
