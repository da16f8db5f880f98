// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search result analysis: record → detail → summary and keywords
//!
//! Per record the states are NoDetail → DetailFetched → Summarized or
//! Partial, or Failed when the fetch fails. There are no retries.

use std::sync::Arc;
use tracing::{info, warn};

use super::detail::parse_detail;
use super::fetcher::{DetailSource, FetchError};
use super::record::parse_listing;
use super::types::{AnalysisOutcome, CandidateRecord, ThesisDetail, ThesisError};
use crate::keywords::KeywordExtractor;
use crate::text::ExtractiveSummarizer;

/// Abstracts at or below this length are not summarized
pub const MIN_ABSTRACT_CHARS: usize = 100;

pub const NO_LINK_REASON: &str = "No detail link for this record";
pub const NO_ABSTRACT_REASON: &str = "Abstract text is not accessible";

pub struct ThesisAnalyzer {
    summarizer: Arc<ExtractiveSummarizer>,
    keywords: Arc<KeywordExtractor>,
}

impl ThesisAnalyzer {
    pub fn new(summarizer: Arc<ExtractiveSummarizer>, keywords: Arc<KeywordExtractor>) -> Self {
        Self {
            summarizer,
            keywords,
        }
    }

    /// Candidate records from a raw listing page
    pub fn records_from_listing(&self, html: &str) -> Vec<CandidateRecord> {
        parse_listing(html)
    }

    /// Fetch the record's detail page and analyze it
    pub async fn analyze_one<S>(&self, record: &CandidateRecord, source: &S) -> AnalysisOutcome
    where
        S: DetailSource + ?Sized,
    {
        let Some(link) = record.link.as_deref() else {
            return AnalysisOutcome::Partial {
                reason: NO_LINK_REASON.to_string(),
            };
        };
        let fetched = source.fetch_detail(link).await;
        self.analyze_fetched(record, fetched)
    }

    /// Outcome for a record given the result of its detail fetch
    pub fn analyze_fetched(
        &self,
        record: &CandidateRecord,
        fetched: Result<String, FetchError>,
    ) -> AnalysisOutcome {
        let link = record.link.as_deref().unwrap_or_default();
        match fetched {
            Ok(body) => self.analyze_detail(&parse_detail(link, &body)),
            Err(e) => {
                let error = ThesisError::RemoteFetchFailed(e.to_string());
                warn!("Analysis of '{}' failed: {}", record.title, error);
                AnalysisOutcome::Failed {
                    error: error.to_string(),
                }
            }
        }
    }

    /// Outcome for an already fetched detail page
    pub fn analyze_detail(&self, detail: &ThesisDetail) -> AnalysisOutcome {
        let abstract_text = match detail.abstract_text.as_deref() {
            Some(text) if text.chars().count() > MIN_ABSTRACT_CHARS => text,
            _ => {
                return AnalysisOutcome::Partial {
                    reason: NO_ABSTRACT_REASON.to_string(),
                }
            }
        };

        let short_summary = self.summarizer.summarize(abstract_text);
        let keywords = self.keywords.extract_default(abstract_text);

        info!(
            "Summarized abstract of {} chars, {} keywords",
            abstract_text.chars().count(),
            keywords.len()
        );

        AnalysisOutcome::Summarized {
            original_abstract: abstract_text.to_string(),
            short_summary,
            keywords,
        }
    }
}
