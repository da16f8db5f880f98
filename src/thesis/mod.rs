// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Thesis search listings, detail pages and abstract analysis
//!
//! - `record`: candidate records from listing fragments
//! - `detail`: abstract, keywords and metadata from detail pages
//! - `fetcher`: HTTP client for the national thesis center
//! - `analyzer`: per-record summary and keyword pipeline

pub mod analyzer;
pub mod config;
pub mod detail;
pub mod fetcher;
pub mod html;
pub mod record;
pub mod types;

pub use analyzer::ThesisAnalyzer;
pub use config::ThesisSearchConfig;
pub use detail::{extract_detail, find_abstract, find_keywords, parse_detail};
pub use fetcher::{DetailSource, FetchError, ThesisClient};
pub use html::HtmlNode;
pub use record::{extract_listing, extract_listing_from_plaintext, extract_record, parse_listing};
pub use types::{
    AdvancedSearchQuery, AnalysisOutcome, CandidateRecord, SearchKind, ThesisDetail, ThesisError,
    ThesisQuery, ThesisSearchResults, ThesisType,
};
