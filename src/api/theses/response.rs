// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Thesis API response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::thesis::{AnalysisOutcome, CandidateRecord, ThesisDetail};

/// Response body for POST /v1/theses/advanced-search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSearchResponse {
    pub records: Vec<CandidateRecord>,
    pub total: usize,
    pub searched_at: DateTime<Utc>,
}

/// Response body for GET /v1/theses/detail
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailResponse {
    pub link: String,
    pub detail: ThesisDetail,
    pub fetched_at: DateTime<Utc>,
}

/// Response body for POST /v1/theses/summarize
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThesisSummarizeResponse {
    pub keyword: String,
    pub selected_index: usize,
    pub record: CandidateRecord,
    pub analysis: AnalysisOutcome,
    pub total_found: usize,
    pub analyzed_at: DateTime<Utc>,
}
