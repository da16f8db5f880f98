// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text API response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::keywords::KeywordAlgorithm;
use crate::text::{SummaryOutcome, TextComparison, TextStatistics};

/// Keywords returned by the summarize endpoints
pub const MAX_RESPONSE_KEYWORDS: usize = 10;

/// Characters of the source shown in document previews
pub const PREVIEW_CHARS: usize = 300;

pub const EXPORT_JSON_FILENAME: &str = "thesis-summary.json";
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

/// Response body for POST /v1/summarize
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    /// Summary text, or the advisory when no summary was produced
    pub summary: String,
    pub summarized: bool,
    pub outcome: SummaryOutcome,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<KeywordAlgorithm>,
    pub stats: TextStatistics,
    pub processed_at: DateTime<Utc>,
}

/// Response body for POST /v1/documents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub preview: String,
    #[serde(flatten)]
    pub result: SummarizeResponse,
}

/// Response body for POST /v1/compare
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    #[serde(flatten)]
    pub comparison: TextComparison,
    pub compared_at: DateTime<Utc>,
}

/// First `PREVIEW_CHARS` characters, with `...` when cut
pub fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
