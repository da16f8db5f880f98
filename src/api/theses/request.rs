// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Thesis API request types

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::thesis::{SearchKind, ThesisQuery};

/// Query string of GET /v1/theses/search and body of the POST variant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThesisSearchRequest {
    #[serde(default)]
    pub keyword: String,

    #[serde(default = "default_page")]
    pub page: u32,

    /// "tum", "yuksek_lisans" or "doktora" (default "tum")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

fn default_page() -> u32 {
    1
}

impl ThesisSearchRequest {
    /// Validated search query
    pub fn to_query(&self) -> Result<ThesisQuery, ApiError> {
        let kind = match self.kind.as_deref() {
            Some(k) => k
                .parse::<SearchKind>()
                .map_err(|e| ApiError::validation("kind", e))?,
            None => SearchKind::All,
        };
        let query = ThesisQuery {
            keyword: self.keyword.trim().to_string(),
            page: self.page,
            kind,
        };
        query.validate()?;
        Ok(query)
    }
}

/// Query string of GET /v1/theses/detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailParams {
    #[serde(default)]
    pub link: String,
}

/// Request body for POST /v1/theses/summarize
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThesisSummarizeRequest {
    #[serde(default)]
    pub keyword: String,

    /// Listing position to analyze; out of range falls back to 0
    #[serde(default)]
    pub index: usize,
}
