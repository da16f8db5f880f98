// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for thesis search and analysis

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::text::SummaryOutcome;

/// Placeholder used by the plain-text fallback for unknown fields
pub const UNSPECIFIED: &str = "Belirtilmemiş";

/// Degree category of a thesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThesisType {
    #[serde(rename = "Doktora")]
    Doctorate,
    #[serde(rename = "Yüksek Lisans")]
    Masters,
    #[serde(rename = "Belirtilmemiş")]
    Unspecified,
    /// Assigned by the plain-text fallback
    #[serde(rename = "Genel")]
    General,
}

impl ThesisType {
    /// Display label as shown on the listing pages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Doctorate => "Doktora",
            Self::Masters => "Yüksek Lisans",
            Self::Unspecified => UNSPECIFIED,
            Self::General => "Genel",
        }
    }

    /// Ordered first-match classification of fragment text
    pub fn classify(text: &str) -> Self {
        if text.contains("Doktora") || text.contains("DR") {
            Self::Doctorate
        } else if text.contains("Yüksek") || text.contains("YL") {
            Self::Masters
        } else {
            Self::Unspecified
        }
    }
}

impl fmt::Display for ThesisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of a search listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    pub thesis_type: ThesisType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThesisLanguage {
    #[serde(rename = "Türkçe")]
    Turkish,
    #[serde(rename = "İngilizce")]
    English,
}

/// Fields scraped from a thesis detail page; all optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThesisDetail {
    pub link: String,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<ThesisLanguage>,
}

/// Result of analysing one candidate record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum AnalysisOutcome {
    Summarized {
        original_abstract: String,
        short_summary: SummaryOutcome,
        keywords: Vec<String>,
    },
    Partial {
        reason: String,
    },
    Failed {
        error: String,
    },
}

impl AnalysisOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            Self::Summarized { .. } => "summarized",
            Self::Partial { .. } => "partial",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Degree filter of the simple search (`tur` parameter)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchKind {
    #[default]
    #[serde(rename = "tum")]
    All,
    #[serde(rename = "yuksek_lisans")]
    Masters,
    #[serde(rename = "doktora")]
    Doctorate,
}

impl SearchKind {
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::All => "tum",
            Self::Masters => "yuksek_lisans",
            Self::Doctorate => "doktora",
        }
    }
}

impl FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "tum" | "all" => Ok(Self::All),
            "yuksek_lisans" | "masters" => Ok(Self::Masters),
            "doktora" | "doctorate" => Ok(Self::Doctorate),
            other => Err(format!("Unknown thesis type filter: {}", other)),
        }
    }
}

/// Simple keyword search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThesisQuery {
    pub keyword: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default)]
    pub kind: SearchKind,
}

fn default_page() -> u32 {
    1
}

impl ThesisQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            page: 1,
            kind: SearchKind::All,
        }
    }

    pub fn validate(&self) -> Result<(), ThesisError> {
        if self.keyword.trim().is_empty() {
            return Err(ThesisError::InvalidQuery(
                "Search keyword must not be empty".to_string(),
            ));
        }
        if self.page == 0 {
            return Err(ThesisError::InvalidQuery("Page must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Field search; at least one of title, author or university is required
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSearchQuery {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub year_from: Option<i32>,
    #[serde(default)]
    pub year_to: Option<i32>,
    #[serde(default)]
    pub kind: Option<String>,
}

impl AdvancedSearchQuery {
    pub fn validate(&self) -> Result<(), ThesisError> {
        let has_field = [&self.title, &self.author, &self.university]
            .iter()
            .any(|f| f.as_deref().is_some_and(|v| !v.trim().is_empty()));
        if !has_field {
            return Err(ThesisError::InvalidQuery(
                "At least one of title, author or university is required".to_string(),
            ));
        }
        if let (Some(from), Some(to)) = (self.year_from, self.year_to) {
            if from > to {
                return Err(ThesisError::InvalidQuery(format!(
                    "Year range is inverted: {} > {}",
                    from, to
                )));
            }
        }
        Ok(())
    }

    /// Query parameters for the advanced search form, empty fields omitted
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let text_fields = [
            ("baslik", &self.title),
            ("yazar", &self.author),
            ("universite", &self.university),
        ];
        for (name, value) in text_fields {
            if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                params.push((name, v.to_string()));
            }
        }
        if let Some(year) = self.year_from {
            params.push(("yil1", year.to_string()));
        }
        if let Some(year) = self.year_to {
            params.push(("yil2", year.to_string()));
        }
        if let Some(kind) = self.kind.as_deref().filter(|k| !k.trim().is_empty()) {
            params.push(("tur", kind.trim().to_string()));
        }
        params
    }
}

/// Records parsed from one search results page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThesisSearchResults {
    pub query: String,
    pub page: u32,
    pub records: Vec<CandidateRecord>,
    pub result_count: usize,
    pub search_time_ms: u64,
    pub searched_at: DateTime<Utc>,
}

/// Errors from thesis extraction and search
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThesisError {
    /// Fragment has no usable title
    #[error("Record invalid: {0}")]
    RecordInvalid(String),

    #[error("Remote fetch failed: {0}")]
    RemoteFetchFailed(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Thesis search is turned off in configuration
    #[error("Thesis search is disabled")]
    SearchDisabled,
}
