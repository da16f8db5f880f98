// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text API request types

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::keywords::KeywordAlgorithm;
use crate::text::TextStatistics;

/// Shortest text accepted by the summarize endpoints
pub const MIN_REQUEST_CHARS: usize = 50;

pub const MAX_SENTENCES_LIMIT: usize = 50;

/// Request body for POST /v1/summarize
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    pub text: String,

    /// Sentences in the summary (1-50, default from configuration)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sentences: Option<usize>,

    /// Keyword method: "yake" or "rake"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl SummarizeRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_text(&self.text)?;
        validate_max_sentences(self.max_sentences)?;
        parse_method(self.method.as_deref()).map(|_| ())
    }
}

/// Query string for POST /v1/documents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentParams {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub max_sentences: Option<usize>,
    #[serde(default)]
    pub method: Option<String>,
}

impl DocumentParams {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(name) = self.filename.as_deref() {
            if !name.to_lowercase().ends_with(".txt") {
                return Err(ApiError::validation(
                    "filename",
                    "Only plain-text documents (.txt) are accepted",
                ));
            }
        }
        validate_max_sentences(self.max_sentences)?;
        parse_method(self.method.as_deref()).map(|_| ())
    }
}

/// Request body for POST /v1/compare
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub text1: String,
    #[serde(default)]
    pub text2: String,
}

impl CompareRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.text1.trim().is_empty() || self.text2.trim().is_empty() {
            return Err(ApiError::InvalidRequest("Both texts are required".to_string()));
        }
        Ok(())
    }
}

/// Request body for POST /v1/export/txt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<TextStatistics>,
}

pub fn validate_text(text: &str) -> Result<(), ApiError> {
    if text.is_empty() {
        return Err(ApiError::validation("text", "Text is required and cannot be empty"));
    }
    let length = text.trim().chars().count();
    if length < MIN_REQUEST_CHARS {
        return Err(ApiError::validation(
            "text",
            format!(
                "Text too short: {} characters, at least {} required",
                length, MIN_REQUEST_CHARS
            ),
        ));
    }
    Ok(())
}

fn validate_max_sentences(max_sentences: Option<usize>) -> Result<(), ApiError> {
    match max_sentences {
        Some(n) if n == 0 || n > MAX_SENTENCES_LIMIT => Err(ApiError::validation(
            "maxSentences",
            format!("maxSentences must be between 1 and {}", MAX_SENTENCES_LIMIT),
        )),
        _ => Ok(()),
    }
}

/// Parse an optional keyword method name
pub fn parse_method(method: Option<&str>) -> Result<Option<KeywordAlgorithm>, ApiError> {
    method
        .map(|m| {
            m.parse::<KeywordAlgorithm>()
                .map_err(|e| ApiError::validation("method", e))
        })
        .transpose()
}
