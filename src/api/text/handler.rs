// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text API endpoint handlers

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::{debug, info};

use super::request::{
    parse_method, validate_text, CompareRequest, DocumentParams, ExportRequest, SummarizeRequest,
};
use super::response::{
    preview, CompareResponse, DocumentResponse, SummarizeResponse, EXPORT_FORMAT_VERSION,
    EXPORT_JSON_FILENAME, MAX_RESPONSE_KEYWORDS,
};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::keywords::KeywordAlgorithm;
use crate::text::report::REPORT_FILENAME;
use crate::text::{compare_texts, render_report, TextStatistics};

/// POST /v1/summarize - Summarize text and extract keywords
///
/// # Errors
/// - 400 Bad Request: missing or too short text, invalid `maxSentences`
///   or unknown `method`
pub async fn summarize_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    debug!("Summarize request: {} chars", request.text.len());
    request.validate()?;
    let method = parse_method(request.method.as_deref())?;

    let response = summarize_text(&state, &request.text, request.max_sentences, method);
    info!(
        "Summarized {} chars to {} chars ({}%)",
        response.stats.original_length, response.stats.summary_length, response.stats.compression_ratio
    );
    Ok(Json(response))
}

/// POST /v1/documents - Summarize an uploaded plain-text document
pub async fn document_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DocumentParams>,
    body: String,
) -> Result<Json<DocumentResponse>, ApiError> {
    params.validate()?;
    if body.trim().is_empty() {
        return Err(ApiError::validation("text", "No text could be read from the document"));
    }
    let method = parse_method(params.method.as_deref())?;

    info!(
        "Processing document {}",
        params.filename.as_deref().unwrap_or("<unnamed>")
    );

    let mut result = summarize_text(&state, &body, params.max_sentences, method);
    result.stats = result.stats.with_page_estimate();

    Ok(Json(DocumentResponse {
        filename: params.filename,
        preview: preview(&body),
        result,
    }))
}

/// POST /v1/compare - Word-set similarity of two texts
pub async fn compare_handler(
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    request.validate()?;
    Ok(Json(CompareResponse {
        comparison: compare_texts(&request.text1, &request.text2),
        compared_at: chrono::Utc::now(),
    }))
}

/// POST /v1/export/txt - Text report as a file attachment
pub async fn export_txt_handler(Json(request): Json<ExportRequest>) -> impl IntoResponse {
    let report = render_report(
        &request.summary,
        &request.keywords,
        request.stats.as_ref(),
        chrono::Utc::now(),
    );
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", REPORT_FILENAME),
            ),
        ],
        report,
    )
}

/// Summary, keywords and statistics for validated text
/// POST /v1/export/json - echo the payload with export metadata as an attachment
pub async fn export_json_handler(
    Json(mut payload): Json<serde_json::Map<String, serde_json::Value>>,
) -> impl IntoResponse {
    payload.insert(
        "exportedAt".to_string(),
        serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
    );
    payload.insert("format".to_string(), "JSON".into());
    payload.insert("formatVersion".to_string(), EXPORT_FORMAT_VERSION.into());
    debug!("Exporting {} JSON fields", payload.len());
    (
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", EXPORT_JSON_FILENAME),
        )],
        Json(payload),
    )
}

pub(crate) fn summarize_text(
    state: &AppState,
    text: &str,
    max_sentences: Option<usize>,
    method: Option<KeywordAlgorithm>,
) -> SummarizeResponse {
    let max_sentences = max_sentences.unwrap_or(state.summarizer.config().max_sentences);
    let outcome = state.summarizer.summarize_with(text, max_sentences);
    let summary = outcome.display_text();

    let method = method.or_else(|| state.keywords.capabilities().preferred());
    let keywords = match method {
        Some(m) => state.keywords.extract(text, m),
        None => Vec::new(),
    };

    SummarizeResponse {
        stats: TextStatistics::compute(text, &summary),
        summarized: outcome.is_summary(),
        summary,
        outcome,
        keywords: keywords.into_iter().take(MAX_RESPONSE_KEYWORDS).collect(),
        method,
        processed_at: chrono::Utc::now(),
    }
}
