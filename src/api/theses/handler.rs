// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Thesis search API endpoint handlers

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{debug, info};

use super::request::{DetailParams, ThesisSearchRequest, ThesisSummarizeRequest};
use super::response::{AdvancedSearchResponse, DetailResponse, ThesisSummarizeResponse};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::thesis::{AdvancedSearchQuery, ThesisQuery, ThesisSearchResults};

/// GET /v1/theses/search?keyword=..&page=..&kind=..
///
/// # Errors
/// - 400 Bad Request: empty keyword, page 0 or unknown kind
/// - 502 Bad Gateway: the thesis center failed to answer
/// - 503 Service Unavailable: thesis search disabled on this host
pub async fn search_get_handler(
    State(state): State<Arc<AppState>>,
    Query(request): Query<ThesisSearchRequest>,
) -> Result<Json<ThesisSearchResults>, ApiError> {
    search(&state, &request).await
}

/// POST /v1/theses/search - same as GET with a JSON body
pub async fn search_post_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ThesisSearchRequest>,
) -> Result<Json<ThesisSearchResults>, ApiError> {
    search(&state, &request).await
}

async fn search(
    state: &AppState,
    request: &ThesisSearchRequest,
) -> Result<Json<ThesisSearchResults>, ApiError> {
    let query = request.to_query()?;
    debug!("Thesis search request: {:?}", query);
    let results = state.thesis_client.search(&query).await?;
    Ok(Json(results))
}

/// POST /v1/theses/advanced-search - search by title, author, university,
/// year range and type
pub async fn advanced_search_handler(
    State(state): State<Arc<AppState>>,
    Json(query): Json<AdvancedSearchQuery>,
) -> Result<Json<AdvancedSearchResponse>, ApiError> {
    query.validate()?;
    let records = state.thesis_client.advanced_search(&query).await?;
    Ok(Json(AdvancedSearchResponse {
        total: records.len(),
        records,
        searched_at: chrono::Utc::now(),
    }))
}

/// GET /v1/theses/detail?link=..
pub async fn detail_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DetailParams>,
) -> Result<Json<DetailResponse>, ApiError> {
    if params.link.trim().is_empty() {
        return Err(ApiError::validation("link", "Thesis link is required"));
    }
    let detail = state.thesis_client.detail(params.link.trim()).await?;
    Ok(Json(DetailResponse {
        link: params.link,
        detail,
        fetched_at: chrono::Utc::now(),
    }))
}

/// POST /v1/theses/summarize - search, pick one record and analyze it
///
/// # Errors
/// - 404 Not Found: the search returned no records
pub async fn thesis_summarize_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ThesisSummarizeRequest>,
) -> Result<Json<ThesisSummarizeResponse>, ApiError> {
    let query = ThesisQuery::new(request.keyword.trim());
    query.validate()?;

    let results = state.thesis_client.search(&query).await?;
    if results.records.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No thesis found for '{}'",
            query.keyword
        )));
    }

    let selected_index = if request.index < results.records.len() {
        request.index
    } else {
        0
    };
    let record = results.records[selected_index].clone();
    let analysis = state
        .analyzer
        .analyze_one(&record, state.thesis_client.as_ref())
        .await;

    info!(
        "Analyzed '{}' ({}): {}",
        record.title,
        selected_index,
        analysis.status()
    );

    Ok(Json(ThesisSummarizeResponse {
        keyword: query.keyword,
        selected_index,
        record,
        analysis,
        total_found: results.records.len(),
        analyzed_at: chrono::Utc::now(),
    }))
}
