// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP access to the national thesis center
//!
//! Listing and detail pages are fetched with a single request each; no
//! retries. Parsing happens in `record` and `detail`.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use super::config::ThesisSearchConfig;
use super::detail::parse_detail;
use super::record::parse_listing;
use super::types::{
    AdvancedSearchQuery, CandidateRecord, ThesisDetail, ThesisQuery, ThesisSearchResults,
};

/// Transport-level fetch errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("Timeout fetching: {0}")]
    Timeout(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("HTTP {0} for: {1}")]
    HttpStatus(u16, String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Thesis search is disabled")]
    Disabled,
}

/// Source of thesis detail pages
#[async_trait]
pub trait DetailSource: Send + Sync {
    /// Raw body of the detail page behind `link`
    async fn fetch_detail(&self, link: &str) -> Result<String, FetchError>;
}

/// Client for the thesis search and detail pages
pub struct ThesisClient {
    client: Client,
    config: ThesisSearchConfig,
}

impl ThesisClient {
    pub fn new(config: ThesisSearchConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("tr-TR,tr;q=0.9,en;q=0.8"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| FetchError::HttpError(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ThesisSearchConfig {
        &self.config
    }

    /// Keyword search; returns the records of one result page
    pub async fn search(&self, query: &ThesisQuery) -> Result<ThesisSearchResults, FetchError> {
        let start = Instant::now();
        let params = vec![
            ("arama", query.keyword.trim().to_string()),
            ("tur", query.kind.as_param().to_string()),
            ("sayfa", query.page.to_string()),
            ("kayitSayisi", self.config.results_per_page.to_string()),
        ];

        let html = self.get(&self.config.search_url, &params).await?;
        let records = parse_listing(&html);

        info!(
            "Thesis search '{}' page {}: {} records",
            query.keyword,
            query.page,
            records.len()
        );

        Ok(ThesisSearchResults {
            query: query.keyword.clone(),
            page: query.page,
            result_count: records.len(),
            records,
            search_time_ms: start.elapsed().as_millis() as u64,
            searched_at: chrono::Utc::now(),
        })
    }

    /// Field search with title, author, university, year range and type
    pub async fn advanced_search(
        &self,
        query: &AdvancedSearchQuery,
    ) -> Result<Vec<CandidateRecord>, FetchError> {
        let html = self.get(&self.config.search_url, &query.params()).await?;
        let records = parse_listing(&html);
        info!("Advanced thesis search: {} records", records.len());
        Ok(records)
    }

    /// Fetch and parse a detail page
    pub async fn detail(&self, link: &str) -> Result<ThesisDetail, FetchError> {
        let html = self.fetch_detail(link).await?;
        Ok(parse_detail(link, &html))
    }

    /// Absolute URL for a listing link
    pub fn resolve_link(&self, link: &str) -> Result<String, FetchError> {
        resolve_link(&self.config.base_url, link)
    }

    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<String, FetchError> {
        if !self.config.enabled {
            return Err(FetchError::Disabled);
        }

        debug!("Fetching: {}", url);
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout(url.to_string())
                } else {
                    FetchError::HttpError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP {} for {}", status.as_u16(), url);
            return Err(FetchError::HttpStatus(status.as_u16(), url.to_string()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::HttpError(e.to_string()))
    }
}

#[async_trait]
impl DetailSource for ThesisClient {
    async fn fetch_detail(&self, link: &str) -> Result<String, FetchError> {
        let url = self.resolve_link(link)?;
        self.get(&url, &[]).await
    }
}

/// Resolve `link` against `base`; absolute http(s) links are kept as-is
pub fn resolve_link(base: &str, link: &str) -> Result<String, FetchError> {
    let link = link.trim();
    if link.is_empty() {
        return Err(FetchError::InvalidUrl("empty link".to_string()));
    }
    if link.starts_with("http://") || link.starts_with("https://") {
        return Url::parse(link)
            .map(String::from)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", link, e)));
    }

    let base = Url::parse(base).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base, e)))?;
    base.join(link)
        .map(String::from)
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", link, e)))
}
