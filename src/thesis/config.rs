// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the thesis search client

use std::env;

pub const DEFAULT_BASE_URL: &str = "https://tez.yok.gov.tr/UlusalTezMerkezi/";
pub const DEFAULT_SEARCH_URL: &str =
    "https://tez.yok.gov.tr/UlusalTezMerkezi/tezSorguSonucYeni.jsp";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for thesis search
#[derive(Debug, Clone)]
pub struct ThesisSearchConfig {
    /// Enable thesis search (default: true)
    pub enabled: bool,
    /// Base for resolving relative detail links
    pub base_url: String,
    /// Search results endpoint
    pub search_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Records requested per page (default: 20)
    pub results_per_page: usize,
    pub user_agent: String,
}

impl ThesisSearchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env::var("THESIS_SEARCH_ENABLED")
                .map(|v| v.to_lowercase() != "false")
                .unwrap_or(defaults.enabled),
            base_url: env::var("THESIS_BASE_URL").unwrap_or(defaults.base_url),
            search_url: env::var("THESIS_SEARCH_URL").unwrap_or(defaults.search_url),
            timeout_secs: env::var("THESIS_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            results_per_page: env::var("THESIS_RESULTS_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.results_per_page)
                .min(100),
            user_agent: env::var("THESIS_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if url::Url::parse(&self.base_url).is_err() {
            return Err(format!("base_url is not a valid URL: {}", self.base_url));
        }
        if url::Url::parse(&self.search_url).is_err() {
            return Err(format!("search_url is not a valid URL: {}", self.search_url));
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        if self.results_per_page == 0 {
            return Err("results_per_page must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for ThesisSearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_BASE_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            timeout_secs: 30,
            results_per_page: 20,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
