// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::{env, net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::text::{
    compare_handler, document_handler, export_json_handler, export_txt_handler, summarize_handler,
};
use super::theses::{
    advanced_search_handler, detail_handler, search_get_handler, search_post_handler,
    thesis_summarize_handler,
};
use crate::keywords::{KeywordCapabilities, KeywordExtractor};
use crate::text::{ExtractiveSummarizer, SummarizerConfig};
use crate::thesis::{FetchError, ThesisAnalyzer, ThesisClient, ThesisSearchConfig};

pub const SERVICE_NAME: &str = "thesis-digest";

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("API_HOST").unwrap_or(defaults.host),
            port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.socket_addr().map(|_| ())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("invalid listen address {}:{}: {}", self.host, self.port, e))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Shared, immutable request state
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<ExtractiveSummarizer>,
    pub keywords: Arc<KeywordExtractor>,
    pub analyzer: Arc<ThesisAnalyzer>,
    pub thesis_client: Arc<ThesisClient>,
}

impl AppState {
    pub fn new(
        summarizer_config: SummarizerConfig,
        capabilities: KeywordCapabilities,
        thesis_config: ThesisSearchConfig,
    ) -> Result<Self, FetchError> {
        let summarizer = Arc::new(ExtractiveSummarizer::new(summarizer_config));
        let keywords = Arc::new(KeywordExtractor::new(capabilities));
        let analyzer = Arc::new(ThesisAnalyzer::new(summarizer.clone(), keywords.clone()));
        let thesis_client = Arc::new(ThesisClient::new(thesis_config)?);
        Ok(Self {
            summarizer,
            keywords,
            analyzer,
            thesis_client,
        })
    }

    /// Default summarizer and keyword settings with the given thesis search config
    pub fn with_thesis_config(thesis_config: ThesisSearchConfig) -> Result<Self, FetchError> {
        Self::new(
            SummarizerConfig::default(),
            KeywordCapabilities::compiled(),
            thesis_config,
        )
    }

    /// Default configuration with thesis search disabled
    pub fn new_for_test() -> Self {
        let thesis_config = ThesisSearchConfig {
            enabled: false,
            ..Default::default()
        };
        Self::with_thesis_config(thesis_config).expect("Failed to create HTTP client")
    }
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/v1/summarize", post(summarize_handler))
        .route("/v1/documents", post(document_handler))
        .route("/v1/compare", post(compare_handler))
        .route("/v1/export/txt", post(export_txt_handler))
        .route("/v1/export/json", post(export_json_handler))
        .route(
            "/v1/theses/search",
            get(search_get_handler).post(search_post_handler),
        )
        .route("/v1/theses/advanced-search", post(advanced_search_handler))
        .route("/v1/theses/detail", get(detail_handler))
        .route("/v1/theses/summarize", post(thesis_summarize_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: ApiConfig, state: AppState) -> anyhow::Result<()> {
    let addr = config.socket_addr().map_err(anyhow::Error::msg)?;
    let app = create_app(Arc::new(state));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn root_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let methods: Vec<&str> = state
        .keywords
        .capabilities()
        .available()
        .iter()
        .map(|m| m.name())
        .collect();

    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Extractive summarization and keyword extraction for Turkish theses",
        "endpoints": {
            "summarize": "/v1/summarize",
            "documents": "/v1/documents",
            "compare": "/v1/compare",
            "exportTxt": "/v1/export/txt",
            "exportJson": "/v1/export/json",
            "thesisSearch": "/v1/theses/search",
            "thesisAdvancedSearch": "/v1/theses/advanced-search",
            "thesisDetail": "/v1/theses/detail",
            "thesisSummarize": "/v1/theses/summarize",
        },
        "keywordMethods": methods,
        "thesisSearchEnabled": state.thesis_client.config().enabled,
    }))
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
