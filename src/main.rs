// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use std::env;
use thesis_digest::{
    api::{start_server, ApiConfig, AppState},
    keywords::KeywordCapabilities,
    text::SummarizerConfig,
    thesis::ThesisSearchConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🎓 Starting thesis-digest v{}...\n", env!("CARGO_PKG_VERSION"));

    let summarizer_config = SummarizerConfig::from_env();
    summarizer_config
        .validate()
        .map_err(|e| anyhow!("invalid summarizer config: {}", e))?;

    let thesis_config = ThesisSearchConfig::from_env();
    thesis_config
        .validate()
        .map_err(|e| anyhow!("invalid thesis search config: {}", e))?;

    let api_config = ApiConfig::from_env();
    api_config
        .validate()
        .map_err(|e| anyhow!("invalid API config: {}", e))?;

    let capabilities = KeywordCapabilities::from_env();
    let methods: Vec<&str> = capabilities.available().iter().map(|m| m.name()).collect();
    println!("🔑 Keyword methods: {}", methods.join(", "));
    println!(
        "🔍 Thesis search: {}",
        if thesis_config.enabled { "enabled" } else { "disabled" }
    );

    let state = AppState::new(summarizer_config, capabilities, thesis_config)?;

    println!("🌐 Listening on http://{}:{}", api_config.host, api_config.port);
    start_server(api_config, state).await
}
