// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Args;
use std::sync::Arc;
use tracing::info;

use crate::keywords::{KeywordCapabilities, KeywordExtractor};
use crate::text::{ExtractiveSummarizer, SummarizerConfig};
use crate::thesis::{
    AnalysisOutcome, CandidateRecord, SearchKind, ThesisAnalyzer, ThesisClient, ThesisQuery,
    ThesisSearchConfig,
};

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search keyword
    pub query: String,

    /// Result page
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Degree filter (tum/yuksek_lisans/doktora)
    #[arg(long, default_value = "tum")]
    pub kind: String,
}

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Search keyword
    pub query: String,

    /// Position of the result to analyze
    #[arg(long, default_value_t = 0)]
    pub index: usize,
}

/// Print the records of one search page
pub async fn search(args: SearchArgs) -> Result<()> {
    dotenv::dotenv().ok();

    let kind: SearchKind = args.kind.parse().map_err(|e: String| anyhow!(e))?;
    let query = ThesisQuery {
        keyword: args.query,
        page: args.page,
        kind,
    };
    query.validate()?;

    let client = build_client()?;
    println!("🔍 Searching theses for '{}'...", query.keyword);
    let results = client.search(&query).await?;

    if results.records.is_empty() {
        println!("No theses found.");
        return Ok(());
    }
    for (i, record) in results.records.iter().enumerate() {
        print_record(i, record);
    }
    println!("\n{} theses in {}ms", results.result_count, results.search_time_ms);
    Ok(())
}

/// Search, pick one record and summarize its abstract
pub async fn analyze(args: AnalyzeArgs) -> Result<()> {
    dotenv::dotenv().ok();

    let query = ThesisQuery::new(args.query);
    query.validate()?;

    let client = build_client()?;
    let results = client.search(&query).await?;
    if results.records.is_empty() {
        return Err(anyhow!("No thesis found for '{}'", query.keyword));
    }
    let index = if args.index < results.records.len() {
        args.index
    } else {
        0
    };
    let record = &results.records[index];
    print_record(index, record);

    let summarizer = Arc::new(ExtractiveSummarizer::new(SummarizerConfig::from_env()));
    let keywords = Arc::new(KeywordExtractor::new(KeywordCapabilities::from_env()));
    let analyzer = ThesisAnalyzer::new(summarizer, keywords);

    let outcome = analyzer.analyze_one(record, &client).await;
    info!("Analysis status: {}", outcome.status());

    match outcome {
        AnalysisOutcome::Summarized {
            original_abstract,
            short_summary,
            keywords,
        } => {
            println!("\n📝 Abstract:\n{}", original_abstract);
            println!("\n✂️  Summary:\n{}", short_summary.display_text());
            println!("\n🔑 Keywords: {}", keywords.join(", "));
        }
        AnalysisOutcome::Partial { reason } => println!("\n⚠️  {}", reason),
        AnalysisOutcome::Failed { error } => return Err(anyhow!(error)),
    }
    Ok(())
}

fn build_client() -> Result<ThesisClient> {
    let config = ThesisSearchConfig::from_env();
    config.validate().map_err(|e| anyhow!(e))?;
    if !config.enabled {
        return Err(anyhow!("Thesis search is disabled (THESIS_SEARCH_ENABLED=false)"));
    }
    Ok(ThesisClient::new(config)?)
}

fn print_record(index: usize, record: &CandidateRecord) {
    println!("\n[{}] {}", index, record.title);
    if let Some(author) = &record.author {
        println!("    Author: {}", author);
    }
    if let Some(institution) = &record.institution {
        println!("    University: {}", institution);
    }
    println!(
        "    {} · {}",
        record.year.as_deref().unwrap_or("-"),
        record.thesis_type
    );
    if let Some(link) = &record.link {
        println!("    {}", link);
    }
}
