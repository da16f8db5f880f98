// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::keywords::{KeywordAlgorithm, KeywordCapabilities, KeywordExtractor};
use crate::text::{render_report, ExtractiveSummarizer, SummarizerConfig, TextStatistics};

/// Arguments for the summarize command
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// UTF-8 text file to summarize
    pub file: PathBuf,

    /// Sentences in the summary (default: SUMMARY_MAX_SENTENCES or 5)
    #[arg(long)]
    pub max_sentences: Option<usize>,

    /// Keyword method (yake/rake)
    #[arg(long)]
    pub method: Option<String>,

    /// Write a text report to this path instead of printing
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the keywords command
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// UTF-8 text file
    pub file: PathBuf,

    /// Keyword method (yake/rake)
    #[arg(long)]
    pub method: Option<String>,
}

/// Summarize a file and print or save the report
pub fn summarize(args: SummarizeArgs) -> Result<()> {
    dotenv::dotenv().ok();

    let text = read_text(&args.file)?;
    let config = SummarizerConfig::from_env();
    config.validate().map_err(|e| anyhow!(e))?;
    let max_sentences = args.max_sentences.unwrap_or(config.max_sentences);
    let summarizer = ExtractiveSummarizer::new(config);

    let outcome = summarizer.summarize_with(&text, max_sentences);
    let summary = outcome.display_text();
    let keywords = extract_keywords(&text, args.method.as_deref())?;
    let stats = TextStatistics::compute(&text, &summary).with_page_estimate();

    let report = render_report(&summary, &keywords, Some(&stats), chrono::Utc::now());
    match args.output {
        Some(path) => {
            fs::write(&path, report)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Report written to {}", path.display());
            println!("📄 Report written to {}", path.display());
        }
        None => print!("{}", report),
    }
    Ok(())
}

/// Print one keyword per line
pub fn keywords(args: KeywordsArgs) -> Result<()> {
    dotenv::dotenv().ok();

    let text = read_text(&args.file)?;
    for keyword in extract_keywords(&text, args.method.as_deref())? {
        println!("{}", keyword);
    }
    Ok(())
}

pub fn read_text(path: &Path) -> Result<String> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    if text.trim().is_empty() {
        return Err(anyhow!("{} contains no text", path.display()));
    }
    Ok(text)
}

fn extract_keywords(text: &str, method: Option<&str>) -> Result<Vec<String>> {
    let extractor = KeywordExtractor::new(KeywordCapabilities::from_env());
    let method = match method {
        Some(m) => Some(m.parse::<KeywordAlgorithm>().map_err(|e| anyhow!(e))?),
        None => extractor.capabilities().preferred(),
    };
    match method {
        Some(m) => Ok(extractor.try_extract(text, m)?),
        None => Ok(Vec::new()),
    }
}
