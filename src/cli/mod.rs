// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod text;
pub mod theses;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Thesis digest CLI
#[derive(Parser, Debug)]
#[command(name = "thesis-cli")]
#[command(version)]
#[command(about = "Summarize Turkish theses and search the national thesis center", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a text file
    Summarize(text::SummarizeArgs),

    /// Extract keywords from a text file
    Keywords(text::KeywordsArgs),

    /// Search theses by keyword
    Search(theses::SearchArgs),

    /// Search, then summarize the abstract of one result
    Analyze(theses::AnalyzeArgs),
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Summarize(args) => text::summarize(args),
        Commands::Keywords(args) => text::keywords(args),
        Commands::Search(args) => theses::search(args).await,
        Commands::Analyze(args) => theses::analyze(args).await,
    }
}
