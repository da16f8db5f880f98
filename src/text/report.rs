// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Plain-text summary report

use chrono::{DateTime, Utc};
use std::fmt::Write;

use super::stats::TextStatistics;

pub const REPORT_FILENAME: &str = "thesis-summary.txt";

/// Render a summary, its keywords and statistics as a text report
pub fn render_report(
    summary: &str,
    keywords: &[String],
    stats: Option<&TextStatistics>,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "THESIS SUMMARY");
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out);
    let _ = writeln!(out, "SUMMARY:");
    let _ = writeln!(out, "{}", summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "KEYWORDS:");
    let _ = writeln!(out, "{}", keywords.join(", "));
    let _ = writeln!(out);
    let _ = writeln!(out, "STATISTICS:");
    match stats {
        Some(stats) => {
            let _ = writeln!(
                out,
                "- Original length: {} characters",
                group_thousands(stats.original_length)
            );
            let _ = writeln!(
                out,
                "- Summary length: {} characters",
                group_thousands(stats.summary_length)
            );
            let _ = writeln!(out, "- Compression ratio: {}%", stats.compression_ratio);
            let _ = writeln!(out, "- Word count: {} words", group_thousands(stats.word_count));
            if let Some(pages) = stats.estimated_pages {
                let _ = writeln!(out, "- Estimated pages: {}", pages);
            }
        }
        None => {
            let _ = writeln!(out, "- not available");
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Generated: {}", generated_at.format("%d.%m.%Y %H:%M:%S"));
    out
}

/// `1234567` -> `1,234,567`
fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
