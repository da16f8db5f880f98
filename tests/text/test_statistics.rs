// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Summary statistics, comparison and the text report

use chrono::{TimeZone, Utc};
use thesis_digest::text::{compare_texts, render_report, TextStatistics};

#[test]
fn test_compression_ratio_uses_characters() {
    let stats = TextStatistics::compute("çalışma özeti", "özet");
    assert_eq!(stats.original_length, 13);
    assert_eq!(stats.summary_length, 4);
    assert_eq!(stats.compression_ratio, 30.77);
}

#[test]
fn test_page_estimate_rounds_to_nearest() {
    let short = TextStatistics::compute(&"a".repeat(900), "").with_page_estimate();
    assert_eq!(short.estimated_pages, Some(0));
    let long = TextStatistics::compute(&"a".repeat(7000), "").with_page_estimate();
    assert_eq!(long.estimated_pages, Some(4));
}

#[test]
fn test_comparison_is_case_insensitive_and_symmetric() {
    let a = "Derin öğrenme ile Türkçe özetleme";
    let b = "türkçe ÖZETLEME için kural tabanlı yöntem";
    let ab = compare_texts(a, b);
    let ba = compare_texts(b, a);
    assert_eq!(ab.common_word_count, 2);
    assert_eq!(ab.similarity_ratio, ba.similarity_ratio);
    // 2 shared of 9 distinct words
    assert_eq!(ab.similarity_ratio, 22.22);
    assert_eq!(ab.difference_ratio, 77.78);
}

#[test]
fn test_comparison_of_empty_texts() {
    let result = compare_texts("", "");
    assert_eq!(result.similarity_ratio, 0.0);
    assert_eq!(result.difference_ratio, 100.0);
    assert!(result.common_words.is_empty());
}

#[test]
fn test_report_contains_every_section() {
    let stats = TextStatistics::compute(&"b".repeat(12_345), "Kısa özet.").with_page_estimate();
    let at = Utc.with_ymd_and_hms(2025, 3, 7, 9, 5, 0).unwrap();
    let report = render_report("Kısa özet.", &["özet".to_string(), "tez".to_string()], Some(&stats), at);

    assert!(report.starts_with("THESIS SUMMARY"));
    assert!(report.contains("Kısa özet."));
    assert!(report.contains("KEYWORDS:\nözet, tez"));
    assert!(report.contains("12,345"));
    assert!(report.contains("Generated: 07.03.2025 09:05:00"));
}
