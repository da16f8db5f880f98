// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detail page extraction

use thesis_digest::thesis::detail::{abstract_from_text, extract_metadata, MAX_ABSTRACT_CHARS};
use thesis_digest::thesis::types::ThesisLanguage;
use thesis_digest::thesis::{find_keywords, parse_detail};

use crate::common::{detail_html, LONG_ABSTRACT};

#[test]
fn test_keyword_label_scenario() {
    let keywords = find_keywords("Anahtar Kelimeler: yapay zeka, doğal dil işleme, özetleme");
    assert_eq!(keywords, vec!["yapay zeka", "doğal dil işleme", "özetleme"]);
}

#[test]
fn test_full_detail_page() {
    let html = detail_html("1").unwrap();
    let detail = parse_detail("tezDetay.jsp?id=1", &html);

    assert_eq!(detail.abstract_text.as_deref(), Some(LONG_ABSTRACT));
    assert_eq!(
        detail.keywords,
        vec!["özetleme", "doğal dil işleme", "Türkçe"]
    );
    assert_eq!(detail.supervisor.as_deref(), Some("Prof. Dr. Ali Kaya"));
    assert_eq!(detail.page_count, Some(312));
    assert_eq!(detail.language, Some(ThesisLanguage::Turkish));
}

#[test]
fn test_label_abstract_page() {
    let html = detail_html("2").unwrap();
    let detail = parse_detail("tezDetay.jsp?id=2", &html);
    assert_eq!(detail.abstract_text.as_deref(), Some("Kısa bir özet."));
    assert_eq!(detail.keywords, vec!["deneme"]);
    assert_eq!(detail.supervisor, None);
    assert_eq!(detail.page_count, None);
}

#[test]
fn test_page_without_any_field() {
    let detail = parse_detail("x", "<html><body><p>Boş sayfa</p></body></html>");
    assert_eq!(detail.abstract_text, None);
    assert!(detail.keywords.is_empty());
    assert_eq!(detail.language, None);
}

#[test]
fn test_label_abstract_window_without_keywords_label() {
    let body = "kelime ".repeat(300);
    let text = format!("Özet: {}", body);
    let abstract_text = abstract_from_text(&text).unwrap();
    assert!(abstract_text.ends_with("..."));
    assert_eq!(abstract_text.chars().count(), MAX_ABSTRACT_CHARS + 3);
}

#[test]
fn test_repeated_abstract_labels_removed() {
    let text = "Özet: Birinci kısım. Özet: ikinci kısım.\nAnahtar Kelimeler: a";
    assert_eq!(
        abstract_from_text(text).as_deref(),
        Some("Birinci kısım.  ikinci kısım.")
    );
}

#[test]
fn test_metadata_language_preference() {
    // Turkish wins when both languages are mentioned
    let metadata = extract_metadata("Dil: Türkçe\nÖzet dili: İngilizce");
    assert_eq!(metadata.language, Some(ThesisLanguage::Turkish));
}
