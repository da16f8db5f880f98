// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Record extraction from listing fragments and pages

use scraper::Html;
use thesis_digest::thesis::{
    extract_listing, extract_listing_from_plaintext, extract_record, parse_listing, HtmlNode,
    ThesisType,
};

use crate::common::LISTING_HTML;

#[test]
fn test_table_row_record() {
    let html = "<table><tr><td><a href=\"tezDetay.jsp?id=9\">Derin Öğrenme ile Metin Sınıflandırma</a></td><td>Yazar: Ayşe Yılmaz\nÜniversite: Ankara Üniversitesi\n2021 Doktora Tezi</td></tr></table>";
    let document = Html::parse_document(html);
    let row = document.root_element().select_first("tr").unwrap();

    let record = extract_record(&row).unwrap();
    assert_eq!(record.title, "Derin Öğrenme ile Metin Sınıflandırma");
    assert_eq!(record.link.as_deref(), Some("tezDetay.jsp?id=9"));
    assert_eq!(record.author.as_deref(), Some("Ayşe Yılmaz"));
    assert_eq!(record.institution.as_deref(), Some("Ankara Üniversitesi"));
    assert_eq!(record.year.as_deref(), Some("2021"));
    assert_eq!(record.thesis_type, ThesisType::Doctorate);
}

#[test]
fn test_title_falls_back_to_strong_then_h3() {
    let document = Html::parse_document(
        "<div class=\"x\"><strong>Kalın Başlık</strong><h3>Alt Başlık</h3></div><div class=\"y\"><h3>Sadece H3</h3></div>",
    );
    let root = document.root_element();

    let strong = extract_record(&root.select_first("div.x").unwrap()).unwrap();
    assert_eq!(strong.title, "Kalın Başlık");
    assert!(strong.link.is_none());

    let h3 = extract_record(&root.select_first("div.y").unwrap()).unwrap();
    assert_eq!(h3.title, "Sadece H3");
    assert_eq!(h3.thesis_type, ThesisType::Unspecified);
}

#[test]
fn test_empty_link_text_is_invalid() {
    let document = Html::parse_document("<div><a href=\"x\">   </a>2020</div>");
    let div = document.root_element().select_first("div").unwrap();
    assert!(extract_record(&div).is_none());
}

#[test]
fn test_listing_uses_structural_fragments() {
    let records = parse_listing(LISTING_HTML);
    // The fragment without a title is dropped
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].thesis_type, ThesisType::Doctorate);
    assert_eq!(records[1].author.as_deref(), Some("Mehmet Demir"));
    assert_eq!(records[1].thesis_type, ThesisType::Masters);
    assert_eq!(records[2].year.as_deref(), Some("2018"));
    assert_eq!(records[2].thesis_type, ThesisType::Masters);
}

#[test]
fn test_listing_examines_first_ten_fragments() {
    let rows: String = (0..15)
        .map(|i| format!("<tr><td><a href=\"t{}\">Tez {}</a></td></tr>", i, i))
        .collect();
    let records = parse_listing(&format!("<table>{}</table>", rows));
    assert_eq!(records.len(), 10);
    assert_eq!(records[9].title, "Tez 9");
}

#[test]
fn test_listing_falls_back_to_plaintext() {
    let html = "<html><body><p>Sayfa 1 - toplam kırk iki kayıt bulundu</p>\n<p>Makine Öğrenmesi ile Türkçe Duygu Analizi</p>\n<p>www.tez.yok.gov.tr adresinden erişilmiştir</p></body></html>";
    let document = Html::parse_document(html);
    let records = extract_listing(&document.root_element());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Makine Öğrenmesi ile Türkçe Duygu Analizi");
    assert_eq!(records[0].thesis_type, ThesisType::General);
}

#[test]
fn test_plaintext_line_bounds() {
    let exactly_twenty = "a".repeat(20);
    let long = "b".repeat(200);
    let ok = "c".repeat(21);
    let text = format!("{}\n{}\n{}\n", exactly_twenty, long, ok);
    let records = extract_listing_from_plaintext(&text);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, ok);
}
