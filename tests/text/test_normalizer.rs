// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Normalization of extracted thesis text

use thesis_digest::text::normalizer::{collapse_whitespace, normalize};
use thesis_digest::text::Document;

#[test]
fn test_pdf_layout_is_flattened() {
    let raw = "ÖZET\n\nBu tez,   Türkçe\tmetinlerin\r\nözetlenmesini • inceler.";
    assert_eq!(normalize(raw), "ÖZET Bu tez, Türkçe metinlerin özetlenmesini inceler.");
}

#[test]
fn test_markup_debris_is_removed() {
    assert_eq!(
        normalize("<p>Giriş</p> &amp; \"sonuç\""),
        "p Giriş p amp; sonuç"
    );
}

#[test]
fn test_collapse_whitespace_only_touches_spacing() {
    assert_eq!(collapse_whitespace("  a*b \n c  "), "a*b c");
}

#[test]
fn test_document_caches_normalized_form() {
    let document = Document::new("  Şekil 1: Öğrenme   eğrisi  ");
    assert_eq!(document.normalized(), "Şekil 1: Öğrenme eğrisi");
    assert_eq!(document.raw_len(), 25);
    assert_eq!(document.normalized_len(), 23);
}
