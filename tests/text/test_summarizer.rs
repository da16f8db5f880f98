// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Extractive summarizer behaviour through the public API

use thesis_digest::text::{ExtractiveSummarizer, SummarizerConfig, SummaryOutcome, TextError};

const SIX_SENTENCES: &str = "Bu bir giriş cümlesidir. Bu ikinci cümledir ve önemli kelimeler içerir önemli önemli. Üçüncü cümle de önemli kelimeler barındırır. Dördüncü cümle farklıdır. Beşinci cümle sonuçtur. Altıncı cümle ek bilgidir.";

fn summarizer() -> ExtractiveSummarizer {
    ExtractiveSummarizer::new(SummarizerConfig::default())
}

#[test]
fn test_repeated_words_select_their_sentences() {
    let outcome = summarizer().summarize_with(SIX_SENTENCES, 3);
    assert_eq!(
        outcome,
        SummaryOutcome::Summary {
            text: "Bu ikinci cümledir ve önemli kelimeler içerir önemli önemli. Üçüncü cümle de önemli kelimeler barındırır. Dördüncü cümle farklıdır.".to_string()
        }
    );
}

#[test]
fn test_summary_sentences_keep_source_order() {
    let text = SIX_SENTENCES;
    let outcome = summarizer().summarize_with(text, 4);
    let summary = outcome.text().unwrap();
    let positions: Vec<usize> = summary
        .trim_end_matches('.')
        .split(". ")
        .map(|s| text.find(s).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    assert_eq!(positions.len(), 4);
}

#[test]
fn test_summary_never_exceeds_max_sentences() {
    let text = (0..20)
        .map(|i| format!("Bu uzun cümle numarası {} için yazılmış örnek metindir", i))
        .collect::<Vec<_>>()
        .join(". ");
    for max in 1..=6 {
        let summary = summarizer().summarize_with(&text, max);
        let count = summary.text().unwrap().split(". ").count();
        assert!(count <= max, "max {} produced {} sentences", max, count);
    }
}

#[test]
fn test_short_input_advisory() {
    let text = "k".repeat(80);
    let outcome = summarizer().summarize(&text);
    assert!(matches!(
        outcome,
        SummaryOutcome::InputTooShort {
            length: 80,
            minimum: 100
        }
    ));
    assert!(outcome.display_text().contains("100"));
    assert_eq!(
        outcome.into_result(),
        Err(TextError::InputTooShort {
            length: 80,
            minimum: 100
        })
    );
}

#[test]
fn test_whole_text_when_few_sentences() {
    let text = "Bu çalışma Türkçe tezlerin otomatik özetlenmesini inceler. Özetleme yöntemleri karşılaştırılmış ve tartışılmıştır";
    let outcome = summarizer().summarize_with(text, 5);
    assert_eq!(
        outcome.text(),
        Some("Bu çalışma Türkçe tezlerin otomatik özetlenmesini inceler. Özetleme yöntemleri karşılaştırılmış ve tartışılmıştır.")
    );
}

#[test]
fn test_custom_thresholds() {
    let config = SummarizerConfig {
        min_input_chars: 10,
        min_normalized_chars: 10,
        ..Default::default()
    };
    assert!(config.validate().is_ok());
    let outcome = ExtractiveSummarizer::new(config)
        .summarize("Bu cümle yirmi karakterden uzundur.");
    assert!(outcome.is_summary());
}

#[test]
fn test_resummarizing_a_summary_keeps_its_sentences() {
    let text = [
        "Türkçe tezlerin sayısı son yıllarda hızla artmaktadır",
        "Bu tezlerin özetlerini okumak araştırmacılar için zaman almaktadır",
        "Otomatik özetleme yöntemleri bu sorunu çözmeyi amaçlamaktadır",
        "Çıkarımsal özetleme metindeki önemli cümleleri seçmektedir",
        "Kelime frekansı cümlelerin önemini belirlemek için kullanılmaktadır",
        "Önemli kelimeler içeren cümleler daha yüksek puan almaktadır",
        "Metnin başındaki ve sonundaki cümleler ek puan kazanmaktadır",
        "Deneyler ulusal tez merkezindeki özetler üzerinde yapılmıştır",
        "Sonuçlar otomatik özetlemenin tutarlı olduğunu göstermektedir",
        "Gelecekte farklı özetleme yöntemleri karşılaştırılacaktır",
        "Çalışmanın kaynak kodu araştırmacıların kullanımına açılmıştır",
    ]
    .join(". ");

    let first = summarizer().summarize_with(&text, 4);
    let first_text = first.text().expect("text is long enough").to_string();
    let second = summarizer().summarize_with(&first_text, 4);

    let sentences = |s: &str| -> Vec<String> {
        s.split('.')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    };
    assert_eq!(sentences(&first_text).len(), 4);
    assert_eq!(sentences(second.text().unwrap()), sentences(&first_text));
}
