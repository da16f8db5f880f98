// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Keyword extraction strategies and capability handling

use thesis_digest::keywords::{
    KeywordAlgorithm, KeywordCapabilities, KeywordExtractor, MAX_KEYWORDS,
};

const ABSTRACT: &str = "Bu çalışmada doğal dil işleme yöntemleri ile Türkçe metinlerin otomatik özetlenmesi incelenmiştir. Doğal dil işleme alanında otomatik özetleme önemli bir problemdir. Önerilen yöntem Türkçe tezler üzerinde denenmiş, otomatik özetleme başarısı ölçülmüştür.";

#[test]
fn test_unavailable_strategy_returns_empty() {
    let extractor = KeywordExtractor::new(KeywordCapabilities::with([
        KeywordAlgorithm::GraphRanking,
    ]));
    assert!(extractor
        .extract(ABSTRACT, KeywordAlgorithm::StatisticalNGram)
        .is_empty());
    assert!(extractor
        .try_extract(ABSTRACT, KeywordAlgorithm::StatisticalNGram)
        .is_err());
}

#[cfg(feature = "keywords-yake")]
#[test]
fn test_yake_is_preferred_and_bounded() {
    let extractor = KeywordExtractor::default();
    assert_eq!(
        extractor.capabilities().preferred(),
        Some(KeywordAlgorithm::StatisticalNGram)
    );
    let keywords = extractor.extract_default(ABSTRACT);
    assert!(!keywords.is_empty());
    assert!(keywords.len() <= MAX_KEYWORDS);
}

#[cfg(feature = "keywords-rake")]
mod rake_strategy {
    use super::*;
    use std::collections::HashSet;
    use thesis_digest::keywords::rake::{RakeStrategy, MAX_PHRASE_WORDS};
    use thesis_digest::keywords::KeywordStrategy;

    #[test]
    fn test_rake_phrases_are_short_and_unique() {
        let rake = RakeStrategy::with_stopwords(["bu", "ile", "bir", "ve", "üzerinde"]);
        let extractor = KeywordExtractor::with_strategies(vec![Box::new(rake)]);
        let keywords = extractor.extract(ABSTRACT, KeywordAlgorithm::GraphRanking);

        assert!(!keywords.is_empty());
        assert!(keywords.len() <= MAX_KEYWORDS);
        assert!(keywords
            .iter()
            .all(|k| k.split_whitespace().count() <= MAX_PHRASE_WORDS));
        let unique: HashSet<_> = keywords.iter().map(|k| k.to_lowercase()).collect();
        assert_eq!(unique.len(), keywords.len());
    }

    #[test]
    fn test_ranked_scores_descend() {
        let rake = RakeStrategy::with_stopwords(["bu", "ile", "bir", "ve"]);
        let ranked = rake.extract(ABSTRACT, MAX_KEYWORDS);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_turkish_rake_filters_stopwords() {
        let keywords = RakeStrategy::turkish().extract("ve ile bu için", MAX_KEYWORDS);
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_builtin_rake_is_available() {
        let extractor = KeywordExtractor::new(KeywordCapabilities::with([
            KeywordAlgorithm::GraphRanking,
        ]));
        assert!(extractor
            .capabilities()
            .is_available(KeywordAlgorithm::GraphRanking));
        assert!(!extractor
            .extract("derin öğrenme ve görüntü işleme", KeywordAlgorithm::GraphRanking)
            .is_empty());
    }
}
