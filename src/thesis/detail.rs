// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Thesis detail page extraction: abstract, keywords and metadata

use regex::Regex;
use std::sync::OnceLock;

use super::html::{parse_document, HtmlNode};
use super::types::{ThesisDetail, ThesisLanguage};

/// Abstract containers, tried in order
const ABSTRACT_SELECTORS: &[&str] = &["div.ozet", ".abstract", ".summary", "#ozet"];

const ABSTRACT_LABEL: &str = "Özet:";
const KEYWORDS_LABEL: &str = "Anahtar Kelimeler:";

/// Characters after the abstract label scanned when no keywords label follows
const ABSTRACT_WINDOW_CHARS: usize = 1000;

/// Longest abstract returned by the label fallback
pub const MAX_ABSTRACT_CHARS: usize = 500;

pub const MAX_PAGE_KEYWORDS: usize = 10;

static KEYWORD_REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();
static SUPERVISOR_REGEX: OnceLock<Regex> = OnceLock::new();
static PAGES_REGEX: OnceLock<Regex> = OnceLock::new();

fn keyword_regexes() -> &'static [Regex] {
    KEYWORD_REGEXES.get_or_init(|| {
        [
            r"(?i)Anahtar Kelimeler?:\s*([^\n\r]+)",
            r"(?i)Keywords?:\s*([^\n\r]+)",
            r"(?i)Key words?:\s*([^\n\r]+)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("valid keyword label regex"))
        .collect()
    })
}

fn separator_regex() -> &'static Regex {
    SEPARATOR_REGEX.get_or_init(|| Regex::new(r"[,;]").expect("valid separator regex"))
}

fn supervisor_regex() -> &'static Regex {
    SUPERVISOR_REGEX
        .get_or_init(|| Regex::new(r"Danışman:\s*([^\n\r]+)").expect("valid supervisor regex"))
}

fn pages_regex() -> &'static Regex {
    PAGES_REGEX.get_or_init(|| Regex::new(r"(\d+)\s*sayfa").expect("valid page count regex"))
}

/// Abstract from a structural container, else from the `Özet:` label
pub fn find_abstract<N: HtmlNode>(root: &N) -> Option<String> {
    let from_selector = ABSTRACT_SELECTORS.iter().find_map(|selector| {
        root.select_first(selector)
            .map(|element| element.stripped_text())
            .filter(|text| !text.is_empty())
    });
    from_selector.or_else(|| abstract_from_text(&root.visible_text()))
}

/// Label fallback: text between `Özet:` and `Anahtar Kelimeler:`
///
/// Without a keywords label, a fixed window after the abstract label is
/// taken. Label occurrences are removed and the result is capped at
/// `MAX_ABSTRACT_CHARS` with a `...` marker.
pub fn abstract_from_text(text: &str) -> Option<String> {
    let start = text.find(ABSTRACT_LABEL)?;
    let rest = &text[start..];

    let end = rest.find(KEYWORDS_LABEL).unwrap_or_else(|| {
        rest.char_indices()
            .nth(ABSTRACT_WINDOW_CHARS)
            .map(|(i, _)| i)
            .unwrap_or(rest.len())
    });

    let cleaned = rest[..end].replace(ABSTRACT_LABEL, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    if cleaned.chars().count() > MAX_ABSTRACT_CHARS {
        let truncated: String = cleaned.chars().take(MAX_ABSTRACT_CHARS).collect();
        Some(format!("{}...", truncated))
    } else {
        Some(cleaned.to_string())
    }
}

/// Keywords listed after a keywords label; first matching label wins
pub fn find_keywords(text: &str) -> Vec<String> {
    for regex in keyword_regexes() {
        if let Some(caps) = regex.captures(text) {
            return separator_regex()
                .split(&caps[1])
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .take(MAX_PAGE_KEYWORDS)
                .map(str::to_string)
                .collect();
        }
    }
    Vec::new()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThesisMetadata {
    pub supervisor: Option<String>,
    pub page_count: Option<u32>,
    pub language: Option<ThesisLanguage>,
}

pub fn extract_metadata(text: &str) -> ThesisMetadata {
    let supervisor = supervisor_regex()
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|s| !s.is_empty());

    let page_count = pages_regex()
        .captures(text)
        .and_then(|caps| caps[1].parse().ok());

    let language = if text.contains("Türkçe") {
        Some(ThesisLanguage::Turkish)
    } else if text.contains("İngilizce") {
        Some(ThesisLanguage::English)
    } else {
        None
    };

    ThesisMetadata {
        supervisor,
        page_count,
        language,
    }
}

/// All detail fields from a detail page root
pub fn extract_detail<N: HtmlNode>(link: &str, root: &N) -> ThesisDetail {
    let text = root.visible_text();
    let metadata = extract_metadata(&text);
    ThesisDetail {
        link: link.to_string(),
        abstract_text: find_abstract(root),
        keywords: find_keywords(&text),
        supervisor: metadata.supervisor,
        page_count: metadata.page_count,
        language: metadata.language,
    }
}

/// Parse a detail page body
pub fn parse_detail(link: &str, html: &str) -> ThesisDetail {
    let document = parse_document(html);
    extract_detail(link, &document.root_element())
}
