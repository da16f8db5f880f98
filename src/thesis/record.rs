// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Heuristic field extraction from search listing fragments
//!
//! Listing markup is not under our control, so every field is an ordered
//! list of attempts where the first match wins. Results are lossy and
//! best-effort: a missing field is `None`, never an error.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use super::html::{parse_document, HtmlNode};
use super::types::{CandidateRecord, ThesisError, ThesisType, UNSPECIFIED};

/// Elements that may carry the title, tried in order
const TITLE_SELECTORS: &[&str] = &["a", "strong", "h3"];

/// Listing fragment selectors, tried in order
const LISTING_SELECTORS: &[&str] = &["div.tez-bilgi", "tr"];

/// Fragments examined per listing
const MAX_FRAGMENTS: usize = 10;

/// Records produced by the plain-text fallback
const MAX_PLAINTEXT_RECORDS: usize = 5;

const AUTHOR_LABEL: &str = "Yazar:";
const INSTITUTION_LABEL: &str = "Üniversite:";

/// Year assigned by the plain-text fallback, which cannot see dates
const PLAINTEXT_YEAR: &str = "2024";

static YEAR_REGEX: OnceLock<Regex> = OnceLock::new();

fn year_regex() -> &'static Regex {
    YEAR_REGEX.get_or_init(|| Regex::new(r"\d{4}").expect("valid year regex"))
}

/// Extract a record, or `None` if the fragment has no title
pub fn extract_record<N: HtmlNode>(fragment: &N) -> Option<CandidateRecord> {
    try_extract_record(fragment).ok()
}

pub fn try_extract_record<N: HtmlNode>(fragment: &N) -> Result<CandidateRecord, ThesisError> {
    let title_element = TITLE_SELECTORS
        .iter()
        .find_map(|selector| fragment.select_first(selector))
        .ok_or_else(|| ThesisError::RecordInvalid("no title element".to_string()))?;

    let title = title_element.stripped_text();
    if title.is_empty() {
        return Err(ThesisError::RecordInvalid("empty title".to_string()));
    }

    let link = title_element
        .attr("href")
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty());

    let text = fragment.visible_text();
    Ok(CandidateRecord {
        title,
        link,
        author: label_value(&text, AUTHOR_LABEL),
        institution: label_value(&text, INSTITUTION_LABEL),
        year: year_regex().find(&text).map(|m| m.as_str().to_string()),
        thesis_type: ThesisType::classify(&text),
    })
}

/// Text after the first occurrence of `label` up to the next line break
///
/// The label match is case-sensitive. An empty value counts as absent.
pub fn label_value(text: &str, label: &str) -> Option<String> {
    let (_, after) = text.split_once(label)?;
    let value = after.split('\n').next().unwrap_or_default().trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Records from a listing root, with plain-text fallback
pub fn extract_listing<N: HtmlNode>(root: &N) -> Vec<CandidateRecord> {
    let mut records = Vec::new();

    for selector in LISTING_SELECTORS {
        let fragments = root.select_all(selector);
        if fragments.is_empty() {
            continue;
        }
        records = fragments
            .iter()
            .take(MAX_FRAGMENTS)
            .filter_map(extract_record)
            .collect();
        debug!(
            "{} records from {} '{}' fragments",
            records.len(),
            fragments.len(),
            selector
        );
        break;
    }

    if records.is_empty() {
        records = extract_listing_from_plaintext(&root.visible_text());
        debug!("{} records from plain-text fallback", records.len());
    }
    records
}

/// Parse an HTML listing page and extract its records
pub fn parse_listing(html: &str) -> Vec<CandidateRecord> {
    let document = parse_document(html);
    extract_listing(&document.root_element())
}

/// Line-based guess at titles when no structural fragment yields a record
///
/// Fields other than the title are placeholders.
pub fn extract_listing_from_plaintext(text: &str) -> Vec<CandidateRecord> {
    let mut records = Vec::new();

    for line in text.lines().map(str::trim) {
        if !looks_like_title(line) {
            continue;
        }
        records.push(placeholder_record(line));
        if records.len() >= MAX_PLAINTEXT_RECORDS {
            break;
        }
    }
    records
}

fn looks_like_title(line: &str) -> bool {
    let chars = line.chars().count();
    chars > 20
        && chars < 200
        && !["http", "www", "Sayfa"]
            .iter()
            .any(|prefix| line.starts_with(prefix))
}

fn placeholder_record(title: &str) -> CandidateRecord {
    CandidateRecord {
        title: title.to_string(),
        link: None,
        author: Some(UNSPECIFIED.to_string()),
        institution: Some(UNSPECIFIED.to_string()),
        year: Some(PLAINTEXT_YEAR.to_string()),
        thesis_type: ThesisType::General,
    }
}
