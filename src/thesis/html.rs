// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Minimal HTML capability used by the extraction heuristics
//!
//! Record and detail extraction only need "first/all elements matching a
//! selector", "visible text" and "attribute". `HtmlNode` captures exactly
//! that; the `scraper` implementation lives here.

use scraper::{ElementRef, Html, Selector};

pub trait HtmlNode: Sized {
    /// First descendant matching a CSS selector; invalid selectors match nothing
    fn select_first(&self, selector: &str) -> Option<Self>;

    /// All descendants matching a CSS selector, in document order
    fn select_all(&self, selector: &str) -> Vec<Self>;

    /// Concatenated text nodes, line breaks preserved
    fn visible_text(&self) -> String;

    fn attr(&self, name: &str) -> Option<String>;

    /// Text nodes trimmed, empty ones dropped, joined with single spaces
    fn stripped_text(&self) -> String {
        self.visible_text()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> HtmlNode for ElementRef<'a> {
    fn select_first(&self, selector: &str) -> Option<Self> {
        let selector = Selector::parse(selector).ok()?;
        self.select(&selector).next()
    }

    fn select_all(&self, selector: &str) -> Vec<Self> {
        match Selector::parse(selector) {
            Ok(selector) => self.select(&selector).collect(),
            Err(_) => Vec::new(),
        }
    }

    fn visible_text(&self) -> String {
        self.text().collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }
}

/// Parse a full HTML page
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}
