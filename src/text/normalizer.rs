// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text cleanup shared by every analysis stage
//!
//! Keeps the Turkish alphabet intact while stripping symbols, markup debris
//! and layout whitespace left behind by PDF and HTML extraction.

use regex::Regex;
use std::sync::OnceLock;

/// Letters of the Turkish alphabet that must always survive cleanup
pub const TURKISH_LETTERS: &str = "çğıöşüÇĞIİÖŞÜ";

fn disallowed_chars() -> &'static Regex {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    DISALLOWED.get_or_init(|| {
        Regex::new(&format!(r"[^\w\s.,!?;:{}]", TURKISH_LETTERS))
            .expect("character class is a valid regex")
    })
}

/// Normalize raw text for summarization and keyword extraction
///
/// Collapses whitespace runs (newlines included) to single spaces, replaces
/// every character outside word characters, whitespace, `. , ! ? ; :` and
/// the Turkish alphabet with a space, then collapses again. Case and the
/// order of retained characters are never changed.
pub fn normalize(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let replaced = disallowed_chars().replace_all(&collapsed, " ");
    collapse_whitespace(&replaced)
}

/// Join whitespace-separated pieces with single spaces, trimming both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
