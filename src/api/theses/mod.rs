// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Thesis search, detail and analysis endpoints

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{
    advanced_search_handler, detail_handler, search_get_handler, search_post_handler,
    thesis_summarize_handler,
};
pub use request::{DetailParams, ThesisSearchRequest, ThesisSummarizeRequest};
pub use response::{AdvancedSearchResponse, DetailResponse, ThesisSummarizeResponse};
