// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text summarization, comparison and export endpoints

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{
    compare_handler, document_handler, export_json_handler, export_txt_handler, summarize_handler,
};
pub use request::{CompareRequest, DocumentParams, ExportRequest, SummarizeRequest};
pub use response::{CompareResponse, DocumentResponse, SummarizeResponse};
