// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text summarization endpoints

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use thesis_digest::api::http_server::{create_app, AppState};
use tower::util::ServiceExt; // for `oneshot`

const SIX_SENTENCES: &str = "Bu bir giriş cümlesidir. Bu ikinci cümledir ve önemli kelimeler içerir önemli önemli. Üçüncü cümle de önemli kelimeler barındırır. Dördüncü cümle farklıdır. Beşinci cümle sonuçtur. Altıncı cümle ek bilgidir.";

fn app() -> Router {
    create_app(Arc::new(AppState::new_for_test()))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_root_and_health() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["thesisSearchEnabled"], false);
    assert!(json["endpoints"].is_array() || json["endpoints"].is_object());

    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn test_summarize_selects_frequent_sentences() {
    let request = post_json(
        "/v1/summarize",
        json!({ "text": SIX_SENTENCES, "maxSentences": 3 }),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["summarized"], true);
    assert_eq!(
        json["summary"],
        "Bu ikinci cümledir ve önemli kelimeler içerir önemli önemli. Üçüncü cümle de önemli kelimeler barındırır. Dördüncü cümle farklıdır."
    );
    assert_eq!(json["outcome"]["status"], "summary");
    assert!(json["keywords"].as_array().unwrap().len() <= 10);
    assert_eq!(json["stats"]["originalLength"], SIX_SENTENCES.chars().count());
    assert!(json["processedAt"].is_string());
}

#[tokio::test]
async fn test_summarize_rejects_short_text() {
    let response = app()
        .oneshot(post_json("/v1/summarize", json!({ "text": "çok kısa" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errorType"], "validation_error");
    assert_eq!(json["details"]["field"], "text");

    let response = app()
        .oneshot(post_json("/v1/summarize", json!({ "text": "" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_summarize_rejects_unknown_method() {
    let request = post_json(
        "/v1/summarize",
        json!({ "text": SIX_SENTENCES, "method": "lda" }),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_summarize_advisory_between_limits() {
    // Accepted by the endpoint, too short for the summarizer
    let text = "Bu metin elli karakterden uzun fakat yüz karakterden kısadır.";
    let response = app()
        .oneshot(post_json("/v1/summarize", json!({ "text": text })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["summarized"], false);
    assert_eq!(json["outcome"]["status"], "input_too_short");
}

#[tokio::test]
async fn test_document_upload() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/documents?filename=tez.txt&maxSentences=2")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(SIX_SENTENCES))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["filename"], "tez.txt");
    assert_eq!(json["preview"], SIX_SENTENCES);
    assert_eq!(json["summarized"], true);
    assert_eq!(json["stats"]["estimatedPages"], 0);
}

#[tokio::test]
async fn test_document_upload_rejects_other_formats() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/documents?filename=tez.pdf")
        .body(Body::from(SIX_SENTENCES))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_compare() {
    let request = post_json(
        "/v1/compare",
        json!({ "text1": "Yapay zeka ve dil", "text2": "yapay ZEKA ile görüntü" }),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["commonWordCount"], 2);
    assert_eq!(json["similarityRatio"], 33.33);
    assert!(json["comparedAt"].is_string());
}

#[tokio::test]
async fn test_export_txt_is_attachment() {
    let request = post_json(
        "/v1/export/txt",
        json!({ "summary": "Kısa özet.", "keywords": ["özet", "tez"] }),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=thesis-summary.txt"
    );
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let report = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(report.contains("Kısa özet."));
    assert!(report.contains("özet, tez"));
    assert!(report.contains("- not available"));
}

#[tokio::test]
async fn test_export_json_adds_metadata() {
    let request = post_json(
        "/v1/export/json",
        json!({ "summary": "Kısa özet.", "keywords": ["özet"] }),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=thesis-summary.json"
    );

    let json = body_json(response).await;
    assert_eq!(json["summary"], "Kısa özet.");
    assert_eq!(json["keywords"][0], "özet");
    assert_eq!(json["format"], "JSON");
    assert_eq!(json["formatVersion"], "1.0");
    assert!(json["exportedAt"].is_string());
}
