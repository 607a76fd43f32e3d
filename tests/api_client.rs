//! Integration tests for the API client
//!
//! These run [`HttpApiClient`] against an in-process stub of the
//! shortener/analytics services so every branch of the error taxonomy is
//! exercised over real HTTP.

use axum::{
    extract::{Json as JsonBody, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use linkscope::api::{AnalyticsApi, ApiError, HttpApiClient};
use linkscope::config::Config;

async fn analytics_stub(Path(code): Path<String>) -> Response {
    match code.as_str() {
        "ok123456" => Json(json!({
            "success": true,
            "data": {
                "short_link": "ok123456",
                "updated_at": "2026-03-03T09:00:00Z",
                "clicks": [
                    {
                        "country": "US",
                        "city": "NYC",
                        "ip": "203.0.113.7",
                        "created_at": "2026-03-01T10:00:00Z"
                    },
                    {
                        "country": "FR",
                        "city": "Paris",
                        "ip": "198.51.100.4",
                        "created_at": "2026-03-02T11:00:00Z"
                    }
                ]
            }
        }))
        .into_response(),
        "unsucces" => Json(json!({ "success": false, "data": null })).into_response(),
        "nodata12" => Json(json!({ "success": true, "data": null })).into_response(),
        "badjson1" => "<html>not json</html>".into_response(),
        "boom5000" => (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "No analytics entry for short link" })),
        )
            .into_response(),
    }
}

async fn shorten_stub(JsonBody(body): JsonBody<serde_json::Value>) -> Response {
    let url = body["url"].as_str().unwrap_or_default();
    if url.contains("reject") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }

    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": {
                "link": url,
                "short_link": "n3wc0d32",
                "created_at": "2026-03-01T00:00:00Z"
            }
        })),
    )
        .into_response()
}

/// Spawn the stub API and return a client pointed at it.
async fn stub_client() -> HttpApiClient {
    let app = Router::new()
        .route("/api/analytics/api/v1/{code}", get(analytics_stub))
        .route("/api/shortener/api/v1/", post(shorten_stub));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = Config {
        analytics_url: format!("http://{addr}/api/analytics/api/v1"),
        shortener_url: format!("http://{addr}/api/shortener/api/v1"),
        timeout_secs: 5,
    };
    HttpApiClient::new(&config).unwrap()
}

#[tokio::test]
async fn fetch_analytics_unwraps_envelope() {
    let client = stub_client().await;

    let analytics = client.fetch_analytics("ok123456").await.unwrap();
    assert_eq!(analytics.short_link, "ok123456");
    assert_eq!(analytics.clicks.len(), 2);
    assert_eq!(analytics.clicks[0].country, "US");
    assert_eq!(analytics.clicks[1].city, "Paris");
}

#[tokio::test]
async fn missing_link_is_not_found_and_distinct_from_server_error() {
    let client = stub_client().await;

    let err = client.fetch_analytics("missing1").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    let err = client.fetch_analytics("boom5000").await.unwrap_err();
    match err {
        ApiError::Status(status) => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_body_is_malformed() {
    let client = stub_client().await;

    let err = client.fetch_analytics("badjson1").await.unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[tokio::test]
async fn unsuccessful_and_dataless_envelopes_are_empty_payloads() {
    let client = stub_client().await;

    let err = client.fetch_analytics("unsucces").await.unwrap_err();
    assert!(matches!(err, ApiError::EmptyPayload));

    let err = client.fetch_analytics("nodata12").await.unwrap_err();
    assert!(matches!(err, ApiError::EmptyPayload));
}

#[tokio::test]
async fn shorten_returns_the_new_code() {
    let client = stub_client().await;

    let shortened = client.shorten("https://example.com/a/long/path").await.unwrap();
    assert_eq!(shortened.short_link, "n3wc0d32");
    assert_eq!(shortened.link, "https://example.com/a/long/path");
}

#[tokio::test]
async fn shorten_surfaces_server_failure() {
    let client = stub_client().await;

    let err = client.shorten("https://example.com/reject").await.unwrap_err();
    assert!(matches!(err, ApiError::Status(_)));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let config = Config {
        // Reserved port with nothing listening
        analytics_url: "http://127.0.0.1:9/api/analytics/api/v1".to_string(),
        shortener_url: "http://127.0.0.1:9/api/shortener/api/v1".to_string(),
        timeout_secs: 1,
    };
    let client = HttpApiClient::new(&config).unwrap();

    let err = client.fetch_analytics("ok123456").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
