#![allow(clippy::unwrap_used)]
//! Provider clients against local stand-ins for the real services.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;
use tl_relay::translation::{
    FailureKind, LibreTranslate, MyMemory, Provider, ProviderError, http_client,
};
use tokio::net::TcpListener;

async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn libretranslate(addr: SocketAddr, api_key: Option<&str>, timeout: Duration) -> LibreTranslate {
    LibreTranslate::new(
        "libretranslate",
        format!("http://{addr}/translate"),
        api_key.map(str::to_string),
        timeout,
        http_client().unwrap(),
    )
}

fn mymemory(addr: SocketAddr, email: Option<&str>) -> MyMemory {
    MyMemory::new(
        "mymemory",
        format!("http://{addr}/get"),
        email.map(str::to_string),
        Duration::from_secs(5),
        http_client().unwrap(),
    )
}

#[tokio::test]
async fn test_libretranslate_posts_json_body() {
    let app = Router::new().route(
        "/translate",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["format"], "text");
            let text = format!(
                "{}|{}|{}|{}",
                body["q"].as_str().unwrap(),
                body["source"].as_str().unwrap(),
                body["target"].as_str().unwrap(),
                body["api_key"].as_str().unwrap_or("-"),
            );
            Json(json!({ "translatedText": text }))
        }),
    );
    let addr = spawn(app).await;

    let provider = libretranslate(addr, None, Duration::from_secs(5));
    let text = provider.translate("Hello", "en", "es").await.unwrap();
    assert_eq!(text, "Hello|en|es|-");

    let provider = libretranslate(addr, Some("secret"), Duration::from_secs(5));
    let text = provider.translate("Hello", "en", "es").await.unwrap();
    assert_eq!(text, "Hello|en|es|secret");
}

#[tokio::test]
async fn test_libretranslate_server_error_is_http_failure() {
    let app = Router::new().route(
        "/translate",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = spawn(app).await;

    let err = libretranslate(addr, None, Duration::from_secs(5))
        .translate("Hello", "en", "es")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::HttpError);
    assert_eq!(err.provider(), "libretranslate");
    assert!(err.to_string().contains("500"));
    assert!(err.to_string().contains("boom"));
}

#[tokio::test]
async fn test_large_error_body_is_cut_short() {
    let app = Router::new().route(
        "/translate",
        post(|| async { (StatusCode::BAD_GATEWAY, "x".repeat(256 * 1024)) }),
    );
    let addr = spawn(app).await;

    let err = libretranslate(addr, None, Duration::from_secs(5))
        .translate("Hello", "en", "es")
        .await
        .unwrap_err();

    match err {
        ProviderError::Http { status, body, .. } => {
            assert_eq!(status.as_u16(), 502);
            assert!(body.len() <= 512 + "...".len());
            assert!(body.ends_with("..."));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_libretranslate_missing_field_is_malformed() {
    let app = Router::new().route(
        "/translate",
        post(|| async { Json(json!({ "detectedLanguage": "en" })) }),
    );
    let addr = spawn(app).await;

    let err = libretranslate(addr, None, Duration::from_secs(5))
        .translate("Hello", "en", "es")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::MalformedResponse);
}

#[tokio::test]
async fn test_libretranslate_non_json_is_malformed() {
    let app = Router::new().route("/translate", post(|| async { "<html>busy</html>" }));
    let addr = spawn(app).await;

    let err = libretranslate(addr, None, Duration::from_secs(5))
        .translate("Hello", "en", "es")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::MalformedResponse);
}

#[tokio::test]
async fn test_libretranslate_slow_response_times_out() {
    let app = Router::new().route(
        "/translate",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "translatedText": "too late" }))
        }),
    );
    let addr = spawn(app).await;

    let err = libretranslate(addr, None, Duration::from_millis(100))
        .translate("Hello", "en", "es")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::Timeout);
}

#[tokio::test]
async fn test_unreachable_host_is_network_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = libretranslate(addr, None, Duration::from_secs(5))
        .translate("Hello", "en", "es")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::NetworkError);
}

#[tokio::test]
async fn test_mymemory_sends_query_parameters() {
    let app = Router::new().route(
        "/get",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let text = format!(
                "{}|{}|{}",
                params["q"],
                params["langpair"],
                params.get("de").map_or("-", String::as_str),
            );
            Json(json!({
                "responseData": { "translatedText": text },
                "responseStatus": 200
            }))
        }),
    );
    let addr = spawn(app).await;

    let text = mymemory(addr, None)
        .translate("a & b?", "en", "fr")
        .await
        .unwrap();
    assert_eq!(text, "a & b?|en|fr|-");

    let text = mymemory(addr, Some("ops@example.com"))
        .translate("Hello", "en", "fr")
        .await
        .unwrap();
    assert_eq!(text, "Hello|en|fr|ops@example.com");
}

#[tokio::test]
async fn test_mymemory_in_body_error_status_is_http_failure() {
    let app = Router::new().route(
        "/get",
        get(|| async {
            Json(json!({
                "responseData": { "translatedText": "MYMEMORY WARNING: YOU USED ALL AVAILABLE FREE TRANSLATIONS" },
                "responseStatus": "429",
                "responseDetails": "quota exceeded"
            }))
        }),
    );
    let addr = spawn(app).await;

    let err = mymemory(addr, None)
        .translate("Hello", "en", "fr")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::HttpError);
    assert!(err.to_string().contains("429"));
    assert!(err.to_string().contains("quota exceeded"));
}

#[tokio::test]
async fn test_mymemory_missing_response_data_is_malformed() {
    let app = Router::new().route(
        "/get",
        get(|| async { Json(json!({ "responseStatus": 200 })) }),
    );
    let addr = spawn(app).await;

    let err = mymemory(addr, None)
        .translate("Hello", "en", "fr")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::MalformedResponse);
}
