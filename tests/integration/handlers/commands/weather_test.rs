//! /weather handler tests

use serde_json::json;
use serial_test::serial;
use SemestryBot::handlers::commands::weather::handle_weather;
use SemestryBot::handlers::{Outgoing, Photo};

use crate::helpers::*;

#[tokio::test]
#[serial]
async fn test_weather_report_for_city() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.upstream.mock_weather("Moscow", weather_json(20.5, 40.0, "clear")).await;

    let reply = RecordingReply::new();
    let request = ctx.command("weather", "Moscow");
    handle_weather(&reply, &ctx.services, &ctx.i18n, &request)
        .await
        .expect("weather handler should succeed");

    match reply.single() {
        Outgoing::Photo { photo: Photo::Url(url), caption, options } => {
            assert!(url.as_str().ends_with("/img/wn/01d@2x.png"), "icon url: {}", url);
            assert!(caption.contains("Clear"));
            assert!(caption.contains("20.5°C"));
            assert!(caption.contains("40%"));
            assert!(options.markdown);
        }
        other => panic!("expected a weather photo, got {:?}", other),
    }

    assert_eq!(ctx.activity_entries(), 1);
    assert!(ctx.activity_log().contains("User: /weather Moscow\nBot: Погода в Moscow:"));
}

#[tokio::test]
#[serial]
async fn test_weather_city_not_found() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.upstream.mock_weather_status(404).await;

    let reply = RecordingReply::new();
    let request = ctx.command("weather", "Atlantis");
    handle_weather(&reply, &ctx.services, &ctx.i18n, &request).await.unwrap();

    match reply.single() {
        Outgoing::Photo { photo: Photo::Asset(path), caption, .. } => {
            assert!(path.ends_with("cat-404-error.jpg"));
            assert_eq!(caption, "Город не найден.");
            assert!(!caption.contains("°C"));
        }
        other => panic!("expected the not-found picture, got {:?}", other),
    }
    assert_eq!(ctx.activity_entries(), 1);
}

#[tokio::test]
#[serial]
async fn test_weather_upstream_failure() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.upstream.mock_weather_status(500).await;

    let reply = RecordingReply::new();
    let request = ctx.command("weather", "Moscow");
    handle_weather(&reply, &ctx.services, &ctx.i18n, &request).await.unwrap();

    assert_matches::assert_matches!(reply.single(), Outgoing::Text { .. });
    assert_eq!(reply.single_text(), "Ошибка соединения с сервером...");
    assert_eq!(ctx.activity_entries(), 1);
}

#[tokio::test]
#[serial]
async fn test_weather_without_condition_is_text() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.upstream
        .mock_weather("Oslo", json!({ "weather": [], "main": { "temp": -3.0 }, "name": "Oslo" }))
        .await;

    let reply = RecordingReply::new();
    let request = ctx.command("weather", "Oslo");
    handle_weather(&reply, &ctx.services, &ctx.i18n, &request).await.unwrap();

    match reply.single() {
        Outgoing::Text { text, options } => {
            assert!(text.starts_with("Погода в Oslo:\nнеизвестно\n"));
            assert!(text.contains("*-3°C*"));
            assert!(text.contains("*неизвестно%*"));
            assert!(options.markdown);
        }
        other => panic!("expected a text report, got {:?}", other),
    }
}
