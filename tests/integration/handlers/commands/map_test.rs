//! /map handler tests

use serde_json::json;
use serial_test::serial;
use SemestryBot::handlers::commands::map::handle_map;
use SemestryBot::handlers::{Outgoing, Photo};

use crate::helpers::*;

#[tokio::test]
#[serial]
async fn test_map_sends_coordinates_then_location() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.upstream
        .mock_geocoding(
            "Red Square",
            json!([
                { "lat": "55.7539303", "lon": "37.620795", "display_name": "Красная площадь, Москва" },
                { "lat": "1.0", "lon": "2.0", "display_name": "Elsewhere" }
            ]),
        )
        .await;

    let reply = RecordingReply::new();
    let request = ctx.command("map", "Red Square");
    handle_map(&reply, &ctx.services, &ctx.i18n, &request).await.unwrap();

    let sent = reply.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].visible_text(), Some("Координаты Red Square: 55.7539303, 37.620795"));
    assert_eq!(
        sent[1],
        Outgoing::Location {
            latitude: 55.7539303,
            longitude: 37.620795
        }
    );

    assert_eq!(ctx.activity_entries(), 1);
    assert!(ctx.activity_log().contains("Bot: Координаты Red Square: 55.7539303, 37.620795\n"));
}

#[tokio::test]
#[serial]
async fn test_map_nothing_found() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.upstream.mock_geocoding("Nowhere", json!([])).await;

    let reply = RecordingReply::new();
    let request = ctx.command("map", "Nowhere");
    handle_map(&reply, &ctx.services, &ctx.i18n, &request).await.unwrap();

    match reply.single() {
        Outgoing::Photo { photo: Photo::Asset(_), caption, .. } => assert_eq!(caption, "Не нашлось :с."),
        other => panic!("expected the not-found picture, got {:?}", other),
    }
}

#[tokio::test]
#[serial]
async fn test_map_bad_coordinates_are_connection_errors() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.upstream
        .mock_geocoding("Glitch", json!([{ "lat": "north", "lon": "east" }]))
        .await;

    let reply = RecordingReply::new();
    let request = ctx.command("map", "Glitch");
    handle_map(&reply, &ctx.services, &ctx.i18n, &request).await.unwrap();

    assert_eq!(reply.single_text(), "Ошибка соединения с сервером...");
}
