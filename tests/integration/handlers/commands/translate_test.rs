//! /translate handler tests

use serial_test::serial;
use SemestryBot::handlers::commands::translate::handle_translate;

use crate::helpers::*;

#[tokio::test]
#[serial]
async fn test_translate_echoes_source_and_translation() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.upstream.mock_translation("good morning", "доброе утро").await;

    let reply = RecordingReply::new();
    let request = ctx.command("translate", "good   morning");
    handle_translate(&reply, &ctx.services, &ctx.i18n, &request).await.unwrap();

    assert_eq!(reply.single_text(), "Источник:\ngood morning\n\nПеревод:\nдоброе утро");
    assert_eq!(ctx.activity_entries(), 1);
}

#[tokio::test]
#[serial]
async fn test_translate_failure_keeps_source() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.upstream.mock_translation_status(503).await;

    let reply = RecordingReply::new();
    let request = ctx.command("translate", "hello");
    handle_translate(&reply, &ctx.services, &ctx.i18n, &request).await.unwrap();

    assert_eq!(
        reply.single_text(),
        "Источник:\nhello\n\nПеревод:\nОшибка соединения с переводчиком..."
    );
}

#[tokio::test]
#[serial]
async fn test_translate_empty_result() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.upstream.mock_translation("hello", "").await;

    let reply = RecordingReply::new();
    let request = ctx.command("translate", "hello");
    handle_translate(&reply, &ctx.services, &ctx.i18n, &request).await.unwrap();

    assert!(reply.single_text().ends_with("Перевод:\nНе удалось перевести текст."));
}
