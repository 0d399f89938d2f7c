//! /start and /help handler tests

use serial_test::serial;
use teloxide::types::ReplyMarkup;
use SemestryBot::handlers::commands::{dispatch, Command};
use SemestryBot::handlers::Outgoing;

use crate::helpers::*;

#[tokio::test]
#[serial]
async fn test_start_and_help_share_the_command_list() {
    let ctx = TestContext::new().await.expect("Failed to create test context");

    for cmd in [Command::Start(String::new()), Command::Help(String::new())] {
        let reply = RecordingReply::new();
        let (name, _) = cmd.name_and_args();
        let request = ctx.command(name, "");
        dispatch(&reply, &ctx.services, &ctx.i18n, &cmd, &request).await.unwrap();

        match reply.single() {
            Outgoing::Text { text, options } => {
                assert!(text.starts_with("Привет! Доступные команды:"));
                assert!(text.contains("/most_wanted"));
                assert!(!options.markdown);
                assert!(matches!(options.markup, Some(ReplyMarkup::Keyboard(_))));
            }
            other => panic!("expected the help text, got {:?}", other),
        }
    }

    assert_eq!(ctx.activity_entries(), 2);
    assert!(ctx.activity_log().contains("User: /start\nBot: Привет!"));
    assert_eq!(ctx.upstream.total_requests().await, 0);
}
