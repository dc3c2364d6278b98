//! How failures are reported back to the person who typed the command.

use crate::prelude::*;

#[tokio::test]
async fn dispatch_failure_returns_generic_message_as_error() {
    let bot = bot().start();
    bot.chat.fail(
        method::CREATE_CHANNEL,
        ChatError::api(method::CREATE_CHANNEL, "dispatch_failed"),
    );

    let reply = bot.incident("db slow").await;

    assert_eq!(reply.status.as_u16(), 500);
    assert_eq!(reply.body, GENERIC_ERROR);
    assert!(bot.messages_in(REQUEST_CHANNEL).is_empty());
}

#[tokio::test]
async fn rate_limit_mid_workflow_is_transient() {
    let bot = bot().start();
    bot.chat.fail(
        method::LIST_CHANNELS,
        ChatError::api(method::LIST_CHANNELS, "ratelimited"),
    );

    let reply = bot.incident("db slow").await;

    assert_eq!(reply.status.as_u16(), 500);
}

#[tokio::test]
async fn duplicate_channel_is_reported_in_request_channel() {
    let bot = bot().live("CDUP", "2024_03_01_db_slow").start();

    let reply = bot.incident("db slow").await;

    assert_eq!(reply.status.as_u16(), 200);
    assert_eq!(reply.body, "Ok");
    assert_eq!(bot.messages_in(REQUEST_CHANNEL), vec![GENERIC_ERROR]);
}

#[tokio::test]
async fn missing_announcement_channel_is_reported() {
    let bot = bot().start();
    bot.chat.fail(
        method::JOIN_CHANNEL,
        ChatError::api(method::JOIN_CHANNEL, "channel_not_found"),
    );

    let reply = bot.incident("db slow").await;

    // Joining the request channel fails too, so nothing can be posted there.
    assert_eq!(reply.status.as_u16(), 200);
    assert!(bot.messages_in(REQUEST_CHANNEL).is_empty());
}
