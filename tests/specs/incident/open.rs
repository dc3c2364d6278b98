//! Opening an incident from the slash command.

use crate::prelude::*;

#[tokio::test]
async fn creates_dated_channel_and_posts_main_message() {
    let bot = bot().today(2024, 3, 1).start();

    let reply = bot.incident("Payment API Down").await;

    assert_eq!(reply.status.as_u16(), 200);
    assert_eq!(reply.body, "Ok");
    let channel = bot.channel("2024_03_01_payment_api_down").unwrap();
    assert_eq!(
        bot.messages_in(channel.as_str()),
        vec!["Incident: Payment API Down"]
    );
}

#[tokio::test]
async fn announces_in_the_announcement_channel() {
    let bot = bot().start();
    bot.incident("db slow").await;

    let channel = bot.channel("2024_03_01_db_slow").unwrap();
    assert_eq!(
        bot.messages_in("CDOWN"),
        vec![format!("alice opened <#{channel}>")]
    );
    assert!(bot.chat.calls().contains(&ChatCall::JoinChannel {
        channel: "CDOWN".into()
    }));
}

#[tokio::test]
async fn long_descriptions_are_truncated_to_sixty_chars() {
    let bot = bot().start();
    let description = "the primary database cluster is refusing connections from every region";
    bot.incident(description).await;

    let names = bot.listing_names().await;
    let created = names.iter().find(|n| n.starts_with("2024_03_01_")).unwrap();
    assert_eq!(created.chars().count(), 60);
    assert!(created.starts_with("2024_03_01_the_primary_database"));
}

#[tokio::test]
async fn hyphens_and_spaces_become_underscores() {
    let bot = bot().start();
    bot.incident("Login-Service timeouts").await;

    assert!(bot.channel("2024_03_01_login_service_timeouts").is_some());
}

#[tokio::test]
async fn responders_are_invited_once() {
    let bot = bot()
        .responders("oncall-backend", &["U1", "U2"])
        .responders("sre", &["U2", "U3"])
        .start();
    bot.incident("db slow").await;

    let channel = bot.channel("2024_03_01_db_slow").unwrap();
    let invites: Vec<ChatCall> = bot
        .chat
        .calls()
        .into_iter()
        .filter(|c| matches!(c, ChatCall::InviteUsers { .. }))
        .collect();
    similar_asserts::assert_eq!(
        invites,
        vec![ChatCall::InviteUsers {
            channel,
            users: vec!["U1".into(), "U2".into(), "U3".into()],
        }]
    );
}

#[tokio::test]
async fn title_date_follows_the_calendar() {
    let bot = bot().today(2024, 3, 1).start();
    bot.incident("db slow").await;

    bot.set_today(2024, 3, 2);
    let reply = bot.incident("db slow").await;

    assert_eq!(reply.body, "Ok");
    assert!(bot.channel("2024_03_01_db_slow").is_some());
    assert!(bot.channel("2024_03_02_db_slow").is_some());
}
