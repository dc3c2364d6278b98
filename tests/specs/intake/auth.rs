//! Who may open incidents.

use crate::prelude::*;

#[tokio::test]
async fn matching_verification_token_is_accepted() {
    let bot = bot().verification_token("s3cret").start();

    let reply = bot
        .command(&[("token", "s3cret"), ("text", "db slow")])
        .await;

    assert_eq!(reply.status.as_u16(), 200);
    assert!(bot.channel("2024_03_01_db_slow").is_some());
}

#[tokio::test]
async fn wrong_verification_token_is_rejected() {
    let bot = bot().verification_token("s3cret").start();

    let reply = bot.command(&[("token", "nope"), ("text", "db slow")]).await;

    assert_eq!(reply.status.as_u16(), 401);
    assert!(bot.chat.calls().is_empty());
}

#[tokio::test]
async fn allow_list_matches_user_name_or_id() {
    let bot = bot().allow("bob").allow("U7").start();

    let refused = bot.incident("db slow").await;
    assert_eq!(refused.status.as_u16(), 200);
    assert_ne!(refused.body, "Ok");
    assert!(bot.chat.calls().is_empty());

    let by_name = bot
        .command(&[("user_name", "bob"), ("user_id", "U2"), ("text", "db slow")])
        .await;
    assert_eq!(by_name.body, "Ok");

    let by_id = bot
        .command(&[("user_name", "carol"), ("user_id", "U7"), ("text", "cdn down")])
        .await;
    assert_eq!(by_id.body, "Ok");
}
