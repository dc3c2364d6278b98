// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn created_channel_appears_in_listing() {
    let fake = FakeChatAdapter::new().with_channel("C1", "general", false);

    let id = fake.create_channel("2024_03_01_db_down").await.unwrap();

    let listing = fake.list_channels().await.unwrap();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[1].id, id);
    assert_eq!(listing[1].name, "2024_03_01_db_down");
    assert!(!listing[1].is_archived);
    assert_eq!(fake.channel_id("2024_03_01_db_down"), Some(id));
}

#[tokio::test]
async fn duplicate_name_is_rejected() {
    let fake = FakeChatAdapter::new().with_channel("C1", "2024_03_01_db_down", true);

    let err = fake.create_channel("2024_03_01_db_down").await.unwrap_err();
    assert_eq!(err.code(), Some("name_taken"));
}

#[tokio::test]
async fn unknown_channel_is_not_found() {
    let fake = FakeChatAdapter::new();
    let missing = ChannelId::new("CNOPE");

    let post = fake.post_message(&missing, "hi").await.unwrap_err();
    let join = fake.join_channel(&missing).await.unwrap_err();
    let invite = fake.invite_users(&missing, &["U1".to_string()]).await.unwrap_err();

    for err in [post, join, invite] {
        assert_eq!(err.code(), Some("channel_not_found"));
    }
}

#[tokio::test]
async fn messages_are_recorded_per_channel() {
    let fake = FakeChatAdapter::new()
        .with_channel("C1", "general", false)
        .with_channel("C2", "incidents", false);

    fake.post_message(&ChannelId::new("C1"), "one").await.unwrap();
    fake.post_message(&ChannelId::new("C2"), "two").await.unwrap();
    fake.post_message(&ChannelId::new("C1"), "three").await.unwrap();

    assert_eq!(fake.messages_in(&ChannelId::new("C1")), vec!["one", "three"]);
    assert_eq!(fake.messages_in(&ChannelId::new("C2")), vec!["two"]);
}

#[tokio::test]
async fn injected_failure_is_returned_until_cleared() {
    let fake = FakeChatAdapter::new();
    fake.fail(
        method::LIST_CHANNELS,
        ChatError::api(method::LIST_CHANNELS, "ratelimited"),
    );

    let err = fake.list_channels().await.unwrap_err();
    assert!(err.is_transient());
    assert_eq!(fake.calls(), vec![ChatCall::ListChannels]);

    fake.clear_failures();
    assert!(fake.list_channels().await.unwrap().is_empty());
}

#[tokio::test]
async fn usergroup_members_lookup() {
    let fake = FakeChatAdapter::new();
    fake.add_usergroup(UserGroup::new("S1", "Backend", "oncall-backend"), &["U1", "U2"]);

    assert_eq!(fake.list_usergroups().await.unwrap().len(), 1);
    assert_eq!(fake.usergroup_members("S1").await.unwrap(), vec!["U1", "U2"]);
    assert_eq!(
        fake.usergroup_members("S9").await.unwrap_err().code(),
        Some("no_such_subteam")
    );
}
