//! Linking archived incidents that share a word with the new one.

use crate::prelude::*;

#[tokio::test]
async fn lists_matching_archives_in_listing_order() {
    let bot = bot()
        .archived("CA1", "2023_11_10_payment_api_outage")
        .archived("CA2", "2023-12-01-checkout-api-latency")
        .archived("CA3", "2023_12_05_database_failover")
        .start();

    bot.incident("payment errors").await;

    let channel = bot.channel("2024_03_01_payment_errors").unwrap();
    assert_eq!(
        bot.messages_in(channel.as_str()),
        vec!["Incident: payment errors", "Related: <#CA1>"]
    );

    bot.incident("api latency").await;
    let channel = bot.channel("2024_03_01_api_latency").unwrap();
    assert_eq!(
        bot.messages_in(channel.as_str()).last().map(String::as_str),
        Some("Related: <#CA1>, <#CA2>")
    );
}

#[tokio::test]
async fn live_and_non_incident_channels_are_ignored() {
    let bot = bot()
        .live("CL1", "2024_02_01_payment_retry")
        .archived("CX1", "payment-team")
        .archived("CX2", "2023_11_payment")
        .start();

    bot.incident("payment errors").await;

    let channel = bot.channel("2024_03_01_payment_errors").unwrap();
    assert_eq!(
        bot.messages_in(channel.as_str()),
        vec!["Incident: payment errors"]
    );
}

#[tokio::test]
async fn stop_words_and_digits_do_not_match() {
    let bot = bot()
        .archived("CA1", "2023_11_10_the_outage_of_2023")
        .archived("CA2", "2023_11_11_2023_rollout")
        .start();

    bot.incident("the 2023 cdn problem").await;

    let channel = bot.channel("2024_03_01_the_2023_cdn_problem").unwrap();
    assert_eq!(
        bot.messages_in(channel.as_str()),
        vec!["Incident: the 2023 cdn problem"]
    );
}
