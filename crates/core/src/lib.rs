// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ib-core: incident channel naming and archived-incident similarity matching

pub mod archive;
pub mod channel;
pub mod clock;
pub mod convention;
pub mod matcher;
pub mod normalize;
pub mod stop_words;
pub mod title;

pub use archive::{is_incident_archive, select_incident_archives};
pub use channel::{ChannelId, ChannelRecord, ChannelRef};
pub use clock::{Clock, SystemClock};
pub use convention::DateConvention;
pub use matcher::{find_related_incidents, find_similar, shares_token};
pub use normalize::{normalize, strip_date_prefix, TokenSet};
pub use stop_words::{is_stop_word, STOP_WORDS};
pub use title::{build_title, slugify, MAX_TITLE_LEN};

#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
