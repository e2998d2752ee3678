use std::collections::VecDeque;

use chrono::{DateTime, Duration, TimeZone, Utc};
use tokio::sync::Mutex;

use shared::domain::{ReactKind, UserId};

use super::*;

fn test_session() -> Session {
    Session::new("token-abc", UserId(1))
}

fn sent_at(offset_secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
        .single()
        .expect("fixture timestamp")
        + Duration::seconds(offset_secs)
}

fn message(id: i64) -> Message {
    Message {
        id: MessageId(id),
        sender: UserId(1),
        message: format!("message {id}"),
        image: None,
        sent_at: sent_at(id),
        edited_at: None,
        pinned: false,
        reacts: Vec::new(),
    }
}

fn messages(ids: impl IntoIterator<Item = i64>) -> Vec<Message> {
    ids.into_iter().map(message).collect()
}

fn ids(messages: &[Message]) -> Vec<i64> {
    messages.iter().map(|msg| msg.id.0).collect()
}

/// Serves a pre-scripted sequence of page results and records every
/// requested offset.
struct ScriptedSource {
    pages: Mutex<VecDeque<Result<Vec<Message>, ClientError>>>,
    starts: Mutex<Vec<usize>>,
}

impl ScriptedSource {
    fn new(pages: Vec<Result<Vec<Message>, ClientError>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            starts: Mutex::new(Vec::new()),
        }
    }

    async fn requested_starts(&self) -> Vec<usize> {
        self.starts.lock().await.clone()
    }
}

#[async_trait]
impl MessagePageSource for ScriptedSource {
    async fn fetch_page(
        &self,
        _session: &Session,
        _channel_id: ChannelId,
        start: usize,
    ) -> Result<Vec<Message>, ClientError> {
        self.starts.lock().await.push(start);
        self.pages
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Pages straight off an immutable message list, like a quiet backend.
struct FixedChannel {
    messages: Vec<Message>,
    page_size: usize,
}

#[async_trait]
impl MessagePageSource for FixedChannel {
    async fn fetch_page(
        &self,
        _session: &Session,
        _channel_id: ChannelId,
        start: usize,
    ) -> Result<Vec<Message>, ClientError> {
        let end = (start + self.page_size).min(self.messages.len());
        Ok(self.messages.get(start..end).unwrap_or(&[]).to_vec())
    }
}

/// Backend whose channel gains a message at the head right after the first
/// page is served, the way a live channel shifts under a slow walk.
struct MutatingChannel {
    messages: Mutex<Vec<Message>>,
    page_size: usize,
    insert_at_front_after_first_page: Mutex<Option<Message>>,
}

#[async_trait]
impl MessagePageSource for MutatingChannel {
    async fn fetch_page(
        &self,
        _session: &Session,
        _channel_id: ChannelId,
        start: usize,
    ) -> Result<Vec<Message>, ClientError> {
        let mut messages = self.messages.lock().await;
        let end = (start + self.page_size).min(messages.len());
        let page = messages.get(start..end).unwrap_or(&[]).to_vec();
        if let Some(newcomer) = self.insert_at_front_after_first_page.lock().await.take() {
            messages.insert(0, newcomer);
        }
        Ok(page)
    }
}

#[tokio::test]
async fn aggregates_split_pages_in_arrival_order() {
    let source = ScriptedSource::new(vec![
        Ok(messages([1, 2])),
        Ok(messages([3, 4])),
        Ok(messages([5])),
        Ok(Vec::new()),
    ]);

    let history = fetch_all_messages(&source, &test_session(), ChannelId(7))
        .await
        .expect("aggregate");

    assert_eq!(history.total, 5);
    assert_eq!(ids(&history.messages), vec![1, 2, 3, 4, 5]);
    assert_eq!(source.requested_starts().await, vec![0, 2, 4, 5]);
}

#[tokio::test]
async fn empty_channel_resolves_after_a_single_request() {
    let source = ScriptedSource::new(vec![Ok(Vec::new())]);

    let history = fetch_all_messages(&source, &test_session(), ChannelId(7))
        .await
        .expect("aggregate");

    assert_eq!(history.total, 0);
    assert!(history.messages.is_empty());
    assert_eq!(source.requested_starts().await, vec![0]);
}

#[tokio::test]
async fn offsets_advance_by_exactly_the_page_length() {
    let source = ScriptedSource::new(vec![
        Ok(messages([1, 2, 3])),
        Ok(messages([4])),
        Ok(messages([5, 6])),
        Ok(Vec::new()),
    ]);

    fetch_all_messages(&source, &test_session(), ChannelId(7))
        .await
        .expect("aggregate");

    assert_eq!(source.requested_starts().await, vec![0, 3, 4, 6]);
}

#[tokio::test]
async fn failing_page_aborts_with_no_partial_result_and_no_retry() {
    let source = ScriptedSource::new(vec![
        Ok(messages([1, 2])),
        Err(ClientError::Api {
            message: "server error".to_string(),
        }),
        Ok(messages([3, 4])),
    ]);

    let err = fetch_all_messages(&source, &test_session(), ChannelId(7))
        .await
        .expect_err("second page fails");

    assert_eq!(err.backend_message(), Some("server error"));
    // Two requests went out; the scripted third page was never asked for.
    assert_eq!(source.requested_starts().await, vec![0, 2]);
}

#[tokio::test]
async fn unchanged_channel_aggregates_identically_every_time() {
    let source = FixedChannel {
        messages: messages([1, 2, 3, 4, 5]),
        page_size: 2,
    };

    let first = fetch_all_messages(&source, &test_session(), ChannelId(7))
        .await
        .expect("first walk");
    let second = fetch_all_messages(&source, &test_session(), ChannelId(7))
        .await
        .expect("second walk");

    assert_eq!(first, second);
    assert_eq!(first.total, 5);
}

#[tokio::test]
async fn concurrent_insert_between_pages_can_duplicate_a_message() {
    // Offset pagination addresses pages by position. A message landing at
    // the head of the channel between fetches shifts every position up, so
    // the walk re-reads the tail of the previous page and never sees the
    // newcomer at all.
    let source = MutatingChannel {
        messages: Mutex::new(messages([1, 2, 3, 4])),
        page_size: 2,
        insert_at_front_after_first_page: Mutex::new(Some(message(99))),
    };

    let history = fetch_all_messages(&source, &test_session(), ChannelId(7))
        .await
        .expect("aggregate");

    let seen = ids(&history.messages);
    assert_eq!(seen, vec![1, 2, 2, 3, 4]);
    assert_eq!(history.total, 5);
    assert!(!seen.contains(&99));
}

#[test]
fn chronological_projection_sorts_by_send_time() {
    let mut history = ChannelHistory::default();
    for id in [3, 1, 2] {
        history.messages.push(message(id));
        history.total += 1;
    }

    let sorted = history.chronological();

    assert_eq!(ids(&sorted), vec![1, 2, 3]);
    // The aggregate itself keeps arrival order.
    assert_eq!(ids(&history.messages), vec![3, 1, 2]);
}

#[test]
fn pinned_and_reacts_queries_read_the_aggregate() {
    let mut pinned_message = message(2);
    pinned_message.pinned = true;
    let mut reacted_message = message(3);
    reacted_message.reacts.push(React {
        user: UserId(9),
        react: ReactKind::Heart,
    });

    let history = ChannelHistory {
        total: 3,
        messages: vec![message(1), pinned_message, reacted_message],
    };

    assert_eq!(ids(&history.pinned()), vec![2]);
    let reacts = history.reacts_for(MessageId(3)).expect("message exists");
    assert_eq!(reacts.len(), 1);
    assert_eq!(reacts[0].react, ReactKind::Heart);
    assert!(history.reacts_for(MessageId(42)).is_none());
}
