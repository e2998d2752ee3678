//! Channel history aggregation.
//!
//! The backend hands out history in offset-paginated pages and never says
//! how many messages exist; the only exhaustion signal is an empty page.
//! [`fetch_all_messages`] walks the pages until it sees one.

use async_trait::async_trait;
use tracing::debug;

use shared::{
    domain::{ChannelId, MessageId},
    protocol::{Message, MessagePage, React},
};

use crate::{error::ClientError, session::Session, transport::json_body, ChatClient};

/// One page of channel history, requested by offset.
///
/// `start` is the count of messages already retrieved. The backend picks the
/// page size; callers learn it only from the length of what comes back.
#[async_trait]
pub trait MessagePageSource {
    async fn fetch_page(
        &self,
        session: &Session,
        channel_id: ChannelId,
        start: usize,
    ) -> Result<Vec<Message>, ClientError>;
}

#[async_trait]
impl MessagePageSource for ChatClient {
    async fn fetch_page(
        &self,
        session: &Session,
        channel_id: ChannelId,
        start: usize,
    ) -> Result<Vec<Message>, ClientError> {
        let response = self
            .http
            .get(self.endpoint(format!("message/{}", channel_id.0)))
            .bearer_auth(&session.token)
            .query(&[("start", start)])
            .send()
            .await?;
        let page: MessagePage = json_body(response).await?;
        Ok(page.messages)
    }
}

/// Everything a channel held at aggregation time, in the order pages
/// arrived. `total` always equals `messages.len()`; it is kept explicit
/// because it doubles as the next request offset while the walk runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelHistory {
    pub total: usize,
    pub messages: Vec<Message>,
}

impl ChannelHistory {
    /// Messages ordered by send time, the order a conversation view wants.
    /// The aggregate itself keeps backend arrival order; ties keep it too,
    /// since the sort is stable.
    pub fn chronological(&self) -> Vec<Message> {
        let mut messages = self.messages.clone();
        messages.sort_by_key(|msg| msg.sent_at);
        messages
    }

    /// The currently pinned subset, in arrival order.
    pub fn pinned(&self) -> Vec<Message> {
        self.messages
            .iter()
            .filter(|msg| msg.pinned)
            .cloned()
            .collect()
    }

    /// Reactions on one message, if the aggregate holds it.
    pub fn reacts_for(&self, message_id: MessageId) -> Option<&[React]> {
        self.messages
            .iter()
            .find(|msg| msg.id == message_id)
            .map(|msg| msg.reacts.as_slice())
    }
}

/// Fetch a channel's full history, one page at a time.
///
/// Exactly one request is in flight at any moment; each offset is the count
/// of messages fetched so far, and the first empty page ends the walk. The
/// first failed page aborts the whole thing with no partial result and no
/// retry.
///
/// Offset pagination has no defense against concurrent writers: a message
/// inserted or deleted between two page fetches shifts the remaining pages,
/// and the walk can then see a message twice or miss one. Callers that need
/// a faithful snapshot must aggregate while the channel is quiet.
pub async fn fetch_all_messages<S: MessagePageSource>(
    source: &S,
    session: &Session,
    channel_id: ChannelId,
) -> Result<ChannelHistory, ClientError> {
    let mut history = ChannelHistory::default();
    loop {
        let page = source
            .fetch_page(session, channel_id, history.total)
            .await?;
        if page.is_empty() {
            debug!(
                channel_id = channel_id.0,
                total = history.total,
                "history: channel exhausted"
            );
            return Ok(history);
        }
        debug!(
            channel_id = channel_id.0,
            start = history.total,
            page_len = page.len(),
            "history: page fetched"
        );
        history.total += page.len();
        history.messages.extend(page);
    }
}

impl ChatClient {
    /// Every message in the channel. See [`fetch_all_messages`] for the
    /// walk's guarantees and its concurrent-writer caveat.
    pub async fn channel_history(
        &self,
        session: &Session,
        channel_id: ChannelId,
    ) -> Result<ChannelHistory, ClientError> {
        fetch_all_messages(self, session, channel_id).await
    }

    /// The channel's pinned messages, from a fresh aggregate.
    pub async fn pinned_messages(
        &self,
        session: &Session,
        channel_id: ChannelId,
    ) -> Result<Vec<Message>, ClientError> {
        let history = self.channel_history(session, channel_id).await?;
        Ok(history.pinned())
    }

    /// Reactions on one message, from a fresh aggregate. A message id the
    /// channel does not hold is a [`ClientError::MessageNotFound`].
    pub async fn message_reacts(
        &self,
        session: &Session,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Vec<React>, ClientError> {
        let history = self.channel_history(session, channel_id).await?;
        history
            .reacts_for(message_id)
            .map(<[React]>::to_vec)
            .ok_or(ClientError::MessageNotFound { message_id })
    }
}

#[cfg(test)]
#[path = "tests/history_tests.rs"]
mod tests;
