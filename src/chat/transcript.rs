use super::reply::reply_text;
use crate::types::{ChatMessage, Role};
use std::collections::VecDeque;
use time::OffsetDateTime;
use tokio::time::Instant;

pub const DEFAULT_GREETING: &str = "Hello! I am your Proto Bot. Ask me anything or say hi! 🤖";

/// Ordered messages of one chat session plus the replies still owed.
///
/// The typing flag is derived from the reply queue, so it is set exactly while
/// at least one simulated reply is outstanding.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptState {
    messages: Vec<ChatMessage>,
    ids: MessageIds,
    queue: VecDeque<PendingReply>,
    worker: Option<u64>,
}

/// A reply owed to a user message, answered in submission order.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PendingReply {
    pub(crate) source: String,
    pub(crate) due: Instant,
}

impl TranscriptState {
    pub fn seeded(greeting: &str) -> Self {
        Self {
            messages: vec![ChatMessage {
                id: "m1".to_string(),
                role: Role::Bot,
                text: greeting.to_string(),
                created_at: OffsetDateTime::now_utc(),
            }],
            ids: MessageIds::default(),
            queue: VecDeque::new(),
            worker: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_bot_typing(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Number of replies still owed.
    pub fn pending_replies(&self) -> usize {
        self.queue.len()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Appends the user message and queues its reply. Returns `true` when no
    /// worker is serving the queue, in which case the caller must start one
    /// and register it with [`TranscriptState::claim_worker`].
    pub(crate) fn push_user(&mut self, text: &str, due: Instant) -> bool {
        let message = ChatMessage {
            id: self.ids.next(Role::User),
            role: Role::User,
            text: text.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        self.messages.push(message);
        self.queue.push_back(PendingReply {
            source: text.to_string(),
            due,
        });
        self.worker.is_none()
    }

    pub(crate) fn claim_worker(&mut self, ticket: u64) {
        self.worker = Some(ticket);
    }

    pub(crate) fn is_worker(&self, ticket: u64) -> bool {
        self.worker == Some(ticket)
    }

    /// When the head of the queue is due, if `ticket` still owns the queue.
    pub(crate) fn next_due(&self, ticket: u64) -> Option<Instant> {
        if !self.is_worker(ticket) {
            return None;
        }
        self.queue.front().map(|reply| reply.due)
    }

    /// Answers the head of the queue. The worker is released once the queue
    /// drains. Returns `false` if `ticket` no longer owns the queue.
    pub(crate) fn deliver_next(&mut self, ticket: u64) -> bool {
        if !self.is_worker(ticket) {
            return false;
        }
        let Some(pending) = self.queue.pop_front() else {
            self.worker = None;
            return false;
        };
        let message = ChatMessage {
            id: self.ids.next(Role::Bot),
            role: Role::Bot,
            text: reply_text(&pending.source),
            created_at: OffsetDateTime::now_utc(),
        };
        self.messages.push(message);
        if self.queue.is_empty() {
            self.worker = None;
        }
        true
    }

    /// Drops every owed reply and releases the worker. Returns whether
    /// anything was outstanding.
    pub(crate) fn clear_pending(&mut self) -> bool {
        let had_pending = !self.queue.is_empty() || self.worker.is_some();
        self.queue.clear();
        self.worker = None;
        had_pending
    }
}

/// Creation-ordered ids: `u-<n>` for user messages, `b-<n>` for bot replies.
#[derive(Clone, Debug, PartialEq)]
struct MessageIds {
    next: u64,
}

impl Default for MessageIds {
    fn default() -> Self {
        // m1 is taken by the greeting
        Self { next: 2 }
    }
}

impl MessageIds {
    fn next(&mut self, role: Role) -> String {
        let n = self.next;
        self.next += 1;
        match role {
            Role::User => format!("u-{n}"),
            Role::Bot => format!("b-{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_transcript() {
        let transcript = TranscriptState::seeded(DEFAULT_GREETING);
        assert_eq!(transcript.len(), 1);
        assert!(!transcript.is_bot_typing());
        let greeting = transcript.last().unwrap();
        assert_eq!(greeting.id, "m1");
        assert_eq!(greeting.role, Role::Bot);
        assert_eq!(greeting.text, DEFAULT_GREETING);
    }

    #[test]
    fn test_queue_answers_in_order() {
        let mut transcript = TranscriptState::seeded("hi");
        let now = Instant::now();

        assert!(transcript.push_user("first", now));
        transcript.claim_worker(1);
        assert!(!transcript.push_user("second", now));
        assert_eq!(transcript.pending_replies(), 2);
        assert!(transcript.is_bot_typing());

        assert!(transcript.deliver_next(1));
        assert!(transcript.is_bot_typing());
        assert!(transcript.deliver_next(1));
        assert!(!transcript.is_bot_typing());
        assert!(!transcript.is_worker(1));

        let ids: Vec<&str> = transcript.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["m1", "u-2", "u-3", "b-4", "b-5"]);
        assert_eq!(transcript.messages()[3].text, reply_text("first"));
        assert_eq!(transcript.messages()[4].text, reply_text("second"));
    }

    #[test]
    fn test_stale_worker_cannot_deliver() {
        let mut transcript = TranscriptState::seeded("hi");
        transcript.push_user("ping", Instant::now());
        transcript.claim_worker(7);

        assert!(transcript.clear_pending());
        assert!(!transcript.clear_pending());
        assert!(!transcript.deliver_next(7));
        assert_eq!(transcript.next_due(7), None);
        assert_eq!(transcript.len(), 2);
    }
}
