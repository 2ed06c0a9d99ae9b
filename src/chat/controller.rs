use super::reply::ReplyDelay;
use super::transcript::{DEFAULT_GREETING, TranscriptState};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    pub greeting: String,
    pub reply_delay: ReplyDelay,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            reply_delay: ReplyDelay::default(),
        }
    }
}

/// Owns one chat session: the transcript, the composer draft and the single
/// timer task that delivers simulated replies.
///
/// Every transcript change is published on a watch channel; renderers call
/// [`ChatController::subscribe`] and redraw from the latest snapshot.
/// Dropping the controller cancels every reply that has not been delivered.
///
/// Replies are timed with `tokio::spawn` and `tokio::time`, so
/// [`ChatController::submit`] must be called from inside a tokio runtime.
/// Building the controller and editing the draft do not need one.
pub struct ChatController {
    state: Arc<watch::Sender<TranscriptState>>,
    draft: String,
    next_ticket: u64,
    worker: Option<JoinHandle<()>>,
    reply_delay: ReplyDelay,
    rng: StdRng,
}

impl ChatController {
    pub fn new(config: ChatConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Builds a controller with a caller-supplied RNG, for reproducible delays.
    pub fn with_rng(config: ChatConfig, rng: StdRng) -> Self {
        let (state, _) = watch::channel(TranscriptState::seeded(&config.greeting));
        Self {
            state: Arc::new(state),
            draft: String::new(),
            next_ticket: 1,
            worker: None,
            reply_delay: config.reply_delay,
            rng,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<TranscriptState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> TranscriptState {
        self.state.borrow().clone()
    }

    pub fn is_bot_typing(&self) -> bool {
        self.state.borrow().is_bot_typing()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Mirrors the Send button: a non-blank draft and no reply in flight.
    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty() && !self.is_bot_typing()
    }

    /// Submits the composer draft. The draft is only cleared when a message
    /// was actually appended.
    pub fn send_draft(&mut self) -> bool {
        let text = std::mem::take(&mut self.draft);
        if self.submit(&text) {
            true
        } else {
            self.draft = text;
            false
        }
    }

    /// Appends a user message and queues its simulated reply.
    ///
    /// Blank input is ignored and returns `false`. Each reply is due a random
    /// delay after its own message. Messages sent while the bot is still
    /// typing are answered in order once the earlier replies have landed; the
    /// input surface normally blocks sending in that state.
    pub fn submit(&mut self, raw_text: &str) -> bool {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            tracing::trace!("ignoring blank submission");
            return false;
        }

        let delay = self.reply_delay.sample(&mut self.rng);
        let due = Instant::now() + delay;
        let ticket = self.next_ticket;
        let mut start_worker = false;
        let mut queued = 0;
        self.state.send_modify(|transcript| {
            if transcript.push_user(trimmed, due) {
                transcript.claim_worker(ticket);
                start_worker = true;
            }
            queued = transcript.pending_replies();
        });
        self.draft.clear();
        tracing::debug!(
            chars = trimmed.chars().count(),
            delay_ms = delay.as_millis() as u64,
            queued,
            "user message appended"
        );

        if start_worker {
            self.next_ticket += 1;
            if let Some(stale) = self.worker.take() {
                stale.abort();
            }
            let state = Arc::clone(&self.state);
            self.worker = Some(tokio::spawn(serve_replies(state, ticket)));
        }
        true
    }

    /// Cancels every pending reply and clears the typing indicator.
    /// Calling it again is a no-op.
    pub fn cancel_pending_reply(&mut self) {
        if let Some(handle) = self.worker.take() {
            handle.abort();
        }
        if self.state.send_if_modified(TranscriptState::clear_pending) {
            tracing::debug!("pending replies cancelled");
        }
    }
}

impl Drop for ChatController {
    fn drop(&mut self) {
        self.cancel_pending_reply();
    }
}

/// Answers the reply queue head first, sleeping until each reply is due.
async fn serve_replies(state: Arc<watch::Sender<TranscriptState>>, ticket: u64) {
    loop {
        let next = state.borrow().next_due(ticket);
        let Some(due) = next else {
            break;
        };
        tokio::time::sleep_until(due).await;

        // The ticket is checked under the channel lock, so replies cancelled
        // after the timer woke up still cannot land.
        let mut keep_serving = false;
        let delivered = state.send_if_modified(|transcript| {
            let delivered = transcript.deliver_next(ticket);
            keep_serving = transcript.is_worker(ticket);
            delivered
        });
        if delivered {
            tracing::debug!(ticket, "reply delivered");
        } else {
            tracing::debug!(ticket, "stale reply worker stopped");
        }
        if !keep_serving {
            break;
        }
    }
}
