//! Chat transcript controller.
//!
//! Holds the ordered messages of one session, accepts user input and answers
//! with a simulated bot reply after a short randomized delay. No network
//! calls and nothing is persisted.
mod controller;
mod reply;
mod transcript;

pub use controller::{ChatConfig, ChatController};
pub use reply::{DEFAULT_REPLY_DELAY_MAX_MS, DEFAULT_REPLY_DELAY_MIN_MS, ReplyDelay, reply_text};
pub use transcript::{DEFAULT_GREETING, TranscriptState};
