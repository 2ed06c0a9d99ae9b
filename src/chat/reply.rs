use rand::Rng;
use std::time::Duration;

pub const DEFAULT_REPLY_DELAY_MIN_MS: u64 = 800;
pub const DEFAULT_REPLY_DELAY_MAX_MS: u64 = 1200;

/// Window the simulated latency is drawn from, `[min, max)` in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplyDelay {
    min_ms: u64,
    max_ms: u64,
}

impl Default for ReplyDelay {
    fn default() -> Self {
        Self {
            min_ms: DEFAULT_REPLY_DELAY_MIN_MS,
            max_ms: DEFAULT_REPLY_DELAY_MAX_MS,
        }
    }
}

impl ReplyDelay {
    /// Returns `None` when the window is empty.
    pub fn new(min_ms: u64, max_ms: u64) -> Option<Self> {
        (max_ms > min_ms).then_some(Self { min_ms, max_ms })
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_millis(rng.gen_range(self.min_ms..self.max_ms))
    }
}

pub fn reply_text(source_text: &str) -> String {
    format!("Proto Bot: You said \"{source_text}\". I'm here to help! 🌊")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_reply_text_template() {
        assert_eq!(
            reply_text("hello"),
            "Proto Bot: You said \"hello\". I'm here to help! 🌊"
        );
    }

    #[test]
    fn test_empty_window_rejected() {
        assert!(ReplyDelay::new(1000, 1000).is_none());
        assert!(ReplyDelay::new(1200, 800).is_none());
        assert!(ReplyDelay::new(0, 1).is_some());
    }

    #[test]
    fn test_samples_stay_in_window() {
        let delay = ReplyDelay::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let sampled = delay.sample(&mut rng);
            assert!(sampled >= Duration::from_millis(800));
            assert!(sampled < Duration::from_millis(1200));
        }
    }
}
