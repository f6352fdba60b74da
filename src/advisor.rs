//! Throttled forwarding of advisories to the voice sink.
//!
//! The guidance loop would otherwise re-speak the same instruction every
//! tick while the camera is held steady. The advisor enforces a minimum gap
//! between emissions, independent of message content.
//!
//! The last-emission timestamp is an explicit field on an explicitly
//! constructed object owned by the loop's caller, so tests and teardown stay
//! deterministic. Uses `tokio::time::Instant` so a paused test clock is
//! honored.

use crate::types::VoiceSink;
use std::time::Duration;
use tokio::time::Instant;

/// Rate-limits how often advisories reach the voice sink.
pub struct ThrottledAdvisor<V: VoiceSink> {
    sink: V,
    cooldown: Duration,
    last_emitted_at: Option<Instant>,
}

impl<V: VoiceSink> ThrottledAdvisor<V> {
    pub fn new(sink: V, cooldown: Duration) -> Self {
        Self {
            sink,
            cooldown,
            last_emitted_at: None,
        }
    }

    /// Forward `message` to the sink if the cooldown has elapsed.
    ///
    /// The timestamp advances only on an actual emission; suppressed calls
    /// leave it untouched. Returns whether the message was spoken.
    pub fn emit(&mut self, message: &str) -> bool {
        let now = Instant::now();
        if let Some(last) = self.last_emitted_at {
            if now.duration_since(last) < self.cooldown {
                return false;
            }
        }

        self.last_emitted_at = Some(now);
        self.sink.speak(message);
        true
    }
}
