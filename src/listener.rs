//! One-shot voice-command listening.
//!
//! Races a speech-recognition session against a hard deadline and classifies
//! the first trigger into one of four terminal outcomes. Silence, engine
//! errors, and unrecognized phrases all resolve to `Abort` so the user is
//! never left stuck waiting.

use crate::config::ListenerConfig;
use crate::errors::GuidanceError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// Terminal classification of one listening session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListenOutcome {
    /// The user asked to open the camera
    OpenCamera,
    /// The user asked to cancel
    Cancel,
    /// Silence, an unrecognized phrase, or an engine failure
    Abort,
    /// No recognition capability is available on this device
    NotSupported,
}

/// Event delivered by a recognition session.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    /// Best transcript for the utterance; single alternative, fixed locale
    Transcript { text: String, confidence: f32 },
    /// Engine-level failure
    Error(String),
    /// Session ended without delivering a result
    End,
}

/// Abstract speech-recognition engine.
///
/// `start` opens exactly one session and hands back its event channel;
/// `stop` is best-effort and may fail if the session already ended.
pub trait SpeechRecognizer: Send {
    fn start(&mut self) -> Result<mpsc::Receiver<RecognitionEvent>, GuidanceError>;
    fn stop(&mut self) -> Result<(), GuidanceError>;
}

/// Session state. Terminal once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListenState {
    Idle,
    Listening,
    Resolved(ListenOutcome),
}

/// A single-use voice-command listener.
///
/// `listen` consumes the listener; a fresh one must be constructed for every
/// attempt. Exactly one outcome is produced per session, or none at all when
/// the caller cancels externally.
pub struct CommandListener {
    config: ListenerConfig,
    state: ListenState,
}

impl CommandListener {
    pub fn new(config: ListenerConfig) -> Self {
        Self {
            config,
            state: ListenState::Idle,
        }
    }

    /// Listen for one command.
    ///
    /// `engine = None` resolves to `NotSupported` immediately, without
    /// starting a timer or a session. Otherwise the recognition session and
    /// the deadline run concurrently and the first trigger wins. Flipping
    /// `cancel` to true tears both down and returns `None`: the caller has
    /// navigated away and no outcome is owed.
    pub async fn listen<R: SpeechRecognizer>(
        mut self,
        engine: Option<R>,
        mut cancel: watch::Receiver<bool>,
    ) -> Option<ListenOutcome> {
        let Some(mut engine) = engine else {
            self.state = ListenState::Resolved(ListenOutcome::NotSupported);
            log::info!("Speech recognition not available on this device");
            return Some(ListenOutcome::NotSupported);
        };

        let mut events = match engine.start() {
            Ok(rx) => rx,
            Err(e) => {
                log::warn!("Recognition session failed to start: {}", e);
                return Some(self.resolve(&mut engine, ListenOutcome::Abort));
            }
        };

        self.state = ListenState::Listening;
        log::debug!(
            "Listening for a voice command, {} ms deadline",
            self.config.deadline_ms
        );

        let deadline = tokio::time::sleep(Duration::from_millis(self.config.deadline_ms));
        tokio::pin!(deadline);
        let mut cancel_live = true;

        loop {
            tokio::select! {
                biased;

                changed = cancel.changed(), if cancel_live => {
                    match changed {
                        Ok(()) => {
                            if *cancel.borrow_and_update() {
                                log::debug!("Listening session cancelled by caller");
                                if let Err(e) = engine.stop() {
                                    log::debug!("Ignoring stop failure during cancel: {}", e);
                                }
                                return None;
                            }
                        }
                        // Cancel handle dropped; the race continues without it
                        Err(_) => cancel_live = false,
                    }
                }

                // Polled before the deadline: when both are ready on the same
                // wakeup, a queued transcript wins even though the deadline
                // timestamp is earlier. The original event loop dispatched in
                // enqueue order; the difference is only observable when the
                // task lags past the deadline with a result already pending.
                event = events.recv() => {
                    let outcome = match event {
                        Some(RecognitionEvent::Transcript { text, confidence }) => {
                            log::debug!("Transcript received (confidence {:.2})", confidence);
                            self.classify_transcript(&text)
                        }
                        Some(RecognitionEvent::Error(msg)) => {
                            log::warn!("Recognition engine error: {}", msg);
                            ListenOutcome::Abort
                        }
                        // Session ended without a result
                        Some(RecognitionEvent::End) | None => ListenOutcome::Abort,
                    };
                    return Some(self.resolve(&mut engine, outcome));
                }

                _ = &mut deadline => {
                    // Silence resolves to abort
                    return Some(self.resolve(&mut engine, ListenOutcome::Abort));
                }
            }
        }
    }

    /// Map a transcript to an outcome.
    ///
    /// Lowercased and trimmed; needs both an "open" and a "camera" token for
    /// `OpenCamera`, a "cancel" token for `Cancel`, anything else aborts.
    fn classify_transcript(&self, raw: &str) -> ListenOutcome {
        let lowered = raw.to_lowercase();
        let text = lowered.trim();
        let has = |tokens: &[String]| tokens.iter().any(|t| text.contains(t.as_str()));

        if has(&self.config.open_tokens) && has(&self.config.camera_tokens) {
            ListenOutcome::OpenCamera
        } else if has(&self.config.cancel_tokens) {
            ListenOutcome::Cancel
        } else {
            ListenOutcome::Abort
        }
    }

    /// Single-resolution guard: the first transition wins, later triggers are
    /// no-ops. Stopping the engine is advisory cleanup; failures (typically
    /// an already-stopped session) are swallowed.
    fn resolve<R: SpeechRecognizer>(
        &mut self,
        engine: &mut R,
        outcome: ListenOutcome,
    ) -> ListenOutcome {
        if let ListenState::Resolved(prior) = self.state {
            return prior;
        }
        self.state = ListenState::Resolved(outcome);
        log::debug!("Listening session resolved: {:?}", outcome);

        if let Err(e) = engine.stop() {
            log::debug!("Ignoring stop failure after resolution: {}", e);
        }
        outcome
    }
}
