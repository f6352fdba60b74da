//! aimcoach: audio-guided camera aiming assistance
//!
//! This crate helps a visually-impaired user aim a camera before a photo is
//! sent off for analysis. It scores preview frames for focus and framing,
//! speaks short advisories through a throttled voice output, and listens for
//! a one-shot voice command under a hard deadline.
//!
//! # Features
//! - Blur scoring via Laplacian variance over BT.709 luminance
//! - Edge-density scoring as a proxy for subject distance
//! - Ordered, configurable threshold classification into spoken advisories
//! - Cooldown-throttled voice output
//! - Deadline-raced voice-command listening with four terminal outcomes
//!
//! # Usage
//! ```rust,ignore
//! use aimcoach::{GuidanceConfig, GuidanceLoop};
//! use tokio::sync::watch;
//!
//! let config = GuidanceConfig::load_or_default();
//! let (shutdown_tx, shutdown_rx) = watch::channel(false);
//! let guidance = GuidanceLoop::new(my_frame_source, my_voice_sink, &config);
//! tokio::spawn(guidance.run(shutdown_rx));
//! // ... later, when the user leaves the camera screen:
//! let _ = shutdown_tx.send(true);
//! ```
//!
//! Frame acquisition, voice synthesis, and the recognition engine itself are
//! external collaborators behind the [`FrameSource`], [`VoiceSink`], and
//! [`SpeechRecognizer`] traits.
pub mod advisor;
pub mod config;
pub mod errors;
pub mod guidance;
pub mod listener;
pub mod quality;
pub mod sampler;
pub mod types;

// Testing utilities - synthetic frames for offline testing
pub mod testing;

// Re-exports for convenience
pub use advisor::ThrottledAdvisor;
pub use config::{GuidanceConfig, ListenerConfig, QualityThresholds, TimingConfig};
pub use errors::GuidanceError;
pub use guidance::GuidanceLoop;
pub use listener::{CommandListener, ListenOutcome, RecognitionEvent, SpeechRecognizer};
pub use quality::{classify, score_frame, FrameScores};
pub use sampler::{downsample_to_width, FrameSampler};
pub use types::{Frame, FrameSource, GuidanceResult, VoiceSink};

/// Initialize logging for the guidance core
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "aimcoach=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get crate information
pub fn get_info() -> CrateInfo {
    CrateInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

/// Crate information structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CrateInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}
