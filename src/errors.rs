use thiserror::Error;

/// Errors surfaced by the guidance core.
///
/// Missing capabilities are deliberately not errors: an absent recognition
/// engine becomes the `NotSupported` outcome and a missing frame skips the
/// tick. This enum covers configuration handling and engine session plumbing.
#[derive(Debug, Error)]
pub enum GuidanceError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("recognition session error: {0}")]
    Recognition(String),
}
