//! Preview quality assessment module
//!
//! Scores downsampled preview frames for blur and edge density, then maps the
//! scores to an aim advisory via fixed, configurable thresholds.

pub mod classifier;
pub mod scorer;

pub use classifier::{
    classify, MSG_GOOD_POSITION, MSG_HOLD_STEADY, MSG_MOVE_BACK, MSG_MOVE_CLOSER,
};
pub use scorer::{luminance, score_frame, FrameScores};
