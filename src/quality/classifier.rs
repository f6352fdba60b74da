//! Mapping of raw frame scores to a spoken advisory.

use crate::config::QualityThresholds;
use crate::quality::scorer::FrameScores;
use crate::types::GuidanceResult;

/// Advisory spoken when the frame reads as blurred or shaken.
pub const MSG_HOLD_STEADY: &str = "Hold steady and adjust focus.";
/// Advisory spoken when the frame has too little detail (subject too far).
pub const MSG_MOVE_CLOSER: &str = "Move the camera closer.";
/// Advisory spoken when the frame has too much detail (subject too close).
pub const MSG_MOVE_BACK: &str = "Move the camera back a little.";
/// Advisory spoken when all checks pass.
pub const MSG_GOOD_POSITION: &str = "Good positioning. You may capture.";

/// Classify one scoring pass against the configured thresholds.
///
/// Ordered decision list, first match wins: a frame can be blurry and
/// mis-framed at the same time, and the blur check deliberately takes
/// precedence so the user fixes focus before framing.
pub fn classify(scores: FrameScores, thresholds: &QualityThresholds) -> GuidanceResult {
    let FrameScores {
        blur_score,
        edge_score,
    } = scores;

    if blur_score < thresholds.blur_min {
        return GuidanceResult {
            ok: false,
            message: MSG_HOLD_STEADY.to_string(),
            blur_score,
            edge_score,
        };
    }

    if edge_score < thresholds.edge_low {
        return GuidanceResult {
            ok: false,
            message: MSG_MOVE_CLOSER.to_string(),
            blur_score,
            edge_score,
        };
    }

    if edge_score > thresholds.edge_high {
        return GuidanceResult {
            ok: false,
            message: MSG_MOVE_BACK.to_string(),
            blur_score,
            edge_score,
        };
    }

    GuidanceResult {
        ok: true,
        message: MSG_GOOD_POSITION.to_string(),
        blur_score,
        edge_score,
    }
}
