//! Core types shared across the guidance pipeline.

use serde::{Deserialize, Serialize};

/// An immutable RGBA raster sampled from the camera preview.
///
/// `data` holds `width * height * 4` bytes in R, G, B, A order. The alpha
/// channel is carried but never read by the scorer. A frame is built once per
/// scoring pass and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Frame {
    /// Wrap raw RGBA bytes as a frame.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(data.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            data,
        }
    }

    /// Number of pixels in the raster.
    pub fn pixel_count(&self) -> usize {
        (self.width * self.height) as usize
    }
}

/// Advisory produced by one scoring pass.
///
/// `ok` is true exactly when all three threshold tests pass; `message` is the
/// human-readable instruction routed to the voice sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceResult {
    pub ok: bool,
    pub message: String,
    pub blur_score: f32,
    pub edge_score: f32,
}

/// Provider of the latest camera raster.
///
/// Returns `None` while the camera is not ready; the guidance loop simply
/// skips that tick. Capture and decoding specifics live entirely behind this
/// trait.
pub trait FrameSource {
    fn current_frame(&mut self) -> Option<Frame>;
}

/// Fire-and-forget voice output.
///
/// The core never observes completion; it only calls `speak` subject to the
/// advisor's throttling contract.
pub trait VoiceSink {
    fn speak(&mut self, text: &str);
}
