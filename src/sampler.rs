//! Frame acquisition and downsampling.
//!
//! Pulls the latest raster from an abstract [`FrameSource`] and reduces it to
//! a fixed target width before scoring, bounding per-tick cost regardless of
//! the camera's native resolution.

use crate::types::{Frame, FrameSource};

/// Polls a frame source and hands out scoring-sized rasters.
pub struct FrameSampler<S: FrameSource> {
    source: S,
    target_width: u32,
}

impl<S: FrameSource> FrameSampler<S> {
    pub fn new(source: S, target_width: u32) -> Self {
        Self {
            source,
            target_width,
        }
    }

    /// Fetch and downsample the latest frame.
    ///
    /// Returns `None` when the source has no frame yet or when the result
    /// would be too small to score (under 3x3); the caller skips that tick.
    pub fn sample(&mut self) -> Option<Frame> {
        let frame = self.source.current_frame()?;
        if frame.width == 0 || frame.height == 0 {
            return None;
        }

        let sampled = if frame.width > self.target_width {
            downsample_to_width(&frame, self.target_width)
        } else {
            frame
        };

        if sampled.width < 3 || sampled.height < 3 {
            log::debug!(
                "Skipping degenerate frame {}x{}",
                sampled.width,
                sampled.height
            );
            return None;
        }

        Some(sampled)
    }
}

/// Nearest-neighbor downsample to a fixed width, preserving aspect ratio.
///
/// Height is scaled by the same factor and rounded, never below 1.
pub fn downsample_to_width(frame: &Frame, target_width: u32) -> Frame {
    debug_assert!(target_width > 0 && frame.width >= target_width);

    let scale = target_width as f32 / frame.width as f32;
    let target_height = ((frame.height as f32 * scale).round() as u32).max(1);

    let mut data = Vec::with_capacity((target_width * target_height * 4) as usize);
    for y in 0..target_height {
        let src_y = (y as u64 * frame.height as u64 / target_height as u64) as u32;
        for x in 0..target_width {
            let src_x = (x as u64 * frame.width as u64 / target_width as u64) as u32;
            let idx = ((src_y * frame.width + src_x) * 4) as usize;
            data.extend_from_slice(&frame.data[idx..idx + 4]);
        }
    }

    Frame::new(data, target_width, target_height)
}
