//! Frame quality scoring
//!
//! Pure, deterministic analysis of a downsampled preview raster. The blur
//! score is the variance of a 4-neighbor discrete Laplacian over the frame's
//! interior pixels; the edge score is the mean absolute central-difference
//! gradient, a proxy for detail density and subject distance.

use crate::types::Frame;
use serde::{Deserialize, Serialize};

/// ITU-R BT.709 luma weights. Exact values matter for score parity.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Raw scores from one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameScores {
    /// Variance of the Laplacian; higher = sharper
    pub blur_score: f32,
    /// Mean absolute gradient magnitude; higher = more local detail
    pub edge_score: f32,
}

/// Convert an RGBA frame to a single-channel luminance buffer.
///
/// One `f32` per pixel, row-major; the alpha channel is ignored.
pub fn luminance(frame: &Frame) -> Vec<f32> {
    let pixels = frame.pixel_count();
    let mut gray = Vec::with_capacity(pixels);
    for i in 0..pixels {
        let r = frame.data[i * 4] as f32;
        let g = frame.data[i * 4 + 1] as f32;
        let b = frame.data[i * 4 + 2] as f32;
        gray.push(LUMA_R * r + LUMA_G * g + LUMA_B * b);
    }
    gray
}

/// Score a frame for blur and edge density.
///
/// The frame must be at least 3x3 so that at least one interior pixel exists;
/// callers are responsible for skipping degenerate rasters.
pub fn score_frame(frame: &Frame) -> FrameScores {
    debug_assert!(
        frame.width >= 3 && frame.height >= 3,
        "scorer requires at least one interior pixel"
    );

    let w = frame.width as usize;
    let h = frame.height as usize;
    let gray = luminance(frame);

    let mut lap_sum = 0.0f64;
    let mut lap_sum_sq = 0.0f64;
    let mut edge_sum = 0.0f64;
    let count = ((w - 2) * (h - 2)) as f64;

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let idx = y * w + x;

            let center = gray[idx] as f64;
            let up = gray[idx - w] as f64;
            let down = gray[idx + w] as f64;
            let left = gray[idx - 1] as f64;
            let right = gray[idx + 1] as f64;

            let lap = up + down + left + right - 4.0 * center;
            lap_sum += lap;
            lap_sum_sq += lap * lap;

            edge_sum += (right - left).abs() + (down - up).abs();
        }
    }

    let mean = lap_sum / count;
    let variance = lap_sum_sq / count - mean * mean;

    FrameScores {
        blur_score: variance as f32,
        edge_score: (edge_sum / count) as f32,
    }
}
