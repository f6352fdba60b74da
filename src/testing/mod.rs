//! Synthetic preview frames for offline testing
//!
//! Deterministic rasters with known score characteristics, so the scorer and
//! classifier can be exercised without camera hardware.

use crate::types::Frame;

/// A frame of one solid color. Zero gradient everywhere, so both scores are
/// exactly zero.
pub fn uniform_frame(width: u32, height: u32, r: u8, g: u8, b: u8) -> Frame {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..width * height {
        data.extend_from_slice(&[r, g, b, 255]);
    }
    Frame::new(data, width, height)
}

/// A black-and-white checkerboard with `cell`-pixel squares. High contrast:
/// large Laplacian variance and, for small cells, a large edge score.
pub fn checkerboard_frame(width: u32, height: u32, cell: u32) -> Frame {
    let cell = cell.max(1);
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let white = ((x / cell) + (y / cell)) % 2 == 0;
            let v = if white { 255 } else { 0 };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    Frame::new(data, width, height)
}

/// A horizontal grayscale gradient: gentle, uniform edge response.
pub fn gradient_frame(width: u32, height: u32) -> Frame {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / width.max(1)) as u8;
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    Frame::new(data, width, height)
}
