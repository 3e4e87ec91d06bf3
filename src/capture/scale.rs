// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Nearest-neighbor upscaling.
//!
//! Smoothing would blur the boundaries between screen pixels; nearest
//! sampling keeps every source pixel a solid block of its exact color.

use image::{imageops, imageops::FilterType, RgbaImage};

/// Resize `source` to `width` x `height` using nearest-neighbor sampling.
pub fn nearest(source: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if source.dimensions() == (width, height) {
        return source.clone();
    }
    imageops::resize(source, width, height, FilterType::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn checkerboard() -> RgbaImage {
        RgbaImage::from_fn(2, 2, |x, y| if (x + y) % 2 == 0 { RED } else { BLUE })
    }

    #[test]
    fn test_output_has_requested_size() {
        let scaled = nearest(&checkerboard(), 300, 300);
        assert_eq!(scaled.dimensions(), (300, 300));
    }

    #[test]
    fn test_pixels_become_blocks() {
        let scaled = nearest(&checkerboard(), 4, 4);
        for y in 0..4 {
            for x in 0..4 {
                let expected = if (x / 2 + y / 2) % 2 == 0 { RED } else { BLUE };
                assert_eq!(*scaled.get_pixel(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_no_colors_are_invented() {
        let scaled = nearest(&checkerboard(), 9, 7);
        assert!(scaled.pixels().all(|p| *p == RED || *p == BLUE));
    }
}
