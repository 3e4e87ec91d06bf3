// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Capture region arithmetic.
//!
//! The capture region is the rectangle of screen pixels sampled on each
//! tick. It is centered on the pointer and sized so that scaling it by the
//! zoom factor fills the viewport.

use super::settings::ZoomLevel;

/// Rectangle in screen pixel space. The origin may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Origin and size of the monitor a region is captured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRegion {
    /// Region of `viewport / zoom` pixels centered on `pointer`.
    pub fn around(pointer: (i32, i32), viewport: (u32, u32), zoom: ZoomLevel) -> Self {
        let width = viewport.0 / zoom.factor();
        let height = viewport.1 / zoom.factor();
        Self {
            x: pointer.0.saturating_sub((width / 2) as i32),
            y: pointer.1.saturating_sub((height / 2) as i32),
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Center point, used to pick the monitor to capture from.
    pub fn center(&self) -> (i32, i32) {
        (
            self.x.saturating_add((self.width / 2) as i32),
            self.y.saturating_add((self.height / 2) as i32),
        )
    }

    /// Move the region inside `bounds`, keeping its size where it fits.
    ///
    /// A region larger than the screen is shrunk to the screen size.
    /// Returns `None` for empty bounds.
    pub fn clamp_to(&self, bounds: &ScreenBounds) -> Option<CaptureRegion> {
        if bounds.width == 0 || bounds.height == 0 {
            return None;
        }
        let (x, width) = clamp_axis(self.x, self.width, bounds.x, bounds.width);
        let (y, height) = clamp_axis(self.y, self.height, bounds.y, bounds.height);
        Some(CaptureRegion { x, y, width, height })
    }
}

fn clamp_axis(start: i32, len: u32, min: i32, extent: u32) -> (i32, u32) {
    let len = len.min(extent);
    let max_start = min as i64 + extent as i64 - len as i64;
    let start = (start as i64).clamp(min as i64, max_start);
    (start as i32, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_size_is_viewport_div_zoom() {
        for zoom in ZoomLevel::all() {
            for (vw, vh) in [(300, 300), (301, 299), (640, 480), (1, 7), (0, 0)] {
                let region = CaptureRegion::around((0, 0), (vw, vh), zoom);
                assert_eq!(region.width, vw / zoom.factor());
                assert_eq!(region.height, vh / zoom.factor());
            }
        }
    }

    #[test]
    fn test_region_is_centered_on_pointer() {
        let zoom = ZoomLevel::new(3);
        for pointer in [(0, 0), (-400, -20), (5000, 12), (i32::MIN + 10, i32::MAX - 10)] {
            let region = CaptureRegion::around(pointer, (310, 200), zoom);
            assert_eq!(region.width, 103);
            assert_eq!(region.height, 66);
            assert_eq!(region.x, pointer.0.saturating_sub(51));
            assert_eq!(region.y, pointer.1.saturating_sub(33));
        }
    }

    #[test]
    fn test_reference_region() {
        let region = CaptureRegion::around((500, 500), (300, 300), ZoomLevel::new(2));
        assert_eq!(region, CaptureRegion { x: 425, y: 425, width: 150, height: 150 });
    }

    #[test]
    fn test_clamp_shifts_into_bounds() {
        let screen = ScreenBounds { x: 0, y: 0, width: 1920, height: 1080 };

        let top_left = CaptureRegion { x: -40, y: -10, width: 150, height: 150 };
        assert_eq!(
            top_left.clamp_to(&screen),
            Some(CaptureRegion { x: 0, y: 0, width: 150, height: 150 })
        );

        let bottom_right = CaptureRegion { x: 1900, y: 1000, width: 150, height: 150 };
        assert_eq!(
            bottom_right.clamp_to(&screen),
            Some(CaptureRegion { x: 1770, y: 930, width: 150, height: 150 })
        );

        let inside = CaptureRegion { x: 350, y: 350, width: 150, height: 150 };
        assert_eq!(inside.clamp_to(&screen), Some(inside));
    }

    #[test]
    fn test_clamp_with_monitor_offset() {
        let screen = ScreenBounds { x: 1920, y: -200, width: 1280, height: 1024 };
        let region = CaptureRegion { x: 100, y: -500, width: 200, height: 100 };
        assert_eq!(
            region.clamp_to(&screen),
            Some(CaptureRegion { x: 1920, y: -200, width: 200, height: 100 })
        );
    }

    #[test]
    fn test_clamp_shrinks_oversized_region() {
        let screen = ScreenBounds { x: 0, y: 0, width: 100, height: 50 };
        let region = CaptureRegion { x: -10, y: 10, width: 400, height: 400 };
        assert_eq!(
            region.clamp_to(&screen),
            Some(CaptureRegion { x: 0, y: 0, width: 100, height: 50 })
        );
    }

    #[test]
    fn test_clamp_empty_bounds() {
        let screen = ScreenBounds { x: 0, y: 0, width: 0, height: 1080 };
        let region = CaptureRegion { x: 0, y: 0, width: 10, height: 10 };
        assert_eq!(region.clamp_to(&screen), None);
    }
}
