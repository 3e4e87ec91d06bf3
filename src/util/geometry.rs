// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module converts window placement between screen units and
//! screen-relative fractions.

use crate::models::{settings::WindowGeometry, state::PixelGeometry};

/// Convert a window placement to fractions (0.0 to 1.0) of the screen size.
///
/// Returns `None` when the screen size is unknown or degenerate.
pub fn normalize_geometry(
    geometry: &PixelGeometry,
    screen_width: f64,
    screen_height: f64,
) -> Option<WindowGeometry> {
    if screen_width <= 0.0 || screen_height <= 0.0 {
        return None;
    }
    Some(WindowGeometry {
        wx: geometry.x / screen_width,
        wy: geometry.y / screen_height,
        ww: geometry.width / screen_width,
        wh: geometry.height / screen_height,
    })
}

/// Convert screen fractions back to a placement in screen units.
pub fn denormalize_geometry(
    metrics: &WindowGeometry,
    screen_width: f64,
    screen_height: f64,
) -> PixelGeometry {
    let metrics = metrics.clamped();
    PixelGeometry {
        x: metrics.wx * screen_width,
        y: metrics.wy * screen_height,
        width: metrics.ww * screen_width,
        height: metrics.wh * screen_height,
    }
}
