// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Runtime state shared by the poll loop and the window lifecycle.

use super::settings::{PersistedState, WindowGeometry, ZoomLevel};

/// Window placement in screen units: outer position and inner size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The one mutable state object of the magnifier.
///
/// Owned by the app and lent to the controllers; never duplicated.
#[derive(Debug, Clone, Default)]
pub struct MagnifierState {
    /// Current magnification factor
    pub zoom: ZoomLevel,

    /// Size of the image area in physical pixels
    pub viewport: (u32, u32),

    /// Geometry last written to (or read from) the settings file
    pub metrics: Option<WindowGeometry>,

    /// Set once the stored settings have been applied to the window
    pub restored: bool,
}

impl MagnifierState {
    /// Snapshot of what goes into the settings file.
    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            zoom: self.zoom,
            metrics: self.metrics,
        }
    }
}
