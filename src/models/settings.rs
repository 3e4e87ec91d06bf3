// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Persisted settings.
//!
//! This module defines the zoom level and the window geometry that are
//! written to the settings file between runs.

use crate::constants::{MAX_ZOOM, MIN_ZOOM};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Magnification factor, always within `MIN_ZOOM..=MAX_ZOOM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    /// Create a zoom level, clamping out-of-range values into the supported range.
    pub fn new(factor: i64) -> Self {
        Self(factor.clamp(MIN_ZOOM as i64, MAX_ZOOM as i64) as u8)
    }

    /// Every selectable zoom level, smallest first.
    pub fn all() -> impl Iterator<Item = ZoomLevel> {
        (MIN_ZOOM..=MAX_ZOOM).map(ZoomLevel)
    }

    pub fn factor(self) -> u32 {
        self.0 as u32
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(MIN_ZOOM)
    }
}

impl From<i64> for ZoomLevel {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<ZoomLevel> for u8 {
    fn from(zoom: ZoomLevel) -> Self {
        zoom.0
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×", self.0)
    }
}

/// Window position and size as fractions (0.0 to 1.0) of the screen size.
///
/// Fractions keep the placement meaningful when the screen resolution
/// changes between runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub wx: f64,
    pub wy: f64,
    pub ww: f64,
    pub wh: f64,
}

impl WindowGeometry {
    /// Copy of the geometry with every component forced into [0, 1].
    pub fn clamped(&self) -> Self {
        Self {
            wx: self.wx.clamp(0.0, 1.0),
            wy: self.wy.clamp(0.0, 1.0),
            ww: self.ww.clamp(0.0, 1.0),
            wh: self.wh.clamp(0.0, 1.0),
        }
    }
}

/// Complete settings document for serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub zoom: ZoomLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<WindowGeometry>,
}
