// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Screen pixel capture.
//!
//! Regions are clamped to the monitor they are taken from before the
//! platform is asked for pixels, so a pointer near an edge still yields a
//! full-size capture.

use crate::models::region::{CaptureRegion, ScreenBounds};
use anyhow::{anyhow, Context, Result};
use image::RgbaImage;
use xcap::Monitor;

/// Anything that can read a rectangle of pixels off the screen.
pub trait ScreenGrabber {
    fn capture(&self, region: &CaptureRegion) -> Result<RgbaImage>;

    /// Size of the primary screen, if the platform can report it.
    fn screen_size(&self) -> Option<(f64, f64)>;
}

/// Captures from the physical monitors through xcap.
#[derive(Debug, Default)]
pub struct DesktopGrabber;

impl DesktopGrabber {
    pub fn new() -> Self {
        Self
    }

    /// Monitor under `point`, or the primary monitor when the point is off every screen.
    fn monitor_at(point: (i32, i32)) -> Result<Monitor> {
        match Monitor::from_point(point.0, point.1) {
            Ok(monitor) => Ok(monitor),
            Err(_) => Self::primary_monitor(),
        }
    }

    fn primary_monitor() -> Result<Monitor> {
        let monitors = Monitor::all().context("enumerating monitors")?;
        let mut fallback = None;
        for monitor in monitors {
            if monitor.is_primary().unwrap_or(false) {
                return Ok(monitor);
            }
            fallback.get_or_insert(monitor);
        }
        fallback.ok_or_else(|| anyhow!("no monitors available"))
    }
}

fn bounds_of(monitor: &Monitor) -> Result<ScreenBounds> {
    Ok(ScreenBounds {
        x: monitor.x()?,
        y: monitor.y()?,
        width: monitor.width()?,
        height: monitor.height()?,
    })
}

impl ScreenGrabber for DesktopGrabber {
    fn capture(&self, region: &CaptureRegion) -> Result<RgbaImage> {
        let monitor = Self::monitor_at(region.center())?;
        let bounds = bounds_of(&monitor).context("reading monitor geometry")?;
        let clamped = region
            .clamp_to(&bounds)
            .ok_or_else(|| anyhow!("monitor has no area"))?;

        let local_x = (clamped.x - bounds.x) as u32;
        let local_y = (clamped.y - bounds.y) as u32;
        let shot = monitor
            .capture_region(local_x, local_y, clamped.width, clamped.height)
            .context("capturing screen region")?;

        // xcap links its own copy of `image`; go through the raw buffer.
        let (width, height) = (shot.width(), shot.height());
        RgbaImage::from_raw(width, height, shot.into_raw())
            .ok_or_else(|| anyhow!("capture returned a malformed {}x{} buffer", width, height))
    }

    fn screen_size(&self) -> Option<(f64, f64)> {
        let bounds = Self::primary_monitor().and_then(|monitor| bounds_of(&monitor));
        match bounds {
            Ok(bounds) if bounds.width > 0 && bounds.height > 0 => {
                Some((bounds.width as f64, bounds.height as f64))
            }
            Ok(_) => None,
            Err(e) => {
                log::debug!("Primary monitor size unavailable: {:#}", e);
                None
            }
        }
    }
}
