// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Screen sampling: pointer position, region capture and scaling.

pub mod grabber;
pub mod pointer;
pub mod scale;

use crate::models::region::CaptureRegion;
use anyhow::Result;
use image::RgbaImage;

pub use grabber::{DesktopGrabber, ScreenGrabber};
pub use pointer::{DevicePointer, PointerSampler};

/// Capture `region` and enlarge it to fill `viewport`.
pub fn magnify(
    grabber: &dyn ScreenGrabber,
    region: &CaptureRegion,
    viewport: (u32, u32),
) -> Result<RgbaImage> {
    let raw = grabber.capture(region)?;
    Ok(scale::nearest(&raw, viewport.0, viewport.1))
}
