// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Global pointer position.

use device_query::{DeviceQuery, DeviceState};

/// Anything that can report where the mouse pointer is on screen.
pub trait PointerSampler {
    /// Pointer position in screen pixels, or `None` if it can't be read.
    fn position(&self) -> Option<(i32, i32)>;
}

/// Reads the pointer from the display server.
pub struct DevicePointer {
    state: Option<DeviceState>,
}

impl DevicePointer {
    pub fn new() -> Self {
        let state = connect();
        if state.is_none() {
            log::warn!("No display connection for pointer queries; magnifier will stay blank");
        }
        Self { state }
    }
}

impl Default for DevicePointer {
    fn default() -> Self {
        Self::new()
    }
}

// On X11 the plain constructor panics without a display.
#[cfg(target_os = "linux")]
fn connect() -> Option<DeviceState> {
    DeviceState::checked_new()
}

#[cfg(not(target_os = "linux"))]
fn connect() -> Option<DeviceState> {
    Some(DeviceState::new())
}

impl PointerSampler for DevicePointer {
    fn position(&self) -> Option<(i32, i32)> {
        self.state.as_ref().map(|state| state.get_mouse().coords)
    }
}
