// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application-wide tunables.

use std::time::Duration;

/// Display name used for the window title and about dialog.
pub const APP_NAME: &str = "Magnus";

/// Application identifier passed to the windowing layer.
pub const APP_ID: &str = "org.kryogenix.magnus";

/// Interval between screen samples.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Quiet period after the last move/resize before geometry is written.
pub const GEOMETRY_DEBOUNCE: Duration = Duration::from_secs(1);

/// Smallest and largest supported magnification factor.
pub const MIN_ZOOM: u8 = 2;
pub const MAX_ZOOM: u8 = 4;

/// The window never gets smaller than this (in points).
pub const MIN_WINDOW_SIZE: [f32; 2] = [300.0, 300.0];

/// Name of the settings file inside the cache directory.
pub const SETTINGS_FILE: &str = "magnus.json";

/// Overrides the directory the settings file lives in.
pub const CACHE_DIR_ENV: &str = "MAGNUS_CACHE_DIR";

/// Project home page shown in the about dialog.
pub const PROJECT_URL: &str = env!("CARGO_PKG_HOMEPAGE");
