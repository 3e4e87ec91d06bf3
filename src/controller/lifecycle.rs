// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Window placement restore and debounced geometry persistence.

use crate::constants::MIN_WINDOW_SIZE;
use crate::models::{
    settings::{PersistedState, WindowGeometry},
    state::{MagnifierState, PixelGeometry},
};
use crate::util::{
    debounce::Debouncer,
    geometry::{denormalize_geometry, normalize_geometry},
};
use std::time::{Duration, Instant};

/// Tracks move/resize notifications and decides when to persist them.
#[derive(Debug)]
pub struct WindowLifecycle {
    debounce: Debouncer<PixelGeometry>,
    pending_restore: Option<WindowGeometry>,
}

impl WindowLifecycle {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce: Debouncer::new(debounce),
            pending_restore: None,
        }
    }

    /// Apply settings that finished loading.
    ///
    /// The zoom takes effect immediately. Stored geometry waits for
    /// [`restore`](Self::restore), which needs the screen size.
    pub fn settings_loaded(&mut self, state: &mut MagnifierState, loaded: PersistedState) {
        state.zoom = loaded.zoom;
        match loaded.metrics {
            Some(metrics) => self.pending_restore = Some(metrics),
            None => {
                log::debug!("No stored window geometry, keeping default placement");
                state.restored = true;
            }
        }
    }

    /// Whether stored geometry is waiting to be applied.
    pub fn restore_pending(&self) -> bool {
        self.pending_restore.is_some()
    }

    /// Placement to apply to the window for the stored geometry.
    ///
    /// Completes the restore whenever geometry is pending. Without a screen
    /// size the window keeps its default placement.
    pub fn restore(
        &mut self,
        state: &mut MagnifierState,
        screen: Option<(f64, f64)>,
    ) -> Option<PixelGeometry> {
        let metrics = self.pending_restore.take()?;
        state.metrics = Some(metrics);
        state.restored = true;

        let Some((screen_width, screen_height)) = screen else {
            log::warn!("Screen size unknown, keeping default window placement");
            return None;
        };

        let mut placement = denormalize_geometry(&metrics, screen_width, screen_height);
        placement.width = placement.width.max(MIN_WINDOW_SIZE[0] as f64);
        placement.height = placement.height.max(MIN_WINDOW_SIZE[1] as f64);

        log::info!(
            "Restoring window to {:.0}x{:.0} at ({:.0}, {:.0})",
            placement.width,
            placement.height,
            placement.x,
            placement.y
        );
        Some(placement)
    }

    /// Record a move/resize. Ignored until the initial restore has completed.
    pub fn geometry_changed(&mut self, state: &MagnifierState, geometry: PixelGeometry, now: Instant) {
        if !state.restored {
            log::trace!("Ignoring geometry change before restore: {:?}", geometry);
            return;
        }
        self.debounce.push(geometry, now);
    }

    /// Settings to write once the geometry has been quiet for the debounce period.
    pub fn settle(
        &mut self,
        state: &mut MagnifierState,
        screen: Option<(f64, f64)>,
        now: Instant,
    ) -> Option<PersistedState> {
        let geometry = self.debounce.poll(now)?;
        let Some((screen_width, screen_height)) = screen else {
            log::warn!("Screen size unknown, not saving window geometry");
            return None;
        };
        // Off-screen or other-monitor positions still have to fit the [0, 1] range.
        let metrics = normalize_geometry(&geometry, screen_width, screen_height)?.clamped();
        state.metrics = Some(metrics);
        Some(state.to_persisted())
    }

    pub fn time_until_settled(&self, now: Instant) -> Option<Duration> {
        self.debounce.remaining(now)
    }

    /// Drop any unsaved geometry; used when the window is destroyed.
    pub fn cancel(&mut self) {
        self.debounce.cancel();
        self.pending_restore = None;
    }
}
