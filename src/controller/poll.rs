// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fixed-interval sampling of the screen around the pointer.
//!
//! The loop has a single "polling" state. Ticks run on the UI thread one at
//! a time, so there is no overlap to guard against; stopping the loop when
//! the window goes away is the only transition.

use crate::capture::{self, PointerSampler, ScreenGrabber};
use crate::models::{region::CaptureRegion, state::MagnifierState};
use image::RgbaImage;
use std::time::{Duration, Instant};

/// One enlarged frame ready for display.
pub struct Frame {
    pub region: CaptureRegion,
    pub image: RgbaImage,
}

/// Schedules ticks at a fixed period and performs the per-tick work.
#[derive(Debug)]
pub struct PollLoop {
    interval: Duration,
    next_due: Instant,
    stopped: bool,
}

impl PollLoop {
    /// Create a loop whose first tick is one interval after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
            stopped: false,
        }
    }

    /// Whether a tick should run at `now`. Schedules the following tick when it does.
    pub fn due(&mut self, now: Instant) -> bool {
        if self.stopped || now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }

    /// Time until the next tick, or `None` once stopped.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if self.stopped {
            None
        } else {
            Some(self.next_due.saturating_duration_since(now))
        }
    }

    pub fn stop(&mut self) {
        if !self.stopped {
            log::debug!("Poll loop stopped");
        }
        self.stopped = true;
    }

    /// Sample the pointer, capture around it and scale to the viewport.
    ///
    /// Returns `None` when there is nothing to show this tick; the previous
    /// frame then stays on screen.
    pub fn tick(
        &self,
        state: &MagnifierState,
        pointer: &dyn PointerSampler,
        grabber: &dyn ScreenGrabber,
    ) -> Option<Frame> {
        if self.stopped {
            return None;
        }
        let position = pointer.position()?;
        let region = CaptureRegion::around(position, state.viewport, state.zoom);
        if region.is_empty() {
            return None;
        }

        match capture::magnify(grabber, &region, state.viewport) {
            Ok(image) => Some(Frame { region, image }),
            Err(e) => {
                log::debug!("Skipping frame at {:?}: {:#}", position, e);
                None
            }
        }
    }
}
