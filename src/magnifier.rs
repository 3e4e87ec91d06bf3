// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The magnifier core, independent of the UI toolkit.
//!
//! `Magnifier` owns the shared state together with the poll loop, the
//! window lifecycle and the screen access objects. The UI forwards window
//! notifications to it through [`WindowEvents`] and displays the frames it
//! produces.

use crate::capture::{PointerSampler, ScreenGrabber};
use crate::constants::{GEOMETRY_DEBOUNCE, POLL_INTERVAL};
use crate::controller::{Frame, PollLoop, WindowLifecycle};
use crate::events::WindowEvents;
use crate::io::persistence;
use crate::models::{
    settings::{PersistedState, ZoomLevel},
    state::{MagnifierState, PixelGeometry},
};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Everything the magnifier does between window events.
pub struct Magnifier {
    /// Zoom, viewport and persisted geometry
    pub state: MagnifierState,

    /// Fixed-period capture schedule
    poll: PollLoop,

    /// Restore gate and geometry debounce
    lifecycle: WindowLifecycle,

    /// Source of the global pointer position
    pointer: Box<dyn PointerSampler>,

    /// Source of screen pixels
    grabber: Box<dyn ScreenGrabber>,

    /// Where settings are written
    settings_path: PathBuf,

    /// Newest frame not yet handed to the viewer
    frame: Option<Frame>,
}

impl Magnifier {
    pub fn new(
        pointer: Box<dyn PointerSampler>,
        grabber: Box<dyn ScreenGrabber>,
        settings_path: PathBuf,
        now: Instant,
    ) -> Self {
        Self {
            state: MagnifierState::default(),
            poll: PollLoop::new(POLL_INTERVAL, now),
            lifecycle: WindowLifecycle::new(GEOMETRY_DEBOUNCE),
            pointer,
            grabber,
            settings_path,
            frame: None,
        }
    }

    /// Register the magnifier's reactions to window notifications.
    pub fn connect(events: &mut WindowEvents<Magnifier>) {
        events.on_geometry_changed(|m, geometry, now| {
            m.lifecycle.geometry_changed(&m.state, geometry, now);
        });
        events.on_tick(|m, _now| {
            if let Some(frame) = m.poll.tick(&m.state, m.pointer.as_ref(), m.grabber.as_ref()) {
                m.frame = Some(frame);
            }
        });
        events.on_destroy(|m| {
            m.poll.stop();
            m.lifecycle.cancel();
        });
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Whether the poll loop wants a tick at `now`.
    pub fn tick_due(&mut self, now: Instant) -> bool {
        self.poll.due(now)
    }

    /// Hand over settings that finished loading.
    pub fn settings_loaded(&mut self, loaded: PersistedState) {
        log::info!("Settings loaded: zoom {}", loaded.zoom);
        self.lifecycle.settings_loaded(&mut self.state, loaded);
    }

    /// Window placement to apply once stored settings have loaded.
    ///
    /// `screen` comes from the window; when it is unknown the primary
    /// monitor reported by the grabber is used instead.
    pub fn take_restore(&mut self, screen: Option<(f64, f64)>) -> Option<PixelGeometry> {
        if !self.lifecycle.restore_pending() {
            return None;
        }
        let screen = screen.or_else(|| self.grabber.screen_size());
        self.lifecycle.restore(&mut self.state, screen)
    }

    /// Persist the geometry if its debounce period has elapsed.
    pub fn settle(&mut self, screen: Option<(f64, f64)>, now: Instant) {
        if let Some(settings) = self.lifecycle.settle(&mut self.state, screen, now) {
            self.write(&settings);
        }
    }

    /// Change the magnification and persist it.
    pub fn set_zoom(&mut self, zoom: ZoomLevel) {
        if self.state.zoom == zoom {
            return;
        }
        log::info!("Zoom set to {}", zoom);
        self.state.zoom = zoom;
        // Saving before the load resolves would clobber the stored geometry.
        if self.state.restored {
            self.write(&self.state.to_persisted());
        }
    }

    /// Take the newest frame, if one arrived since the last call.
    pub fn take_frame(&mut self) -> Option<Frame> {
        self.frame.take()
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.state.viewport = (width, height);
    }

    /// How long the UI may sleep before one of the timers needs service.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        match (self.poll.time_until_next(now), self.lifecycle.time_until_settled(now)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn write(&self, settings: &PersistedState) {
        if let Err(e) = persistence::save(&self.settings_path, settings) {
            log::error!("Failed to save settings: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::poll::tests::{FixedPointer, RecordingGrabber};
    use crate::models::{region::CaptureRegion, settings::WindowGeometry};

    fn magnifier(name: &str, now: Instant) -> Magnifier {
        magnifier_with(name, now, RecordingGrabber::default())
    }

    fn magnifier_with(name: &str, now: Instant, grabber: RecordingGrabber) -> Magnifier {
        let dir = std::env::temp_dir().join(format!("magnus-core-{}-{}", std::process::id(), name));
        let _ = std::fs::remove_dir_all(&dir);
        Magnifier::new(
            Box::new(FixedPointer(Some((500, 500)))),
            Box::new(grabber),
            dir.join("magnus.json"),
            now,
        )
    }

    fn wired() -> WindowEvents<Magnifier> {
        let mut events = WindowEvents::new();
        Magnifier::connect(&mut events);
        events
    }

    #[test]
    fn test_tick_produces_frame() {
        let start = Instant::now();
        let mut events = wired();
        let mut m = magnifier("tick", start);
        m.set_viewport(300, 300);

        let now = start + POLL_INTERVAL;
        assert!(m.tick_due(now));
        events.emit_tick(&mut m, now);

        let frame = m.take_frame().unwrap();
        assert_eq!(frame.region, CaptureRegion { x: 425, y: 425, width: 150, height: 150 });
        assert_eq!(frame.image.dimensions(), (300, 300));
        assert!(m.take_frame().is_none());
    }

    #[test]
    fn test_geometry_persisted_after_restore_only() {
        let start = Instant::now();
        let mut events = wired();
        let mut m = magnifier("geometry", start);
        let screen = Some((1000.0, 1000.0));
        let moved = PixelGeometry { x: 100.0, y: 200.0, width: 300.0, height: 400.0 };

        events.emit_geometry_changed(&mut m, moved, start);
        m.settle(screen, start + Duration::from_secs(2));
        assert!(!m.settings_path().exists());

        m.settings_loaded(PersistedState::default());
        events.emit_geometry_changed(&mut m, moved, start + Duration::from_secs(3));
        m.settle(screen, start + Duration::from_secs(4));

        let saved = persistence::load(m.settings_path());
        assert_eq!(saved.metrics, Some(WindowGeometry { wx: 0.1, wy: 0.2, ww: 0.3, wh: 0.4 }));
    }

    #[test]
    fn test_restore_falls_back_to_primary_screen() {
        let start = Instant::now();
        let grabber = RecordingGrabber { screen: Some((1000.0, 500.0)), ..Default::default() };
        let mut m = magnifier_with("fallback", start, grabber);

        assert_eq!(m.take_restore(None), None);
        m.settings_loaded(PersistedState {
            zoom: ZoomLevel::default(),
            metrics: Some(WindowGeometry { wx: 0.5, wy: 0.5, ww: 0.4, wh: 0.8 }),
        });

        let placement = m.take_restore(None).unwrap();
        assert_eq!(placement, PixelGeometry { x: 500.0, y: 250.0, width: 400.0, height: 400.0 });
        assert!(m.state.restored);
    }

    #[test]
    fn test_restore_completes_without_any_screen_size() {
        let start = Instant::now();
        let mut m = magnifier("noscreen", start);
        m.settings_loaded(PersistedState {
            zoom: ZoomLevel::default(),
            metrics: Some(WindowGeometry { wx: 0.5, wy: 0.5, ww: 0.4, wh: 0.8 }),
        });

        assert_eq!(m.take_restore(None), None);
        assert!(m.state.restored);
        m.set_zoom(ZoomLevel::new(3));
        assert_eq!(persistence::load(m.settings_path()).zoom.factor(), 3);
    }

    #[test]
    fn test_zoom_change_saved_once_restored() {
        let start = Instant::now();
        let mut m = magnifier("zoom", start);

        m.set_zoom(ZoomLevel::new(3));
        assert_eq!(m.state.zoom.factor(), 3);
        assert!(!m.settings_path().exists());

        m.settings_loaded(PersistedState::default());
        m.set_zoom(ZoomLevel::new(4));
        assert_eq!(persistence::load(m.settings_path()).zoom.factor(), 4);
    }

    #[test]
    fn test_destroy_stops_everything() {
        let start = Instant::now();
        let mut events = wired();
        let mut m = magnifier("destroy", start);
        m.set_viewport(300, 300);
        m.settings_loaded(PersistedState::default());

        events.emit_geometry_changed(
            &mut m,
            PixelGeometry { x: 0.0, y: 0.0, width: 300.0, height: 300.0 },
            start,
        );
        events.emit_destroy(&mut m);

        assert!(!m.tick_due(start + Duration::from_secs(5)));
        assert_eq!(m.next_wakeup(start), None);
        m.settle(Some((1000.0, 1000.0)), start + Duration::from_secs(5));
        assert!(!m.settings_path().exists());
    }
}
