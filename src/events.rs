// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Window notifications delivered to registered handlers.
//!
//! Handlers receive the state they act on by mutable reference at emit
//! time instead of capturing it, so the state keeps a single owner.

use crate::models::state::PixelGeometry;
use std::time::Instant;

type GeometryHandler<S> = Box<dyn FnMut(&mut S, PixelGeometry, Instant)>;
type TickHandler<S> = Box<dyn FnMut(&mut S, Instant)>;
type DestroyHandler<S> = Box<dyn FnMut(&mut S)>;

/// Registry of window event handlers operating on state `S`.
pub struct WindowEvents<S> {
    geometry_changed: Vec<GeometryHandler<S>>,
    tick: Vec<TickHandler<S>>,
    destroy: Vec<DestroyHandler<S>>,
    destroyed: bool,
}

impl<S> Default for WindowEvents<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> WindowEvents<S> {
    pub fn new() -> Self {
        Self {
            geometry_changed: Vec::new(),
            tick: Vec::new(),
            destroy: Vec::new(),
            destroyed: false,
        }
    }

    pub fn on_geometry_changed(&mut self, handler: impl FnMut(&mut S, PixelGeometry, Instant) + 'static) {
        self.geometry_changed.push(Box::new(handler));
    }

    pub fn on_tick(&mut self, handler: impl FnMut(&mut S, Instant) + 'static) {
        self.tick.push(Box::new(handler));
    }

    pub fn on_destroy(&mut self, handler: impl FnMut(&mut S) + 'static) {
        self.destroy.push(Box::new(handler));
    }

    pub fn emit_geometry_changed(&mut self, state: &mut S, geometry: PixelGeometry, now: Instant) {
        if self.destroyed {
            return;
        }
        for handler in &mut self.geometry_changed {
            handler(state, geometry, now);
        }
    }

    pub fn emit_tick(&mut self, state: &mut S, now: Instant) {
        if self.destroyed {
            return;
        }
        for handler in &mut self.tick {
            handler(state, now);
        }
    }

    /// Deliver the destroy notification. Only the first call has any effect;
    /// later events of every kind are dropped.
    pub fn emit_destroy(&mut self, state: &mut S) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        for handler in &mut self.destroy {
            handler(state);
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Log(Vec<String>);

    fn geometry() -> PixelGeometry {
        PixelGeometry { x: 1.0, y: 2.0, width: 3.0, height: 4.0 }
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let mut events = WindowEvents::<Log>::new();
        events.on_tick(|log, _| log.0.push("first".into()));
        events.on_tick(|log, _| log.0.push("second".into()));
        events.on_geometry_changed(|log, g, _| log.0.push(format!("moved {}", g.x)));

        let mut log = Log::default();
        events.emit_tick(&mut log, Instant::now());
        events.emit_geometry_changed(&mut log, geometry(), Instant::now());

        assert_eq!(log.0, vec!["first", "second", "moved 1"]);
    }

    #[test]
    fn test_destroy_fires_once_and_silences_later_events() {
        let mut events = WindowEvents::<Log>::new();
        events.on_tick(|log, _| log.0.push("tick".into()));
        events.on_geometry_changed(|log, _, _| log.0.push("moved".into()));
        events.on_destroy(|log| log.0.push("destroy".into()));

        let mut log = Log::default();
        events.emit_destroy(&mut log);
        events.emit_destroy(&mut log);
        events.emit_tick(&mut log, Instant::now());
        events.emit_geometry_changed(&mut log, geometry(), Instant::now());

        assert!(events.is_destroyed());
        assert_eq!(log.0, vec!["destroy"]);
    }
}
