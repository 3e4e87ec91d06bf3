// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module glues the magnifier core to the eframe window: it turns
//! viewport changes and frame timing into window events, uploads captured
//! frames to the viewer and applies restored window placement.

use crate::capture::{DesktopGrabber, DevicePointer};
use crate::cli::CliOptions;
use crate::events::WindowEvents;
use crate::io::persistence::{self, PendingLoad};
use crate::magnifier::Magnifier;
use crate::models::state::PixelGeometry;
use crate::ui::{about, header, viewer::Viewer};
use std::time::{Duration, Instant};

/// How often to look for the settings load while it is outstanding.
const LOAD_CHECK_INTERVAL: Duration = Duration::from_millis(50);

/// Main application state.
pub struct MagnusApp {
    /// Capture loop, window lifecycle and shared state
    magnifier: Magnifier,

    /// Handlers for window notifications
    events: WindowEvents<Magnifier>,

    /// Texture holding the magnified image
    viewer: Viewer,

    /// Settings being read in the background
    pending_load: PendingLoad,

    /// Window placement seen on the previous frame
    last_geometry: Option<PixelGeometry>,

    /// Whether the about window is open
    show_about: bool,
}

impl MagnusApp {
    /// Create the application and start loading stored settings.
    pub fn new(options: CliOptions) -> Self {
        let now = Instant::now();
        let magnifier = Magnifier::new(
            Box::new(DevicePointer::new()),
            Box::new(DesktopGrabber::new()),
            persistence::cache_file_path(),
            now,
        );
        log::info!("Using settings file {}", magnifier.settings_path().display());

        let mut events = WindowEvents::new();
        Magnifier::connect(&mut events);

        let pending_load = persistence::load_async(magnifier.settings_path().to_path_buf());

        Self {
            magnifier,
            events,
            viewer: Viewer::new(),
            pending_load,
            last_geometry: None,
            show_about: options.show_about,
        }
    }

    /// Outer position and inner size of the window, in points.
    fn window_geometry(ctx: &egui::Context) -> Option<PixelGeometry> {
        ctx.input(|i| {
            let viewport = i.viewport();
            let outer = viewport.outer_rect?;
            let inner = viewport.inner_rect?;
            Some(PixelGeometry {
                x: outer.min.x as f64,
                y: outer.min.y as f64,
                width: inner.width() as f64,
                height: inner.height() as f64,
            })
        })
    }

    /// Size of the monitor the window is on, in points.
    fn screen_size(ctx: &egui::Context) -> Option<(f64, f64)> {
        ctx.input(|i| i.viewport().monitor_size)
            .filter(|size| size.x > 0.0 && size.y > 0.0)
            .map(|size| (size.x as f64, size.y as f64))
    }

    fn apply_placement(ctx: &egui::Context, placement: PixelGeometry) {
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            placement.width as f32,
            placement.height as f32,
        )));
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
            placement.x as f32,
            placement.y as f32,
        )));
    }
}

impl eframe::App for MagnusApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let screen = Self::screen_size(ctx);

        // Check for completed settings loading
        if let Some(loaded) = self.pending_load.try_take() {
            self.magnifier.settings_loaded(loaded);
        }
        if let Some(placement) = self.magnifier.take_restore(screen) {
            Self::apply_placement(ctx, placement);
        }

        // Window moved or resized
        let geometry = Self::window_geometry(ctx);
        if let Some(current) = geometry {
            if self.last_geometry != geometry {
                self.events.emit_geometry_changed(&mut self.magnifier, current, now);
            }
        }
        self.last_geometry = geometry;

        if ctx.input(|i| i.viewport().close_requested()) {
            log::info!("Window closing");
            self.events.emit_destroy(&mut self.magnifier);
        }

        if !self.events.is_destroyed() && self.magnifier.tick_due(now) {
            self.events.emit_tick(&mut self.magnifier, now);
        }
        if let Some(frame) = self.magnifier.take_frame() {
            log::trace!("Showing capture of {:?}", frame.region);
            self.viewer.set_frame(ctx, &frame.image);
        }

        self.magnifier.settle(screen, now);

        // Header bar
        let action = egui::TopBottomPanel::top("header")
            .show(ctx, |ui| header::show(ui, self.magnifier.state.zoom))
            .inner;
        match action {
            header::HeaderAction::SetZoom(zoom) => self.magnifier.set_zoom(zoom),
            header::HeaderAction::ShowAbout => self.show_about = true,
            header::HeaderAction::None => {}
        }

        // Magnified image
        let (width, height) = egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.viewer.show(ui))
            .inner;
        self.magnifier.set_viewport(width, height);

        about::show(ctx, &mut self.show_about);

        // Sleep until a timer needs attention
        let mut wait = self.magnifier.next_wakeup(Instant::now());
        if !self.pending_load.is_resolved() {
            wait = Some(wait.map_or(LOAD_CHECK_INTERVAL, |w| w.min(LOAD_CHECK_INTERVAL)));
        }
        if let Some(wait) = wait {
            ctx.request_repaint_after(wait);
        }
    }
}
