// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Magnus - a very simple screen magnifier
//!
//! A small window that continuously shows the screen area around the
//! mouse pointer, enlarged with nearest-neighbor scaling.

mod app;
mod capture;
mod cli;
mod constants;
mod controller;
mod events;
mod io;
mod magnifier;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::MagnusApp;
use cli::CliOptions;
use constants::{APP_ID, APP_NAME, MIN_WINDOW_SIZE};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = CliOptions::from_env();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(MIN_WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_title(APP_NAME)
            .with_app_id(APP_ID),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |_cc| Ok(Box::new(MagnusApp::new(cli)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
