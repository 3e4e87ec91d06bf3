// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! About dialog.

use crate::constants::{APP_NAME, PROJECT_URL};

/// Package authors as a comma-separated list.
fn authors() -> String {
    env!("CARGO_PKG_AUTHORS").replace(':', ", ")
}

/// Display the about window while `open` is set.
pub fn show(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new(format!("About {}", APP_NAME))
        .open(open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(APP_NAME);
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(6.0);
                ui.label(env!("CARGO_PKG_DESCRIPTION"));
                ui.add_space(6.0);
                ui.label(format!("Authors: {}", authors()));
                ui.label(format!("License: {}", env!("CARGO_PKG_LICENSE")));
                ui.hyperlink(PROJECT_URL);
            });
        });
}
