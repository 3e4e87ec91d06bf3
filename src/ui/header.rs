// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Header bar with the zoom chooser.

use crate::constants::APP_NAME;
use crate::models::settings::ZoomLevel;

/// Result of header bar interaction.
pub enum HeaderAction {
    None,
    SetZoom(ZoomLevel),
    ShowAbout,
}

/// Display the header bar.
pub fn show(ui: &mut egui::Ui, zoom: ZoomLevel) -> HeaderAction {
    let mut action = HeaderAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("ℹ").on_hover_text("About").clicked() {
            action = HeaderAction::ShowAbout;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut selected = zoom;
            egui::ComboBox::from_id_source("zoom")
                .selected_text(selected.to_string())
                .width(56.0)
                .show_ui(ui, |ui| {
                    for level in ZoomLevel::all() {
                        ui.selectable_value(&mut selected, level, level.to_string());
                    }
                });
            if selected != zoom {
                action = HeaderAction::SetZoom(selected);
            }

            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new(APP_NAME).strong());
            });
        });
    });

    action
}
