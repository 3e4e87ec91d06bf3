// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Display surface for the magnified image.
//!
//! Frames arrive already scaled to the viewport in physical pixels, so the
//! texture is drawn 1:1 with nearest filtering to keep pixel edges crisp.

use image::RgbaImage;

/// Owns the texture the magnified frames are uploaded to.
#[derive(Default)]
pub struct Viewer {
    texture: Option<egui::TextureHandle>,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed image with `frame`.
    pub fn set_frame(&mut self, ctx: &egui::Context, frame: &RgbaImage) {
        let size = [frame.width() as usize, frame.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, frame.as_raw());

        match &mut self.texture {
            Some(texture) => texture.set(color_image, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("magnified", color_image, egui::TextureOptions::NEAREST));
            }
        }
    }

    /// Draw the current image and report the available area in physical pixels.
    pub fn show(&self, ui: &mut egui::Ui) -> (u32, u32) {
        let available = ui.available_size();
        let pixels_per_point = ui.ctx().pixels_per_point();
        let viewport = (
            (available.x * pixels_per_point).floor().max(0.0) as u32,
            (available.y * pixels_per_point).floor().max(0.0) as u32,
        );

        egui::ScrollArea::both()
            .auto_shrink([false; 2])
            .show(ui, |ui| match &self.texture {
                Some(texture) => {
                    let size = texture.size_vec2() / pixels_per_point;
                    ui.add(egui::Image::new(egui::load::SizedTexture::new(texture.id(), size)));
                }
                None => {
                    ui.allocate_space(available);
                }
            });

        viewport
    }
}
