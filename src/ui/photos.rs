// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Personal photo strip with arrows and dots.

use super::{media_view, theme};
use crate::models::content::Photo;

/// Result of photo strip interaction.
pub enum PhotoAction {
    None,
    Prev,
    Next,
    Select(usize),
}

/// Display the photo at `index` with its caption and controls.
pub fn show(
    ui: &mut egui::Ui,
    photos: &[Photo],
    index: usize,
    textures: &media_view::TextureCache,
) -> PhotoAction {
    let mut action = PhotoAction::None;
    let Some(photo) = photos.get(index) else {
        return action;
    };

    let width = ui.available_width().min(560.0);
    media_view::show_image(ui, &photo.src, &photo.alt, textures, egui::vec2(width, 256.0));

    if !photo.caption.is_empty() {
        ui.label(egui::RichText::new(&photo.caption).italics().color(theme::MUTED));
    }

    ui.horizontal(|ui| {
        if ui.button("‹").clicked() {
            action = PhotoAction::Prev;
        }
        for i in 0..photos.len() {
            let color = if i == index { theme::PINK } else { egui::Color32::from_gray(200) };
            let (rect, response) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::click());
            ui.painter().circle_filled(rect.center(), 4.0, color);
            if response.clicked() {
                action = PhotoAction::Select(i);
            }
        }
        if ui.button("›").clicked() {
            action = PhotoAction::Next;
        }
    });

    action
}
