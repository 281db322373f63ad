// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image and video display shared by the overlay and the photo strip.
//!
//! Images are drawn aspect-fit and centered inside the allocated box.
//! Videos and images that are not decoded yet get a labelled placeholder.

use crate::models::project::{MediaItem, MediaKind};
use crate::util::geometry::{center_offset, fit_size};
use std::collections::HashMap;

/// Decoded textures keyed by content `src`.
pub type TextureCache = HashMap<String, egui::TextureHandle>;

/// Draw one media item in a box of `size`, returning the box response.
pub fn show(
    ui: &mut egui::Ui,
    item: &MediaItem,
    textures: &TextureCache,
    size: egui::Vec2,
) -> egui::Response {
    match item.kind {
        MediaKind::Image => show_image(ui, &item.src, &item.alt, textures, size),
        MediaKind::Video => placeholder(ui, &format!("▶ {}", item.alt), size),
    }
}

/// Draw an image by `src`, or a placeholder until its texture exists.
pub fn show_image(
    ui: &mut egui::Ui,
    src: &str,
    alt: &str,
    textures: &TextureCache,
    size: egui::Vec2,
) -> egui::Response {
    let Some(texture) = textures.get(src) else {
        return placeholder(ui, alt, size);
    };

    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let tex_size = texture.size_vec2();
    let (width, height) = fit_size((tex_size.x, tex_size.y), (rect.width(), rect.height()));
    let (x_offset, y_offset) = center_offset((width, height), (rect.width(), rect.height()));

    let image_rect = egui::Rect::from_min_size(
        rect.min + egui::vec2(x_offset, y_offset),
        egui::vec2(width, height),
    );

    ui.painter()
        .rect_filled(rect, egui::Rounding::same(12.0), egui::Color32::from_gray(240));
    ui.painter().image(
        texture.id(),
        image_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );

    response.on_hover_text(alt)
}

fn placeholder(ui: &mut egui::Ui, label: &str, size: egui::Vec2) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    ui.painter()
        .rect_filled(rect, egui::Rounding::same(12.0), egui::Color32::from_gray(230));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_gray(110),
    );
    response
}
