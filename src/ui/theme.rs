// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page palette and light visuals.

use egui::Color32;

pub const PAPER: Color32 = Color32::WHITE;
pub const INK: Color32 = Color32::from_rgb(0x1d, 0x1d, 0x1f);
pub const MUTED: Color32 = Color32::from_rgb(0x6e, 0x6e, 0x73);
pub const PINK: Color32 = Color32::from_rgb(0xd8, 0x11, 0x59);
pub const PLUM: Color32 = Color32::from_rgb(0x8f, 0x2d, 0x56);
pub const AMBER: Color32 = Color32::from_rgb(0xff, 0xbc, 0x42);

/// Link button colors, cycled in order.
pub const ACCENTS: [Color32; 3] = [PINK, PLUM, AMBER];

/// Light visuals with a white page background.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = PAPER;
    visuals.window_fill = PAPER;
    visuals.selection.bg_fill = PINK;
    visuals.hyperlink_color = PINK;
    ctx.set_visuals(visuals);
}
