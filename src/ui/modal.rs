// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project detail overlay.
//!
//! Draws a dimmed backdrop and a centered card with the project's
//! description and media carousel. Visibility fades with `opacity`, so
//! the opening frame renders fully transparent.

use super::{media_view, theme};
use crate::controllers::media_modal::ModalState;
use crate::models::project::Description;

/// Result of overlay interaction.
pub enum ModalAction {
    None,
    Close,
    Prev,
    Next,
    Select(usize),
}

/// Display the overlay for the selected project, if any.
pub fn show(
    ctx: &egui::Context,
    state: &ModalState<'_>,
    textures: &media_view::TextureCache,
    opacity: f32,
) -> ModalAction {
    let mut action = ModalAction::None;
    let Some(project) = state.selected_project else {
        return action;
    };

    let screen = ctx.screen_rect();
    let card_size = egui::vec2(
        (screen.width() - 48.0).clamp(280.0, 760.0),
        (screen.height() - 64.0).clamp(240.0, 640.0),
    );
    let card_rect = egui::Rect::from_center_size(screen.center(), card_size);

    egui::Area::new(egui::Id::new("project_modal"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.set_opacity(opacity);

            let backdrop = ui.allocate_rect(screen, egui::Sense::click());
            ui.painter()
                .rect_filled(screen, egui::Rounding::ZERO, egui::Color32::from_black_alpha(140));
            if backdrop.clicked() {
                let outside = backdrop
                    .interact_pointer_pos()
                    .map_or(false, |pos| !card_rect.contains(pos));
                if outside {
                    action = ModalAction::Close;
                }
            }

            ui.painter()
                .rect_filled(card_rect, egui::Rounding::same(16.0), theme::PAPER);

            ui.allocate_ui_at_rect(card_rect.shrink(20.0), |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&project.title).size(24.0).strong().color(theme::INK));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✕").clicked() {
                            action = ModalAction::Close;
                        }
                    });
                });
                ui.label(egui::RichText::new(&project.tech_stack).color(theme::MUTED));
                ui.add_space(10.0);

                egui::ScrollArea::vertical()
                    .id_source("project_modal_body")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        match &project.description {
                            Description::Text(text) => {
                                ui.label(text);
                            }
                            Description::Bullets(bullets) => {
                                for bullet in bullets {
                                    ui.label(format!("• {}", bullet));
                                }
                            }
                        }
                        ui.add_space(12.0);

                        if let Some(item) = project.media.get(state.media_index) {
                            let width = ui.available_width();
                            media_view::show(ui, item, textures, egui::vec2(width, width * 0.56));

                            if project.media.len() > 1 {
                                ui.horizontal(|ui| {
                                    if ui.button("‹ Prev").clicked() {
                                        action = ModalAction::Prev;
                                    }
                                    ui.label(format!("{} / {}", state.media_index + 1, project.media.len()));
                                    if ui.button("Next ›").clicked() {
                                        action = ModalAction::Next;
                                    }
                                });
                                ui.horizontal_wrapped(|ui| {
                                    for (i, media) in project.media.iter().enumerate() {
                                        let label = if media.alt.is_empty() {
                                            format!("{}", i + 1)
                                        } else {
                                            media.alt.clone()
                                        };
                                        if ui.selectable_label(i == state.media_index, label).clicked() {
                                            action = ModalAction::Select(i);
                                        }
                                    }
                                });
                            }
                        }
                    });
            });
        });

    action
}
