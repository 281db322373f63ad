// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Competitions timeline and skills grid.

use super::theme;
use crate::models::content::{Competition, SkillGroup};

/// Display competitions as a vertical timeline.
pub fn show_competitions(ui: &mut egui::Ui, competitions: &[Competition]) {
    for competition in competitions {
        ui.horizontal(|ui| {
            let (dot, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter().circle_filled(dot.center(), 5.0, theme::PINK);

            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&competition.title).strong().color(theme::INK));
                if !competition.date.is_empty() {
                    ui.label(egui::RichText::new(&competition.date).small().color(theme::MUTED));
                }
                if let Some(award) = &competition.award {
                    ui.label(egui::RichText::new(award).color(theme::PLUM));
                }
                if !competition.summary.is_empty() {
                    ui.label(&competition.summary);
                }
            });
        });
        ui.add_space(14.0);
    }
}

/// Display skill groups in a grid.
pub fn show_skills(ui: &mut egui::Ui, groups: &[SkillGroup]) {
    egui::Grid::new("skills_grid")
        .num_columns(2)
        .spacing([24.0, 10.0])
        .show(ui, |ui| {
            for group in groups {
                ui.label(egui::RichText::new(&group.name).strong().color(theme::INK));
                ui.horizontal_wrapped(|ui| {
                    for skill in &group.skills {
                        ui.label(egui::RichText::new(skill).background_color(egui::Color32::from_gray(242)));
                    }
                });
                ui.end_row();
            }
        });
}
