// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Projects list. Each row opens the detail overlay.

use super::theme;
use crate::models::project::Project;

/// Result of projects list interaction.
pub struct ProjectsResponse {
    pub open: Option<String>,
    /// Pointer is over a clickable row (drives the cursor ring).
    pub hovered: bool,
}

/// Display the projects list.
pub fn show(ui: &mut egui::Ui, projects: &[Project]) -> ProjectsResponse {
    let mut result = ProjectsResponse {
        open: None,
        hovered: false,
    };

    for project in projects {
        let row = ui
            .scope(|ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&project.title).size(20.0).strong().color(theme::INK));
                    if let Some(status) = &project.status {
                        ui.label(egui::RichText::new(status).small().color(theme::PLUM));
                    }
                });
                ui.label(egui::RichText::new(&project.tech_stack).color(theme::MUTED));
            })
            .response
            .interact(egui::Sense::click());

        if row.hovered() {
            result.hovered = true;
            ui.ctx().set_cursor_icon(egui::CursorIcon::None);
        }
        if row.clicked() {
            result.open = Some(project.id.clone());
        }
        ui.add_space(18.0);
    }

    result
}
