// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Section index used for navigation.
//!
//! The same list renders as the desktop side column and as the mobile
//! drawer; the active section is highlighted.

use super::theme;
use crate::models::content::SectionMeta;

/// Result of navigation interaction.
pub enum NavAction {
    None,
    Goto(String),
}

/// Display the section index.
pub fn show(ui: &mut egui::Ui, sections: &[SectionMeta], active: Option<&str>) -> NavAction {
    let mut action = NavAction::None;

    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 10.0;
        for section in sections {
            let is_active = active == Some(section.id.as_str());
            let text = if is_active {
                egui::RichText::new(format!("▸ {}", section.title))
                    .strong()
                    .color(theme::PINK)
            } else {
                egui::RichText::new(&section.title).color(theme::MUTED)
            };

            if ui.selectable_label(is_active, text).clicked() {
                action = NavAction::Goto(section.id.clone());
            }
        }
    });

    action
}
