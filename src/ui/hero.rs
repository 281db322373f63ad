// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Intro area: greeting, tagline and link buttons.

use super::theme;
use crate::controllers::scroll_reveal::{Alignment, RevealStyle};
use crate::models::content::PortfolioContent;

/// Display the intro. Centered until the reveal aligns it to the start.
pub fn show(ui: &mut egui::Ui, content: &PortfolioContent, style: &RevealStyle) {
    let body = |ui: &mut egui::Ui| {
        ui.label(
            egui::RichText::new(format!("Hi, I am {}!", content.name))
                .size(44.0)
                .strong()
                .color(theme::INK),
        );
        ui.add_space(16.0);
        if !content.tagline.is_empty() {
            ui.label(egui::RichText::new(&content.tagline).size(18.0).color(theme::INK));
            ui.add_space(20.0);
        }

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 12.0;
            for (i, link) in content.links.iter().enumerate() {
                let color = theme::ACCENTS[i % theme::ACCENTS.len()];
                ui.hyperlink_to(egui::RichText::new(&link.label).size(15.0).color(color), &link.url);
            }
        });

        if style.show_scroll_hint() {
            ui.add_space(32.0);
            ui.label(egui::RichText::new("↓ scroll").weak());
        }
    };

    match style.container_alignment {
        Alignment::Center => {
            ui.vertical_centered(body);
        }
        Alignment::Start => {
            ui.vertical(body);
        }
    }
}
