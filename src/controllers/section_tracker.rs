// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Active-section detection for navigation highlighting.
//!
//! A section becomes active when its visible fraction reaches the
//! threshold. Within a batch, the default is last-writer-wins in arrival
//! order; `TieBreak::Topmost` prefers the section earliest on the page.

use crate::config::SectionConfig;

/// How to resolve a batch where several sections cross the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    #[default]
    ArrivalOrder,
    Topmost,
}

/// Tracks which section currently dominates the viewport.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<String>,
    active: Option<usize>,
    threshold: f32,
    tie_break: TieBreak,
}

impl SectionTracker {
    pub fn new(sections: Vec<String>, config: &SectionConfig) -> Self {
        let active = if sections.is_empty() { None } else { Some(0) };
        Self {
            sections,
            active,
            threshold: config.visibility_threshold,
            tie_break: TieBreak::default(),
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Default before any observation fires: the first section.
    pub fn initial_state(&self) -> Option<&str> {
        self.sections.first().map(String::as_str)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].as_str())
    }

    #[cfg(test)]
    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    #[cfg(test)]
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s == id)
    }

    /// Apply one visibility notification. Returns true if the active section changed.
    pub fn on_visibility_change(&mut self, id: &str, visible_fraction: f32) -> bool {
        if visible_fraction < self.threshold {
            return false;
        }
        match self.index_of(id) {
            Some(index) => self.activate(index),
            None => {
                log::warn!("Visibility notification for unknown section {}", id);
                false
            }
        }
    }

    /// Apply a batch of notifications delivered together.
    pub fn on_visibility_batch(&mut self, entries: &[(&str, f32)]) -> bool {
        match self.tie_break {
            TieBreak::ArrivalOrder => {
                let mut changed = false;
                for (id, fraction) in entries {
                    changed |= self.on_visibility_change(id, *fraction);
                }
                changed
            }
            TieBreak::Topmost => {
                let topmost = entries
                    .iter()
                    .filter(|(_, fraction)| *fraction >= self.threshold)
                    .filter_map(|(id, _)| self.index_of(id))
                    .min();
                match topmost {
                    Some(index) => self.activate(index),
                    None => false,
                }
            }
        }
    }

    /// Force a section active, e.g. after a navigation click.
    pub fn set_active(&mut self, id: &str) -> bool {
        match self.index_of(id) {
            Some(index) => self.activate(index),
            None => false,
        }
    }

    fn activate(&mut self, index: usize) -> bool {
        if self.active == Some(index) {
            return false;
        }
        self.active = Some(index);
        log::debug!("Active section: {}", self.sections[index]);
        true
    }
}

/// Fraction of a section's own height inside the viewport, in `[0, 1]`.
pub fn visible_fraction(
    section_top: f32,
    section_height: f32,
    viewport_top: f32,
    viewport_height: f32,
) -> f32 {
    if section_height <= 0.0 {
        return 0.0;
    }
    let top = section_top.max(viewport_top);
    let bottom = (section_top + section_height).min(viewport_top + viewport_height);
    ((bottom - top).max(0.0) / section_height).clamp(0.0, 1.0)
}

/// Scroll offset that brings a section into view after a navigation click.
///
/// The section is placed a third of the leftover space below the top,
/// but never closer than `min_margin`.
pub fn nav_scroll_target(
    section_top: f32,
    section_height: f32,
    viewport_height: f32,
    min_margin: f32,
) -> f32 {
    let offset = (viewport_height - section_height) / 3.0;
    (section_top - offset.max(min_margin)).max(0.0)
}
