// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Custom cursor ring that grows over clickable rows.

use crate::config::LayoutConfig;
use crate::util::geometry::Point;

/// Fraction of the remaining distance covered per frame.
const EASE_PER_FRAME: f32 = 0.25;

#[derive(Debug, Clone)]
pub struct HoverCursor {
    position: Option<Point>,
    hovering: bool,
    radius: f32,
    idle_radius: f32,
    hover_radius: f32,
}

impl HoverCursor {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            position: None,
            hovering: false,
            radius: config.cursor_radius,
            idle_radius: config.cursor_radius,
            hover_radius: config.cursor_hover_radius,
        }
    }

    /// Pointer moved inside the window; `None` when it left.
    pub fn on_pointer_move(&mut self, position: Option<Point>) {
        self.position = position;
        if position.is_none() {
            self.hovering = false;
        }
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    fn target_radius(&self) -> f32 {
        if self.hovering {
            self.hover_radius
        } else {
            self.idle_radius
        }
    }

    /// Ease the ring toward its target. Returns true while still animating.
    pub fn step(&mut self) -> bool {
        let target = self.target_radius();
        let delta = target - self.radius;
        if delta.abs() < 0.1 {
            self.radius = target;
            return false;
        }
        self.radius += delta * EASE_PER_FRAME;
        true
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[cfg(test)]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }
}
