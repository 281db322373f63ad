// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Tunable page parameters.
//!
//! Every field has a default, so a config file only needs to name the
//! values it overrides. Files are YAML or JSON, picked by extension.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scroll reveal thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Scroll offset (px) at which progress reaches 1 and the intro locks.
    pub max_scroll: f32,
    /// Progress above which the container aligns to the start.
    pub align_start_at: f32,
    /// Progress at which content starts fading in.
    pub fade_start: f32,
    /// Progress at which content is fully opaque.
    pub fade_end: f32,
    /// Container top offset at progress 0, as a fraction of viewport height.
    pub top_offset_max: f32,
    /// Container top offset floor, as a fraction of viewport height.
    pub top_offset_min: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            max_scroll: 500.0,
            align_start_at: 0.9,
            fade_start: 0.1,
            fade_end: 0.6,
            top_offset_max: 0.30,
            top_offset_min: 0.10,
        }
    }
}

/// Active-section detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    /// Visible fraction at which a section becomes active.
    pub visibility_threshold: f32,
    /// Minimum gap (px) left above a section after a nav click.
    pub nav_min_margin: f32,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.6,
            nav_min_margin: 50.0,
        }
    }
}

/// Detail overlay timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub close_transition_ms: u64,
}

impl ModalConfig {
    pub fn close_transition(&self) -> Duration {
        Duration::from_millis(self.close_transition_ms)
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            close_transition_ms: 300,
        }
    }
}

/// Photo strip auto-advance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: u64,
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: 3000 }
    }
}

/// Responsive layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport widths below this are laid out for mobile.
    pub mobile_breakpoint: f32,
    /// Cursor ring radius when idle.
    pub cursor_radius: f32,
    /// Cursor ring radius while hovering something clickable.
    pub cursor_hover_radius: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            cursor_radius: 8.0,
            cursor_hover_radius: 24.0,
        }
    }
}

/// All page parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub reveal: RevealConfig,
    pub sections: SectionConfig,
    pub modal: ModalConfig,
    pub carousel: CarouselConfig,
    pub layout: LayoutConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "reveal:\n  max_scroll: 300\nmodal:\n  close_transition_ms: 150\n";
        let config: PageConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.reveal.max_scroll, 300.0);
        assert_eq!(config.reveal.align_start_at, 0.9);
        assert_eq!(config.modal.close_transition(), Duration::from_millis(150));
        assert_eq!(config.carousel.interval(), Duration::from_secs(3));
        assert_eq!(config.sections.visibility_threshold, 0.6);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: PageConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PageConfig::default());
    }
}
