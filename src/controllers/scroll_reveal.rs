// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scroll-driven reveal of the intro and main content.
//!
//! The controller turns the page's vertical scroll offset into a
//! normalized progress value and the style parameters derived from it.
//! Reaching `max_scroll` once locks the layout in its final arrangement;
//! the lock never releases, even when the user scrolls back to the top.

use crate::config::RevealConfig;

/// Vertical alignment of the page container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Center,
    Start,
}

/// Style parameters handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub progress: f32,
    pub container_alignment: Alignment,
    /// Top offset as a fraction of viewport height.
    pub container_top_offset: f32,
    pub content_opacity: f32,
    pub intro_locked: bool,
}

impl RevealStyle {
    /// Top offset in pixels for a given viewport height.
    pub fn top_offset_px(&self, viewport_height: f32) -> f32 {
        self.container_top_offset * viewport_height
    }

    /// Whether the "scroll down" hint should still be shown.
    pub fn show_scroll_hint(&self) -> bool {
        !self.intro_locked && self.progress == 0.0
    }
}

/// Scroll offset plus the one-way lock.
#[derive(Debug, Clone)]
pub struct ScrollRevealController {
    config: RevealConfig,
    offset_y: f32,
    locked: bool,
}

impl ScrollRevealController {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            offset_y: 0.0,
            locked: false,
        }
    }

    /// Record a new scroll offset. Negative or non-finite offsets are ignored.
    pub fn on_scroll(&mut self, offset_y: f32) {
        if !offset_y.is_finite() || offset_y < 0.0 {
            log::warn!("Ignoring invalid scroll offset {}", offset_y);
            return;
        }
        self.offset_y = offset_y;

        if !self.locked && offset_y >= self.config.max_scroll {
            self.locked = true;
            log::debug!("Intro locked at offset {:.0}", offset_y);
        }
    }

    #[cfg(test)]
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Normalized scroll position in `[0, 1]`.
    #[cfg(test)]
    pub fn progress(&self) -> f32 {
        progress(&self.config, self.offset_y)
    }

    /// Current style parameters.
    pub fn style(&self) -> RevealStyle {
        derive_style(&self.config, self.offset_y, self.locked)
    }
}

fn progress(config: &RevealConfig, offset_y: f32) -> f32 {
    if config.max_scroll <= 0.0 {
        return 1.0;
    }
    (offset_y / config.max_scroll).clamp(0.0, 1.0)
}

/// Pure style computation. Lock takes precedence over every threshold.
pub fn derive_style(config: &RevealConfig, offset_y: f32, locked: bool) -> RevealStyle {
    let progress = progress(config, offset_y);

    let container_alignment = if locked || progress > config.align_start_at {
        Alignment::Start
    } else {
        Alignment::Center
    };

    let container_top_offset = if locked {
        config.top_offset_min
    } else {
        let span = config.top_offset_max - config.top_offset_min;
        (config.top_offset_max - span * progress).max(config.top_offset_min)
    };

    let content_opacity = if locked {
        1.0
    } else {
        let ramp = config.fade_end - config.fade_start;
        if progress < config.fade_start {
            0.0
        } else if ramp <= 0.0 {
            1.0
        } else {
            ((progress - config.fade_start) / ramp).clamp(0.0, 1.0)
        }
    };

    RevealStyle {
        progress,
        container_alignment,
        container_top_offset,
        content_opacity,
        intro_locked: locked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(max_scroll: f32) -> ScrollRevealController {
        ScrollRevealController::new(RevealConfig {
            max_scroll,
            ..RevealConfig::default()
        })
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_scroll_scenario_locks_and_stays_pinned() {
        let mut reveal = controller(300.0);

        reveal.on_scroll(150.0);
        let style = reveal.style();
        assert!(approx(style.progress, 0.5));
        assert!(!reveal.is_locked());
        assert_eq!(style.container_alignment, Alignment::Center);

        reveal.on_scroll(310.0);
        let style = reveal.style();
        assert!(reveal.is_locked());
        assert_eq!(style.container_alignment, Alignment::Start);
        assert_eq!(style.content_opacity, 1.0);

        reveal.on_scroll(0.0);
        let back = reveal.style();
        assert!(reveal.is_locked());
        assert_eq!(back.container_alignment, Alignment::Start);
        assert_eq!(back.content_opacity, 1.0);
        assert_eq!(back.container_top_offset, RevealConfig::default().top_offset_min);
        assert!(back.intro_locked);
        assert_eq!(back.progress, 0.0);
    }

    #[test]
    fn test_lock_engages_exactly_at_threshold() {
        let mut reveal = controller(300.0);
        reveal.on_scroll(299.0);
        assert!(!reveal.is_locked());
        reveal.on_scroll(300.0);
        assert!(reveal.is_locked());
    }

    #[test]
    fn test_progress_monotonic_then_clamped() {
        let config = RevealConfig {
            max_scroll: 300.0,
            ..RevealConfig::default()
        };
        let mut last = 0.0;
        for offset in (0..=600).step_by(10) {
            let p = derive_style(&config, offset as f32, false).progress;
            assert!(p >= last);
            last = p;
        }
        assert_eq!(derive_style(&config, 900.0, false).progress, 1.0);
    }

    #[test]
    fn test_opacity_ramp() {
        let config = RevealConfig {
            max_scroll: 100.0,
            ..RevealConfig::default()
        };
        assert_eq!(derive_style(&config, 0.0, false).content_opacity, 0.0);
        assert_eq!(derive_style(&config, 5.0, false).content_opacity, 0.0);
        assert!(approx(derive_style(&config, 35.0, false).content_opacity, 0.5));
        assert_eq!(derive_style(&config, 60.0, false).content_opacity, 1.0);
        assert_eq!(derive_style(&config, 80.0, false).content_opacity, 1.0);
        // Lock forces full opacity regardless of progress.
        assert_eq!(derive_style(&config, 0.0, true).content_opacity, 1.0);
    }

    #[test]
    fn test_alignment_threshold() {
        let config = RevealConfig {
            max_scroll: 100.0,
            ..RevealConfig::default()
        };
        assert_eq!(derive_style(&config, 90.0, false).container_alignment, Alignment::Center);
        assert_eq!(derive_style(&config, 91.0, false).container_alignment, Alignment::Start);
        assert_eq!(derive_style(&config, 0.0, true).container_alignment, Alignment::Start);
    }

    #[test]
    fn test_top_offset_decreases_to_floor() {
        let config = RevealConfig {
            max_scroll: 100.0,
            ..RevealConfig::default()
        };
        let start = derive_style(&config, 0.0, false).container_top_offset;
        let mid = derive_style(&config, 50.0, false).container_top_offset;
        let end = derive_style(&config, 100.0, false).container_top_offset;
        assert!(approx(start, 0.30));
        assert!(mid < start && mid > end);
        assert!(approx(end, 0.10));
        let px = derive_style(&config, 100.0, false).top_offset_px(1000.0);
        assert!((px - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_offsets_ignored() {
        let mut reveal = controller(300.0);
        reveal.on_scroll(120.0);
        reveal.on_scroll(-5.0);
        reveal.on_scroll(f32::NAN);
        assert_eq!(reveal.offset_y(), 120.0);
    }

    #[test]
    fn test_scroll_hint_hidden_once_engaged() {
        let mut reveal = controller(300.0);
        assert!(reveal.style().show_scroll_hint());
        reveal.on_scroll(20.0);
        assert!(!reveal.style().show_scroll_hint());
        reveal.on_scroll(400.0);
        reveal.on_scroll(0.0);
        assert!(!reveal.style().show_scroll_hint());
    }
}
