// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Auto-advancing photo strip.

use crate::config::CarouselConfig;
use std::time::Duration;

/// Index into the photo strip, advanced on a fixed interval.
#[derive(Debug, Clone)]
pub struct PhotoCarousel {
    len: usize,
    index: usize,
    interval: Duration,
    /// Time of the last advance, manual or automatic.
    last_advance: Duration,
    stopped: bool,
}

impl PhotoCarousel {
    pub fn new(len: usize, config: &CarouselConfig, now: Duration) -> Self {
        Self {
            len,
            index: 0,
            interval: config.interval(),
            last_advance: now,
            stopped: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[cfg(test)]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Advance automatically once per elapsed interval.
    pub fn tick(&mut self, now: Duration) {
        if self.stopped || self.len < 2 || self.interval.is_zero() {
            return;
        }
        let elapsed = now.saturating_sub(self.last_advance).as_nanos();
        let interval = self.interval.as_nanos();
        let steps = elapsed / interval;
        if steps == 0 {
            return;
        }
        self.index = (self.index + (steps % self.len as u128) as usize) % self.len;
        // Keep the phase: the next advance is one interval after the last missed one.
        self.last_advance = now - Duration::from_nanos((elapsed % interval) as u64);
    }

    /// Time left until the next automatic advance, for repaint scheduling.
    pub fn until_next(&self, now: Duration) -> Option<Duration> {
        if self.stopped || self.len < 2 {
            return None;
        }
        Some((self.last_advance + self.interval).saturating_sub(now))
    }

    pub fn next(&mut self, now: Duration) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.last_advance = now;
    }

    pub fn prev(&mut self, now: Duration) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.last_advance = now;
    }

    /// Jump to a photo. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize, now: Duration) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        self.last_advance = now;
        true
    }

    /// Stop the timer for good; later ticks do nothing.
    pub fn stop(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: u64) -> Duration {
        Duration::from_secs(value)
    }

    fn carousel(len: usize) -> PhotoCarousel {
        PhotoCarousel::new(len, &CarouselConfig::default(), secs(0))
    }

    #[test]
    fn test_auto_advance_wraps() {
        let mut c = carousel(4);
        c.tick(secs(2));
        assert_eq!(c.index(), 0);
        c.tick(secs(3));
        assert_eq!(c.index(), 1);
        c.tick(secs(12));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_manual_navigation_restarts_interval() {
        let mut c = carousel(4);
        c.tick(secs(2));
        c.prev(secs(2));
        assert_eq!(c.index(), 3);
        c.tick(secs(4));
        assert_eq!(c.index(), 3);
        c.tick(secs(5));
        assert_eq!(c.index(), 0);
        assert_eq!(c.until_next(secs(6)), Some(secs(2)));
    }

    #[test]
    fn test_long_suspend_catches_up_in_one_tick() {
        let config = CarouselConfig { interval_ms: 1 };
        let mut c = PhotoCarousel::new(3, &config, secs(0));
        c.tick(secs(1_000_000) + Duration::from_micros(400));
        // 10^9 intervals elapsed.
        assert_eq!(c.index(), 1);
        assert_eq!(c.until_next(secs(1_000_000) + Duration::from_micros(400)), Some(Duration::from_micros(600)));
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut c = carousel(2);
        assert!(c.select(1, secs(0)));
        assert!(!c.select(2, secs(0)));
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_stopped_carousel_ignores_ticks() {
        let mut c = carousel(3);
        c.stop();
        c.tick(secs(30));
        assert_eq!(c.index(), 0);
        assert_eq!(c.until_next(secs(30)), None);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = carousel(0);
        c.tick(secs(30));
        c.next(secs(30));
        c.prev(secs(30));
        assert!(c.is_empty());
        assert_eq!(c.index(), 0);
    }
}
