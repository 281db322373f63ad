// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Responsive breakpoint and the mobile navigation drawer.

use super::scroll_lock::{LockHolder, ScrollLock, ScrollLockGuard};
use crate::config::LayoutConfig;

/// Layout class derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width: f32, config: &LayoutConfig) -> Self {
        if width < config.mobile_breakpoint {
            Breakpoint::Mobile
        } else {
            Breakpoint::Desktop
        }
    }
}

/// Navigation drawer shown on mobile layouts.
///
/// While open it holds the scroll lock; growing the window to a desktop
/// layout closes it.
#[derive(Debug)]
pub struct MobileMenu {
    config: LayoutConfig,
    breakpoint: Breakpoint,
    scroll_lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

impl MobileMenu {
    pub fn new(config: LayoutConfig, scroll_lock: ScrollLock) -> Self {
        Self {
            config,
            breakpoint: Breakpoint::Desktop,
            scroll_lock,
            guard: None,
        }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn is_open(&self) -> bool {
        self.guard.is_some()
    }

    /// Handle a window resize.
    pub fn on_resize(&mut self, width: f32) {
        let breakpoint = Breakpoint::from_width(width, &self.config);
        if breakpoint == self.breakpoint {
            return;
        }
        log::debug!("Breakpoint changed to {:?} at width {:.0}", breakpoint, width);
        self.breakpoint = breakpoint;
        if breakpoint == Breakpoint::Desktop {
            self.close();
        }
    }

    /// Open the drawer. Ignored on desktop layouts.
    pub fn open(&mut self) {
        if self.breakpoint != Breakpoint::Mobile || self.guard.is_some() {
            return;
        }
        self.guard = Some(self.scroll_lock.acquire(LockHolder::MobileMenu));
    }

    pub fn close(&mut self) {
        self.guard = None;
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> (MobileMenu, ScrollLock) {
        let lock = ScrollLock::new();
        (MobileMenu::new(LayoutConfig::default(), lock.clone()), lock)
    }

    #[test]
    fn test_breakpoint_from_width() {
        let config = LayoutConfig::default();
        assert_eq!(Breakpoint::from_width(767.0, &config), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(768.0, &config), Breakpoint::Desktop);
    }

    #[test]
    fn test_menu_only_opens_on_mobile() {
        let (mut m, lock) = menu();
        m.open();
        assert!(!m.is_open());

        m.on_resize(400.0);
        m.toggle();
        assert!(m.is_open());
        assert!(lock.is_held_by(LockHolder::MobileMenu));

        m.toggle();
        assert!(!m.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_resize_to_desktop_closes_menu() {
        let (mut m, lock) = menu();
        m.on_resize(400.0);
        m.open();
        m.on_resize(1200.0);
        assert!(!m.is_open());
        assert!(!lock.is_locked());
        assert_eq!(m.breakpoint(), Breakpoint::Desktop);
    }

    #[test]
    fn test_menu_and_modal_share_lock() {
        let (mut m, lock) = menu();
        m.on_resize(400.0);
        m.open();
        let modal = lock.acquire(LockHolder::Modal);
        m.close();
        assert!(lock.is_locked());
        drop(modal);
        assert!(!lock.is_locked());
    }
}
