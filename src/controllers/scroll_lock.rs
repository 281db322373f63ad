// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background scroll suppression shared by the overlay and the mobile menu.
//!
//! Each requester holds at most one guard. The page scrolls again only
//! when no requester holds the lock; releasing twice is harmless.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Who is asking for the page to stop scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LockHolder {
    Modal,
    MobileMenu,
}

/// Cloneable handle to the page's scroll-lock flag.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<RefCell<BTreeSet<LockHolder>>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress scrolling until the returned guard is dropped.
    pub fn acquire(&self, holder: LockHolder) -> ScrollLockGuard {
        if self.holders.borrow_mut().insert(holder) {
            log::debug!("Scroll lock acquired by {:?}", holder);
        }
        ScrollLockGuard {
            lock: self.clone(),
            holder,
        }
    }

    /// Release a holder's claim. No-op if it holds nothing.
    pub fn release(&self, holder: LockHolder) {
        if self.holders.borrow_mut().remove(&holder) {
            log::debug!("Scroll lock released by {:?}", holder);
        }
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.borrow().is_empty()
    }

    #[cfg(test)]
    pub fn is_held_by(&self, holder: LockHolder) -> bool {
        self.holders.borrow().contains(&holder)
    }
}

/// Scoped claim on the scroll lock; released on drop.
#[derive(Debug)]
pub struct ScrollLockGuard {
    lock: ScrollLock,
    holder: LockHolder,
}

#[cfg(test)]
impl ScrollLockGuard {
    pub fn holder(&self) -> LockHolder {
        self.holder
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release(self.holder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let lock = ScrollLock::new();
        {
            let _guard = lock.acquire(LockHolder::Modal);
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_lock_held_until_last_requester_releases() {
        let lock = ScrollLock::new();
        let modal = lock.acquire(LockHolder::Modal);
        let menu = lock.acquire(LockHolder::MobileMenu);

        drop(modal);
        assert!(lock.is_locked());
        assert!(lock.is_held_by(LockHolder::MobileMenu));

        drop(menu);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_release_is_idempotent() {
        let lock = ScrollLock::new();
        let guard = lock.acquire(LockHolder::Modal);
        lock.release(LockHolder::Modal);
        lock.release(LockHolder::Modal);
        assert!(!lock.is_locked());
        drop(guard);
        assert!(!lock.is_locked());
    }
}
