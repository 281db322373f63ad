// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project detail overlay with its media carousel.
//!
//! The overlay moves through four phases:
//!
//! ```text
//! Closed --open--> Opening --tick--> Open --close--> Closing --tick(due)--> Closed
//!                     ^                                  |
//!                     +--------------open----------------+
//! ```
//!
//! `Opening` lasts exactly one frame so the hidden state is rendered before
//! the visible one. `Closing` keeps the project around until the close
//! transition has elapsed; a deferred clear only runs if no `open` happened
//! in between. Background scrolling is suppressed from `open` until the
//! overlay is back in `Closed`.

use super::scroll_lock::{LockHolder, ScrollLock, ScrollLockGuard};
use crate::config::ModalConfig;
use crate::models::project::Project;
use std::time::Duration;

/// Lifecycle phase of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Read-only view of the overlay for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalState<'a> {
    pub is_open: bool,
    pub phase: ModalPhase,
    pub selected_project: Option<&'a Project>,
    pub media_index: usize,
    pub has_ever_opened: bool,
}

/// A scheduled clear of the selected project.
#[derive(Debug, Clone, Copy)]
struct PendingClear {
    due: Duration,
    generation: u64,
}

/// Owns the overlay lifecycle and the carousel index.
#[derive(Debug)]
pub struct MediaModalController {
    config: ModalConfig,
    phase: ModalPhase,
    selected: Option<Project>,
    media_index: usize,
    has_ever_opened: bool,
    /// Bumped by every `open`, so stale clears can tell they are stale.
    generation: u64,
    pending_clear: Option<PendingClear>,
    scroll_lock: ScrollLock,
    lock_guard: Option<ScrollLockGuard>,
}

impl MediaModalController {
    pub fn new(config: ModalConfig, scroll_lock: ScrollLock) -> Self {
        Self {
            config,
            phase: ModalPhase::Closed,
            selected: None,
            media_index: 0,
            has_ever_opened: false,
            generation: 0,
            pending_clear: None,
            scroll_lock,
            lock_guard: None,
        }
    }

    /// Select a project and start the opening transition.
    ///
    /// Returns false if the project has no title or tech stack.
    pub fn open(&mut self, project: Project) -> bool {
        if !project.is_presentable() {
            log::warn!("Refusing to open project {} without title or tech stack", project.id);
            return false;
        }

        log::info!("Opening project {}", project.id);
        self.generation += 1;
        self.pending_clear = None;
        self.selected = Some(project);
        self.media_index = 0;
        self.has_ever_opened = true;
        self.phase = ModalPhase::Opening;

        if self.lock_guard.is_none() {
            self.lock_guard = Some(self.scroll_lock.acquire(LockHolder::Modal));
        }
        true
    }

    /// Hide the overlay now and schedule the project clear.
    pub fn close(&mut self, now: Duration) {
        match self.phase {
            ModalPhase::Closed | ModalPhase::Closing => {}
            ModalPhase::Opening | ModalPhase::Open => {
                log::info!("Closing project overlay");
                self.phase = ModalPhase::Closing;
                self.pending_clear = Some(PendingClear {
                    due: now + self.config.close_transition(),
                    generation: self.generation,
                });
            }
        }
    }

    /// Run deferred transitions. Call once at the start of every frame.
    pub fn tick(&mut self, now: Duration) {
        match self.phase {
            ModalPhase::Opening => {
                self.phase = ModalPhase::Open;
                log::debug!("Overlay visible");
            }
            ModalPhase::Closing => {
                let Some(pending) = self.pending_clear else {
                    return;
                };
                if now < pending.due {
                    return;
                }
                self.pending_clear = None;
                if pending.generation != self.generation {
                    return;
                }
                self.selected = None;
                self.media_index = 0;
                self.phase = ModalPhase::Closed;
                self.lock_guard = None;
                log::debug!("Overlay closed");
            }
            ModalPhase::Closed | ModalPhase::Open => {}
        }
    }

    /// Drop everything immediately, e.g. when the page content is replaced.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.pending_clear = None;
        self.selected = None;
        self.media_index = 0;
        self.phase = ModalPhase::Closed;
        self.lock_guard = None;
    }

    fn media_len(&self) -> usize {
        self.selected.as_ref().map_or(0, Project::media_count)
    }

    /// Advance the carousel, wrapping from last to first.
    pub fn next_media(&mut self) {
        let len = self.media_len();
        if len < 2 {
            return;
        }
        self.media_index = (self.media_index + 1) % len;
    }

    /// Step the carousel back, wrapping from first to last.
    pub fn prev_media(&mut self) {
        let len = self.media_len();
        if len < 2 {
            return;
        }
        self.media_index = (self.media_index + len - 1) % len;
    }

    /// Jump to a media item. Out-of-range indices are ignored.
    pub fn select_media(&mut self, index: usize) -> bool {
        if index >= self.media_len() {
            log::warn!("Ignoring media index {} (have {})", index, self.media_len());
            return false;
        }
        self.media_index = index;
        true
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    pub fn media_index(&self) -> usize {
        self.media_index
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    #[cfg(test)]
    pub fn current_media(&self) -> Option<&crate::models::project::MediaItem> {
        self.selected.as_ref()?.media.get(self.media_index)
    }

    pub fn state(&self) -> ModalState<'_> {
        ModalState {
            is_open: self.is_open(),
            phase: self.phase(),
            selected_project: self.selected_project(),
            media_index: self.media_index(),
            has_ever_opened: self.has_ever_opened,
        }
    }
}
