// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page state controllers.
//!
//! Each controller owns one piece of view state and exposes read-only
//! values to the UI. None of them touches egui directly, so they are
//! tested without rendering anything.

pub mod carousel;
pub mod cursor;
pub mod events;
pub mod media_modal;
pub mod scroll_lock;
pub mod scroll_reveal;
pub mod section_tracker;
pub mod viewport;
