// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the portfolio page.

pub mod hero;
pub mod media_view;
pub mod modal;
pub mod nav;
pub mod photos;
pub mod projects;
pub mod theme;
pub mod timeline;
