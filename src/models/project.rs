// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project records shown in the projects list and the detail overlay.
//!
//! Projects are immutable content: they are loaded once from the content
//! file and only ever borrowed or cloned by the controllers.

use serde::{Deserialize, Serialize};

/// Kind of a media item in a project's gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// An image or video reference with alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

impl MediaItem {
    /// Create an image item.
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            src: src.into(),
            alt: alt.into(),
        }
    }

    /// Create a video item.
    #[cfg(test)]
    pub fn video(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Project description: either a paragraph or an ordered bullet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Bullets(Vec<String>),
}

impl Default for Description {
    fn default() -> Self {
        Description::Text(String::new())
    }
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub tech_stack: String,
    #[serde(default)]
    pub description: Description,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Project {
    /// Create a project with no description, media or status.
    pub fn new(id: impl Into<String>, title: impl Into<String>, tech_stack: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tech_stack: tech_stack.into(),
            description: Description::default(),
            media: Vec::new(),
            status: None,
        }
    }

    /// Builder-style helper used by tests and the content loader.
    pub fn with_media(mut self, media: Vec<MediaItem>) -> Self {
        self.media = media;
        self
    }

    /// Number of items in the gallery.
    pub fn media_count(&self) -> usize {
        self.media.len()
    }

    /// A project can be opened in the overlay once it has a title and a tech stack.
    pub fn is_presentable(&self) -> bool {
        !self.title.trim().is_empty() && !self.tech_stack.trim().is_empty()
    }
}
