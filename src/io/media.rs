// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading.
//!
//! Images are decoded off the UI thread and handed back as RGBA pixels
//! ready for `egui::ColorImage`. Video items are never decoded.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};

/// Decoded RGBA image.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode an image file to RGBA8.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Ok(LoadedImage {
        width,
        height,
        pixels: img.into_raw(),
    })
}

/// Resolve a content `src` against the directory of the content file.
pub fn resolve_src(base_dir: Option<&Path>, src: &str) -> PathBuf {
    let src_path = Path::new(src.trim_start_matches('/'));
    // Web-style "/images/a.png" is relative to the site root, i.e. the content dir.
    match base_dir {
        Some(dir) => dir.join(src_path),
        None => PathBuf::from(src),
    }
}

/// Result of one background decode, keyed by the content `src`.
pub type LoadResult = (String, Result<LoadedImage, String>);

/// Background image loader.
///
/// Each `src` is requested at most once; results are drained every frame.
pub struct MediaLoader {
    base_dir: Option<PathBuf>,
    requested: HashSet<String>,
    sender: std::sync::mpsc::Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
}

impl MediaLoader {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        let (sender, receiver) = channel();
        Self {
            base_dir,
            requested: HashSet::new(),
            sender,
            receiver,
        }
    }

    /// Queue a decode unless this `src` was already requested.
    pub fn request(&mut self, src: &str) {
        if !self.requested.insert(src.to_string()) {
            return;
        }
        let path = resolve_src(self.base_dir.as_deref(), src);
        let key = src.to_string();
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let result = load_image(&path).map_err(|e| format!("{:#}", e));
            if result.is_ok() {
                log::debug!("Decoded {}", path.display());
            }
            let _ = sender.send((key, result));
        });
    }

    #[cfg(test)]
    pub fn is_requested(&self, src: &str) -> bool {
        self.requested.contains(src)
    }

    /// Results finished since the last call.
    pub fn drain(&self) -> Vec<LoadResult> {
        self.receiver.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_src_against_content_dir() {
        let base = PathBuf::from("/site");
        assert_eq!(
            resolve_src(Some(&base), "/images/a.png"),
            PathBuf::from("/site/images/a.png")
        );
        assert_eq!(
            resolve_src(Some(&base), "images/a.png"),
            PathBuf::from("/site/images/a.png")
        );
        assert_eq!(resolve_src(None, "images/a.png"), PathBuf::from("images/a.png"));
    }

    #[test]
    fn test_missing_image_reports_error() {
        let mut loader = MediaLoader::new(None);
        loader.request("definitely/not/here.png");
        loader.request("definitely/not/here.png");
        assert!(loader.is_requested("definitely/not/here.png"));

        let (key, result) = loader.receiver.recv().unwrap();
        assert_eq!(key, "definitely/not/here.png");
        assert!(result.is_err());
        assert!(loader.drain().is_empty());
    }
}
