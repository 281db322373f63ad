// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Screen-space points and the aspect-preserving fit used to place
//! images inside the overlay and the photo strip.

/// A point in screen coordinates (logical pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<egui::Pos2> for Point {
    fn from(pos: egui::Pos2) -> Self {
        Point { x: pos.x, y: pos.y }
    }
}

impl From<Point> for egui::Pos2 {
    fn from(point: Point) -> Self {
        egui::pos2(point.x, point.y)
    }
}

/// Largest size with the image's aspect ratio that fits in `available`.
pub fn fit_size(image: (f32, f32), available: (f32, f32)) -> (f32, f32) {
    let (img_width, img_height) = image;
    let (avail_width, avail_height) = available;
    if img_width <= 0.0 || img_height <= 0.0 || avail_width <= 0.0 || avail_height <= 0.0 {
        return (0.0, 0.0);
    }

    let img_aspect = img_width / img_height;
    let available_aspect = avail_width / avail_height;

    if img_aspect > available_aspect {
        // Image is wider - fit to width
        (avail_width, avail_width / img_aspect)
    } else {
        // Image is taller - fit to height
        (avail_height * img_aspect, avail_height)
    }
}

/// Offset that centers `inner` within `outer`.
pub fn center_offset(inner: (f32, f32), outer: (f32, f32)) -> (f32, f32) {
    ((outer.0 - inner.0) / 2.0, (outer.1 - inner.1) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_image_to_width() {
        let (w, h) = fit_size((1920.0, 1080.0), (960.0, 960.0));
        assert_eq!(w, 960.0);
        assert!((h - 540.0).abs() < 0.001);
        assert!((center_offset((w, h), (960.0, 960.0)).1 - 210.0).abs() < 0.001);
    }

    #[test]
    fn test_fit_tall_image_to_height() {
        let (w, h) = fit_size((500.0, 1000.0), (800.0, 400.0));
        assert_eq!(h, 400.0);
        assert_eq!(w, 200.0);
    }

    #[test]
    fn test_fit_degenerate_sizes() {
        assert_eq!(fit_size((0.0, 100.0), (800.0, 400.0)), (0.0, 0.0));
        assert_eq!(fit_size((100.0, 100.0), (800.0, 0.0)), (0.0, 0.0));
    }

    #[test]
    fn test_pos2_roundtrip() {
        let p: Point = egui::pos2(3.0, 4.0).into();
        assert_eq!(egui::Pos2::from(p), egui::pos2(3.0, 4.0));
    }
}
