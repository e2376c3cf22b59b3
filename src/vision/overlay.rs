// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Detection overlay buffer
//!
//! The overlay is the drawing surface between the detector and the UI:
//! one rectangle plus caption per detection, in the frame's native
//! pixel space. It is resized to match the frame every pass, cleared,
//! and redrawn — exactly the canvas discipline of the original view.

use crate::vision::detector::Detection;

/// One rectangle + caption on the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub caption: String,
}

/// Overlay surface sized to the video frame.
#[derive(Debug, Default)]
pub struct OverlayBuffer {
    width: u32,
    height: u32,
    boxes: Vec<OverlayBox>,
    /// Color used for boxes and captions, set by the scanner mode.
    highlight: String,
    mutations: u64,
}

impl OverlayBuffer {
    pub fn new(highlight: impl Into<String>) -> Self {
        Self {
            highlight: highlight.into(),
            ..Self::default()
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn boxes(&self) -> &[OverlayBox] {
        &self.boxes
    }

    pub fn highlight(&self) -> &str {
        &self.highlight
    }

    pub fn set_highlight(&mut self, highlight: impl Into<String>) {
        self.highlight = highlight.into();
    }

    /// Total number of mutating passes. The unmount tests spy on this
    /// to prove drawing stops once the scanner is torn down.
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    /// One full redraw: resize to the frame's native dimensions, clear,
    /// then draw every detection.
    pub fn redraw(&mut self, frame_width: u32, frame_height: u32, detections: &[Detection]) {
        self.mutations += 1;
        self.width = frame_width;
        self.height = frame_height;
        self.boxes.clear();
        for det in detections {
            self.boxes.push(OverlayBox {
                x: det.bbox.x,
                y: det.bbox.y,
                width: det.bbox.width,
                height: det.bbox.height,
                caption: det.caption(),
            });
        }
    }

    /// Clear without resizing (used when the scanner stops cleanly).
    pub fn clear(&mut self) {
        self.mutations += 1;
        self.boxes.clear();
    }
}
