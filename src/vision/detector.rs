// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Object detection capability
//!
//! The detector is a thin trait over whatever model the host provides.
//! The bundled [`LumaBlobDetector`] is the demo model: it segments
//! bright regions of the luma frame into boxes and names them from the
//! active mode's label list. It deliberately stays simple — the scanner
//! contract (one async load, serialized inference, per-frame results)
//! is the part that matters.

use async_trait::async_trait;

use crate::error::{Result, SonnyError};
use crate::vision::camera::Frame;

/// Axis-aligned box in frame pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One detected object.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub label: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f32,
    pub bbox: BoundingBox,
}

impl Detection {
    /// Overlay caption, e.g. `cup (87%)`.
    pub fn caption(&self) -> String {
        format!("{} ({}%)", self.label, (self.confidence * 100.0).round())
    }
}

/// Scanner modes, matching the two demo label sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorMode {
    #[default]
    Kitchen,
    Clothing,
}

impl DetectorMode {
    pub fn title(&self) -> &'static str {
        match self {
            DetectorMode::Kitchen => "DishFinder — Kitchen Mode",
            DetectorMode::Clothing => "FitFinder — Clothing Mode",
        }
    }

    /// Overlay highlight color for this mode.
    pub fn highlight(&self) -> &'static str {
        match self {
            DetectorMode::Kitchen => "#00ffc8",
            DetectorMode::Clothing => "#ff00ff",
        }
    }

    fn labels(&self) -> &'static [&'static str] {
        match self {
            DetectorMode::Kitchen => &["cup", "bowl", "plate", "fork", "bottle"],
            DetectorMode::Clothing => &["shirt", "jacket", "hat", "glove", "shoe"],
        }
    }
}

/// Detection model capability.
#[async_trait]
pub trait ObjectDetector: Send {
    /// Load the model. Must resolve before the first `detect` call;
    /// the scanner will not tick inference until it has.
    async fn load(&mut self) -> Result<()>;

    /// Whether `load` has resolved.
    fn is_loaded(&self) -> bool;

    /// Run one inference pass over a decodable frame.
    async fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>>;
}

/// Bundled brightness-blob model.
pub struct LumaBlobDetector {
    mode: DetectorMode,
    threshold: u8,
    loaded: bool,
}

impl LumaBlobDetector {
    pub fn new(mode: DetectorMode) -> Self {
        Self {
            mode,
            threshold: 192,
            loaded: false,
        }
    }

    pub fn mode(&self) -> DetectorMode {
        self.mode
    }

    /// Cell edge used for the coarse segmentation grid.
    const CELL: u32 = 4;

    fn segment(&self, frame: &Frame) -> Vec<Detection> {
        let cols = frame.width.div_ceil(Self::CELL);
        let rows = frame.height.div_ceil(Self::CELL);

        // Mark grid cells whose mean luma clears the threshold.
        let mut bright = vec![false; (cols * rows) as usize];
        for cy in 0..rows {
            for cx in 0..cols {
                let mut sum: u32 = 0;
                let mut count: u32 = 0;
                for y in (cy * Self::CELL)..((cy + 1) * Self::CELL).min(frame.height) {
                    for x in (cx * Self::CELL)..((cx + 1) * Self::CELL).min(frame.width) {
                        sum += frame.luma(x, y) as u32;
                        count += 1;
                    }
                }
                if count > 0 && (sum / count) as u8 >= self.threshold {
                    bright[(cy * cols + cx) as usize] = true;
                }
            }
        }

        // Group contiguous bright cells (4-connectivity) into boxes.
        let mut seen = vec![false; bright.len()];
        let mut detections = Vec::new();
        for start in 0..bright.len() {
            if !bright[start] || seen[start] {
                continue;
            }
            let mut stack = vec![start];
            let (mut min_x, mut min_y) = (u32::MAX, u32::MAX);
            let (mut max_x, mut max_y) = (0u32, 0u32);
            let mut cells = 0u32;
            while let Some(idx) = stack.pop() {
                if seen[idx] || !bright[idx] {
                    continue;
                }
                seen[idx] = true;
                cells += 1;
                let cx = idx as u32 % cols;
                let cy = idx as u32 / cols;
                min_x = min_x.min(cx);
                min_y = min_y.min(cy);
                max_x = max_x.max(cx);
                max_y = max_y.max(cy);
                if cx > 0 {
                    stack.push(idx - 1);
                }
                if cx + 1 < cols {
                    stack.push(idx + 1);
                }
                if cy > 0 {
                    stack.push(idx - cols as usize);
                }
                if cy + 1 < rows {
                    stack.push(idx + cols as usize);
                }
            }

            let labels = self.mode.labels();
            let label = labels[(cells as usize) % labels.len()];
            // Larger blobs read as more confident, capped below 1.0.
            let confidence = (0.5 + cells as f32 / 50.0).min(0.99);
            detections.push(Detection {
                label: label.to_string(),
                confidence,
                bbox: BoundingBox {
                    x: (min_x * Self::CELL) as f32,
                    y: (min_y * Self::CELL) as f32,
                    width: ((max_x - min_x + 1) * Self::CELL) as f32,
                    height: ((max_y - min_y + 1) * Self::CELL) as f32,
                },
            });
        }
        detections
    }
}

#[async_trait]
impl ObjectDetector for LumaBlobDetector {
    async fn load(&mut self) -> Result<()> {
        // Yield once so loading is observably asynchronous, like any
        // real model fetch.
        tokio::task::yield_now().await;
        self.loaded = true;
        Ok(())
    }

    fn is_loaded(&self) -> bool {
        self.loaded
    }

    async fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>> {
        if !self.loaded {
            return Err(SonnyError::Detection("model not loaded".to_string()));
        }
        if !frame.is_decodable() {
            return Err(SonnyError::Detection(
                "frame has no decodable picture".to_string(),
            ));
        }
        Ok(self.segment(frame))
    }
}
