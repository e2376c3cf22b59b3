// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Camera capability
//!
//! A camera source hands out luma frames. Acquisition is the permission
//! boundary: it happens exactly once per scanner session and can be
//! denied. Release on teardown is mandatory — the scanner treats a
//! leaked stream as a bug, and tests assert the release count.

use async_trait::async_trait;

use crate::error::{Result, SonnyError};

/// One camera frame: native dimensions plus 8-bit luma pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// Row-major luma values, `width * height` entries.
    pub pixels: Vec<u8>,
    /// Monotonically increasing frame counter.
    pub seq: u64,
}

impl Frame {
    /// Whether this frame can be fed to a detector. Mirrors the video
    /// element warm-up: a stream may briefly deliver frames with zero
    /// dimensions before the first real picture decodes.
    pub fn is_decodable(&self) -> bool {
        self.width > 0 && self.height > 0 && self.pixels.len() == (self.width * self.height) as usize
    }

    pub fn luma(&self, x: u32, y: u32) -> u8 {
        self.pixels[(y * self.width + x) as usize]
    }
}

/// Source of camera frames.
#[async_trait]
pub trait CameraSource: Send {
    /// Acquire the stream (permission prompt analog). Called exactly
    /// once per session; failure means the view stays offline.
    async fn acquire(&mut self) -> Result<()>;

    /// The most recent frame, or `None` before the stream produced one.
    fn frame(&mut self) -> Option<Frame>;

    /// Release the stream. Idempotent; required on teardown.
    fn release(&mut self);
}

/// Deterministic software camera used by the demo build and tests.
///
/// Emits a slow-moving bright blob over a dark gradient so the blob
/// detector has something to find. The first few frames report zero
/// dimensions to model stream warm-up.
#[derive(Debug)]
pub struct SimulatedCamera {
    width: u32,
    height: u32,
    warmup_frames: u64,
    seq: u64,
    acquired: bool,
    releases: u32,
}

impl SimulatedCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            warmup_frames: 3,
            seq: 0,
            acquired: false,
            releases: 0,
        }
    }

    /// Number of zero-dimension frames emitted before real pictures.
    pub fn with_warmup(mut self, frames: u64) -> Self {
        self.warmup_frames = frames;
        self
    }

    /// How many times `release` has been called. Test hook for the
    /// stream-release invariant.
    pub fn release_count(&self) -> u32 {
        self.releases
    }

    fn render(&self, seq: u64) -> Vec<u8> {
        let (w, h) = (self.width as i64, self.height as i64);
        // Blob orbits the frame center; period long enough that
        // consecutive frames differ slightly.
        let angle = seq as f64 * 0.15;
        let cx = w / 2 + ((w as f64 / 4.0) * angle.cos()) as i64;
        let cy = h / 2 + ((h as f64 / 4.0) * angle.sin()) as i64;
        let radius = (w.min(h) / 6).max(2);

        let mut pixels = Vec::with_capacity((w * h) as usize);
        for y in 0..h {
            for x in 0..w {
                let base = (32 + (y * 32 / h.max(1))) as u8;
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy <= radius * radius {
                    pixels.push(230);
                } else {
                    pixels.push(base);
                }
            }
        }
        pixels
    }
}

impl Default for SimulatedCamera {
    fn default() -> Self {
        Self::new(96, 54)
    }
}

#[async_trait]
impl CameraSource for SimulatedCamera {
    async fn acquire(&mut self) -> Result<()> {
        self.acquired = true;
        Ok(())
    }

    fn frame(&mut self) -> Option<Frame> {
        if !self.acquired {
            return None;
        }
        let seq = self.seq;
        self.seq += 1;
        if seq < self.warmup_frames {
            // Stream is up but nothing decodable yet.
            return Some(Frame {
                width: 0,
                height: 0,
                pixels: Vec::new(),
                seq,
            });
        }
        Some(Frame {
            width: self.width,
            height: self.height,
            pixels: self.render(seq),
            seq,
        })
    }

    fn release(&mut self) {
        self.acquired = false;
        self.releases += 1;
    }
}

/// Camera whose permission prompt is always denied. Lets the offline
/// path be exercised without a real device.
#[derive(Debug, Default)]
pub struct DeniedCamera {
    releases: u32,
}

impl DeniedCamera {
    pub fn release_count(&self) -> u32 {
        self.releases
    }
}

#[async_trait]
impl CameraSource for DeniedCamera {
    async fn acquire(&mut self) -> Result<()> {
        Err(SonnyError::Camera("permission denied".to_string()))
    }

    fn frame(&mut self) -> Option<Frame> {
        None
    }

    fn release(&mut self) {
        self.releases += 1;
    }
}
