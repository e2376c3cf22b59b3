// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Scanner session
//!
//! Owns camera + detector + overlay for one detection view. Lifecycle:
//!
//! 1. `start` — acquire the camera (denial leaves the view offline, no
//!    retry) and load the model; the loop never runs inference before
//!    the model resolved.
//! 2. `tick` — driven by the UI clock. An undecodable frame is skipped
//!    without touching the overlay; a decodable one goes through
//!    inference and a full overlay redraw at the frame's dimensions.
//!    Passes are serialized because `tick` is awaited to completion by
//!    the single event loop before the next tick fires.
//! 3. `stop` — cancel the loop and release the camera stream. Release
//!    is unconditional; `Drop` backstops it so navigation away can
//!    never leak the stream.

use crate::report::Reporter;
use crate::vision::camera::CameraSource;
use crate::vision::detector::{Detection, DetectorMode, ObjectDetector};
use crate::vision::overlay::OverlayBuffer;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerState {
    /// Not started yet.
    Idle,
    /// Camera acquisition failed; view stays inactive.
    Offline,
    /// Camera up, model still loading.
    Loading,
    /// Loop live.
    Running,
    /// Torn down; no further ticks do anything.
    Stopped,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Scanner not running (idle/offline/stopped).
    Inactive,
    /// No decodable frame yet; rescheduled without drawing.
    Skipped,
    /// Inference ran; overlay redrawn with this many detections.
    Detected(usize),
}

pub struct Scanner {
    camera: Box<dyn CameraSource>,
    detector: Box<dyn ObjectDetector>,
    overlay: OverlayBuffer,
    reporter: Reporter,
    mode: DetectorMode,
    state: ScannerState,
    min_confidence: f32,
    released: bool,
    last_detections: Vec<Detection>,
}

impl Scanner {
    pub fn new(
        camera: Box<dyn CameraSource>,
        detector: Box<dyn ObjectDetector>,
        mode: DetectorMode,
        reporter: Reporter,
    ) -> Self {
        Self {
            camera,
            detector,
            overlay: OverlayBuffer::new(mode.highlight()),
            reporter,
            mode,
            state: ScannerState::Idle,
            min_confidence: 0.0,
            released: false,
            last_detections: Vec::new(),
        }
    }

    /// Drop detections below this confidence before drawing.
    pub fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_confidence = min_confidence.clamp(0.0, 1.0);
        self
    }

    pub fn state(&self) -> ScannerState {
        self.state
    }

    pub fn mode(&self) -> DetectorMode {
        self.mode
    }

    pub fn overlay(&self) -> &OverlayBuffer {
        &self.overlay
    }

    pub fn detections(&self) -> &[Detection] {
        &self.last_detections
    }

    /// Acquire the stream and load the model.
    pub async fn start(&mut self) -> ScannerState {
        if self.state != ScannerState::Idle {
            return self.state;
        }

        if let Err(e) = self.camera.acquire().await {
            // Denial is logged and left alone — no automatic retry.
            self.reporter.warn(format!("camera unavailable: {e}"));
            self.state = ScannerState::Offline;
            return self.state;
        }

        self.state = ScannerState::Loading;
        match self.detector.load().await {
            Ok(()) => {
                self.reporter.info("detection model loaded");
                self.state = ScannerState::Running;
            }
            Err(e) => {
                self.reporter.error(format!("model load failed: {e}"));
                self.release();
                self.state = ScannerState::Offline;
            }
        }
        self.state
    }

    /// One pass of the detection loop.
    pub async fn tick(&mut self) -> TickOutcome {
        if self.state != ScannerState::Running {
            return TickOutcome::Inactive;
        }

        let Some(frame) = self.camera.frame() else {
            return TickOutcome::Skipped;
        };
        if !frame.is_decodable() {
            // Warm-up or glitch frame: skip, overlay untouched.
            return TickOutcome::Skipped;
        }

        match self.detector.detect(&frame).await {
            Ok(mut detections) => {
                detections.retain(|d| d.confidence >= self.min_confidence);
                self.overlay.redraw(frame.width, frame.height, &detections);
                let count = detections.len();
                self.last_detections = detections;
                TickOutcome::Detected(count)
            }
            Err(e) => {
                self.reporter.warn(format!("detection pass failed: {e}"));
                TickOutcome::Skipped
            }
        }
    }

    /// Tear down: stop the loop and release the camera stream.
    pub fn stop(&mut self) {
        if self.state == ScannerState::Stopped {
            return;
        }
        self.release();
        self.state = ScannerState::Stopped;
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.camera.release();
        }
    }
}

impl Drop for Scanner {
    fn drop(&mut self) {
        // Stream release on teardown is an invariant, not a courtesy.
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report;
    use crate::vision::camera::{DeniedCamera, SimulatedCamera};
    use crate::vision::detector::LumaBlobDetector;

    fn running_parts() -> (Box<dyn CameraSource>, Box<dyn ObjectDetector>) {
        (
            Box::new(SimulatedCamera::new(64, 48).with_warmup(1)),
            Box::new(LumaBlobDetector::new(DetectorMode::Kitchen)),
        )
    }

    #[tokio::test]
    async fn test_start_runs_after_model_load() {
        let (cam, det) = running_parts();
        let (reporter, _rx) = report::channel();
        let mut scanner = Scanner::new(cam, det, DetectorMode::Kitchen, reporter);
        assert_eq!(scanner.state(), ScannerState::Idle);
        assert_eq!(scanner.start().await, ScannerState::Running);
    }

    #[tokio::test]
    async fn test_denied_camera_goes_offline_without_retry() {
        let (reporter, mut reports) = report::channel();
        let mut scanner = Scanner::new(
            Box::new(DeniedCamera::default()),
            Box::new(LumaBlobDetector::new(DetectorMode::Kitchen)),
            DetectorMode::Kitchen,
            reporter,
        );
        assert_eq!(scanner.start().await, ScannerState::Offline);
        assert_eq!(scanner.tick().await, TickOutcome::Inactive);
        let report = reports.try_recv().unwrap();
        assert!(report.message.contains("camera unavailable"));
    }

    #[tokio::test]
    async fn test_warmup_frames_skip_without_overlay_mutation() {
        let (reporter, _rx) = report::channel();
        let mut scanner = Scanner::new(
            Box::new(SimulatedCamera::new(64, 48).with_warmup(2)),
            Box::new(LumaBlobDetector::new(DetectorMode::Kitchen)),
            DetectorMode::Kitchen,
            reporter,
        );
        scanner.start().await;

        assert_eq!(scanner.tick().await, TickOutcome::Skipped);
        assert_eq!(scanner.tick().await, TickOutcome::Skipped);
        assert_eq!(scanner.overlay().mutation_count(), 0);

        // First decodable frame draws.
        assert!(matches!(scanner.tick().await, TickOutcome::Detected(_)));
        assert_eq!(scanner.overlay().mutation_count(), 1);
        assert_eq!(scanner.overlay().dimensions(), (64, 48));
    }

    #[tokio::test]
    async fn test_stop_halts_draws() {
        let (cam, det) = running_parts();
        let (reporter, _rx) = report::channel();
        let mut scanner = Scanner::new(cam, det, DetectorMode::Kitchen, reporter);
        scanner.start().await;
        scanner.tick().await;
        scanner.tick().await;
        let drawn = scanner.overlay().mutation_count();

        scanner.stop();
        assert_eq!(scanner.state(), ScannerState::Stopped);
        for _ in 0..5 {
            assert_eq!(scanner.tick().await, TickOutcome::Inactive);
        }
        assert_eq!(scanner.overlay().mutation_count(), drawn);
    }
}
