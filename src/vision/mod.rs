// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Live object detection
//!
//! A [`Scanner`] owns one camera stream and one detector model and runs
//! a tick-driven loop: sample a frame, skip it if not yet decodable,
//! otherwise run inference and redraw the overlay at the frame's native
//! dimensions. Inference passes are strictly serialized — a new pass
//! only starts after the previous one resolved.
//!
//! Camera and detector are capability traits so pages can be driven by
//! fakes in tests and by the simulated devices in the demo build.

pub mod camera;
pub mod detector;
pub mod overlay;
pub mod scanner;

pub use camera::{CameraSource, DeniedCamera, Frame, SimulatedCamera};
pub use detector::{BoundingBox, Detection, DetectorMode, LumaBlobDetector, ObjectDetector};
pub use overlay::{OverlayBox, OverlayBuffer};
pub use scanner::{Scanner, ScannerState, TickOutcome};
