// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Poses
//!
//! A pose is a partial mapping from joints to target values: degrees
//! for head and arm joints, percent closure for the hands. Poses are
//! transient UI state — built in the movement panel, merged from
//! presets, published on the [`broadcast::PoseBus`], and discarded on
//! navigation.

pub mod broadcast;
pub mod presets;

pub use broadcast::{PoseBus, PoseEvent};
pub use presets::PosePreset;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The simulated robot's controllable joints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Joint {
    HeadTurn,
    HeadTilt,
    LeftShoulder,
    LeftElbow,
    LeftHand,
    RightShoulder,
    RightElbow,
    RightHand,
}

impl Joint {
    pub fn all() -> &'static [Joint] {
        &[
            Joint::HeadTurn,
            Joint::HeadTilt,
            Joint::LeftShoulder,
            Joint::LeftElbow,
            Joint::LeftHand,
            Joint::RightShoulder,
            Joint::RightElbow,
            Joint::RightHand,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Joint::HeadTurn => "Head Turn (Y)",
            Joint::HeadTilt => "Head Tilt (X)",
            Joint::LeftShoulder => "Left Shoulder",
            Joint::LeftElbow => "Left Elbow",
            Joint::LeftHand => "Left Hand",
            Joint::RightShoulder => "Right Shoulder",
            Joint::RightElbow => "Right Elbow",
            Joint::RightHand => "Right Hand",
        }
    }

    /// Allowed value range. Degrees, except hands which are percent
    /// closure.
    pub fn range(&self) -> (f32, f32) {
        match self {
            Joint::HeadTurn => (-90.0, 90.0),
            Joint::HeadTilt => (-45.0, 45.0),
            Joint::LeftShoulder | Joint::RightShoulder => (-90.0, 90.0),
            Joint::LeftElbow | Joint::RightElbow => (0.0, 120.0),
            Joint::LeftHand | Joint::RightHand => (0.0, 100.0),
        }
    }
}

/// Partial joint → value mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    joints: BTreeMap<Joint, f32>,
}

impl Pose {
    pub fn new() -> Self {
        Self::default()
    }

    /// The panel's starting pose.
    pub fn initial() -> Self {
        let mut pose = Pose::new();
        pose.set(Joint::HeadTurn, 0.0);
        pose.set(Joint::HeadTilt, 0.0);
        pose.set(Joint::LeftShoulder, 10.0);
        pose.set(Joint::LeftElbow, 60.0);
        pose.set(Joint::RightShoulder, 10.0);
        pose.set(Joint::RightElbow, 60.0);
        pose.set(Joint::LeftHand, 0.0);
        pose.set(Joint::RightHand, 0.0);
        pose
    }

    /// Set a joint target, clamped to the joint's range.
    pub fn set(&mut self, joint: Joint, value: f32) {
        let (lo, hi) = joint.range();
        self.joints.insert(joint, value.clamp(lo, hi));
    }

    pub fn get(&self, joint: Joint) -> Option<f32> {
        self.joints.get(&joint).copied()
    }

    /// Overlay `other` on this pose: joints present in `other` replace,
    /// everything else is kept. Preset application semantics.
    pub fn merge(&mut self, other: &Pose) {
        for (joint, value) in &other.joints {
            self.joints.insert(*joint, *value);
        }
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Joint, f32)> + '_ {
        self.joints.iter().map(|(j, v)| (*j, *v))
    }
}
