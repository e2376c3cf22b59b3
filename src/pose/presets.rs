// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Pose presets
//!
//! The stock gestures from the movement panel. Each preset is a partial
//! pose; applying one overlays the listed joints and leaves the rest of
//! the current pose alone.

use crate::pose::{Joint, Pose};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosePreset {
    Rest,
    Wave,
    Salute,
    Point,
    TPose,
}

impl PosePreset {
    pub fn all() -> &'static [PosePreset] {
        &[
            PosePreset::Rest,
            PosePreset::Wave,
            PosePreset::Salute,
            PosePreset::Point,
            PosePreset::TPose,
        ]
    }

    /// Name carried in the broadcast metadata.
    pub fn name(&self) -> &'static str {
        match self {
            PosePreset::Rest => "rest",
            PosePreset::Wave => "wave",
            PosePreset::Salute => "salute",
            PosePreset::Point => "point",
            PosePreset::TPose => "tpose",
        }
    }

    pub fn pose(&self) -> Pose {
        let mut p = Pose::new();
        match self {
            PosePreset::Rest => {
                p.set(Joint::HeadTurn, 0.0);
                p.set(Joint::HeadTilt, 0.0);
                p.set(Joint::LeftShoulder, 5.0);
                p.set(Joint::LeftElbow, 20.0);
                p.set(Joint::RightShoulder, 5.0);
                p.set(Joint::RightElbow, 20.0);
                p.set(Joint::LeftHand, 0.0);
                p.set(Joint::RightHand, 0.0);
            }
            PosePreset::Wave => {
                p.set(Joint::HeadTurn, 10.0);
                p.set(Joint::HeadTilt, 0.0);
                p.set(Joint::LeftShoulder, 40.0);
                p.set(Joint::LeftElbow, 20.0);
                p.set(Joint::RightShoulder, 5.0);
                p.set(Joint::RightElbow, 20.0);
                p.set(Joint::LeftHand, 30.0);
            }
            PosePreset::Salute => {
                p.set(Joint::HeadTurn, 0.0);
                p.set(Joint::HeadTilt, -10.0);
                p.set(Joint::RightShoulder, 60.0);
                p.set(Joint::RightElbow, 10.0);
                p.set(Joint::LeftShoulder, 5.0);
                p.set(Joint::LeftElbow, 20.0);
            }
            PosePreset::Point => {
                p.set(Joint::HeadTurn, 15.0);
                p.set(Joint::HeadTilt, 0.0);
                p.set(Joint::RightShoulder, 30.0);
                p.set(Joint::RightElbow, 10.0);
                p.set(Joint::RightHand, 10.0);
            }
            PosePreset::TPose => {
                p.set(Joint::HeadTurn, 0.0);
                p.set(Joint::HeadTilt, 0.0);
                p.set(Joint::LeftShoulder, 90.0);
                p.set(Joint::RightShoulder, -90.0);
                p.set(Joint::LeftElbow, 0.0);
                p.set(Joint::RightElbow, 0.0);
            }
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_is_partial() {
        let wave = PosePreset::Wave.pose();
        assert_eq!(wave.get(Joint::LeftHand), Some(30.0));
        // Wave says nothing about the right hand.
        assert_eq!(wave.get(Joint::RightHand), None);
    }

    #[test]
    fn test_tpose_spreads_shoulders() {
        let t = PosePreset::TPose.pose();
        assert_eq!(t.get(Joint::LeftShoulder), Some(90.0));
        assert_eq!(t.get(Joint::RightShoulder), Some(-90.0));
    }

    #[test]
    fn test_all_presets_stay_in_range() {
        for preset in PosePreset::all() {
            for (joint, value) in preset.pose().iter() {
                let (lo, hi) = joint.range();
                assert!(value >= lo && value <= hi, "{preset:?} {joint:?}");
            }
        }
    }

    #[test]
    fn test_names_are_stable() {
        let names: Vec<_> = PosePreset::all().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["rest", "wave", "salute", "point", "tpose"]);
    }
}
