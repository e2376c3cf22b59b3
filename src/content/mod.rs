// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Static portfolio content
//!
//! Skills, projects and lab notebook entries are display records fixed
//! at load time. Pages read them; nothing mutates them.

/// Proficiency badge shown next to a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Strong,
    Good,
    Learning,
}

impl SkillLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Strong => "Strong",
            SkillLevel::Good => "Good",
            SkillLevel::Learning => "Learning",
        }
    }
}

/// One entry in the skills console.
#[derive(Debug, Clone)]
pub struct Skill {
    pub key: &'static str,
    pub level: SkillLevel,
    pub tagline: &'static str,
    pub tools: &'static [&'static str],
}

/// One showcased project.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub link: Option<&'static str>,
}

/// One lab notebook entry: what was tried, what broke, what it taught.
#[derive(Debug, Clone)]
pub struct LabEntry {
    pub title: &'static str,
    pub goal: &'static str,
    pub issue: &'static str,
    pub outcome: &'static str,
    pub takeaway: &'static str,
}

pub fn skills() -> &'static [Skill] {
    static SKILLS: &[Skill] = &[
        Skill {
            key: "Python",
            level: SkillLevel::Strong,
            tagline: "Robotics scripts, automation, and vision glue.",
            tools: &["OpenCV (basic)", "PySerial", "Linux tooling"],
        },
        Skill {
            key: "Linux",
            level: SkillLevel::Good,
            tagline: "Terminal-first development and debugging.",
            tools: &["bash", "ssh", "systemd"],
        },
        Skill {
            key: "Bash",
            level: SkillLevel::Good,
            tagline: "Fast automation and workflow helpers.",
            tools: &["coreutils", "cron"],
        },
        Skill {
            key: "JavaScript",
            level: SkillLevel::Good,
            tagline: "Core JavaScript for logic, math, and browser APIs.",
            tools: &["canvas", "fetch"],
        },
        Skill {
            key: "Arduino",
            level: SkillLevel::Good,
            tagline: "Hardware prototyping and servo control.",
            tools: &["PWM", "serial", "servo shields"],
        },
        Skill {
            key: "React",
            level: SkillLevel::Good,
            tagline: "Dashboards and control panels for robotics tools.",
            tools: &["hooks", "three.js"],
        },
        Skill {
            key: "Robotics",
            level: SkillLevel::Learning,
            tagline: "Kinematics, motion control, and system design.",
            tools: &["InMoov", "inverse kinematics"],
        },
        Skill {
            key: "Machine Vision",
            level: SkillLevel::Learning,
            tagline: "Face tracking and object detection experiments.",
            tools: &["coco-ssd", "OpenCV"],
        },
    ];
    SKILLS
}

pub fn projects() -> &'static [Project] {
    static PROJECTS: &[Project] = &[
        Project {
            name: "InMoov Humanoid Robot",
            description: "3D-printed humanoid build with servo-driven head and arms.",
            link: None,
        },
        Project {
            name: "Face Recognition System",
            description: "Webcam face tracking with live landmark overlay.",
            link: Some("https://github.com/yourusername/face-recognition"),
        },
        Project {
            name: "Arduino Servo Controller",
            description: "Serial-driven multi-servo controller board firmware.",
            link: Some("https://github.com/yourusername/arduino-servo"),
        },
        Project {
            name: "React Robot Dashboard",
            description: "Browser control panel for telemetry and motion testing.",
            link: Some("https://github.com/yourusername/react-robot-dashboard"),
        },
        Project {
            name: "Voice Assistant",
            description: "Wake-word listener wired to scripted command replies.",
            link: None,
        },
    ];
    PROJECTS
}

pub fn lab_entries() -> &'static [LabEntry] {
    static ENTRIES: &[LabEntry] = &[
        LabEntry {
            title: "Virtual Robot Arm — Forward Kinematics",
            goal: "Build a 5-DOF virtual arm using nested transforms.",
            issue: "Adding wrist joints caused collapse/disappearing geometry.",
            outcome: "Rebuilt one joint at a time with primitives to verify hierarchy.",
            takeaway: "FK depends on transform order as much as math.",
        },
        LabEntry {
            title: "Skills Section — Navigation Redesign",
            goal: "Make Skills clearer without bloating the homepage.",
            issue: "Too much embedded content created clutter/confusion.",
            outcome: "Converted Skills into navigation launchers for dedicated pages.",
            takeaway: "Good UX often means moving detail out, not adding more.",
        },
        LabEntry {
            title: "JavaScript Projects — Documentation Cleanup",
            goal: "Make vanilla JS projects look intentional + professional.",
            issue: "Inconsistent/minimal READMEs weakened project presentation.",
            outcome: "Standardized READMEs and added clear demo + repo links.",
            takeaway: "Documentation can level up a project instantly.",
        },
    ];
    ENTRIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_present_and_leveled() {
        let all = skills();
        assert_eq!(all.len(), 8);
        assert!(all.iter().any(|s| s.key == "Python" && s.level == SkillLevel::Strong));
    }

    #[test]
    fn test_projects_some_have_links() {
        let all = projects();
        assert!(all.iter().any(|p| p.link.is_some()));
        assert!(all.iter().any(|p| p.link.is_none()));
    }

    #[test]
    fn test_lab_entries_fully_filled() {
        for entry in lab_entries() {
            assert!(!entry.title.is_empty());
            assert!(!entry.takeaway.is_empty());
        }
    }
}
