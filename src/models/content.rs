// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio content model.
//!
//! Everything the page displays comes from one content file: the intro
//! copy, the ordered section list used for navigation, projects,
//! competitions, skills and the personal photo strip.

use super::project::{Description, MediaItem, Project};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Content validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(String),

    #[error("Project {0} has an empty title")]
    EmptyTitle(String),

    #[error("Project {0} has an empty tech stack")]
    EmptyTechStack(String),

    #[error("Content declares no sections")]
    NoSections,

    #[error("Duplicate section id: {0}")]
    DuplicateSectionId(String),

    #[error("Unsupported content file extension: {0:?}")]
    UnsupportedExtension(Option<String>),
}

/// A navigation section of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMeta {
    pub id: String,
    pub title: String,
}

/// An external link shown as a button in the intro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// One entry of the competitions timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub award: Option<String>,
    #[serde(default)]
    pub summary: String,
}

/// A named group in the skills grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}

/// A photo in the auto-scrolling strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub caption: String,
}

/// Complete page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub links: Vec<Link>,
    pub sections: Vec<SectionMeta>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub competitions: Vec<Competition>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl PortfolioContent {
    /// Check the invariants the controllers rely on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.sections.is_empty() {
            return Err(ContentError::NoSections);
        }

        let mut section_ids = HashSet::new();
        for section in &self.sections {
            if !section_ids.insert(section.id.as_str()) {
                return Err(ContentError::DuplicateSectionId(section.id.clone()));
            }
        }

        let mut project_ids = HashSet::new();
        for project in &self.projects {
            if !project_ids.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProjectId(project.id.clone()));
            }
            if project.title.trim().is_empty() {
                return Err(ContentError::EmptyTitle(project.id.clone()));
            }
            if project.tech_stack.trim().is_empty() {
                return Err(ContentError::EmptyTechStack(project.id.clone()));
            }
        }

        Ok(())
    }

    /// Small example page written by `folio --init`.
    pub fn starter() -> Self {
        let section = |id: &str, title: &str| SectionMeta {
            id: id.to_string(),
            title: title.to_string(),
        };
        let mut project = Project::new("sample", "Sample project", "Rust, egui")
            .with_media(vec![
                MediaItem::image("images/sample1.png", "Main view"),
                MediaItem::image("images/sample2.png", "Details"),
            ]);
        project.description = Description::Bullets(vec![
            "What it does".to_string(),
            "How it was built".to_string(),
        ]);
        project.status = Some("In progress".to_string());

        Self {
            name: "Your Name".to_string(),
            tagline: "A sentence or two about what you build.".to_string(),
            links: vec![Link {
                label: "GitHub".to_string(),
                url: "https://github.com/".to_string(),
            }],
            sections: vec![
                section("projects", "Projects"),
                section("experience", "Competitions"),
                section("technologies", "Skills"),
                section("about", "About me"),
            ],
            projects: vec![project],
            competitions: vec![Competition {
                title: "Hackathon".to_string(),
                date: "2025".to_string(),
                award: Some("First place".to_string()),
                summary: String::new(),
            }],
            skills: vec![SkillGroup {
                name: "Languages".to_string(),
                skills: vec!["Rust".to_string(), "Python".to_string()],
            }],
            photos: vec![Photo {
                id: "photo1".to_string(),
                src: "images/photo1.jpg".to_string(),
                alt: "Photo".to_string(),
                caption: String::new(),
            }],
        }
    }

    /// Section ids in page order.
    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    /// Look up a project by id.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}
