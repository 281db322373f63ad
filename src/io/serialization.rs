// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Content and config file loading.
//!
//! Both file kinds are YAML or JSON, selected by extension. Content is
//! validated after parsing so the controllers never see duplicate ids.

use crate::config::PageConfig;
use crate::models::content::{ContentError, PortfolioContent};
use anyhow::Result;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Serialized file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            other => Err(ContentError::UnsupportedExtension(other.map(str::to_string))),
        }
    }
}

fn parse<T: DeserializeOwned>(text: &str, format: Format) -> Result<T> {
    let value = match format {
        Format::Yaml => serde_yaml::from_str(text)?,
        Format::Json => serde_json::from_str(text)?,
    };
    Ok(value)
}

/// Parse and validate content from a string.
pub fn parse_content(text: &str, format: Format) -> Result<PortfolioContent> {
    let content: PortfolioContent = parse(text, format)?;
    content.validate()?;
    Ok(content)
}

/// Import page content from a YAML or JSON file.
pub fn import_content(path: &Path) -> Result<PortfolioContent> {
    let format = Format::from_path(path)?;
    let text = std::fs::read_to_string(path)?;
    let content = parse_content(&text, format)?;
    log::info!(
        "Imported {} projects and {} photos from {}",
        content.projects.len(),
        content.photos.len(),
        path.display()
    );
    Ok(content)
}

/// Import page parameters from a YAML or JSON file.
pub fn import_config(path: &Path) -> Result<PageConfig> {
    let format = Format::from_path(path)?;
    let text = std::fs::read_to_string(path)?;
    parse(&text, format)
}

/// Export page content, mostly useful for producing a starter file.
pub fn export_content(content: &PortfolioContent, path: &Path) -> Result<()> {
    let text = match Format::from_path(path)? {
        Format::Yaml => serde_yaml::to_string(content)?,
        Format::Json => serde_json::to_string_pretty(content)?,
    };
    std::fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::{Description, MediaKind};
    use std::path::PathBuf;

    const YAML: &str = r#"
name: Iris
tagline: Building things
sections:
  - { id: projects, title: Projects }
  - { id: experience, title: Competitions }
projects:
  - id: mappy
    title: Mappy
    tech_stack: Rust, egui
    description:
      - Offline maps
      - Route planning
    media:
      - { kind: image, src: images/mappy1.png, alt: Main view }
      - { kind: video, src: images/mappy.mp4, alt: Demo }
    status: In progress
"#;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(&PathBuf::from("a.yml")), Ok(Format::Yaml));
        assert_eq!(Format::from_path(&PathBuf::from("a.json")), Ok(Format::Json));
        assert_eq!(
            Format::from_path(&PathBuf::from("a.toml")),
            Err(ContentError::UnsupportedExtension(Some("toml".to_string())))
        );
    }

    #[test]
    fn test_parse_yaml_content() {
        let content = parse_content(YAML, Format::Yaml).unwrap();
        assert_eq!(content.section_ids(), vec!["projects", "experience"]);

        let project = &content.projects[0];
        assert_eq!(project.media.len(), 2);
        assert_eq!(project.media[1].kind, MediaKind::Video);
        assert_eq!(project.status.as_deref(), Some("In progress"));
        assert!(matches!(project.description, Description::Bullets(ref b) if b.len() == 2));
    }

    #[test]
    fn test_parse_rejects_invalid_content() {
        let json = r#"{"name": "Iris", "sections": [], "projects": []}"#;
        let err = parse_content(json, Format::Json).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ContentError>(),
            Some(&ContentError::NoSections)
        );
    }
}
