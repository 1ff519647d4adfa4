//! Portfolio content: profile, resume sections and project categories.
//!
//! Content is hand-authored JSON, loaded once at startup (and again on every
//! change when the watcher is enabled). A loaded [`Site`] is never mutated;
//! reloads replace it wholesale.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// Content bundled into the binary, used when no `--content` file is given.
pub const BUNDLED_CONTENT: &str = include_str!("../content/portfolio.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
  pub profile: Profile,
  #[serde(default)]
  pub stats: Vec<Stat>,
  #[serde(default)]
  pub skills: Vec<Skill>,
  #[serde(default)]
  pub extra_skills: Vec<String>,
  #[serde(default)]
  pub experience: Vec<Experience>,
  pub contact: Contact,
  pub categories: Vec<Category>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
  pub name: String,
  pub initials: String,
  pub role: String,
  pub headline: String,
  #[serde(default)]
  pub headline_accent: String,
  pub summary: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub photo: Option<String>,
  pub linkedin: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stat {
  pub value: String,
  pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
  pub name: String,
  pub category: String,
  /// Proficiency in percent.
  pub level: u8,
  /// CSS color used for the skill's icon tile and progress bar.
  #[serde(default = "default_accent")]
  pub accent: String,
}

fn default_accent() -> String {
  "#00416b".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
  pub title: String,
  pub company: String,
  pub period: String,
  pub location: String,
  pub description: String,
  #[serde(default)]
  pub achievements: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
  pub email: String,
  pub email_href: String,
  pub phone: String,
  pub phone_href: String,
  #[serde(default)]
  pub phone_hours: String,
  pub location: String,
  #[serde(default)]
  pub location_detail: String,
  pub linkedin: String,
  #[serde(default)]
  pub availability: Vec<String>,
  #[serde(default)]
  pub services: Vec<String>,
  pub message_href: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
  Box,
  Printer,
  Activity,
  Cpu,
  FolderOpen,
}

impl Icon {
  pub fn glyph(self) -> &'static str {
    match self {
      Icon::Box => "\u{25A3}",
      Icon::Printer => "\u{2399}",
      Icon::Activity => "\u{223F}",
      Icon::Cpu => "\u{2318}",
      Icon::FolderOpen => "\u{25A4}",
    }
  }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
  pub key: String,
  pub title: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub icon: Icon,
  /// Short label used by the navigation menu; falls back to the title.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,
  #[serde(default)]
  pub projects: Vec<Project>,
}

impl Category {
  pub fn project(&self, id: u32) -> Option<&Project> {
    self.projects.iter().find(|p| p.id == id)
  }

  pub fn first_project(&self) -> Option<&Project> {
    self.projects.first()
  }

  pub fn nav_label(&self) -> &str {
    self.label.as_deref().unwrap_or(&self.title)
  }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
  pub id: u32,
  pub title: String,
  pub context: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub challenge: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub solution: Option<String>,
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default)]
  pub media: Vec<MediaItem>,
}

impl Project {
  pub fn has_model(&self) -> bool {
    self.media.iter().any(|m| matches!(m, MediaItem::Model { .. }))
  }
}

/// One displayable unit attached to a project. Identity is the position in
/// the project's media list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaItem {
  Image {
    src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thumb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
  },
  Model {
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thumb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
  },
  Video {
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thumb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
  },
}

impl MediaItem {
  pub fn caption(&self) -> Option<&str> {
    match self {
      MediaItem::Image { caption, .. }
      | MediaItem::Model { caption, .. }
      | MediaItem::Video { caption, .. } => caption.as_deref(),
    }
  }

  /// Heavy items sit behind a facade until the user activates them.
  pub fn needs_activation(&self) -> bool {
    !matches!(self, MediaItem::Image { .. })
  }

  pub fn kind_label(&self) -> &'static str {
    match self {
      MediaItem::Image { .. } => "Image",
      MediaItem::Model { .. } => "3D Model",
      MediaItem::Video { .. } => "Video",
    }
  }
}

impl Site {
  pub fn bundled() -> SiteResult<Self> {
    Self::from_json_str(BUNDLED_CONTENT)
  }

  pub fn load(path: &Path) -> SiteResult<Self> {
    let raw = fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
    Self::from_json_str(&raw)
  }

  pub fn from_json_str(raw: &str) -> SiteResult<Self> {
    let site: Site = serde_json::from_str(raw)?;
    site.validate()?;
    Ok(site)
  }

  pub fn category(&self, key: &str) -> Option<&Category> {
    self.categories.iter().find(|c| c.key == key)
  }

  pub fn validate(&self) -> SiteResult<()> {
    let mut keys = HashSet::new();
    for category in &self.categories {
      if !is_slug(&category.key) {
        return Err(SiteError::Invalid(format!(
          "category {:?} needs a key of lowercase letters, digits, '-' or '_' (got {:?})",
          category.title, category.key
        )));
      }
      if !keys.insert(category.key.as_str()) {
        return Err(SiteError::Invalid(format!(
          "duplicate category key {:?}",
          category.key
        )));
      }

      let mut ids = HashSet::new();
      for project in &category.projects {
        if !ids.insert(project.id) {
          return Err(SiteError::Invalid(format!(
            "duplicate project id {} in category {:?}",
            project.id, category.key
          )));
        }
      }
    }

    if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
      return Err(SiteError::Invalid(format!(
        "skill {:?} has level {} (max 100)",
        skill.name, skill.level
      )));
    }

    Ok(())
  }
}

/// Category keys appear in URL paths unencoded.
fn is_slug(key: &str) -> bool {
  !key.is_empty()
    && key
      .bytes()
      .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;

  pub(crate) const SAMPLE: &str = r#"{
    "profile": {
      "name": "Test Engineer",
      "initials": "TE",
      "role": "Mechanical Engineer",
      "headline": "Engineering",
      "headline_accent": "Excellence",
      "summary": "Builds things.",
      "linkedin": "https://www.linkedin.com/in/test/"
    },
    "contact": {
      "email": "test@example.com",
      "email_href": "mailto:test@example.com",
      "phone": "+1 555 0100",
      "phone_href": "tel:+15550100",
      "location": "Somewhere, MA",
      "linkedin": "https://www.linkedin.com/in/test/",
      "message_href": "mailto:test@example.com?subject=Hello"
    },
    "categories": [
      {
        "key": "modeling",
        "title": "3D Modeling Projects",
        "icon": "box",
        "projects": [
          {
            "id": 1,
            "title": "Lightbox",
            "context": "A gift.",
            "tags": ["CAD"],
            "media": [
              { "type": "image", "src": "https://img.example.com/a.jpg", "caption": "Front" },
              { "type": "model", "url": "https://cdn.example.com/box.stl" },
              { "type": "video", "url": "https://youtu.be/dQw4w9WgXcQ" }
            ]
          },
          { "id": 2, "title": "Rover", "context": "WIP.", "media": [] }
        ]
      }
    ]
  }"#;

  #[test]
  fn test_parse_sample() {
    let site = Site::from_json_str(SAMPLE).unwrap();
    let category = site.category("modeling").unwrap();
    assert_eq!(category.projects.len(), 2);

    let project = category.project(1).unwrap();
    assert_eq!(project.media.len(), 3);
    assert!(project.has_model());
    assert_eq!(project.media[0].caption(), Some("Front"));
    assert!(!project.media[0].needs_activation());
    assert!(project.media[1].needs_activation());
    assert!(project.media[2].needs_activation());

    assert!(category.project(2).unwrap().media.is_empty());
    assert!(site.category("missing").is_none());
  }

  #[test]
  fn test_bundled_content_is_valid() {
    let site = Site::bundled().unwrap();
    assert!(!site.categories.is_empty());
    assert!(site.categories.iter().all(|c| !c.projects.is_empty()));
  }

  #[test]
  fn test_rejects_duplicate_category_keys() {
    let mut site = Site::from_json_str(SAMPLE).unwrap();
    let dup = site.categories[0].clone();
    site.categories.push(dup);
    let err = site.validate().unwrap_err();
    assert!(matches!(err, SiteError::Invalid(msg) if msg.contains("duplicate category")));
  }

  #[test]
  fn test_rejects_keys_that_are_not_slugs() {
    for key in ["", "3D Modeling", "a/b"] {
      let mut site = Site::from_json_str(SAMPLE).unwrap();
      site.categories[0].key = key.to_string();
      assert!(matches!(site.validate(), Err(SiteError::Invalid(_))), "{key:?}");
    }
  }

  #[test]
  fn test_rejects_duplicate_project_ids() {
    let mut site = Site::from_json_str(SAMPLE).unwrap();
    site.categories[0].projects[1].id = 1;
    assert!(matches!(site.validate(), Err(SiteError::Invalid(_))));
  }

  #[test]
  fn test_unknown_media_type_is_parse_error() {
    let raw = SAMPLE.replace(r#""type": "video""#, r#""type": "hologram""#);
    assert!(matches!(Site::from_json_str(&raw), Err(SiteError::Parse(_))));
  }

  #[test]
  fn test_load_missing_file_reports_path() {
    let err = Site::load(Path::new("/nonexistent/portfolio.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/portfolio.json"));
  }
}
