//! Lazy activation of heavy media and what a carousel slot shows.

use crate::content::{MediaItem, Project};
use crate::model::{PresentationOptions, ViewerConfig};
use crate::video::{self, VideoSource};

/// Generic preview used when nothing better is known.
pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// Two-state gate in front of a heavy asset. There is no way back from
/// `Active`; navigation replaces the gate with a fresh one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivationGate {
  #[default]
  Inactive,
  Active,
}

impl ActivationGate {
  pub fn new() -> Self {
    ActivationGate::Inactive
  }

  pub fn activate(&mut self) {
    *self = ActivationGate::Active;
  }

  pub fn is_active(&self) -> bool {
    *self == ActivationGate::Active
  }
}

/// Where a facade's preview picture comes from, in priority order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Preview {
  Thumbnail(String),
  Platform(String),
  Placeholder,
  /// Models without a thumbnail show a drawn badge instead of a picture.
  ModelBadge,
}

impl Preview {
  pub fn image_url(&self) -> Option<&str> {
    match self {
      Preview::Thumbnail(url) | Preview::Platform(url) => Some(url),
      Preview::Placeholder => Some(PLACEHOLDER_IMAGE),
      Preview::ModelBadge => None,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Facade {
  pub preview: Preview,
  pub call_to_action: &'static str,
}

pub fn video_preview(url: &str, thumb: Option<&str>) -> Preview {
  if let Some(thumb) = thumb {
    return Preview::Thumbnail(thumb.to_string());
  }
  match VideoSource::parse(url).thumbnail_url() {
    Some(derived) => Preview::Platform(derived),
    None => Preview::Placeholder,
  }
}

pub fn facade(item: &MediaItem) -> Option<Facade> {
  match item {
    MediaItem::Image { .. } => None,
    MediaItem::Model { thumb, .. } => Some(Facade {
      preview: thumb.clone().map_or(Preview::ModelBadge, Preview::Thumbnail),
      call_to_action: "View 3D Model",
    }),
    MediaItem::Video { url, thumb, .. } => Some(Facade {
      preview: video_preview(url, thumb.as_deref()),
      call_to_action: "Play Video",
    }),
  }
}

/// What a carousel slot renders.
#[derive(Clone, Debug, PartialEq)]
pub enum Stage {
  Empty,
  Image { src: String, alt: String },
  Facade(Facade),
  Model(ViewerConfig),
  HostedVideo { embed_url: String },
  NativeVideo { src: String },
}

impl Stage {
  pub fn resolve(item: Option<&MediaItem>, gate: ActivationGate, options: &PresentationOptions) -> Self {
    let Some(item) = item else {
      return Stage::Empty;
    };

    if let MediaItem::Image { src, alt, .. } = item {
      return Stage::Image {
        src: src.clone(),
        alt: alt.clone().unwrap_or_else(|| "Project image".to_string()),
      };
    }

    if !gate.is_active() {
      return facade(item).map_or(Stage::Empty, Stage::Facade);
    }

    match item {
      MediaItem::Model { url, thumb, .. } => {
        Stage::Model(ViewerConfig::new(url, thumb.as_deref(), options))
      }
      MediaItem::Video { url, .. } => match VideoSource::parse(url) {
        VideoSource::Hosted { id } => Stage::HostedVideo { embed_url: video::embed_url(&id) },
        VideoSource::Direct { url } => Stage::NativeVideo { src: url },
      },
      MediaItem::Image { .. } => Stage::Empty,
    }
  }
}

/// Picture for the carousel's thumbnail strip. `None` means draw a badge.
pub fn strip_thumbnail(item: &MediaItem) -> Option<String> {
  match item {
    MediaItem::Image { src, thumb, .. } => Some(thumb.clone().unwrap_or_else(|| src.clone())),
    MediaItem::Model { thumb, .. } => thumb.clone(),
    MediaItem::Video { url, thumb, .. } => {
      video_preview(url, thumb.as_deref()).image_url().map(str::to_owned)
    }
  }
}

/// Card picture for a project in the gallery: its first image, else the
/// first model thumbnail, else the first video preview.
pub fn project_preview(project: &Project) -> String {
  let image = project.media.iter().find_map(|m| match m {
    MediaItem::Image { src, .. } => Some(src.clone()),
    _ => None,
  });
  let model = || {
    project.media.iter().find_map(|m| match m {
      MediaItem::Model { thumb: Some(thumb), .. } => Some(thumb.clone()),
      _ => None,
    })
  };
  let video = || {
    project.media.iter().find_map(|m| match m {
      MediaItem::Video { url, thumb, .. } => match video_preview(url, thumb.as_deref()) {
        Preview::Thumbnail(u) | Preview::Platform(u) => Some(u),
        _ => None,
      },
      _ => None,
    })
  };
  image
    .or_else(model)
    .or_else(video)
    .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::ModelSource;

  fn video(url: &str, thumb: Option<&str>) -> MediaItem {
    MediaItem::Video { url: url.into(), thumb: thumb.map(Into::into), caption: None }
  }

  fn model(thumb: Option<&str>) -> MediaItem {
    MediaItem::Model { url: "https://cdn.example.com/car.stl".into(), thumb: thumb.map(Into::into), caption: None }
  }

  #[test]
  fn test_gate_is_one_way() {
    let mut gate = ActivationGate::new();
    assert!(!gate.is_active());
    gate.activate();
    gate.activate();
    assert!(gate.is_active());
  }

  #[test]
  fn test_video_preview_priority() {
    assert_eq!(
      video_preview("https://youtu.be/dQw4w9WgXcQ", Some("mine.jpg")),
      Preview::Thumbnail("mine.jpg".into())
    );
    assert_eq!(
      video_preview("https://youtu.be/dQw4w9WgXcQ", None),
      Preview::Platform("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg".into())
    );
    assert_eq!(video_preview("https://cdn.example.com/a.mp4", None), Preview::Placeholder);
    assert_eq!(Preview::Placeholder.image_url(), Some(PLACEHOLDER_IMAGE));
  }

  #[test]
  fn test_inactive_heavy_items_show_facades() {
    let options = PresentationOptions::default();
    let gate = ActivationGate::new();

    match Stage::resolve(Some(&model(None)), gate, &options) {
      Stage::Facade(f) => {
        assert_eq!(f.preview, Preview::ModelBadge);
        assert_eq!(f.call_to_action, "View 3D Model");
      }
      other => panic!("unexpected {other:?}"),
    }
    match Stage::resolve(Some(&video("https://cdn.example.com/a.mp4", None)), gate, &options) {
      Stage::Facade(f) => assert_eq!(f.call_to_action, "Play Video"),
      other => panic!("unexpected {other:?}"),
    }
  }

  #[test]
  fn test_activation_mounts_players() {
    let options = PresentationOptions::default();
    let mut gate = ActivationGate::new();
    gate.activate();

    match Stage::resolve(Some(&model(Some("t.jpg"))), gate, &options) {
      Stage::Model(config) => {
        assert!(matches!(config.source, ModelSource::Supported { .. }));
        assert_eq!(config.placeholder.as_deref(), Some("t.jpg"));
      }
      other => panic!("unexpected {other:?}"),
    }
    assert_eq!(
      Stage::resolve(Some(&video("https://www.youtube.com/shorts/dQw4w9WgXcQ", None)), gate, &options),
      Stage::HostedVideo {
        embed_url: "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?autoplay=1&rel=0".into()
      }
    );
    assert_eq!(
      Stage::resolve(Some(&video("https://cdn.example.com/a.mp4", None)), gate, &options),
      Stage::NativeVideo { src: "https://cdn.example.com/a.mp4".into() }
    );
  }

  #[test]
  fn test_images_ignore_the_gate() {
    let item = MediaItem::Image { src: "a.jpg".into(), thumb: None, alt: None, caption: None };
    for gate in [ActivationGate::Inactive, ActivationGate::Active] {
      let stage = Stage::resolve(Some(&item), gate, &PresentationOptions::default());
      assert_eq!(stage, Stage::Image { src: "a.jpg".into(), alt: "Project image".into() });
    }
  }

  #[test]
  fn test_missing_item_is_empty() {
    assert_eq!(
      Stage::resolve(None, ActivationGate::Active, &PresentationOptions::default()),
      Stage::Empty
    );
  }

  #[test]
  fn test_project_preview_fallbacks() {
    let mut project = Project {
      id: 1,
      title: "P".into(),
      context: String::new(),
      challenge: None,
      solution: None,
      tags: Vec::new(),
      media: vec![model(None), video("https://youtu.be/dQw4w9WgXcQ", None)],
    };
    assert_eq!(project_preview(&project), "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg");

    project.media.push(model(Some("m.jpg")));
    assert_eq!(project_preview(&project), "m.jpg");

    project.media.push(MediaItem::Image { src: "i.jpg".into(), thumb: None, alt: None, caption: None });
    assert_eq!(project_preview(&project), "i.jpg");

    project.media.clear();
    assert_eq!(project_preview(&project), PLACEHOLDER_IMAGE);
  }

  #[test]
  fn test_strip_thumbnails() {
    assert_eq!(strip_thumbnail(&model(None)), None);
    assert_eq!(strip_thumbnail(&model(Some("m.jpg"))).as_deref(), Some("m.jpg"));
    assert_eq!(
      strip_thumbnail(&video("https://cdn.example.com/a.mp4", None)).as_deref(),
      Some(PLACEHOLDER_IMAGE)
    );
  }
}
