//! Media carousel state: which media item of a project is showing and
//! whether its heavy asset has been activated.
//!
//! The server is stateless, so a carousel's state travels in the request
//! query (`project`, `media`, `active`). Every link the page offers is built
//! by applying one operation to a copy of the current state and encoding the
//! result, which keeps the reset rules in one place.

use serde::Deserialize;

use crate::content::Project;
use crate::gate::ActivationGate;

/// Circular index over a non-empty media list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaSelector {
  index: usize,
  len: usize,
}

impl MediaSelector {
  /// Returns `None` for an empty list. An out-of-range `initial` is ignored
  /// the same way [`MediaSelector::go_to`] ignores it.
  pub fn new(len: usize, initial: usize) -> Option<Self> {
    if len == 0 {
      return None;
    }
    let mut selector = MediaSelector { index: 0, len };
    selector.go_to(initial);
    Some(selector)
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn next(&mut self) {
    self.index = (self.index + 1) % self.len;
  }

  pub fn previous(&mut self) {
    self.index = (self.index + self.len - 1) % self.len;
  }

  /// Returns false (and leaves the index alone) when `i` is out of bounds.
  pub fn go_to(&mut self, i: usize) -> bool {
    if i >= self.len {
      return false;
    }
    self.index = i;
    true
  }
}

/// Query parameters carrying a carousel's state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CarouselQuery {
  #[serde(default)]
  pub project: Option<u32>,
  #[serde(default)]
  pub media: Option<usize>,
  #[serde(default)]
  pub active: bool,
}

impl CarouselQuery {
  pub fn encode(&self) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(project) = self.project {
      query.append_pair("project", &project.to_string());
    }
    if let Some(media) = self.media {
      query.append_pair("media", &media.to_string());
    }
    if self.active {
      query.append_pair("active", "true");
    }
    query.finish()
  }
}

/// Selection state of one carousel instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
  project: u32,
  selector: Option<MediaSelector>,
  gate: ActivationGate,
}

impl CarouselState {
  pub fn new(project: u32, media_len: usize, initial: usize) -> Self {
    CarouselState {
      project,
      selector: MediaSelector::new(media_len, initial),
      gate: ActivationGate::new(),
    }
  }

  /// Rebuilds the state a link encoded. Activation is only honoured for
  /// items that sit behind a facade.
  pub fn from_query(project: &Project, query: &CarouselQuery) -> Self {
    let mut state = CarouselState::new(project.id, project.media.len(), query.media.unwrap_or(0));
    if query.active {
      if let Some(item) = state.index().and_then(|i| project.media.get(i)) {
        if item.needs_activation() {
          state.activate();
        }
      }
    }
    state
  }

  pub fn to_query(&self) -> CarouselQuery {
    CarouselQuery {
      project: Some(self.project),
      media: self.index(),
      active: self.gate.is_active(),
    }
  }

  pub fn project(&self) -> u32 {
    self.project
  }

  /// `None` when the project has no media.
  pub fn index(&self) -> Option<usize> {
    self.selector.map(|s| s.index())
  }

  pub fn len(&self) -> usize {
    self.selector.map_or(0, |s| s.len())
  }

  pub fn gate(&self) -> ActivationGate {
    self.gate
  }

  pub fn next(&mut self) {
    if let Some(selector) = self.selector.as_mut() {
      selector.next();
      self.gate = ActivationGate::new();
    }
  }

  pub fn previous(&mut self) {
    if let Some(selector) = self.selector.as_mut() {
      selector.previous();
      self.gate = ActivationGate::new();
    }
  }

  pub fn go_to(&mut self, i: usize) -> bool {
    let moved = self.selector.as_mut().map_or(false, |s| s.go_to(i));
    if moved {
      self.gate = ActivationGate::new();
    }
    moved
  }

  pub fn activate(&mut self) {
    if self.selector.is_some() {
      self.gate.activate();
    }
  }

  /// Switching projects starts over at the first item with a fresh gate.
  pub fn select_project(&mut self, project: &Project) {
    *self = CarouselState::new(project.id, project.media.len(), 0);
  }

  /// Copy of the state with `op` applied, for building links.
  pub fn with(&self, op: impl FnOnce(&mut CarouselState)) -> CarouselState {
    let mut next = self.clone();
    op(&mut next);
    next
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::content::MediaItem;

  fn project(id: u32, media: Vec<MediaItem>) -> Project {
    Project {
      id,
      title: format!("Project {id}"),
      context: String::new(),
      challenge: None,
      solution: None,
      tags: Vec::new(),
      media,
    }
  }

  fn image() -> MediaItem {
    MediaItem::Image { src: "a.jpg".into(), thumb: None, alt: None, caption: None }
  }

  fn model() -> MediaItem {
    MediaItem::Model { url: "m.glb".into(), thumb: None, caption: None }
  }

  fn video() -> MediaItem {
    MediaItem::Video { url: "https://youtu.be/dQw4w9WgXcQ".into(), thumb: None, caption: None }
  }

  #[test]
  fn test_next_wraps_back_to_start() {
    for len in 1..6 {
      for start in 0..len {
        let mut selector = MediaSelector::new(len, start).unwrap();
        for _ in 0..len {
          selector.next();
        }
        assert_eq!(selector.index(), start, "len {len} start {start}");
      }
    }
  }

  #[test]
  fn test_previous_wraps_from_first_to_last() {
    let mut selector = MediaSelector::new(3, 0).unwrap();
    selector.previous();
    assert_eq!(selector.index(), 2);
    selector.previous();
    assert_eq!(selector.index(), 1);
  }

  #[test]
  fn test_go_to_out_of_bounds_is_noop() {
    let mut selector = MediaSelector::new(3, 1).unwrap();
    assert!(!selector.go_to(3));
    assert!(!selector.go_to(usize::MAX));
    assert_eq!(selector.index(), 1);
    assert!(selector.go_to(2));
    assert_eq!(selector.index(), 2);
  }

  #[test]
  fn test_empty_list_has_no_selector() {
    assert!(MediaSelector::new(0, 0).is_none());
    let mut state = CarouselState::new(1, 0, 0);
    state.next();
    state.activate();
    assert_eq!(state.len(), 0);
    assert_eq!(state.index(), None);
    assert!(!state.gate().is_active());
  }

  #[test]
  fn test_initial_index_out_of_range_starts_at_zero() {
    let state = CarouselState::new(1, 2, 7);
    assert_eq!(state.index(), Some(0));
  }

  #[test]
  fn test_navigation_resets_gate() {
    let mut state = CarouselState::new(1, 3, 1);

    state.activate();
    state.next();
    assert!(!state.gate().is_active());

    state.activate();
    state.previous();
    assert!(!state.gate().is_active());

    state.activate();
    assert!(state.go_to(2));
    assert!(!state.gate().is_active());

    state.activate();
    state.previous();
    assert_eq!(state.index(), Some(1));
    assert!(!state.gate().is_active());
  }

  #[test]
  fn test_rejected_go_to_keeps_activation() {
    let mut state = CarouselState::new(1, 3, 1);
    state.activate();
    assert!(!state.go_to(9));
    assert!(state.gate().is_active());
    assert_eq!(state.index(), Some(1));
  }

  #[test]
  fn test_select_project_resets_index_and_gate() {
    let first = project(1, vec![image(), model(), video()]);
    let second = project(2, vec![model(), image()]);

    let mut state = CarouselState::new(first.id, first.media.len(), 2);
    state.activate();
    state.select_project(&second);

    assert_eq!(state.project(), 2);
    assert_eq!(state.index(), Some(0));
    assert_eq!(state.len(), 2);
    assert!(!state.gate().is_active());
  }

  #[test]
  fn test_query_round_trip_through_links() {
    let p = project(4, vec![image(), model(), video()]);
    let state = CarouselState::from_query(&p, &CarouselQuery { project: Some(4), media: Some(1), active: true });
    assert_eq!(state.index(), Some(1));
    assert!(state.gate().is_active());
    assert_eq!(state.to_query().encode(), "project=4&media=1&active=true");

    let next = state.with(CarouselState::next);
    assert_eq!(next.to_query().encode(), "project=4&media=2");
  }

  #[test]
  fn test_activation_ignored_for_images() {
    let p = project(1, vec![image(), model()]);
    let state = CarouselState::from_query(&p, &CarouselQuery { project: Some(1), media: Some(0), active: true });
    assert!(!state.gate().is_active());
  }

  #[test]
  fn test_image_model_video_walkthrough() {
    let p = project(1, vec![image(), model(), video()]);
    let mut state = CarouselState::from_query(&p, &CarouselQuery::default());
    assert_eq!(state.index(), Some(0));

    state.next();
    state.next();
    assert_eq!(state.index(), Some(2));
    assert!(matches!(p.media[2], MediaItem::Video { .. }));
    assert!(!state.gate().is_active());

    state.activate();
    assert!(state.gate().is_active());

    state.previous();
    assert_eq!(state.index(), Some(1));
    assert!(matches!(p.media[1], MediaItem::Model { .. }));
    assert!(!state.gate().is_active());
  }
}
