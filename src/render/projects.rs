use super::{escape, expandable_text};
use crate::carousel::CarouselState;
use crate::content::{Category, MediaItem, Project};
use crate::gate::{self, Preview, Stage};
use crate::model::PresentationOptions;

const TEXT_PREVIEW_CHARS: usize = 250;

/// Everything one projects page (or carousel fragment) is rendered from.
pub struct ProjectsPage<'a> {
  pub category: &'a Category,
  pub project: &'a Project,
  pub state: CarouselState,
  pub viewer: &'a PresentationOptions,
}

pub fn page_href(category: &str, state: &CarouselState) -> String {
  format!("/projects/{}?{}", category, state.to_query().encode())
}

pub fn fragment_href(category: &str, state: &CarouselState) -> String {
  format!("/fragment/carousel/{}?{}", category, state.to_query().encode())
}

/// Anchor that works as a plain link and lets the carousel script swap in
/// just the fragment.
fn carousel_link(category: &str, state: &CarouselState, class: &str, label: &str, inner: &str) -> String {
  format!(
    r#"<a class="{class}" href="{href}" data-fragment="{fragment}" aria-label="{label}">{inner}</a>"#,
    href = escape(&page_href(category, state)),
    fragment = escape(&fragment_href(category, state)),
    label = escape(label),
  )
}

pub fn projects_view(page: &ProjectsPage<'_>) -> String {
  let category = page.category;
  let description = category
    .description
    .as_deref()
    .map(|d| format!(r#"<p class="muted lead">{}</p>"#, escape(d)))
    .unwrap_or_default();

  format!(
    r#"<section class="section projects">
  <div class="category-header reveal">
    <div class="category-icon">{icon}</div>
    <div>
      <h1>{title}</h1>
      {description}
    </div>
  </div>
  <div class="spotlight reveal">
    <div class="spotlight-media">{carousel}</div>
    <div class="spotlight-details">{details}</div>
  </div>
  {gallery}
</section>"#,
    icon = category.icon.glyph(),
    title = escape(&category.title),
    carousel = carousel_fragment(page),
    details = project_details(page.project),
    gallery = gallery(page),
  )
}

fn project_details(project: &Project) -> String {
  let mut sections = format!(
    r#"<div><h3 class="eyebrow">The Context</h3>{}</div>"#,
    expandable_text(&project.context, TEXT_PREVIEW_CHARS)
  );
  for (heading, text) in [("The Challenge", &project.challenge), ("The Solution", &project.solution)] {
    if let Some(text) = text {
      sections.push_str(&format!(
        r#"<div><h3 class="eyebrow">{heading}</h3>{}</div>"#,
        expandable_text(text, TEXT_PREVIEW_CHARS)
      ));
    }
  }
  if !project.tags.is_empty() {
    let tags: String = project
      .tags
      .iter()
      .map(|t| format!(r#"<span class="tag small">{}</span>"#, escape(t)))
      .collect();
    sections.push_str(&format!(r#"<div><h3 class="eyebrow">Tags</h3><div class="tags">{tags}</div></div>"#));
  }

  format!(
    r#"<span class="pill small">Selected Project</span>
<h2>{}</h2>
<div class="details">{sections}</div>"#,
    escape(&project.title)
  )
}

fn gallery(page: &ProjectsPage<'_>) -> String {
  let key = &page.category.key;
  let mut cards = String::new();
  for project in &page.category.projects {
    let selected = project.id == page.project.id;
    let state = page.state.with(|s| s.select_project(project));
    let badge = if project.has_model() {
      r#"<span class="badge-3d" title="Includes a 3D model">3D</span>"#
    } else {
      ""
    };
    let viewing = if selected { r#"<div class="viewing">Viewing</div>"# } else { "" };
    cards.push_str(&format!(
      r#"<a class="card project-card{selected}" href="{href}">
  <div class="card-image"><img src="{preview}" alt="{title}" loading="lazy">{badge}{viewing}</div>
  <div class="card-body"><h4>{title}</h4><span class="more">View Details &rsaquo;</span></div>
</a>"#,
      selected = if selected { " selected" } else { "" },
      href = escape(&page_href(key, &state)),
      preview = escape(&gate::project_preview(project)),
      title = escape(&project.title),
    ));
  }

  format!(
    r#"<div class="gallery-header"><h3>All Projects</h3><span class="muted">Select a project to view details</span></div>
<div class="grid four">{cards}</div>"#
  )
}

/// The carousel on its own; also served as a fragment for in-place swaps.
pub fn carousel_fragment(page: &ProjectsPage<'_>) -> String {
  let key = &page.category.key;
  let state = &page.state;
  let media = &page.project.media;

  let Some(index) = state.index() else {
    return r#"<div class="carousel empty" id="carousel"><span class="muted">No media available</span></div>"#
      .to_string();
  };

  let item = media.get(index);
  let stage = Stage::resolve(item, state.gate(), page.viewer);

  let prev = carousel_link(key, &state.with(CarouselState::previous), "carousel-nav prev", "Previous", "&lsaquo;");
  let next = carousel_link(key, &state.with(CarouselState::next), "carousel-nav next", "Next", "&rsaquo;");

  let mut strip = String::new();
  for (i, m) in media.iter().enumerate() {
    let class = if i == index { "strip-item current" } else { "strip-item" };
    let inner = match gate::strip_thumbnail(m) {
      Some(src) => format!(r#"<img src="{}" alt="">"#, escape(&src)),
      None => r#"<span class="strip-badge">3D</span>"#.to_string(),
    };
    strip.push_str(&carousel_link(
      key,
      &state.with(|s| {
        s.go_to(i);
      }),
      class,
      &format!("Go to media {}", i + 1),
      &inner,
    ));
  }

  let caption = item
    .and_then(MediaItem::caption)
    .map(|c| format!(r#"<p class="caption">{}</p>"#, escape(c)))
    .unwrap_or_default();
  let kind = item
    .filter(|m| m.needs_activation())
    .map(|m| format!(r#"<span class="kind-badge">{}</span>"#, m.kind_label()))
    .unwrap_or_default();

  format!(
    r#"<div class="carousel" id="carousel" tabindex="0" aria-roledescription="carousel" aria-label="Project media carousel" data-project="{project}" data-index="{index}" data-active="{active}">
  {prev}
  {next}
  <div class="stage">{kind}{stage}</div>
  <span class="counter">{position} / {len}</span>
  {caption}
  <div class="strip">{strip}</div>
</div>"#,
    project = state.project(),
    active = state.gate().is_active(),
    position = index + 1,
    len = state.len(),
    stage = render_stage(key, state, &stage),
  )
}

fn render_stage(key: &str, state: &CarouselState, stage: &Stage) -> String {
  match stage {
    Stage::Empty => r#"<div class="stage-empty"></div>"#.to_string(),
    Stage::Image { src, alt } => format!(
      r#"<img class="stage-image" src="{}" alt="{}" loading="lazy">"#,
      escape(src),
      escape(alt)
    ),
    Stage::Facade(facade) => {
      let preview = match facade.preview.image_url() {
        Some(src) => format!(r#"<img class="facade-preview" src="{}" alt="" loading="lazy">"#, escape(src)),
        None => r#"<div class="facade-preview badge-preview"><span>3D</span></div>"#.to_string(),
      };
      let platform = matches!(facade.preview, Preview::Platform(_));
      let inner = format!(
        r#"{preview}<span class="facade-cta" data-platform="{platform}">{}</span>"#,
        escape(facade.call_to_action)
      );
      carousel_link(key, &state.with(CarouselState::activate), "facade", facade.call_to_action, &inner)
    }
    Stage::Model(config) => {
      let json = serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string());
      let placeholder = match &config.placeholder {
        Some(src) => format!(r#"<img src="{}" alt="Loading" class="blurred">"#, escape(src)),
        None => r#"<div class="progress">0 %</div>"#.to_string(),
      };
      format!(
        r#"<div class="model-stage" data-viewer="{config}">
  <div class="model-placeholder">{placeholder}<span class="muted small">Loading 3D Model...</span></div>
  <button type="button" class="capture" hidden>Capture</button>
</div>"#,
        config = escape(&json),
      )
    }
    Stage::HostedVideo { embed_url } => format!(
      r#"<iframe class="player" src="{}" title="Video player" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#,
      escape(embed_url)
    ),
    Stage::NativeVideo { src } => format!(
      r#"<video class="player" src="{}" controls autoplay playsinline></video>"#,
      escape(src)
    ),
  }
}
