use std::path::Path;
use std::sync::Arc;

use axum::{
  extract::{
    ws::{Message, WebSocket, WebSocketUpgrade},
    rejection::QueryRejection,
    Path as UrlPath, Query, State,
  },
  http::{header, StatusCode},
  response::{Html, IntoResponse, Response},
  routing::{get, post},
  Json, Router,
};
use futures::{sink::SinkExt, stream::StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, RwLock};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::assets;
use crate::carousel::{CarouselQuery, CarouselState};
use crate::content::{Category, Project, Site};
use crate::error::{SiteError, SiteResult};
use crate::model::{Bounds, Framing, PresentationOptions, ViewerConfig, FRAMING_URL};
use crate::render::{self, ProjectsPage, View};

/// Pushed to every live-reload websocket.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SiteEvent {
  ContentReloaded,
  ContentRejected { message: String },
}

#[derive(Clone)]
pub struct AppState {
  site: Arc<RwLock<Arc<Site>>>,
  tx: broadcast::Sender<SiteEvent>,
  viewer: PresentationOptions,
  live_reload: bool,
}

impl AppState {
  pub fn new(site: Site, viewer: PresentationOptions, live_reload: bool) -> Self {
    let (tx, _rx) = broadcast::channel::<SiteEvent>(100);
    AppState {
      site: Arc::new(RwLock::new(Arc::new(site))),
      tx,
      viewer,
      live_reload,
    }
  }

  /// Snapshot of the current content; a request renders from one snapshot
  /// even if a reload lands meanwhile.
  pub async fn site(&self) -> Arc<Site> {
    self.site.read().await.clone()
  }

  pub async fn replace_site(&self, site: Site) {
    *self.site.write().await = Arc::new(site);
  }

  /// Returns the number of connected pages that received the event.
  pub fn publish(&self, event: SiteEvent) -> usize {
    self.tx.send(event).unwrap_or(0)
  }

  pub fn subscribe(&self) -> broadcast::Receiver<SiteEvent> {
    self.tx.subscribe()
  }

  fn page(&self, site: &Site, view: View<'_>, title: &str, body: &str) -> Html<String> {
    Html(render::page(site, view, title, body, self.live_reload))
  }

  fn error_page(&self, site: &Site, err: SiteError) -> Response {
    let status = err.status();
    if status.is_server_error() {
      tracing::error!(error = %err, "request failed");
    } else {
      tracing::debug!(error = %err, "request rejected");
    }
    let body = render::error_view(status.as_u16(), &err.to_string());
    let title = status.canonical_reason().unwrap_or("Error");
    (status, self.page(site, View::Error, title, &body)).into_response()
  }
}

impl SiteError {
  pub fn status(&self) -> StatusCode {
    match self {
      SiteError::NotFound(_) => StatusCode::NOT_FOUND,
      SiteError::BadRequest(_) => StatusCode::BAD_REQUEST,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

#[derive(Serialize)]
struct ErrorBody {
  error: String,
}

impl IntoResponse for SiteError {
  fn into_response(self) -> Response {
    (self.status(), Json(ErrorBody { error: self.to_string() })).into_response()
  }
}

pub fn router(state: AppState, assets_dir: &Path) -> Router {
  Router::new()
    .route("/", get(home))
    .route("/projects/:category", get(projects))
    .route("/fragment/carousel/:category", get(carousel_fragment))
    .route("/contact", get(contact))
    .route("/api/content", get(content))
    .route("/api/viewer", get(viewer_config))
    .route(FRAMING_URL, post(framing))
    .route("/health", get(health))
    .route("/ws", get(websocket_handler))
    .route("/static/:file", get(static_file))
    .nest_service("/assets", ServeDir::new(assets_dir))
    .fallback(fallback)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

async fn home(State(state): State<AppState>) -> Html<String> {
  let site = state.site().await;
  state.page(&site, View::Home, "Home", &render::home_view(&site))
}

async fn contact(State(state): State<AppState>) -> Html<String> {
  let site = state.site().await;
  state.page(&site, View::Contact, "Contact", &render::contact_view(&site.contact))
}

/// Carousel state from the query string. Malformed values (`?media=-1`)
/// are reported like any other bad link instead of axum's plain-text reply.
fn carousel_query(query: Result<Query<CarouselQuery>, QueryRejection>) -> SiteResult<CarouselQuery> {
  query
    .map(|Query(query)| query)
    .map_err(|rejection| SiteError::BadRequest(rejection.body_text()))
}

/// Category and project a carousel request points at. Without a project id
/// the category's first project is shown.
fn selection<'a>(site: &'a Site, key: &str, query: &CarouselQuery) -> SiteResult<(&'a Category, &'a Project)> {
  let category = site
    .category(key)
    .ok_or_else(|| SiteError::not_found(format!("no project category {key:?}")))?;
  let project = match query.project {
    Some(id) => category
      .project(id)
      .ok_or_else(|| SiteError::not_found(format!("no project {id} in {key:?}")))?,
    None => category
      .first_project()
      .ok_or_else(|| SiteError::not_found(format!("{key:?} has no projects yet")))?,
  };
  Ok((category, project))
}

async fn projects(
  State(state): State<AppState>,
  UrlPath(key): UrlPath<String>,
  query: Result<Query<CarouselQuery>, QueryRejection>,
) -> Response {
  let site = state.site().await;
  let found = carousel_query(query).and_then(|query| {
    let (category, project) = selection(&site, &key, &query)?;
    Ok((category, project, query))
  });
  let (category, project, query) = match found {
    Ok(found) => found,
    Err(err) => return state.error_page(&site, err),
  };

  let page = ProjectsPage {
    category,
    project,
    state: CarouselState::from_query(project, &query),
    viewer: &state.viewer,
  };
  let body = render::projects_view(&page);
  state
    .page(&site, View::Projects(&category.key), &category.title, &body)
    .into_response()
}

async fn carousel_fragment(
  State(state): State<AppState>,
  UrlPath(key): UrlPath<String>,
  query: Result<Query<CarouselQuery>, QueryRejection>,
) -> Result<Html<String>, SiteError> {
  let query = carousel_query(query)?;
  let site = state.site().await;
  let (category, project) = selection(&site, &key, &query)?;
  let page = ProjectsPage {
    category,
    project,
    state: CarouselState::from_query(project, &query),
    viewer: &state.viewer,
  };
  Ok(Html(render::carousel_fragment(&page)))
}

async fn content(State(state): State<AppState>) -> Json<Site> {
  Json(state.site().await.as_ref().clone())
}

#[derive(Deserialize)]
struct ViewerQuery {
  url: String,
}

async fn viewer_config(State(state): State<AppState>, Query(query): Query<ViewerQuery>) -> Json<ViewerConfig> {
  Json(ViewerConfig::new(&query.url, None, &state.viewer))
}

/// Presentation transform for bounds the viewer measured after loading.
async fn framing(State(state): State<AppState>, Json(bounds): Json<Bounds>) -> Json<Framing> {
  Json(Framing::compute(&bounds, &state.viewer))
}

#[derive(Serialize)]
struct Health {
  status: &'static str,
  version: &'static str,
}

async fn health() -> Json<Health> {
  Json(Health { status: "ok", version: env!("CARGO_PKG_VERSION") })
}

async fn static_file(UrlPath(file): UrlPath<String>) -> Result<Response, SiteError> {
  let (content_type, body) =
    assets::lookup(&file).ok_or_else(|| SiteError::not_found(format!("static file {file:?}")))?;
  Ok(([(header::CONTENT_TYPE, content_type)], body).into_response())
}

async fn fallback(State(state): State<AppState>) -> Response {
  let site = state.site().await;
  state.error_page(&site, SiteError::not_found("that page does not exist"))
}

async fn websocket_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
  ws.on_upgrade(move |socket| handle_socket(socket, state.subscribe()))
}

async fn handle_socket(socket: WebSocket, mut rx: broadcast::Receiver<SiteEvent>) {
  let (mut sender, mut receiver) = socket.split();
  tracing::debug!("live reload client connected");

  // Forward content events to the page
  let mut send_task = tokio::spawn(async move {
    loop {
      let event = match rx.recv().await {
        Ok(event) => event,
        Err(broadcast::error::RecvError::Lagged(skipped)) => {
          tracing::warn!(skipped, "live reload client lagged");
          continue;
        }
        Err(broadcast::error::RecvError::Closed) => break,
      };
      let json = match serde_json::to_string(&event) {
        Ok(json) => json,
        Err(e) => {
          tracing::error!(error = %e, "failed to encode site event");
          continue;
        }
      };
      if sender.send(Message::Text(json)).await.is_err() {
        break;
      }
    }
  });

  // Drain incoming frames until the page goes away
  let mut recv_task = tokio::spawn(async move { while let Some(Ok(_msg)) = receiver.next().await {} });

  // Either side finishing ends the connection; the receiver is dropped with
  // the send task.
  tokio::select! {
    _ = (&mut send_task) => recv_task.abort(),
    _ = (&mut recv_task) => send_task.abort(),
  };
  tracing::debug!("live reload client disconnected");
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::content::tests::SAMPLE;

  fn sample() -> Site {
    Site::from_json_str(SAMPLE).unwrap()
  }

  #[test]
  fn test_selection_defaults_to_first_project() {
    let site = sample();
    let (category, project) = selection(&site, "modeling", &CarouselQuery::default()).unwrap();
    assert_eq!(category.key, "modeling");
    assert_eq!(project.id, 1);
  }

  #[test]
  fn test_selection_not_found() {
    let site = sample();
    let err = selection(&site, "painting", &CarouselQuery::default()).unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);

    let query = CarouselQuery { project: Some(99), ..CarouselQuery::default() };
    let err = selection(&site, "modeling", &query).unwrap_err();
    assert!(err.to_string().contains("no project 99"));
  }

  #[test]
  fn test_event_wire_format() {
    assert_eq!(serde_json::to_string(&SiteEvent::ContentReloaded).unwrap(), r#"{"type":"content_reloaded"}"#);
    let rejected = SiteEvent::ContentRejected { message: "bad".into() };
    assert_eq!(serde_json::to_string(&rejected).unwrap(), r#"{"type":"content_rejected","message":"bad"}"#);
  }

  #[tokio::test]
  async fn test_replace_site_keeps_old_snapshots() {
    let state = AppState::new(sample(), PresentationOptions::default(), false);
    let before = state.site().await;

    let mut next = sample();
    next.profile.name = "Replaced".into();
    state.replace_site(next).await;

    assert_eq!(before.profile.name, "Test Engineer");
    assert_eq!(state.site().await.profile.name, "Replaced");
  }

  #[tokio::test]
  async fn test_publish_reaches_subscribers() {
    let state = AppState::new(sample(), PresentationOptions::default(), true);
    assert_eq!(state.publish(SiteEvent::ContentReloaded), 0);

    let mut rx = state.subscribe();
    assert_eq!(state.publish(SiteEvent::ContentReloaded), 1);
    assert_eq!(rx.recv().await.unwrap(), SiteEvent::ContentReloaded);
  }
}
