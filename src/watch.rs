//! Content file watcher for live reload.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Event, EventKind, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::content::Site;
use crate::error::{SiteError, SiteResult};
use crate::server::{AppState, SiteEvent};

const DEBOUNCE: Duration = Duration::from_millis(100);

/// Waits until no event has arrived for `window`. Returns false when the
/// channel closed meanwhile.
async fn settle<T>(rx: &mut mpsc::Receiver<T>, window: Duration) -> bool {
  loop {
    tokio::select! {
      next = rx.recv() => {
        if next.is_none() {
          return false;
        }
      }
      _ = tokio::time::sleep(window) => return true,
    }
  }
}

/// Loads the content file and swaps it in. A file that fails to load leaves
/// the current content in place and is reported to open pages.
pub async fn reload(path: &Path, state: &AppState) -> SiteResult<()> {
  match Site::load(path) {
    Ok(site) => {
      let categories = site.categories.len();
      state.replace_site(site).await;
      let pages = state.publish(SiteEvent::ContentReloaded);
      tracing::info!(path = %path.display(), categories, pages, "content reloaded");
      Ok(())
    }
    Err(err) => {
      tracing::warn!(path = %path.display(), error = %err, "content change rejected");
      state.publish(SiteEvent::ContentRejected { message: err.to_string() });
      Err(err)
    }
  }
}

/// Editors often replace files by rename, so the parent directory is watched
/// and events are filtered by file name.
fn watch_target(path: &Path) -> SiteResult<(PathBuf, OsString)> {
  let file_name = path
    .file_name()
    .map(OsString::from)
    .ok_or_else(|| SiteError::Invalid(format!("{} is not a file path", path.display())))?;
  let dir = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
    _ => PathBuf::from("."),
  };
  Ok((dir, file_name))
}

fn is_change(kind: &EventKind) -> bool {
  matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

/// Starts watching `path`. The watcher lives as long as the returned task.
pub fn spawn(path: PathBuf, state: AppState) -> SiteResult<JoinHandle<()>> {
  let (dir, file_name) = watch_target(&path)?;
  let (watch_tx, mut watch_rx) = mpsc::channel(100);

  let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| match res {
    Ok(event) => {
      let _ = watch_tx.blocking_send(event);
    }
    Err(e) => tracing::warn!(error = %e, "file watcher error"),
  })?;
  watcher.watch(&dir, RecursiveMode::NonRecursive)?;

  tracing::info!(path = %path.display(), "file watcher started");

  Ok(tokio::spawn(async move {
    while let Some(event) = watch_rx.recv().await {
      let ours = event.paths.iter().any(|p| p.file_name() == Some(file_name.as_os_str()));
      if !ours || !is_change(&event.kind) {
        continue;
      }

      // A save is often truncate then write; load once the burst is over
      let open = settle(&mut watch_rx, DEBOUNCE).await;
      if path.exists() {
        tracing::debug!(path = %path.display(), "content file changed");
        let _ = reload(&path, &state).await;
      }
      if !open {
        break;
      }
    }

    // Keep watcher alive
    drop(watcher);
  }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::content::tests::SAMPLE;
  use crate::model::PresentationOptions;
  use std::fs;
  use std::io::Write;

  fn state() -> AppState {
    AppState::new(Site::from_json_str(SAMPLE).unwrap(), PresentationOptions::default(), true)
  }

  #[tokio::test]
  async fn test_settle_waits_for_quiet() {
    let (tx, mut rx) = mpsc::channel(8);
    let sender = tokio::spawn(async move {
      for _ in 0..3 {
        tx.send(()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
      }
      tokio::time::sleep(Duration::from_millis(300)).await;
      drop(tx);
    });

    let started = std::time::Instant::now();
    assert!(settle(&mut rx, DEBOUNCE).await);
    assert!(started.elapsed() >= Duration::from_millis(140));

    assert!(!settle(&mut rx, Duration::from_secs(5)).await);
    sender.await.unwrap();
  }

  #[test]
  fn test_watch_target() {
    let (dir, name) = watch_target(Path::new("content/site.json")).unwrap();
    assert_eq!(dir, PathBuf::from("content"));
    assert_eq!(name, OsString::from("site.json"));

    let (dir, _) = watch_target(Path::new("site.json")).unwrap();
    assert_eq!(dir, PathBuf::from("."));
  }

  #[tokio::test]
  async fn test_reload_swaps_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.json");
    fs::write(&path, SAMPLE.replace("Test Engineer", "Reloaded Engineer")).unwrap();

    let state = state();
    let mut rx = state.subscribe();
    reload(&path, &state).await.unwrap();

    assert_eq!(state.site().await.profile.name, "Reloaded Engineer");
    assert_eq!(rx.recv().await.unwrap(), SiteEvent::ContentReloaded);
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
  async fn test_truncate_then_write_loads_the_edit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.json");
    fs::write(&path, SAMPLE).unwrap();

    let state = state();
    let mut rx = state.subscribe();
    let task = spawn(path.clone(), state.clone()).unwrap();

    {
      let mut file = fs::OpenOptions::new().write(true).truncate(true).open(&path).unwrap();
      tokio::time::sleep(Duration::from_millis(5)).await;
      file.write_all(SAMPLE.replace("Test Engineer", "Edited Engineer").as_bytes()).unwrap();
    }

    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap().unwrap();
    assert_eq!(event, SiteEvent::ContentReloaded);
    assert_eq!(state.site().await.profile.name, "Edited Engineer");
    task.abort();
  }

  #[tokio::test]
  async fn test_invalid_reload_keeps_current_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.json");
    fs::write(&path, "{ not json").unwrap();

    let state = state();
    let mut rx = state.subscribe();
    let err = reload(&path, &state).await.unwrap_err();

    assert!(matches!(err, SiteError::Parse(_)));
    assert_eq!(state.site().await.profile.name, "Test Engineer");
    assert!(matches!(rx.recv().await.unwrap(), SiteEvent::ContentRejected { .. }));
  }
}
