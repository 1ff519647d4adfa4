use anyhow::{Context, Result};
use clap::Parser;

use portfolio::config::{self, Cli};
use portfolio::content::Site;
use portfolio::server::{self, AppState};
use portfolio::{logging, watch};

#[tokio::main]
async fn main() -> Result<()> {
  // Parse CLI arguments
  let cli = Cli::parse();

  // Handle help flags
  if cli.help_keys {
    config::print_keyboard_help();
    return Ok(());
  }

  if cli.help_settings {
    config::print_settings_help();
    return Ok(());
  }

  logging::init(&cli)?;
  logging::log_config(&cli);

  let site = match &cli.content {
    Some(path) => {
      Site::load(path).with_context(|| format!("failed to load content from {}", path.display()))?
    }
    None => Site::bundled().context("bundled content is invalid")?,
  };
  tracing::info!(
    categories = site.categories.len(),
    projects = site.categories.iter().map(|c| c.projects.len()).sum::<usize>(),
    "content loaded"
  );

  let state = AppState::new(site, cli.presentation(), cli.watch_path().is_some());

  // Watcher task holds the notify handle for the life of the server
  let _watcher = match cli.watch_path() {
    Some(path) => Some(watch::spawn(path.clone(), state.clone()).context("failed to start file watcher")?),
    None => {
      if cli.watch {
        tracing::warn!("--watch needs --content; live reload disabled");
      }
      None
    }
  };

  let app = server::router(state, &cli.assets_dir);

  let addr = cli.addr();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .with_context(|| format!("failed to bind {addr}"))?;

  let url = format!("http://{addr}");
  tracing::info!(%url, "portfolio running");

  if cli.open {
    tracing::info!("opening browser");
    if let Err(e) = open::that(&url) {
      tracing::warn!(error = %e, "could not open browser");
    }
  }

  axum::serve(listener, app).await.context("server error")?;
  Ok(())
}
