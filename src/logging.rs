use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::Cli;

/// Initialize the tracing subscriber. `RUST_LOG` wins over `--log-level`.
pub fn init(cli: &Cli) -> Result<()> {
  let env_filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(&cli.log_level))?;

  Registry::default()
    .with(env_filter)
    .with(fmt::layer().with_target(true))
    .try_init()?;

  tracing::info!(version = env!("CARGO_PKG_VERSION"), "portfolio starting");
  Ok(())
}

/// Log the effective configuration.
pub fn log_config(cli: &Cli) {
  tracing::info!(
    addr = %cli.addr(),
    content = ?cli.content,
    assets_dir = ?cli.assets_dir,
    watch = cli.watch_path().is_some(),
    auto_rotate = !cli.no_auto_rotate,
    auto_rotate_speed = cli.auto_rotate_speed,
    "configuration loaded"
  );
}
