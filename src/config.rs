use std::path::PathBuf;

use clap::Parser;

use crate::model::PresentationOptions;

/// Portfolio - engineering portfolio with an in-browser 3D model viewer
#[derive(Parser, Debug, Clone)]
#[command(name = "portfolio")]
#[command(version, about, long_about = None)]
pub struct Cli {
  /// Server port
  #[arg(short, long, env = "PORTFOLIO_PORT", default_value = "8080")]
  pub port: u16,

  /// Bind address
  #[arg(long, env = "PORTFOLIO_HOST", default_value = "127.0.0.1")]
  pub host: String,

  /// Content file (JSON); the bundled content is used when omitted
  #[arg(short, long, env = "PORTFOLIO_CONTENT")]
  pub content: Option<PathBuf>,

  /// Directory served under /assets (profile photo, local media)
  #[arg(short, long, env = "PORTFOLIO_ASSETS", default_value = "assets")]
  pub assets_dir: PathBuf,

  /// Reload the content file on change and refresh open pages
  #[arg(short, long)]
  pub watch: bool,

  /// Auto-open browser on startup
  #[arg(short, long)]
  pub open: bool,

  /// Log filter used when RUST_LOG is not set
  #[arg(long, env = "PORTFOLIO_LOG", default_value = "info")]
  pub log_level: String,

  /// Idle rotation speed of 3D models, in radians per second
  #[arg(long, default_value_t = 0.1)]
  pub auto_rotate_speed: f32,

  /// Disable idle rotation of 3D models
  #[arg(long)]
  pub no_auto_rotate: bool,

  /// Show 3D models at full opacity as soon as they load
  #[arg(long)]
  pub no_fade_in: bool,

  /// Keep 3D models at their native scale
  #[arg(long)]
  pub no_auto_frame: bool,

  /// Show model viewer controls help
  #[arg(long)]
  pub help_keys: bool,

  /// Show available settings
  #[arg(long)]
  pub help_settings: bool,
}

impl Cli {
  pub fn addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }

  pub fn presentation(&self) -> PresentationOptions {
    PresentationOptions {
      auto_frame: !self.no_auto_frame,
      fade_in: !self.no_fade_in,
      auto_rotate: !self.no_auto_rotate,
      auto_rotate_speed: self.auto_rotate_speed,
      ..PresentationOptions::default()
    }
  }

  /// Live reload needs a file to watch.
  pub fn watch_path(&self) -> Option<&PathBuf> {
    self.content.as_ref().filter(|_| self.watch)
  }
}

pub fn print_keyboard_help() {
  println!("Portfolio - Viewer Controls\n");
  println!("Carousel (when focused):");
  println!("  Left arrow       Previous media item");
  println!("  Right arrow      Next media item");
  println!("  Click preview    Load the 3D model or start the video");
  println!();
  println!("3D model:");
  println!("  Mouse drag       Rotate camera");
  println!("  Mouse wheel      Zoom in/out");
  println!("  Capture button   Download a PNG of the current view");
  println!();
}

pub fn print_settings_help() {
  println!("Portfolio - Available Settings\n");
  println!("Basic Options:");
  println!("  -p, --port <PORT>            Server port (default: 8080)");
  println!("      --host <HOST>            Bind address (default: 127.0.0.1)");
  println!("  -c, --content <FILE>         Content JSON (default: bundled content)");
  println!("  -a, --assets-dir <PATH>      Directory served under /assets (default: assets)");
  println!("  -w, --watch                  Reload content on change (needs --content)");
  println!("  -o, --open                   Auto-open browser on startup");
  println!("      --log-level <FILTER>     Log filter when RUST_LOG is unset (default: info)");
  println!();
  println!("3D Viewer:");
  println!("      --auto-rotate-speed <R>  Idle rotation in rad/s (default: 0.1)");
  println!("      --no-auto-rotate         Disable idle rotation");
  println!("      --no-fade-in             Skip the fade-in after loading");
  println!("      --no-auto-frame          Keep models at native scale");
  println!();
  println!("Environment:");
  println!("  PORTFOLIO_PORT, PORTFOLIO_HOST, PORTFOLIO_CONTENT, PORTFOLIO_ASSETS, PORTFOLIO_LOG");
  println!();
  println!("Help:");
  println!("  -h, --help                   Show this help message");
  println!("  -V, --version                Show version");
  println!("      --help-keys              Show viewer controls");
  println!("      --help-settings          Show this settings help");
  println!();
}
