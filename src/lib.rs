//! Engineering portfolio site: resume views, project media carousels with
//! lazily activated videos and 3D models, and an embedded three.js viewer.

pub mod assets;
pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod gate;
pub mod logging;
pub mod model;
pub mod render;
pub mod server;
pub mod video;
pub mod watch;
