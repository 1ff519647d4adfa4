//! Model presentation: loader dispatch, framing and viewer settings.
//!
//! The browser viewer (`assets::MODEL_VIEWER_JS`) is started with a
//! [`ViewerConfig`] and asks `/api/framing` for the [`Framing`] of each
//! loaded model, so every number it presents with comes from here.

use std::time::Duration;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use url::Url;

/// Largest dimension of an auto-framed model, in scene units.
pub const TARGET_SIZE: f32 = 3.0;
pub const FADE_IN_DURATION: Duration = Duration::from_millis(400);
/// Where the viewer posts measured [`Bounds`] to get a [`Framing`] back.
pub const FRAMING_URL: &str = "/api/framing";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
  Glb,
  Gltf,
  Fbx,
  Obj,
  Ply,
  Stl,
}

/// Loader a format is handed to. Binary and JSON glTF share one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderKind {
  Gltf,
  Fbx,
  Obj,
  Ply,
  Stl,
}

impl ModelFormat {
  pub fn from_extension(ext: &str) -> Option<Self> {
    match ext.to_ascii_lowercase().as_str() {
      "glb" => Some(ModelFormat::Glb),
      "gltf" => Some(ModelFormat::Gltf),
      "fbx" => Some(ModelFormat::Fbx),
      "obj" => Some(ModelFormat::Obj),
      "ply" => Some(ModelFormat::Ply),
      "stl" => Some(ModelFormat::Stl),
      _ => None,
    }
  }

  pub fn loader(self) -> LoaderKind {
    match self {
      ModelFormat::Glb | ModelFormat::Gltf => LoaderKind::Gltf,
      ModelFormat::Fbx => LoaderKind::Fbx,
      ModelFormat::Obj => LoaderKind::Obj,
      ModelFormat::Ply => LoaderKind::Ply,
      ModelFormat::Stl => LoaderKind::Stl,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ModelSource {
  Supported {
    url: String,
    format: ModelFormat,
    loader: LoaderKind,
  },
  Unsupported {
    url: String,
    extension: Option<String>,
  },
}

impl ModelSource {
  pub fn from_url(raw: &str) -> Self {
    let url = raw.trim().to_string();
    let extension = path_extension(&url);
    match extension.as_deref().and_then(ModelFormat::from_extension) {
      Some(format) => ModelSource::Supported { url, format, loader: format.loader() },
      None => ModelSource::Unsupported { url, extension },
    }
  }

}

/// Lowercased extension of the URL's path, ignoring query and fragment.
fn path_extension(raw: &str) -> Option<String> {
  let path = match Url::parse(raw) {
    Ok(url) => url.path().to_string(),
    Err(_) => raw.split(['?', '#']).next().unwrap_or_default().to_string(),
  };
  let file = path.rsplit('/').next()?;
  let (stem, ext) = file.rsplit_once('.')?;
  if stem.is_empty() || ext.is_empty() {
    return None;
  }
  Some(ext.to_ascii_lowercase())
}

/// Axis-aligned bounds the viewer measured on loaded geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
  pub min: Vec3,
  pub max: Vec3,
}

impl Bounds {
  pub fn size(&self) -> Vec3 {
    self.max - self.min
  }

  pub fn center(&self) -> Vec3 {
    (self.min + self.max) * 0.5
  }

  pub fn max_dimension(&self) -> f32 {
    self.size().max_element()
  }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PresentationOptions {
  pub auto_frame: bool,
  pub target_size: f32,
  /// Initial pitch in degrees.
  pub pitch: f32,
  /// Initial yaw in degrees.
  pub yaw: f32,
  pub fade_in: bool,
  pub auto_rotate: bool,
  /// Radians per second.
  pub auto_rotate_speed: f32,
}

impl Default for PresentationOptions {
  fn default() -> Self {
    PresentationOptions {
      auto_frame: true,
      target_size: TARGET_SIZE,
      pitch: 20.0,
      yaw: -20.0,
      fade_in: true,
      auto_rotate: true,
      auto_rotate_speed: 0.1,
    }
  }
}

impl PresentationOptions {
  /// `XYZ` Euler angles in radians: pitch about X, yaw about Y.
  pub fn rotation(&self) -> [f32; 3] {
    [self.pitch.to_radians(), self.yaw.to_radians(), 0.0]
  }
}

/// Presentation transform of a loaded model, p' = R(s·(p − c)). The viewer
/// puts the geometry in a pivot group at `position` and `scale`, inside a
/// turntable group at `rotation`. The source geometry is never modified.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Framing {
  /// Pivot offset, −c·s.
  pub position: Vec3,
  pub scale: f32,
  /// `XYZ` Euler angles in radians.
  pub rotation: [f32; 3],
}

impl Framing {
  pub fn compute(bounds: &Bounds, options: &PresentationOptions) -> Self {
    let max_dim = bounds.max_dimension();
    // Degenerate and unmeasurable boxes keep their native scale
    let scale = if options.auto_frame && max_dim > 0.0 && max_dim.is_finite() {
      options.target_size / max_dim
    } else {
      1.0
    };
    let center = bounds.center();
    Framing {
      position: if center.is_finite() { -center * scale } else { Vec3::ZERO },
      scale,
      rotation: options.rotation(),
    }
  }
}

/// Light rig of the viewer. The environment map stands in for a studio
/// preset; the contact shadow is a shadow-catching floor under the model.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LightingSettings {
  pub ambient: f32,
  pub key: f32,
  pub fill: f32,
  pub environment: bool,
  pub contact_shadow: Option<ContactShadow>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ContactShadow {
  /// Floor height in scene units.
  pub y: f32,
  pub opacity: f32,
  /// Floor edge length.
  pub size: f32,
  pub blur: f32,
}

impl Default for LightingSettings {
  fn default() -> Self {
    LightingSettings {
      ambient: 0.5,
      key: 1.0,
      fill: 0.5,
      environment: true,
      contact_shadow: Some(ContactShadow { y: -1.5, opacity: 0.4, size: 10.0, blur: 2.5 }),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CameraSettings {
  /// Vertical field of view in degrees.
  pub fov: f32,
  pub distance: f32,
  pub min_distance: f32,
  pub max_distance: f32,
}

impl Default for CameraSettings {
  fn default() -> Self {
    CameraSettings { fov: 45.0, distance: 3.0, min_distance: 1.0, max_distance: 20.0 }
  }
}

/// Everything the browser viewer needs to mount one model.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewerConfig {
  pub source: ModelSource,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub placeholder: Option<String>,
  pub options: PresentationOptions,
  pub fade_in_ms: u64,
  pub camera: CameraSettings,
  pub lighting: LightingSettings,
  pub framing_url: &'static str,
}

impl ViewerConfig {
  pub fn new(url: &str, placeholder: Option<&str>, options: &PresentationOptions) -> Self {
    ViewerConfig {
      source: ModelSource::from_url(url),
      placeholder: placeholder.map(str::to_owned),
      options: options.clone(),
      fade_in_ms: FADE_IN_DURATION.as_millis() as u64,
      camera: CameraSettings::default(),
      lighting: LightingSettings::default(),
      framing_url: FRAMING_URL,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use glam::{EulerRot, Quat};

  const EPS: f32 = 1e-5;

  fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
  }

  fn unrotated() -> PresentationOptions {
    PresentationOptions { pitch: 0.0, yaw: 0.0, ..PresentationOptions::default() }
  }

  fn aabb(min: Vec3, max: Vec3) -> Bounds {
    Bounds { min, max }
  }

  /// three.js applies `rotation` as Euler XYZ.
  fn orientation(framing: &Framing) -> Quat {
    let [x, y, z] = framing.rotation;
    Quat::from_euler(EulerRot::XYZ, x, y, z)
  }

  /// Where the viewer ends up drawing model-space point `p`.
  fn apply(framing: &Framing, p: Vec3) -> Vec3 {
    orientation(&framing) * (p * framing.scale + framing.position)
  }

  fn framed_bounds(framing: &Framing, bounds: &Bounds) -> Bounds {
    let frame = |p: Vec3| p * framing.scale + framing.position;
    aabb(frame(bounds.min), frame(bounds.max))
  }

  fn bounds_of(points: impl IntoIterator<Item = Vec3>) -> Option<Bounds> {
    let mut points = points.into_iter();
    let first = points.next()?;
    Some(points.fold(aabb(first, first), |b, p| aabb(b.min.min(p), b.max.max(p))))
  }

  #[test]
  fn test_dispatch_by_extension() {
    let cases = [
      ("https://cdn.example.com/ToyCar.glb", LoaderKind::Gltf),
      ("https://cdn.example.com/scene.GLTF", LoaderKind::Gltf),
      ("https://cdn.example.com/rig.fbx?v=3", LoaderKind::Fbx),
      ("/assets/part.obj#top", LoaderKind::Obj),
      ("https://cdn.example.com/scan.ply", LoaderKind::Ply),
      ("https://res.cloudinary.com/x/raw/upload/v1/Car_ptg3re.stl", LoaderKind::Stl),
    ];
    for (url, loader) in cases {
      match ModelSource::from_url(url) {
        ModelSource::Supported { loader: got, .. } => assert_eq!(got, loader, "{url}"),
        other => panic!("{url} dispatched to {other:?}"),
      }
    }
  }

  #[test]
  fn test_unknown_extensions_are_unsupported() {
    assert_eq!(
      ModelSource::from_url("https://cdn.example.com/model.blend"),
      ModelSource::Unsupported {
        url: "https://cdn.example.com/model.blend".into(),
        extension: Some("blend".into()),
      }
    );
    assert!(matches!(
      ModelSource::from_url("https://cdn.example.com/download?file=a.stl"),
      ModelSource::Unsupported { extension: None, .. }
    ));
    assert!(matches!(
      ModelSource::from_url("https://cdn.example.com/.stl"),
      ModelSource::Unsupported { .. }
    ));
  }

  #[test]
  fn test_framing_centers_and_scales() {
    let bounds = aabb(Vec3::new(-2.0, -1.0, -3.0), Vec3::new(4.0, 5.0, 3.0));
    assert_eq!(bounds.size(), Vec3::splat(6.0));
    assert_eq!(bounds.center(), Vec3::new(1.0, 2.0, 0.0));

    let framing = Framing::compute(&bounds, &unrotated());
    assert!(close(framing.scale, 0.5));
    assert_eq!(framing.position, Vec3::new(-0.5, -1.0, 0.0));

    let framed = framed_bounds(&framing, &bounds);
    assert!(framed.center().abs_diff_eq(Vec3::ZERO, EPS));
    assert!(close(framed.max_dimension(), 3.0));
    assert!(apply(&framing, bounds.center()).abs_diff_eq(Vec3::ZERO, EPS));
  }

  #[test]
  fn test_no_auto_frame_keeps_native_scale() {
    let bounds = aabb(Vec3::ZERO, Vec3::new(100.0, 10.0, 10.0));
    let options = PresentationOptions { auto_frame: false, ..unrotated() };
    let framing = Framing::compute(&bounds, &options);
    assert_eq!(framing.scale, 1.0);
    assert!(close(framed_bounds(&framing, &bounds).max_dimension(), 100.0));
  }

  #[test]
  fn test_degenerate_bounds_are_not_scaled() {
    let p = Vec3::ONE;
    let framing = Framing::compute(&aabb(p, p), &unrotated());
    assert_eq!(framing.scale, 1.0);
    assert!(apply(&framing, p).abs_diff_eq(Vec3::ZERO, EPS));
  }

  #[test]
  fn test_empty_bounds_fall_back_to_identity() {
    let empty = aabb(Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY));
    let framing = Framing::compute(&empty, &PresentationOptions::default());
    assert_eq!(framing.scale, 1.0);
    assert_eq!(framing.position, Vec3::ZERO);
  }

  #[test]
  fn test_orientation_keeps_center_at_origin() {
    let bounds = bounds_of([
      Vec3::new(10.0, 0.0, 0.0),
      Vec3::new(12.0, 4.0, 1.0),
      Vec3::new(11.0, 2.0, -1.0),
    ])
    .unwrap();
    assert_eq!(bounds.min, Vec3::new(10.0, 0.0, -1.0));
    let framing = Framing::compute(&bounds, &PresentationOptions::default());
    assert!(apply(&framing, bounds.center()).abs_diff_eq(Vec3::ZERO, EPS));
  }

  #[test]
  fn test_yaw_rotates_about_vertical_axis() {
    let options = PresentationOptions { pitch: 0.0, yaw: 90.0, ..PresentationOptions::default() };
    let framing = Framing::compute(&aabb(-Vec3::ONE, Vec3::ONE), &options);
    let p = orientation(&framing) * Vec3::X;
    assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPS));
  }

  #[test]
  fn test_default_rotation_is_pitch_then_yaw() {
    let [pitch, yaw, roll] = PresentationOptions::default().rotation();
    assert!(close(pitch, 20f32.to_radians()));
    assert!(close(yaw, (-20f32).to_radians()));
    assert_eq!(roll, 0.0);
  }

  #[test]
  fn test_bounds_wire_format() {
    let bounds: Bounds = serde_json::from_str(r#"{"min":[-2,-1,-3],"max":[4,5,3]}"#).unwrap();
    assert_eq!(bounds.max, Vec3::new(4.0, 5.0, 3.0));

    let framing = Framing::compute(&bounds, &unrotated());
    let json = serde_json::to_value(framing).unwrap();
    assert_eq!(json["scale"], 0.5);
    assert_eq!(json["position"], serde_json::json!([-0.5, -1.0, 0.0]));
  }

  #[test]
  fn test_viewer_config_serializes_dispatch() {
    let config = ViewerConfig::new("https://cdn.example.com/ToyCar.glb", Some("thumb.jpg"), &PresentationOptions::default());
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["source"]["state"], "supported");
    assert_eq!(json["source"]["format"], "glb");
    assert_eq!(json["source"]["loader"], "gltf");
    assert_eq!(json["fade_in_ms"], 400);
    assert_eq!(json["placeholder"], "thumb.jpg");
    assert_eq!(json["framing_url"], FRAMING_URL);
    assert!(json["lighting"]["environment"].as_bool().unwrap());
    assert!(json["lighting"]["contact_shadow"]["y"].as_f64().unwrap() < 0.0);
  }
}
