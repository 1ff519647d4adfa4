//! Video link recognition.
//!
//! YouTube links are recognised in their long (`watch?v=`), short
//! (`youtu.be/`), shorts, embed and live shapes. Anything else is treated as
//! a directly served video file.

use url::Url;

const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";
const EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VideoSource {
  Hosted { id: String },
  Direct { url: String },
}

impl VideoSource {
  pub fn parse(raw: &str) -> Self {
    match youtube_id(raw) {
      Some(id) => VideoSource::Hosted { id },
      None => VideoSource::Direct { url: raw.trim().to_string() },
    }
  }

  /// Platform thumbnail, only for hosted videos.
  pub fn thumbnail_url(&self) -> Option<String> {
    match self {
      VideoSource::Hosted { id } => Some(thumbnail_url(id)),
      VideoSource::Direct { .. } => None,
    }
  }
}

pub fn thumbnail_url(id: &str) -> String {
  format!("{THUMBNAIL_BASE}/{id}/hqdefault.jpg")
}

/// Privacy-enhanced player URL that starts playing once mounted.
pub fn embed_url(id: &str) -> String {
  format!("{EMBED_BASE}/{id}?autoplay=1&rel=0")
}

/// Extracts the 11-character video id from a YouTube link.
pub fn youtube_id(raw: &str) -> Option<String> {
  let raw = raw.trim();
  let parsed = Url::parse(raw)
    .or_else(|_| Url::parse(&format!("https://{raw}")))
    .ok()?;

  let host = parsed.host_str()?;
  let host = host.strip_prefix("www.").unwrap_or(host);
  let host = host.strip_prefix("m.").unwrap_or(host);

  let mut segments = parsed.path_segments()?;
  let candidate = match host {
    "youtu.be" => segments.next().map(str::to_owned),
    "youtube.com" | "music.youtube.com" | "youtube-nocookie.com" => match segments.next()? {
      "watch" => parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned()),
      "shorts" | "embed" | "live" | "v" => segments.next().map(str::to_owned),
      _ => None,
    },
    _ => None,
  }?;

  is_video_id(&candidate).then_some(candidate)
}

fn is_video_id(s: &str) -> bool {
  s.len() == 11 && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
