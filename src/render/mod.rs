//! Server-side HTML views.

mod contact;
mod home;
mod projects;

pub use contact::contact_view;
pub use home::home_view;
pub use projects::{carousel_fragment, fragment_href, page_href, projects_view, ProjectsPage};

use crate::content::Site;

/// Which top-level view is showing, for navigation highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View<'a> {
  Home,
  Projects(&'a str),
  Contact,
  Error,
}

pub fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}

/// Full document around a rendered view.
pub fn page(site: &Site, view: View<'_>, title: &str, body: &str, live_reload: bool) -> String {
  format!(
    r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} | {name}</title>
  <link rel="stylesheet" href="/static/site.css">
  <script type="importmap">
  {{
    "imports": {{
      "three": "https://cdn.jsdelivr.net/npm/three@0.160.0/build/three.module.js",
      "three/addons/": "https://cdn.jsdelivr.net/npm/three@0.160.0/examples/jsm/"
    }}
  }}
  </script>
  <script type="module" src="/static/carousel.js"></script>
</head>
<body id="top" data-live-reload="{live_reload}">
{nav}
<main>
{body}
</main>
{footer}
</body>
</html>"#,
    title = escape(title),
    name = escape(&site.profile.name),
    nav = navigation(site, view),
    footer = footer(site),
  )
}

fn nav_link(href: &str, label: &str, active: bool) -> String {
  let class = if active { "nav-link active" } else { "nav-link" };
  format!(r#"<a class="{class}" href="{}">{}</a>"#, escape(href), escape(label))
}

fn navigation(site: &Site, view: View<'_>) -> String {
  let mut projects = String::new();
  for category in &site.categories {
    let active = view == View::Projects(&category.key);
    projects.push_str(&format!(
      r#"<a class="menu-item{}" href="/projects/{}"><span class="icon">{}</span>{}</a>"#,
      if active { " active" } else { "" },
      escape(&category.key),
      category.icon.glyph(),
      escape(category.nav_label()),
    ));
  }

  let in_projects = matches!(view, View::Projects(_));
  format!(
    r#"<header class="site-header" id="site-header">
  <nav class="nav">
    <a class="logo" href="/"><span class="logo-mark">{initials}</span><span class="logo-text">Portfolio</span></a>
    <div class="nav-links">
      {home}
      <details class="dropdown">
        <summary class="nav-link{projects_active}">Projects</summary>
        <div class="menu">{projects}</div>
      </details>
      {contact}
      <a class="nav-social" href="{linkedin}" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">in</a>
    </div>
  </nav>
</header>"#,
    initials = escape(&site.profile.initials),
    home = nav_link("/", "Home", view == View::Home),
    projects_active = if in_projects { " active" } else { "" },
    contact = nav_link("/contact", "Contact Me", view == View::Contact),
    linkedin = escape(&site.profile.linkedin),
  )
}

fn footer(site: &Site) -> String {
  let first_category = site
    .categories
    .first()
    .map(|c| format!("/projects/{}", c.key))
    .unwrap_or_else(|| "/".to_string());
  format!(
    r##"<footer class="site-footer">
  <div class="footer-inner">
    <div>
      <a class="logo" href="/"><span class="logo-mark">{initials}</span><span class="logo-text">Portfolio</span></a>
      <p class="muted">&copy; {name}. All rights reserved.</p>
    </div>
    <div class="footer-links">
      <a href="/">Home</a>
      <a href="{projects}">Projects</a>
      <a href="/contact">Contact</a>
    </div>
    <div class="footer-social">
      <a href="{linkedin}" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">in</a>
      <a href="mailto:{email}" aria-label="Email">@</a>
      <a class="to-top" href="#top" aria-label="Back to top">&uarr;</a>
    </div>
  </div>
</footer>"##,
    initials = escape(&site.profile.initials),
    name = escape(&site.profile.name),
    projects = escape(&first_category),
    linkedin = escape(&site.profile.linkedin),
    email = escape(&site.contact.email),
  )
}

pub fn error_view(status: u16, what: &str) -> String {
  let heading = match status {
    404 => "Nothing here",
    400 => "That link looks broken",
    _ => "Something went wrong",
  };
  format!(
    r#"<section class="section narrow center">
  <span class="pill">{status}</span>
  <h1>{heading}</h1>
  <p class="muted">{}</p>
  <a class="button" href="/">Back home</a>
</section>"#,
    escape(what)
  )
}

/// Text that collapses behind a "Read More" toggle past `limit` characters.
pub fn expandable_text(text: &str, limit: usize) -> String {
  if text.chars().count() <= limit {
    return format!("<p>{}</p>", escape(text));
  }
  let preview: String = text.chars().take(limit).collect();
  format!(
    r#"<details class="expandable"><summary><span class="preview">{}...</span><span class="toggle"></span></summary><p>{}</p></details>"#,
    escape(&preview),
    escape(text)
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_escape() {
    assert_eq!(escape(r#"<a href="x">Tom & 'Jerry'</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
  }

  #[test]
  fn test_expandable_text() {
    assert_eq!(expandable_text("short", 250), "<p>short</p>");

    let long = "é".repeat(300);
    let html = expandable_text(&long, 250);
    assert!(html.starts_with(r#"<details class="expandable">"#));
    assert!(html.contains(&format!("{}...", "é".repeat(250))));
  }

  #[test]
  fn test_navigation_marks_active_category() {
    let site = Site::bundled().unwrap();
    let key = site.categories[1].key.clone();
    let html = navigation(&site, View::Projects(&key));
    assert!(html.contains(&format!(r#"<a class="menu-item active" href="/projects/{key}">"#)));
    assert!(html.contains(r#"<summary class="nav-link active">Projects</summary>"#));
  }
}
