use super::escape;
use crate::content::{Experience, Site, Skill};

pub fn home_view(site: &Site) -> String {
  let mut out = hero(site);
  out.push_str(&skills(site));
  out.push_str(&experience(&site.experience));
  out
}

fn hero(site: &Site) -> String {
  let profile = &site.profile;

  let stats: String = site
    .stats
    .iter()
    .map(|s| {
      format!(
        r#"<div class="stat"><p class="stat-value">{}</p><p class="muted">{}</p></div>"#,
        escape(&s.value),
        escape(&s.label)
      )
    })
    .collect();

  let photo = match &profile.photo {
    Some(src) => format!(
      r#"<div class="portrait"><img src="{}" alt="{}"></div>"#,
      escape(src),
      escape(&profile.name)
    ),
    None => format!(r#"<div class="portrait initials">{}</div>"#, escape(&profile.initials)),
  };

  format!(
    r##"<section class="hero">
  <div class="hero-gear gear-a" aria-hidden="true">&#9881;</div>
  <div class="hero-gear gear-b" aria-hidden="true">&#9881;</div>
  <div class="hero-grid">
    <div class="hero-copy reveal">
      <span class="pill">{role}</span>
      <h1>{headline}<br><span class="accent">{accent}</span></h1>
      <p class="lead">{summary}</p>
      <div class="hero-actions">
        <a class="button" href="{linkedin}" target="_blank" rel="noopener noreferrer">Connect on LinkedIn</a>
        <a class="button ghost round" href="#skills" aria-label="Scroll to skills">&darr;</a>
      </div>
      <div class="stats">{stats}</div>
    </div>
    <div class="hero-visual reveal">
      <div class="ring">{photo}</div>
    </div>
  </div>
</section>"##,
    role = escape(&profile.role),
    headline = escape(&profile.headline),
    accent = escape(&profile.headline_accent),
    summary = escape(&profile.summary),
    linkedin = escape(&profile.linkedin),
  )
}

fn skill_card(index: usize, skill: &Skill) -> String {
  format!(
    r#"<div class="card skill reveal" style="--delay: {delay}ms; --accent: {accent}">
  <div class="skill-icon">{initial}</div>
  <span class="eyebrow">{category}</span>
  <h3>{name}</h3>
  <div class="meter-label"><span class="muted">Proficiency</span><strong>{level}%</strong></div>
  <div class="meter"><div class="meter-fill" style="width: {level}%"></div></div>
</div>"#,
    delay = index * 100,
    accent = escape(&skill.accent),
    initial = escape(&skill.name.chars().next().map(String::from).unwrap_or_default()),
    category = escape(&skill.category),
    name = escape(&skill.name),
    level = skill.level.min(100),
  )
}

fn skills(site: &Site) -> String {
  if site.skills.is_empty() && site.extra_skills.is_empty() {
    return String::new();
  }

  let cards: String = site.skills.iter().enumerate().map(|(i, s)| skill_card(i, s)).collect();
  let extra: String = site
    .extra_skills
    .iter()
    .map(|s| format!(r#"<span class="tag">{}</span>"#, escape(s)))
    .collect();
  let extra = if extra.is_empty() {
    String::new()
  } else {
    format!(r#"<div class="extra-skills"><p class="muted">Also proficient in:</p><div class="tags">{extra}</div></div>"#)
  };

  format!(
    r#"<section class="section" id="skills">
  <div class="section-header reveal">
    <span class="pill">Technical Expertise</span>
    <h2>Skills &amp; Proficiencies</h2>
    <p class="muted">Comprehensive expertise across industry-leading engineering software and methodologies, delivering precision and innovation.</p>
  </div>
  <div class="grid four">{cards}</div>
  {extra}
</section>"#
  )
}

fn experience(items: &[Experience]) -> String {
  if items.is_empty() {
    return String::new();
  }

  let mut timeline = String::new();
  for (i, exp) in items.iter().enumerate() {
    let side = if i % 2 == 0 { "left" } else { "right" };
    let achievements: String = exp
      .achievements
      .iter()
      .map(|a| format!(r#"<li><span class="arrow">&rarr;</span>{}</li>"#, escape(a)))
      .collect();
    timeline.push_str(&format!(
      r#"<div class="timeline-entry {side} reveal">
  <div class="timeline-node"></div>
  <div class="card">
    <h3>{title}</h3>
    <p class="company">{company}</p>
    <div class="meta"><span class="chip">{period}</span><span class="chip soft">{location}</span></div>
    <p class="muted">{description}</p>
    <ul class="achievements">{achievements}</ul>
  </div>
</div>"#,
      title = escape(&exp.title),
      company = escape(&exp.company),
      period = escape(&exp.period),
      location = escape(&exp.location),
      description = escape(&exp.description),
    ));
  }

  format!(
    r#"<section class="section tinted">
  <div class="section-header reveal">
    <span class="pill">Career Journey</span>
    <h2>Work Experience</h2>
    <p class="muted">A track record of innovation and impact at leading engineering organizations.</p>
  </div>
  <div class="timeline">{timeline}</div>
</section>"#
  )
}
