use super::escape;
use crate::content::Contact;

fn contact_card(tone: &str, glyph: &str, heading: &str, note: &str, body: &str) -> String {
  format!(
    r#"<div class="card contact-card">
  <div class="contact-icon {tone}">{glyph}</div>
  <div>
    <h3>{heading}</h3>
    <p class="muted small">{note}</p>
    {body}
  </div>
</div>"#,
    heading = escape(heading),
    note = escape(note),
  )
}

fn external_link(href: &str, text: &str) -> String {
  format!(
    r#"<a class="strong-link" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
    escape(href),
    escape(text)
  )
}

pub fn contact_view(contact: &Contact) -> String {
  let email = contact_card(
    "navy",
    "&#9993;",
    "Email",
    "Preferred contact method",
    &external_link(&contact.email_href, &contact.email),
  );
  let phone = contact_card(
    "green",
    "&#9742;",
    "Phone",
    &contact.phone_hours,
    &format!(
      r#"<a class="strong-link" href="{}">{}</a>"#,
      escape(&contact.phone_href),
      escape(&contact.phone)
    ),
  );
  let location = contact_card(
    "amber",
    "&#9906;",
    "Location",
    &contact.location_detail,
    &format!(r#"<p class="strong">{}</p>"#, escape(&contact.location)),
  );

  let availability: String = contact
    .availability
    .iter()
    .enumerate()
    .map(|(i, line)| {
      let marker = if i == 0 { r#"<span class="dot live"></span>"# } else { r#"<span class="dot"></span>"# };
      format!("<li>{marker}{}</li>", escape(line))
    })
    .collect();
  let services: String = contact
    .services
    .iter()
    .map(|s| format!(r#"<li><span class="dot"></span>{}</li>"#, escape(s)))
    .collect();

  format!(
    r#"<section class="section contact">
  <div class="section-header reveal">
    <span class="pill">Get In Touch</span>
    <h1>Let's Work Together</h1>
    <p class="muted lead">Are you looking for an engineering intern? I'd love to hear about it!</p>
  </div>
  <div class="grid two">
    <div class="stack reveal">
      {email}
      {phone}
      {location}
      <a class="card contact-card linkedin" href="{linkedin}" target="_blank" rel="noopener noreferrer">
        <div class="contact-icon glass">in</div>
        <div><h3>LinkedIn</h3><p class="small">Connect professionally</p></div>
      </a>
    </div>
    <div class="stack reveal">
      <div class="card"><h3>Availability</h3><ul class="plain">{availability}</ul></div>
      <div class="card"><h3>How I Can Help</h3><ul class="plain">{services}</ul></div>
      <div class="card">
        <h3>Quick Message</h3>
        <p class="muted">For internships or job opportunities, please reach out via email and I will get back to you soon.</p>
        <a class="button" href="{message}" target="_blank" rel="noopener noreferrer">Send Email</a>
      </div>
    </div>
  </div>
</section>"#,
    linkedin = escape(&contact.linkedin),
    message = escape(&contact.message_href),
  )
}
