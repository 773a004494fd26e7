use contracts::pages::experience::{ExperienceEntry, ExperiencePage};
use contracts::shared::text::TextBlock;

pub fn render(page: &ExperiencePage) -> String {
    let mut html = String::from(r#"<div class="container">"#);
    html.push_str(r#"<section class="section">"#);
    html.push_str(&format!(
        r#"<h1 class="section-title">{}</h1>"#,
        page.title.as_deref().unwrap_or("Experience")
    ));

    if let Some((resume, link)) = page
        .resume
        .as_ref()
        .and_then(|r| r.link.as_deref().map(|link| (r, link)))
    {
        html.push_str(r#"<div class="resume-wrapper">"#);
        html.push_str(r#"<div class="experience-card">"#);
        html.push_str(&format!(
            r#"<h3 class="resume-title">{}</h3>"#,
            resume.outside_text.as_deref().unwrap_or("Download my Resume")
        ));
        html.push_str(&format!(
            r#"<a href="{}" target="_blank" class="btn resume-download-link">{}</a>"#,
            link,
            resume.inside_text.as_deref().unwrap_or("Download Resume")
        ));
        html.push_str("</div>");
        html.push_str("</div>");
    }

    render_timeline(&mut html, "Work Experience", &page.work);
    render_timeline(&mut html, "Education", &page.academic);

    html.push_str("</section>");
    html.push_str("</div>");
    html
}

fn render_timeline(html: &mut String, heading: &str, entries: &[ExperienceEntry]) {
    if entries.is_empty() {
        return;
    }
    html.push_str(&format!(r#"<h2 class="experience-subtitle">{}</h2>"#, heading));
    html.push_str(r#"<div class="experience-timeline">"#);
    for entry in entries {
        html.push_str(r#"<div class="experience-timeline-item">"#);
        html.push_str(&render_card(entry));
        html.push_str("</div>");
    }
    html.push_str("</div>");
}

/// Card shared by jobs and degrees.
pub fn render_card(entry: &ExperienceEntry) -> String {
    let mut html = String::from(r#"<div class="experience-card">"#);
    html.push_str(&format!(
        "<h3>{}</h3>",
        entry.title.as_deref().unwrap_or("Position")
    ));

    if let Some(organization) = entry.organization() {
        html.push_str(&format!(r#"<p class="company">{}</p>"#, organization));
    }
    if let Some(duration) = &entry.duration {
        html.push_str(&format!(r#"<p class="duration">{}</p>"#, duration));
    }
    if let Some(location) = &entry.location {
        html.push_str(&format!(r#"<p class="duration">📍 {}</p>"#, location));
    }

    match &entry.description {
        Some(TextBlock::Many(items)) => {
            html.push_str("<ul>");
            for item in items {
                html.push_str(&format!("<li>{}</li>", item));
            }
            html.push_str("</ul>");
        }
        Some(TextBlock::Single(text)) => {
            html.push_str(&format!(r#"<p class="description">{}</p>"#, text));
        }
        None => {}
    }

    if let Some(technologies) = &entry.technologies {
        html.push_str(r#"<div class="tech-tags">"#);
        html.push_str("<strong>Technologies: </strong>");
        for tech in technologies {
            html.push_str(&format!(r#"<span class="tech-tag">{}</span>"#, tech));
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}
