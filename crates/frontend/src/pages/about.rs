use contracts::pages::about::AboutPage;

use crate::shared::svg_cache::IconTable;

pub fn render(page: &AboutPage, icons: &IconTable) -> String {
    let mut html = String::from(r#"<div class="container">"#);
    html.push_str(r#"<section class="section">"#);
    html.push_str(&format!(
        r#"<h1 class="section-title">{}</h1>"#,
        page.title.as_deref().unwrap_or("About")
    ));
    html.push_str(r#"<div class="section-content">"#);

    if let Some(image) = &page.image {
        html.push_str(&format!(r#"<img src="{}" alt="About" class="about-image">"#, image));
    }

    if let Some(content) = &page.content {
        for paragraph in content.paragraphs() {
            html.push_str(&format!(r#"<p class="about-content">{}</p>"#, paragraph));
        }
    }

    if !page.featured.is_empty() {
        html.push_str(r#"<h2 class="skills-heading">What I Bring</h2>"#);
        html.push_str(r#"<div class="skills-grid">"#);
        for item in &page.featured {
            html.push_str(r#"<div class="skill-item">"#);
            push_icon(&mut html, item.icon.as_deref(), icons);
            html.push_str(&format!("<h4>{}</h4>", item.title));
            if let Some(description) = &item.description {
                html.push_str(&format!(r#"<p class="text-secondary">{}</p>"#, description));
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
    }

    if !page.skills.is_empty() {
        html.push_str(r#"<h2 class="skills-heading">Skills</h2>"#);
        html.push_str(r#"<div class="skills-grid">"#);
        for skill in &page.skills {
            html.push_str(r#"<div class="skill-item">"#);
            push_icon(&mut html, skill.icon.as_deref(), icons);
            html.push_str(&format!("<h4>{}</h4>", skill.name));
            if let Some(level) = &skill.level {
                html.push_str(&format!(r#"<p class="text-secondary">{}</p>"#, level));
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html.push_str("</section>");
    html.push_str("</div>");
    html
}

fn push_icon(html: &mut String, icon: Option<&str>, icons: &IconTable) {
    if let Some(path) = icon.filter(|p| !p.is_empty()) {
        html.push_str(&format!(r#"<div class="svg-icon">{}</div>"#, icons.icon(path)));
    }
}
