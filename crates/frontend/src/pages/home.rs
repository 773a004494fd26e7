use contracts::pages::home::{Hero, HomePage};

use crate::shared::markup::escape_attr;

const DEFAULT_CTA_PAGE: &str = "about";
const DEFAULT_CTA_TEXT: &str = "Learn More";

pub fn render(page: &HomePage) -> String {
    let mut html = String::from(r#"<div class="container">"#);

    if let Some(hero) = &page.hero {
        render_hero(&mut html, hero);
    }

    let repos = page.repo_urls();
    if !repos.is_empty() {
        let serialized = serde_json::to_string(repos).unwrap_or_else(|_| "[]".to_string());
        html.push_str(r#"<section class="section">"#);
        html.push_str(r#"<h2 class="section-title">Featured Repositories</h2>"#);
        html.push_str(&format!(
            r#"<div class="repo-grid" id="repo-grid" data-repos='{}'>"#,
            escape_attr(&serialized)
        ));
        html.push_str(r#"<p class="text-secondary" style="text-align:center;grid-column:1/-1;">Loading repositories...</p>"#);
        html.push_str("</div>");
        html.push_str("</section>");
    }

    html.push_str("</div>");
    html
}

fn render_hero(html: &mut String, hero: &Hero) {
    html.push_str(r#"<section class="hero">"#);

    if let Some(image) = &hero.image {
        html.push_str(&format!(
            r#"<img src="{}" alt="{}" class="hero-image">"#,
            image,
            hero.name.as_deref().unwrap_or("Profile")
        ));
    }
    if let Some(name) = &hero.name {
        html.push_str(&format!("<h1>{}</h1>", name));
    }
    if let Some(title) = &hero.title {
        html.push_str(&format!("<p>{}</p>", title));
    }
    if let Some(description) = &hero.description {
        html.push_str(&format!(r#"<p class="hero-description">{}</p>"#, description));
    }
    if let Some(cta) = &hero.cta {
        html.push_str(&format!(
            r##"<a href="#" class="btn btn-glass hero-cta" data-cta-page="{}">{}</a>"##,
            cta.link.as_deref().unwrap_or(DEFAULT_CTA_PAGE),
            cta.text.as_deref().unwrap_or(DEFAULT_CTA_TEXT)
        ));
    }

    html.push_str("</section>");
}
