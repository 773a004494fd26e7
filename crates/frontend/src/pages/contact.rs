use contracts::pages::contact::{ContactPage, FormField};

use crate::shared::svg_cache::IconTable;

pub fn render(page: &ContactPage, icons: &IconTable) -> String {
    let mut html = String::from(r#"<div class="container">"#);
    html.push_str(r#"<section class="section">"#);
    html.push_str(&format!(
        r#"<h1 class="section-title">{}</h1>"#,
        page.title.as_deref().unwrap_or("Contact")
    ));
    html.push_str(r#"<div class="section-content">"#);

    if let Some(description) = &page.description {
        html.push_str(&format!(r#"<p class="description-centered">{}</p>"#, description));
    }

    html.push_str(r#"<div class="contact-form">"#);
    html.push_str(r#"<form id="contact-form">"#);
    if let Some(form) = &page.form {
        for field in &form.fields {
            render_field(&mut html, field);
        }
    }
    html.push_str(r#"<button type="submit" class="btn">Send Message</button>"#);
    html.push_str("</form>");
    html.push_str("</div>");

    if !page.social.is_empty() {
        html.push_str(r#"<div class="social-links">"#);
        for link in &page.social {
            html.push_str(&format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" title="{}" class="svg-icon">{}</a>"#,
                link.url,
                link.name,
                link.icon.as_deref().map(|p| icons.icon(p)).unwrap_or_default()
            ));
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html.push_str("</section>");
    html.push_str("</div>");
    html
}

fn render_field(html: &mut String, field: &FormField) {
    let required = if field.required { " required" } else { "" };

    html.push_str(r#"<div class="form-group">"#);
    html.push_str(&format!(r#"<label for="{}">{}</label>"#, field.name, field.label));
    match field.kind.as_deref() {
        Some("textarea") => html.push_str(&format!(
            r#"<textarea id="{0}" name="{0}"{1}></textarea>"#,
            field.name, required
        )),
        kind => html.push_str(&format!(
            r#"<input type="{0}" id="{1}" name="{1}"{2}>"#,
            kind.unwrap_or("text"),
            field.name,
            required
        )),
    }
    html.push_str("</div>");
}
