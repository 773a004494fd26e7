use contracts::pages::generic::{GenericContent, GenericPage};

pub fn render(page: &GenericPage) -> String {
    let mut html = String::from(r#"<div class="container">"#);
    html.push_str(r#"<section class="section">"#);
    html.push_str(&format!(
        r#"<h1 class="section-title">{}</h1>"#,
        page.title.as_deref().unwrap_or("Page")
    ));
    html.push_str(r#"<div class="section-content">"#);

    match &page.content {
        Some(GenericContent::Text(text)) => html.push_str(&format!("<p>{}</p>", text)),
        Some(GenericContent::Blocks(blocks)) => {
            for block in blocks {
                match block.kind.as_deref() {
                    Some("paragraph") => html.push_str(&format!("<p>{}</p>", block.text)),
                    Some("heading") => {
                        let level = block.heading_level();
                        html.push_str(&format!("<h{0}>{1}</h{0}>", level, block.text));
                    }
                    _ => {}
                }
            }
        }
        None => {}
    }

    html.push_str("</div>");
    html.push_str("</section>");
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks() {
        let page: GenericPage = serde_json::from_str(
            r#"{
                "title": "Notes",
                "content": [
                    { "type": "heading", "level": 3, "text": "Intro" },
                    { "type": "paragraph", "text": "Hello" },
                    { "type": "heading", "text": "Default" },
                    { "type": "quote", "text": "skipped" }
                ]
            }"#,
        )
        .unwrap();
        let html = render(&page);
        assert!(html.contains(r#"<h1 class="section-title">Notes</h1>"#));
        assert!(html.contains("<h3>Intro</h3><p>Hello</p><h2>Default</h2>"));
        assert!(!html.contains("skipped"));
    }

    #[test]
    fn test_plain_text_and_defaults() {
        let page = GenericPage {
            title: None,
            content: Some(GenericContent::Text("Just text".into())),
        };
        let html = render(&page);
        assert!(html.contains(r#"<h1 class="section-title">Page</h1>"#));
        assert!(html.contains("<p>Just text</p>"));
    }
}
