use contracts::pages::resources::ResourcesPage;
use once_cell::sync::Lazy;
use regex::Regex;

static FOLDER_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-A-Za-z0-9_]{25,}").expect("valid folder id pattern"));

/// First run of 25 or more word characters or hyphens in a Drive link, or
/// an empty string when there is none.
pub fn extract_folder_id(url: &str) -> &str {
    FOLDER_ID.find(url).map(|m| m.as_str()).unwrap_or("")
}

pub fn render(page: &ResourcesPage) -> String {
    let mut html = String::from(r#"<div class="container">"#);
    html.push_str(r#"<section class="section">"#);
    html.push_str(&format!(
        r#"<h1 class="section-title">{}</h1>"#,
        page.title.as_deref().unwrap_or("Resources")
    ));
    push_note(&mut html, page.note1.as_deref());
    html.push_str(r#"<div class="section-content">"#);

    if let Some(description) = &page.description {
        html.push_str(&format!(r#"<p class="description-centered">{}</p>"#, description));
    }

    if !page.folders.is_empty() {
        html.push_str(r#"<div class="resources-vertical">"#);
        for folder in &page.folders {
            html.push_str(r#"<div class="resource-item">"#);
            html.push_str(&format!(r#"<h3 class="resource-item-title">{}</h3>"#, folder.text));
            html.push_str(&format!(
                r#"<button class="btn btn-resource" data-folder-id="{}">View {} Resources</button>"#,
                extract_folder_id(&folder.link),
                folder.text
            ));
            html.push_str("</div>");
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    push_note(&mut html, page.note2.as_deref());
    html.push_str("</section>");
    html.push_str("</div>");
    html
}

fn push_note(html: &mut String, note: Option<&str>) {
    if let Some(note) = note {
        html.push_str(&format!(r#"<p class="note-text"><center>{}</center></p>"#, note));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::pages::resources::ResourceFolder;

    #[test]
    fn test_extract_folder_id() {
        assert_eq!(
            extract_folder_id("https://drive.google.com/drive/folders/1AbCdEfGhIjKlMnOpQrStUvWxYz1234567"),
            "1AbCdEfGhIjKlMnOpQrStUvWxYz1234567"
        );
        assert_eq!(
            extract_folder_id("https://drive.google.com/drive/folders/1a-B_c2d3e4f5g6h7i8j9k0l1m?usp=sharing"),
            "1a-B_c2d3e4f5g6h7i8j9k0l1m"
        );
        assert_eq!(extract_folder_id("https://example.com/short"), "");
    }

    #[test]
    fn test_button_carries_folder_id() {
        let page = ResourcesPage {
            note1: Some("Before".into()),
            note2: Some("After".into()),
            folders: vec![ResourceFolder {
                text: "Semester 1".into(),
                link: "https://drive.google.com/drive/folders/1AbCdEfGhIjKlMnOpQrStUvWxYz1234567".into(),
            }],
            ..ResourcesPage::default()
        };
        let html = render(&page);
        assert!(html.contains(
            r#"<button class="btn btn-resource" data-folder-id="1AbCdEfGhIjKlMnOpQrStUvWxYz1234567">View Semester 1 Resources</button>"#
        ));
        let before = html.find("Before").unwrap();
        let list = html.find("resources-vertical").unwrap();
        let after = html.find("After").unwrap();
        assert!(before < list && list < after);
    }

    #[test]
    fn test_missing_notes_are_omitted() {
        let html = render(&ResourcesPage::default());
        assert!(html.contains(r#"<h1 class="section-title">Resources</h1>"#));
        assert!(!html.contains("note-text"));
    }
}
