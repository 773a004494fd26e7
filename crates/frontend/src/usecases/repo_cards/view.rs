use std::rc::Rc;

use contracts::github::RepoSummary;

use crate::app::App;
use crate::shared::dom;

const GRID_ID: &str = "repo-grid";

pub fn render_repo_cards(repos: &[RepoSummary]) -> String {
    if repos.is_empty() {
        return r#"<p class="text-secondary" style="text-align:center;grid-column:1/-1;">No repositories found.</p>"#
            .to_string();
    }

    let mut html = String::new();
    for repo in repos {
        html.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="repo-card">"#,
            repo.html_url
        ));
        html.push_str(&format!(
            r#"<img src="https://opengraph.githubassets.com/1/{}" alt="{}" class="repo-card-image" loading="lazy">"#,
            repo.full_name, repo.name
        ));
        html.push_str(r#"<div class="repo-card-body">"#);
        html.push_str(&format!(r#"<h4 class="repo-card-name">{}</h4>"#, repo.name));
        html.push_str(&format!(
            r#"<p class="repo-card-description">{}</p>"#,
            repo.description.as_deref().unwrap_or("No description provided.")
        ));
        html.push_str("</div>");
        html.push_str("</a>");
    }
    html
}

pub fn unavailable_markup() -> String {
    concat!(
        r#"<div style="grid-column:1/-1;text-align:center;">"#,
        r#"<p class="text-secondary">Unable to load repositories right now.</p>"#,
        r#"<a href="https://github.com" target="_blank" rel="noopener noreferrer" class="btn" style="margin-top:1rem;display:inline-block;text-decoration:none;">Visit GitHub</a>"#,
        "</div>"
    )
    .to_string()
}

/// Replace the home page's repository placeholder with cards.
pub async fn augment_repo_grid(app: Rc<App>) {
    let Some(grid) = dom::element_by_id(GRID_ID) else {
        return;
    };

    let urls: Vec<String> = match grid.get_attribute("data-repos") {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("unreadable repository list on #{}: {}", GRID_ID, e);
            Vec::new()
        }),
        None => Vec::new(),
    };
    if urls.is_empty() {
        return;
    }

    let markup = match app.repo_cards.load(app.fetcher.as_ref(), &urls).await {
        Ok(repos) => render_repo_cards(&repos),
        Err(e) => {
            log::error!("Error fetching GitHub repos: {}", e);
            unavailable_markup()
        }
    };

    if grid.is_connected() {
        grid.set_inner_html(&markup);
    } else {
        log::debug!("#{} left the document before its cards arrived", GRID_ID);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards() {
        let repos = vec![RepoSummary {
            name: "site".into(),
            full_name: "jane/site".into(),
            html_url: "https://github.com/jane/site".into(),
            description: None,
        }];
        let html = render_repo_cards(&repos);
        assert!(html.contains(r#"<a href="https://github.com/jane/site" target="_blank""#));
        assert!(html.contains("https://opengraph.githubassets.com/1/jane/site"));
        assert!(html.contains(r#"<h4 class="repo-card-name">site</h4>"#));
        assert!(html.contains("No description provided."));
    }

    #[test]
    fn test_empty_and_unavailable_states() {
        assert!(render_repo_cards(&[]).contains("No repositories found."));
        assert!(unavailable_markup().contains("Visit GitHub"));
    }
}
