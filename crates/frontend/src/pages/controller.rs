//! Page controller: fetch, render, commit to `#main-content`, then start
//! the home page's repository cards.

use std::rc::Rc;

use contracts::pages::{PageContent, PageKind};
use serde_json::Value;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;

use super::render_page;
use crate::app::App;
use crate::shared::dom;
use crate::shared::loader::{load_json, LoadError};
use crate::shared::svg_cache::resolve_icons;
use crate::usecases::repo_cards;

pub const CONTENT_REGION: &str = "main-content";

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("{path} does not match its declared page type: {source}")]
    Shape {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A page ready to be committed.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub kind: PageKind,
    pub html: String,
    /// `"{page title} - {site name}"` when both are known.
    pub document_title: Option<String>,
}

pub fn error_markup(page_id: &str) -> String {
    format!(
        r#"<div class="loading"><p>Error loading {} page. Please check the data file.</p></div>"#,
        page_id
    )
}

/// Fetch and render a page without touching the document. The descriptor is
/// fetched on every call; only icons are cached.
pub async fn load_page(app: &App, page_id: &str) -> Result<RenderedPage, PageError> {
    let path = app.settings.page_path(page_id);
    let value: Value = load_json(app.fetcher.as_ref(), &path).await?;
    let content =
        PageContent::from_value(value).map_err(|source| PageError::Shape { path, source })?;

    let icons = resolve_icons(&app.svg_cache, app.fetcher.as_ref(), content.icon_paths()).await;
    let html = render_page(&content, &icons);

    let config = app.config();
    let document_title = match (content.title(), config.site_name()) {
        (Some(title), Some(site)) => Some(format!("{} - {}", title, site)),
        _ => None,
    };

    Ok(RenderedPage {
        kind: content.kind(),
        html,
        document_title,
    })
}

/// Make `page_id` current and load it. `None` when a newer navigation
/// started while this one was loading; its result must not be committed.
pub async fn load_for_commit(
    app: &App,
    page_id: &str,
) -> Option<Result<RenderedPage, PageError>> {
    let generation = app.navigation.begin(page_id);
    let result = load_page(app, page_id).await;

    if !app.navigation.is_latest(generation) {
        log::debug!("discarding superseded navigation to {}", page_id);
        return None;
    }
    Some(result)
}

/// Show `page_id`. Failures end up as an error message in the content
/// region, never as an error to the caller.
pub async fn navigate(app: Rc<App>, page_id: String) {
    let Some(result) = load_for_commit(&app, &page_id).await else {
        return;
    };

    match result {
        Ok(page) => commit(&app, &page),
        Err(err) => {
            log::error!("Error loading page {}: {}", page_id, err);
            dom::set_content(CONTENT_REGION, &error_markup(&page_id));
        }
    }
}

/// Start a navigation without waiting for it.
pub fn go_to(app: &Rc<App>, page_id: String) {
    spawn_local(navigate(app.clone(), page_id));
}

fn commit(app: &Rc<App>, page: &RenderedPage) {
    if !dom::set_content(CONTENT_REGION, &page.html) {
        return;
    }

    if let Some(title) = &page.document_title {
        if let Some(doc) = dom::document() {
            doc.set_title(title);
        }
    }

    if page.kind == PageKind::Home {
        spawn_local(repo_cards::augment_repo_grid(app.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{test_app, FakeFetcher};
    use contracts::shared::global_config::{GlobalConfig, MenuItem, NavigationConfig, SiteInfo};
    use futures::executor::block_on;
    use serde_json::json;

    fn site_config(pages: &[&str]) -> GlobalConfig {
        GlobalConfig {
            site: Some(SiteInfo {
                name: Some("Jane Doe".into()),
                logo: None,
            }),
            navigation: Some(NavigationConfig {
                menu: Some(
                    pages
                        .iter()
                        .map(|p| MenuItem {
                            label: p.to_string(),
                            page: p.to_string(),
                        })
                        .collect(),
                ),
                external: None,
            }),
            ..GlobalConfig::default()
        }
    }

    #[test]
    fn test_every_menu_page_round_trips_its_title() {
        let pages = ["home", "about", "experience", "contact", "resources", "notes"];
        let fetcher = FakeFetcher::new()
            .with_json("data/pages/home.json", json!({ "type": "home", "title": "Home" }))
            .with_json("data/pages/about.json", json!({ "type": "about", "title": "About Me" }))
            .with_json("data/pages/experience.json", json!({ "type": "experience", "title": "Career" }))
            .with_json("data/pages/contact.json", json!({ "type": "contact", "title": "Say Hi" }))
            .with_json("data/pages/resources.json", json!({ "type": "resources", "title": "Notes & Slides" }))
            .with_json("data/pages/notes.json", json!({ "title": "Scratchpad" }));
        let t = test_app(fetcher);
        t.app.set_config(site_config(&pages));

        let menu: Vec<String> = t
            .app
            .config()
            .menu()
            .unwrap()
            .iter()
            .map(|m| m.page.clone())
            .collect();
        for page_id in menu {
            let page = block_on(load_page(&t.app, &page_id)).unwrap();
            let title = page.document_title.clone().unwrap();
            let page_title = title.strip_suffix(" - Jane Doe").unwrap();
            if page.kind != PageKind::Home {
                assert!(page.html.contains(page_title), "{} lacks its title", page_id);
            }
        }
    }

    #[test]
    fn test_dispatch_and_title_without_site_name() {
        let fetcher = FakeFetcher::new()
            .with_json("data/pages/x.json", json!({ "type": "mystery", "title": "X" }));
        let t = test_app(fetcher);

        let page = block_on(load_page(&t.app, "x")).unwrap();
        assert_eq!(page.kind, PageKind::Generic);
        assert_eq!(page.document_title, None);
        assert!(page.html.contains(r#"<h1 class="section-title">X</h1>"#));
    }

    #[test]
    fn test_descriptor_is_fetched_on_every_visit() {
        let fetcher = FakeFetcher::new()
            .with_json("data/pages/about.json", json!({ "type": "about" }));
        let t = test_app(fetcher);

        block_on(load_page(&t.app, "about")).unwrap();
        block_on(load_page(&t.app, "about")).unwrap();
        assert_eq!(t.fetcher.calls_to("data/pages/about.json"), 2);
    }

    #[test]
    fn test_icons_resolve_through_the_shared_cache() {
        let fetcher = FakeFetcher::new()
            .with_json(
                "data/pages/contact.json",
                json!({ "type": "contact", "social": [ { "name": "GitHub", "url": "u", "icon": "res/svg/github.svg" } ] }),
            )
            .with_text("res/svg/github.svg", "<svg>gh</svg>");
        let t = test_app(fetcher);

        let first = block_on(load_page(&t.app, "contact")).unwrap();
        let second = block_on(load_page(&t.app, "contact")).unwrap();
        assert!(first.html.contains("<svg>gh</svg>"));
        assert_eq!(first.html, second.html);
        assert_eq!(t.fetcher.calls_to("res/svg/github.svg"), 1);
    }

    #[test]
    fn test_missing_descriptor_is_an_error() {
        let fetcher = FakeFetcher::new().with_status("data/pages/gone.json", 404, "Not Found");
        let t = test_app(fetcher);

        let err = block_on(load_page(&t.app, "gone")).unwrap_err();
        assert_eq!(err.to_string(), "Failed to load data/pages/gone.json: Not Found");
        assert!(error_markup("gone").contains("Error loading gone page."));
    }

    #[test]
    fn test_home_without_hero_renders() {
        let fetcher = FakeFetcher::new()
            .with_json("data/pages/home.json", json!({ "type": "home" }));
        let t = test_app(fetcher);

        let page = block_on(load_page(&t.app, "home")).unwrap();
        assert_eq!(page.kind, PageKind::Home);
        assert!(!page.html.contains("hero"));
    }

    #[test]
    fn test_non_object_descriptor_is_a_shape_error() {
        let fetcher = FakeFetcher::new().with_json("data/pages/about.json", json!("about"));
        let t = test_app(fetcher);

        let err = block_on(load_page(&t.app, "about")).unwrap_err();
        assert!(matches!(err, PageError::Shape { .. }));
    }

    #[test]
    fn test_mistyped_fields_still_render() {
        let fetcher = FakeFetcher::new().with_json(
            "data/pages/experience.json",
            json!({ "type": "experience", "work": [ { "title": "Engineer", "technologies": "Rust" } ] }),
        );
        let t = test_app(fetcher);

        let page = block_on(load_page(&t.app, "experience")).unwrap();
        assert!(page.html.contains("Engineer"));
        assert!(!page.html.contains("tech-tag"));
    }

    #[test]
    fn test_superseded_navigation_is_not_committed() {
        let fetcher = FakeFetcher::new()
            .yielding()
            .with_json("data/pages/about.json", json!({ "type": "about", "title": "About" }))
            .with_json("data/pages/contact.json", json!({ "type": "contact", "title": "Contact" }));
        let t = test_app(fetcher);

        let (older, newer) = block_on(futures::future::join(
            load_for_commit(&t.app, "about"),
            load_for_commit(&t.app, "contact"),
        ));

        assert!(older.is_none());
        let newer = newer.unwrap().unwrap();
        assert_eq!(newer.kind, PageKind::Contact);
        assert_eq!(t.app.navigation.current_page(), "contact");
        assert_eq!(t.fetcher.calls_to("data/pages/about.json"), 1);
    }

    #[test]
    fn test_superseded_failure_is_dropped_too() {
        let fetcher = FakeFetcher::new()
            .yielding()
            .with_status("data/pages/gone.json", 404, "Not Found")
            .with_json("data/pages/home.json", json!({ "type": "home" }));
        let t = test_app(fetcher);

        let (older, newer) = block_on(futures::future::join(
            load_for_commit(&t.app, "gone"),
            load_for_commit(&t.app, "home"),
        ));

        assert!(older.is_none());
        assert!(matches!(newer, Some(Ok(_))));
    }
}
