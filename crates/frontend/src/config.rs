//! Settings compiled into the bundle. Site content and the preloader tuning
//! come from `data/global.json` at runtime; these are the conventions and
//! fallbacks around it.

use contracts::shared::global_config::ExternalLink;

#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub global_config_path: String,
    pub pages_dir: String,
    /// Only icons under this prefix are inlined as SVG.
    pub icon_dir: String,
    pub landing_page: String,
    /// Pages to warm when the configuration declares no menu.
    pub default_pages: Vec<String>,
    /// Links appended after the menu when the configuration declares none.
    pub default_external_links: Vec<ExternalLink>,
    pub repo_api_base: String,
    pub repo_cache_prefix: String,
    pub repo_cache_ttl_ms: i64,
    pub preloader_animation: String,
    pub min_preloader_ms: u32,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            global_config_path: "data/global.json".to_string(),
            pages_dir: "data/pages".to_string(),
            icon_dir: "res/svg/".to_string(),
            landing_page: "home".to_string(),
            default_pages: ["home", "about", "experience", "contact", "resources"]
                .into_iter()
                .map(String::from)
                .collect(),
            default_external_links: vec![ExternalLink {
                label: "devLOGS".to_string(),
                url: "/devlogs/".to_string(),
            }],
            repo_api_base: "https://api.github.com".to_string(),
            repo_cache_prefix: "github_repos_".to_string(),
            repo_cache_ttl_ms: 5 * 60 * 1000,
            preloader_animation: "spin".to_string(),
            min_preloader_ms: 2000,
        }
    }
}

impl SiteSettings {
    pub fn page_path(&self, page_id: &str) -> String {
        format!("{}/{}.json", self.pages_dir, page_id)
    }
}
