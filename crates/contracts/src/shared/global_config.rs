use serde::{Deserialize, Serialize};

use super::lenient;

/// Contents of `data/global.json`. Loaded once at startup and read-only
/// afterwards.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GlobalConfig {
    #[serde(deserialize_with = "lenient::or_default")]
    pub site: Option<SiteInfo>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub navigation: Option<NavigationConfig>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub footer: Option<FooterConfig>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub preloader: Option<PreloaderConfig>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SiteInfo {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub logo: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    #[serde(deserialize_with = "lenient::or_default")]
    pub menu: Option<Vec<MenuItem>>,
    /// Links that leave the single-page app (separate pages, not routes).
    #[serde(deserialize_with = "lenient::or_default")]
    pub external: Option<Vec<ExternalLink>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct MenuItem {
    #[serde(deserialize_with = "lenient::string")]
    pub label: String,
    #[serde(deserialize_with = "lenient::string")]
    pub page: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ExternalLink {
    #[serde(deserialize_with = "lenient::string")]
    pub label: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct FooterConfig {
    #[serde(deserialize_with = "lenient::text")]
    pub copyright: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub links: Vec<SocialLink>,
    #[serde(rename = "footerNote", deserialize_with = "lenient::text")]
    pub footer_note: Option<String>,
}

/// Icon link used by the footer and the contact page.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SocialLink {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PreloaderConfig {
    #[serde(rename = "customAnimation", deserialize_with = "lenient::text")]
    pub custom_animation: Option<String>,
    /// Minimum time the overlay stays up, in milliseconds.
    #[serde(deserialize_with = "lenient::or_default")]
    pub duration: Option<u32>,
}

impl GlobalConfig {
    pub fn site_name(&self) -> Option<&str> {
        self.site.as_ref()?.name.as_deref()
    }

    pub fn logo(&self) -> Option<&str> {
        self.site.as_ref()?.logo.as_deref()
    }

    /// Menu entries, if the navigation section declares any.
    pub fn menu(&self) -> Option<&[MenuItem]> {
        self.navigation.as_ref()?.menu.as_deref()
    }

    pub fn external_links(&self) -> Option<&[ExternalLink]> {
        self.navigation.as_ref()?.external.as_deref()
    }

    pub fn footer_icons(&self) -> impl Iterator<Item = &str> {
        self.footer
            .iter()
            .flat_map(|footer| footer.links.iter())
            .filter_map(|link| link.icon.as_deref())
    }

    pub fn preloader_animation(&self) -> Option<&str> {
        self.preloader.as_ref()?.custom_animation.as_deref()
    }

    pub fn preloader_duration(&self) -> Option<u32> {
        self.preloader.as_ref()?.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_document() {
        let json = r#"{
            "site": { "name": "Jane Doe", "logo": "JD" },
            "navigation": { "menu": [ { "label": "Home", "page": "home" } ] },
            "footer": {
                "copyright": "(c) 2025",
                "links": [ { "name": "GitHub", "url": "https://github.com/jane", "icon": "res/svg/github.svg" } ],
                "footerNote": "<p>note</p>"
            },
            "preloader": { "customAnimation": "pulse", "duration": 1500 },
            "unknown": true
        }"#;
        let config: GlobalConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.site_name(), Some("Jane Doe"));
        assert_eq!(config.logo(), Some("JD"));
        assert_eq!(config.menu().map(|m| m.len()), Some(1));
        assert_eq!(config.footer_icons().collect::<Vec<_>>(), vec!["res/svg/github.svg"]);
        assert_eq!(config.preloader_animation(), Some("pulse"));
        assert_eq!(config.preloader_duration(), Some(1500));
    }

    #[test]
    fn test_empty_document_defaults() {
        let config: GlobalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GlobalConfig::default());
        assert!(config.menu().is_none());
        assert_eq!(config.footer_icons().count(), 0);
    }

    #[test]
    fn test_mistyped_preloader_keeps_the_rest() {
        let json = r#"{
            "site": { "name": "Jane Doe" },
            "navigation": { "menu": [ { "label": "Home", "page": "home" } ] },
            "preloader": { "customAnimation": 3, "duration": "1500" }
        }"#;
        let config: GlobalConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.site_name(), Some("Jane Doe"));
        assert_eq!(config.menu().map(|m| m.len()), Some(1));
        assert_eq!(config.preloader_duration(), None);
        assert_eq!(config.preloader_animation(), Some("3"));
    }

    #[test]
    fn test_mistyped_section_is_dropped_alone() {
        let config: GlobalConfig =
            serde_json::from_str(r#"{ "footer": "none", "site": { "logo": "JD" } }"#).unwrap();
        assert!(config.footer.is_none());
        assert_eq!(config.logo(), Some("JD"));
    }
}

