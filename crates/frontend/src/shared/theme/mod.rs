//! Theme management for the site.
//!
//! Supports light, dark and auto (follow the system color scheme). The
//! preference is persisted in localStorage and applied as a `data-theme`
//! attribute on the document element.

use web_sys::{window, MediaQueryList};

use super::dom;

/// Available themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

impl Theme {
    /// Name used in localStorage and in `data-theme` on theme buttons.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "auto" => Some(Theme::Auto),
            _ => None,
        }
    }

    /// The concrete scheme written to the document.
    pub fn resolve(&self, system_prefers_dark: bool) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto if system_prefers_dark => "dark",
            Theme::Auto => "light",
        }
    }

    /// Stored choice if there is one, otherwise the system scheme.
    pub fn preferred(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        if let Some(theme) = stored.and_then(Theme::parse) {
            return theme;
        }
        if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

const THEME_STORAGE_KEY: &str = "theme";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn load_theme_from_storage() -> Option<String> {
    get_local_storage()?.get_item(THEME_STORAGE_KEY).ok()?
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn dark_scheme_query() -> Option<MediaQueryList> {
    window()?.match_media(DARK_SCHEME_QUERY).ok()?
}

fn system_prefers_dark() -> bool {
    dark_scheme_query().map(|q| q.matches()).unwrap_or(false)
}

/// Apply, persist and highlight `theme`.
pub fn set_theme(theme: Theme) {
    let scheme = theme.resolve(system_prefers_dark());
    if let Some(root) = dom::document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute("data-theme", scheme);
    }
    save_theme_to_storage(theme);
    update_active_theme_button(theme);
}

fn update_active_theme_button(theme: Theme) {
    for button in dom::query_all(".theme-option") {
        let classes = button.class_list();
        let _ = classes.remove_1("active");
        if button.get_attribute("data-theme").as_deref() == Some(theme.as_str()) {
            let _ = classes.add_1("active");
        }
    }
}

/// Wire the `.theme-option` buttons, follow system scheme changes while the
/// choice is `auto`, and apply the preferred theme.
pub fn init() {
    for button in dom::query_all(".theme-option") {
        let choice = button.get_attribute("data-theme");
        dom::listen(&button, "click", move |_| {
            match choice.as_deref().and_then(Theme::parse) {
                Some(theme) => set_theme(theme),
                None => log::warn!("theme button without a known data-theme"),
            }
        });
    }

    if let Some(query) = dark_scheme_query() {
        dom::listen(&query, "change", |_| {
            if load_theme_from_storage().as_deref() == Some(Theme::Auto.as_str()) {
                set_theme(Theme::Auto);
            }
        });
    }

    let stored = load_theme_from_storage();
    set_theme(Theme::preferred(stored.as_deref(), system_prefers_dark()));
}
