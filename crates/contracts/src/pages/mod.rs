//! Page descriptors: one JSON document per page, shaped by its `type`.

pub mod about;
pub mod assets;
pub mod contact;
pub mod experience;
pub mod generic;
pub mod home;
pub mod resources;

pub use about::AboutPage;
pub use assets::AssetRefs;
pub use contact::ContactPage;
pub use experience::ExperiencePage;
pub use generic::GenericPage;
pub use home::HomePage;
pub use resources::ResourcesPage;

use serde_json::Value;

/// Declared page type. Anything unrecognized renders as [`PageKind::Generic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Home,
    About,
    Experience,
    Contact,
    Resources,
    Generic,
}

impl PageKind {
    pub fn from_type(value: Option<&str>) -> Self {
        match value {
            Some("home") => PageKind::Home,
            Some("about") => PageKind::About,
            Some("experience") => PageKind::Experience,
            Some("contact") => PageKind::Contact,
            Some("resources") => PageKind::Resources,
            _ => PageKind::Generic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::About => "about",
            PageKind::Experience => "experience",
            PageKind::Contact => "contact",
            PageKind::Resources => "resources",
            PageKind::Generic => "generic",
        }
    }
}

/// A parsed page descriptor.
#[derive(Clone, Debug, PartialEq)]
pub enum PageContent {
    Home(HomePage),
    About(AboutPage),
    Experience(ExperiencePage),
    Contact(ContactPage),
    Resources(ResourcesPage),
    Generic(GenericPage),
}

impl PageContent {
    /// Dispatches on the `type` field and parses the rest of the document
    /// into the matching page shape.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let kind = PageKind::from_type(value.get("type").and_then(Value::as_str));
        let content = match kind {
            PageKind::Home => PageContent::Home(serde_json::from_value(value)?),
            PageKind::About => PageContent::About(serde_json::from_value(value)?),
            PageKind::Experience => PageContent::Experience(serde_json::from_value(value)?),
            PageKind::Contact => PageContent::Contact(serde_json::from_value(value)?),
            PageKind::Resources => PageContent::Resources(serde_json::from_value(value)?),
            PageKind::Generic => PageContent::Generic(serde_json::from_value(value)?),
        };
        Ok(content)
    }

    pub fn kind(&self) -> PageKind {
        match self {
            PageContent::Home(_) => PageKind::Home,
            PageContent::About(_) => PageKind::About,
            PageContent::Experience(_) => PageKind::Experience,
            PageContent::Contact(_) => PageKind::Contact,
            PageContent::Resources(_) => PageKind::Resources,
            PageContent::Generic(_) => PageKind::Generic,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            PageContent::Home(page) => page.title.as_deref(),
            PageContent::About(page) => page.title.as_deref(),
            PageContent::Experience(page) => page.title.as_deref(),
            PageContent::Contact(page) => page.title.as_deref(),
            PageContent::Resources(page) => page.title.as_deref(),
            PageContent::Generic(page) => page.title.as_deref(),
        }
    }

    /// Icon paths the page shows, in document order. Repeats are kept so the
    /// caller sees exactly what the markup will reference.
    pub fn icon_paths(&self) -> Vec<&str> {
        match self {
            PageContent::About(page) => page
                .featured
                .iter()
                .filter_map(|item| item.icon.as_deref())
                .chain(page.skills.iter().filter_map(|skill| skill.icon.as_deref()))
                .collect(),
            PageContent::Contact(page) => page
                .social
                .iter()
                .filter_map(|link| link.icon.as_deref())
                .collect(),
            _ => Vec::new(),
        }
    }
}
