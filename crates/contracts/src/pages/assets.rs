use serde::{Deserialize, Serialize};

use crate::shared::lenient;

/// The asset-bearing fields of any page descriptor, regardless of its type.
/// Used to warm caches before the first page is shown.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct AssetRefs {
    #[serde(deserialize_with = "lenient::or_default")]
    pub hero: Option<ImageRef>,
    #[serde(deserialize_with = "lenient::text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub featured: Vec<IconRef>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub skills: Vec<IconRef>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub social: Vec<IconRef>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub work: Vec<ImageRef>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub academic: Vec<ImageRef>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ImageRef {
    #[serde(deserialize_with = "lenient::text")]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct IconRef {
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
}

impl AssetRefs {
    /// Referenced paths in a stable order: hero image, page image, icons,
    /// then timeline images.
    pub fn paths(&self) -> Vec<&str> {
        let hero = self.hero.iter().filter_map(|h| h.image.as_deref());
        let icons = self
            .featured
            .iter()
            .chain(&self.skills)
            .chain(&self.social)
            .filter_map(|i| i.icon.as_deref());
        let images = self
            .work
            .iter()
            .chain(&self.academic)
            .filter_map(|i| i.image.as_deref());

        hero.chain(self.image.as_deref())
            .chain(icons)
            .chain(images)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_across_page_types() {
        let refs: AssetRefs = serde_json::from_str(
            r#"{
                "type": "experience",
                "hero": { "image": "img/me.png" },
                "skills": [ { "icon": "res/svg/rust.svg" }, {} ],
                "work": [ { "image": "img/acme.png" } ],
                "academic": [ { "title": "BSc" } ]
            }"#,
        )
        .unwrap();
        assert_eq!(refs.paths(), vec!["img/me.png", "res/svg/rust.svg", "img/acme.png"]);
    }
}
