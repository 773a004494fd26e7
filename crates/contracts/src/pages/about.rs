use serde::{Deserialize, Serialize};

use crate::shared::lenient;
use crate::shared::text::TextBlock;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct AboutPage {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub content: Option<TextBlock>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub featured: Vec<FeaturedItem>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub skills: Vec<Skill>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct FeaturedItem {
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub level: Option<String>,
}
