use serde::{Deserialize, Serialize};

use crate::shared::lenient;
use crate::shared::text::TextBlock;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ExperiencePage {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub resume: Option<Resume>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub work: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub academic: Vec<ExperienceEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Resume {
    #[serde(deserialize_with = "lenient::text")]
    pub link: Option<String>,
    #[serde(rename = "outsideText", deserialize_with = "lenient::text")]
    pub outside_text: Option<String>,
    #[serde(rename = "insideText", deserialize_with = "lenient::text")]
    pub inside_text: Option<String>,
}

/// A job or a degree. Work entries name a `company`, education entries an
/// `institution`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub institution: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub duration: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub description: Option<TextBlock>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub technologies: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::text")]
    pub image: Option<String>,
}

impl ExperienceEntry {
    pub fn organization(&self) -> Option<&str> {
        self.company.as_deref().or(self.institution.as_deref())
    }
}
