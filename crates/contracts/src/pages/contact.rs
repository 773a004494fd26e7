use serde::{Deserialize, Serialize};

use crate::shared::global_config::SocialLink;
use crate::shared::lenient;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ContactPage {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub form: Option<ContactForm>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub social: Vec<SocialLink>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ContactForm {
    #[serde(deserialize_with = "lenient::or_default")]
    pub fields: Vec<FormField>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct FormField {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub label: String,
    /// `textarea`, or any `<input>` type. Absent means `text`.
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub required: bool,
}
