use serde::{Deserialize, Serialize};

use crate::shared::lenient;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ResourcesPage {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    /// Shown above the folder list.
    #[serde(deserialize_with = "lenient::text")]
    pub note1: Option<String>,
    /// Shown below the folder list.
    #[serde(deserialize_with = "lenient::text")]
    pub note2: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub folders: Vec<ResourceFolder>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ResourceFolder {
    #[serde(deserialize_with = "lenient::string")]
    pub text: String,
    /// Shared Google Drive folder URL.
    #[serde(deserialize_with = "lenient::string")]
    pub link: String,
}
