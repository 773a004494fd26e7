use serde::{Deserialize, Serialize};

use crate::shared::lenient;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct HomePage {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub hero: Option<Hero>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub github: Option<GithubSection>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Hero {
    #[serde(deserialize_with = "lenient::text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub cta: Option<CallToAction>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CallToAction {
    #[serde(deserialize_with = "lenient::text")]
    pub text: Option<String>,
    /// Page identifier the button navigates to.
    #[serde(deserialize_with = "lenient::text")]
    pub link: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GithubSection {
    #[serde(deserialize_with = "lenient::or_default")]
    pub repos: Vec<String>,
}

impl HomePage {
    pub fn repo_urls(&self) -> &[String] {
        self.github.as_ref().map(|g| g.repos.as_slice()).unwrap_or_default()
    }
}
