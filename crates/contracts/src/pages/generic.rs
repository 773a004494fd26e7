use serde::{Deserialize, Serialize};

use crate::shared::lenient;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GenericPage {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub content: Option<GenericContent>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum GenericContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// `{"type": "paragraph", "text": ...}` or
/// `{"type": "heading", "level": 3, "text": ...}`. Other types are skipped.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ContentBlock {
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub text: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub level: Option<u8>,
}

impl ContentBlock {
    pub const DEFAULT_HEADING_LEVEL: u8 = 2;

    /// Heading level clamped into `1..=6`.
    pub fn heading_level(&self) -> u8 {
        self.level.unwrap_or(Self::DEFAULT_HEADING_LEVEL).clamp(1, 6)
    }
}
