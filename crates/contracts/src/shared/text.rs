use serde::{Deserialize, Serialize};

/// A text field that content authors may write either as one string or as
/// an ordered list of strings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum TextBlock {
    Single(String),
    Many(Vec<String>),
}

impl TextBlock {
    /// Paragraphs in document order.
    pub fn paragraphs(&self) -> Vec<&str> {
        match self {
            TextBlock::Single(text) => vec![text.as_str()],
            TextBlock::Many(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_many() {
        let single: TextBlock = serde_json::from_str(r#""one""#).unwrap();
        assert_eq!(single.paragraphs(), vec!["one"]);

        let many: TextBlock = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(many.paragraphs(), vec!["a", "b"]);
    }
}
