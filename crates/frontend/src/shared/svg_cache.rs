//! In-memory SVG cache and the icon resolution stage that feeds renderers.

use std::cell::RefCell;
use std::collections::HashMap;

use super::loader::Fetcher;

/// Icon path → inline SVG markup. Entries are never evicted.
pub struct SvgCache {
    icon_dir: String,
    entries: RefCell<HashMap<String, String>>,
}

impl SvgCache {
    pub fn new(icon_dir: impl Into<String>) -> Self {
        Self {
            icon_dir: icon_dir.into(),
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// True for paths under the icon directory ending in `.svg`. Anything
    /// else is an emoji or literal glyph and is shown as-is.
    pub fn is_inline_svg(&self, path: &str) -> bool {
        path.starts_with(&self.icon_dir) && path.ends_with(".svg")
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.entries.borrow().get(path).cloned()
    }

    pub fn insert(&self, path: impl Into<String>, markup: impl Into<String>) {
        self.entries.borrow_mut().insert(path.into(), markup.into());
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Markup to show for `path`. Fetches on a miss; on failure the path
    /// itself is returned so rendering carries on.
    pub async fn resolve(&self, fetcher: &dyn Fetcher, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        if !self.is_inline_svg(path) {
            return path.to_string();
        }
        if let Some(markup) = self.get(path) {
            log::debug!("svg cache hit: {}", path);
            return markup;
        }

        match fetcher.get(path).await {
            Ok(response) if response.ok() => {
                self.insert(path, response.body.clone());
                response.body
            }
            Ok(response) => {
                log::error!(
                    "Error loading SVG icon {}: {} {}",
                    path,
                    response.status,
                    response.status_text
                );
                path.to_string()
            }
            Err(e) => {
                log::error!("Error loading SVG icon {}: {}", path, e);
                path.to_string()
            }
        }
    }
}

/// Resolved icon markup keyed by the path the descriptor declared.
#[derive(Debug, Default, Clone)]
pub struct IconTable(HashMap<String, String>);

impl IconTable {
    /// Markup for `path`, or the path itself if it was never resolved.
    pub fn icon<'a>(&'a self, path: &'a str) -> &'a str {
        self.0.get(path).map(String::as_str).unwrap_or(path)
    }

    pub fn insert(&mut self, path: impl Into<String>, markup: impl Into<String>) {
        self.0.insert(path.into(), markup.into());
    }
}

/// Resolves every path one after another, in the order given. Repeated paths
/// are resolved once.
pub async fn resolve_icons<'a, I>(cache: &SvgCache, fetcher: &dyn Fetcher, paths: I) -> IconTable
where
    I: IntoIterator<Item = &'a str>,
{
    let mut table = IconTable::default();
    for path in paths {
        if table.0.contains_key(path) {
            continue;
        }
        let markup = cache.resolve(fetcher, path).await;
        table.insert(path, markup);
    }
    table
}
