//! Startup cache warming.
//!
//! Loads the global configuration, then every page descriptor and every
//! image or icon they reference, all best-effort. Nothing here can stop the
//! site from starting: the worst outcome is a default configuration and
//! cold caches.

use std::collections::HashSet;

use contracts::pages::AssetRefs;
use contracts::shared::global_config::GlobalConfig;
use futures::future::join_all;

use crate::app::App;
use crate::shared::loader::load_json;

#[derive(Debug, Default)]
pub struct PreloadReport {
    pub config: GlobalConfig,
    pub config_loaded: bool,
    pub pages_loaded: usize,
    pub assets: usize,
    pub assets_failed: usize,
}

/// Pages whose descriptors are warmed: the menu, or the built-in list when
/// the configuration has no menu.
pub fn pages_to_warm(config: &GlobalConfig, defaults: &[String]) -> Vec<String> {
    match config.menu() {
        Some(menu) => menu.iter().map(|item| item.page.clone()).collect(),
        None => defaults.to_vec(),
    }
}

/// Drop repeated paths, keeping the first occurrence.
pub fn dedupe<'a>(paths: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|path| !path.is_empty() && seen.insert(*path))
        .map(str::to_string)
        .collect()
}

pub async fn preload(app: &App) -> PreloadReport {
    let fetcher = app.fetcher.as_ref();

    let config: GlobalConfig = match load_json(fetcher, &app.settings.global_config_path).await {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Asset preloading failed: {}", e);
            return PreloadReport::default();
        }
    };

    let pages = pages_to_warm(&config, &app.settings.default_pages);
    let page_paths: Vec<String> = pages.iter().map(|p| app.settings.page_path(p)).collect();
    let descriptors: Vec<AssetRefs> = join_all(
        page_paths
            .iter()
            .map(|path| load_json::<AssetRefs>(fetcher, path)),
    )
    .await
    .into_iter()
    .filter_map(|result| result.map_err(|e| log::warn!("{}", e)).ok())
    .collect();

    let assets = dedupe(
        config
            .footer_icons()
            .chain(descriptors.iter().flat_map(|refs| refs.paths())),
    );

    let outcomes = join_all(assets.iter().map(|url| async move {
        match fetcher.get(url).await {
            Ok(response) if response.ok() => {
                if url.ends_with(".svg") {
                    app.svg_cache.insert(url.as_str(), response.body);
                }
                true
            }
            _ => false,
        }
    }))
    .await;

    PreloadReport {
        pages_loaded: descriptors.len(),
        assets: assets.len(),
        assets_failed: outcomes.iter().filter(|ok| !**ok).count(),
        config,
        config_loaded: true,
    }
}
