use std::cell::RefCell;
use std::rc::Rc;

use contracts::shared::global_config::GlobalConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::Set;
use wasm_bindgen_futures::spawn_local;

use crate::config::SiteSettings;
use crate::layout::{footer, interactions, nav, preloader};
use crate::pages::controller;
use crate::pages::navigation::NavigationState;
use crate::shared::clock::{Clock, SystemClock};
use crate::shared::loader::{Fetcher, GlooFetcher};
use crate::shared::popup::{ExclusiveSlot, PopupHandle};
use crate::shared::storage::{KeyValueStore, SessionStore};
use crate::shared::svg_cache::SvgCache;
use crate::shared::theme;
use crate::usecases::preload::preload;
use crate::usecases::repo_cards::RepoCards;

/// Everything the site shares between stages. One instance per page load,
/// owned through `Rc` and handed to whatever needs it.
pub struct App {
    pub settings: SiteSettings,
    pub fetcher: Rc<dyn Fetcher>,
    pub clock: Rc<dyn Clock>,
    pub svg_cache: SvgCache,
    pub navigation: NavigationState,
    pub repo_cards: RepoCards,
    pub popups: ExclusiveSlot<PopupHandle>,
    config: RefCell<Rc<GlobalConfig>>,
}

impl App {
    pub fn new(
        settings: SiteSettings,
        fetcher: Rc<dyn Fetcher>,
        store: Rc<dyn KeyValueStore>,
        clock: Rc<dyn Clock>,
    ) -> Rc<Self> {
        let repo_cards = RepoCards::new(&settings, store, clock.clone());
        Rc::new(Self {
            svg_cache: SvgCache::new(settings.icon_dir.clone()),
            navigation: NavigationState::new(&settings.landing_page),
            repo_cards,
            popups: ExclusiveSlot::new(),
            config: RefCell::new(Rc::new(GlobalConfig::default())),
            settings,
            fetcher,
            clock,
        })
    }

    /// Wired to the real browser: `fetch`, sessionStorage, system time.
    pub fn browser() -> Rc<Self> {
        Self::new(
            SiteSettings::default(),
            Rc::new(GlooFetcher),
            Rc::new(SessionStore),
            Rc::new(SystemClock),
        )
    }

    pub fn config(&self) -> Rc<GlobalConfig> {
        self.config.borrow().clone()
    }

    pub fn set_config(&self, config: GlobalConfig) {
        *self.config.borrow_mut() = Rc::new(config);
    }

    /// Minimum time the preloader stays up.
    pub fn preloader_duration_ms(&self) -> u32 {
        self.config()
            .preloader_duration()
            .unwrap_or(self.settings.min_preloader_ms)
    }

    /// Spinner animation from the configuration, built-in name otherwise.
    pub fn preloader_animation(&self) -> String {
        let config = self.config();
        let name = config
            .preloader_animation()
            .unwrap_or(self.settings.preloader_animation.as_str());
        preloader::spinner_animation(name, self.preloader_duration_ms())
    }
}

/// Startup: preloader up, warm caches, build the chrome, show the landing
/// page, then drop the preloader once the minimum duration has passed.
pub async fn run(app: Rc<App>) {
    let started = app.clock.now_ms();
    let overlay = preloader::show(&app.settings);

    let report = preload(&app).await;
    log::info!(
        "preload finished: config loaded {}, {} pages, {} assets ({} failed)",
        report.config_loaded,
        report.pages_loaded,
        report.assets,
        report.assets_failed
    );
    app.set_config(report.config);
    overlay.animation.set(app.preloader_animation());

    nav::mount_navigation(&app);
    spawn_local(controller::navigate(
        app.clone(),
        app.settings.landing_page.clone(),
    ));
    interactions::wire_mobile_menu();
    interactions::wire_content_region(&app);
    theme::init();
    footer::mount_footer(&app).await;

    let elapsed = app.clock.now_ms() - started;
    let wait = preloader::remaining_ms(app.preloader_duration_ms(), elapsed);
    TimeoutFuture::new(wait).await;
    overlay.visible.set(false);
}
