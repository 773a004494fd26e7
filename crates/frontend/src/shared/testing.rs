//! In-memory stand-ins for the browser, shared by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use serde_json::Value;

use super::clock::Clock;
use super::loader::{FetchError, Fetcher, HttpResponse};
use super::storage::{KeyValueStore, StorageError};
use crate::app::App;
use crate::config::SiteSettings;

/// Serves canned responses and records every requested URL. Unknown URLs
/// fail like an unreachable host.
#[derive(Default)]
pub struct FakeFetcher {
    routes: RefCell<HashMap<String, HttpResponse>>,
    calls: RefCell<Vec<String>>,
    yielding: bool,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request returns `Pending` once before answering, so several
    /// requests can be in flight together under one executor.
    pub fn yielding(mut self) -> Self {
        self.yielding = true;
        self
    }

    pub fn with_text(self, url: &str, body: &str) -> Self {
        self.route(url, 200, "OK", body);
        self
    }

    pub fn with_json(self, url: &str, body: Value) -> Self {
        self.route(url, 200, "OK", &body.to_string());
        self
    }

    pub fn with_status(self, url: &str, status: u16, status_text: &str) -> Self {
        self.route(url, status, status_text, "");
        self
    }

    pub fn route(&self, url: &str, status: u16, status_text: &str, body: &str) {
        self.routes.borrow_mut().insert(
            url.to_string(),
            HttpResponse {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            },
        );
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == url).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl Fetcher for FakeFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.calls.borrow_mut().push(url.to_string());
        if self.yielding {
            YieldOnce(false).await;
        }
        self.routes
            .borrow()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Network {
                url: url.to_string(),
                message: "connection refused".to_string(),
            })
    }
}

struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            return Poll::Ready(());
        }
        self.0 = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    pub reject_writes: Cell<bool>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "QuotaExceededError".to_string(),
            });
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct ManualClock(Cell<i64>);

impl ManualClock {
    pub fn at(ms: i64) -> Self {
        Self(Cell::new(ms))
    }

    pub fn advance(&self, ms: i64) {
        self.0.set(self.0.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.0.get()
    }
}

pub struct TestApp {
    pub app: Rc<App>,
    pub fetcher: Rc<FakeFetcher>,
    pub store: Rc<MemoryStore>,
    pub clock: Rc<ManualClock>,
}

pub fn test_app(fetcher: FakeFetcher) -> TestApp {
    let fetcher = Rc::new(fetcher);
    let store = Rc::new(MemoryStore::default());
    let clock = Rc::new(ManualClock::at(1_700_000_000_000));
    let app = App::new(
        SiteSettings::default(),
        fetcher.clone(),
        store.clone(),
        clock.clone(),
    );
    TestApp {
        app,
        fetcher,
        store,
        clock,
    }
}
