//! Exclusive resource popup: an overlay embedding a shared Drive folder.
//!
//! At most one popup exists. Opening another tears the current one down
//! first; the close control and a click on the backdrop dismiss it.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use leptos::ev;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::dom;
use crate::app::App;

/// Holds at most one open item. Dropping the item dismisses it.
pub struct ExclusiveSlot<H> {
    current: RefCell<Option<(u64, H)>>,
    issued: Cell<u64>,
}

impl<H> Default for ExclusiveSlot<H> {
    fn default() -> Self {
        Self {
            current: RefCell::new(None),
            issued: Cell::new(0),
        }
    }
}

impl<H> ExclusiveSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dismiss whatever is open, then build and hold a new item. `make`
    /// receives the ticket the item must present to close itself.
    pub fn open(&self, make: impl FnOnce(u64) -> H) -> u64 {
        let previous = self.current.borrow_mut().take();
        drop(previous);

        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        let item = make(ticket);
        *self.current.borrow_mut() = Some((ticket, item));
        ticket
    }

    /// Dismiss the open item if it is still the one `ticket` was issued for.
    pub fn close(&self, ticket: u64) -> bool {
        if self.open_ticket() != Some(ticket) {
            return false;
        }
        let taken = self.current.borrow_mut().take();
        drop(taken);
        true
    }

    pub fn open_ticket(&self) -> Option<u64> {
        self.current.borrow().as_ref().map(|(ticket, _)| *ticket)
    }

    pub fn is_open(&self) -> bool {
        self.open_ticket().is_some()
    }
}

/// A mounted popup view. Dropping it unmounts the view.
pub type PopupHandle = Box<dyn Any>;

pub fn embed_url(folder_id: &str) -> String {
    format!("https://drive.google.com/embeddedfolderview?id={}#list", folder_id)
}

pub fn folder_url(folder_id: &str) -> String {
    format!("https://drive.google.com/drive/folders/{}", folder_id)
}

#[component]
pub fn ResourcePopup(
    title: String,
    folder_id: String,
    /// Callback when the popup should close
    on_close: Rc<dyn Fn()>,
) -> impl IntoView {
    let frame_failed = RwSignal::new(false);
    let src = embed_url(&folder_id);
    let external = folder_url(&folder_id);

    let close_from_backdrop = on_close.clone();
    let close_from_button = on_close;

    view! {
        <div
            id="exclusive-resource-popup"
            class="resource-popup"
            on:click=move |_| (close_from_backdrop)()
        >
            <div class="resource-popup-content" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <button class="resource-popup-close" on:click=move |_| (close_from_button)()>
                    "×"
                </button>
                <h2 class="resource-popup-title">{title}</h2>
                <div class="resource-popup-iframe">
                    <Show
                        when=move || !frame_failed.get()
                        fallback=move || {
                            let external = external.clone();
                            view! {
                                <div class="resource-popup-fallback">
                                    <h3>"Unable to load Google Drive content"</h3>
                                    <p>"There was an error loading the resources. Please try again later."</p>
                                    <p class="text-secondary">
                                        "If this issue persists, you may need to check your browser settings or try a different browser."
                                    </p>
                                    <button
                                        class="btn"
                                        on:click=move |_| {
                                            if let Some(window) = web_sys::window() {
                                                let _ = window.open_with_url_and_target(&external, "_blank");
                                            }
                                        }
                                    >
                                        "Open in Google Drive"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <iframe
                            src=src.clone()
                            allow="fullscreen; clipboard-read; clipboard-write"
                            referrerpolicy="strict-origin-when-cross-origin"
                            on:load=|_| log::debug!("resource frame loaded")
                            on:error=move |_| {
                                log::error!("Error loading Google Drive frame");
                                frame_failed.set(true);
                            }
                        ></iframe>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Open the popup for a folder, replacing any popup already open.
pub fn open_resource_popup(app: &Rc<App>, label: &str, folder_id: &str) {
    let Some(body) = dom::document().and_then(|doc| doc.body()) else {
        log::error!("document has no body to host the resource popup");
        return;
    };

    let weak: Weak<App> = Rc::downgrade(app);
    let title = format!("{} Resources", label);
    let folder_id = folder_id.to_string();

    app.popups.open(move |ticket| {
        let on_close: Rc<dyn Fn()> = Rc::new(move || {
            let weak = weak.clone();
            // Unmount after the click handler that asked for it has returned.
            spawn_local(async move {
                if let Some(app) = weak.upgrade() {
                    app.popups.close(ticket);
                }
            });
        });

        let handle = mount_to(body, move || {
            view! { <ResourcePopup title=title folder_id=folder_id on_close=on_close /> }
        });
        Box::new(handle) as PopupHandle
    });
}
