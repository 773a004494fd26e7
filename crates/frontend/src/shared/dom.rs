//! Thin helpers over the host document.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, Event, EventTarget};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Every element matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let list = match document().and_then(|doc| doc.query_selector_all(selector).ok()) {
        Some(list) => list,
        None => return Vec::new(),
    };

    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach `handler` for `event` on `target` for the lifetime of the target.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not attach {} listener", event);
    }
    closure.forget();
}

/// Run `f` once the document has been parsed.
pub fn when_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(doc) = document() else {
        return;
    };

    if doc.ready_state() != "loading" {
        f();
        return;
    }

    let mut f = Some(f);
    listen(&doc, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    });
}

pub fn set_content(id: &str, html: &str) -> bool {
    match element_by_id(id) {
        Some(element) => {
            element.set_inner_html(html);
            true
        }
        None => {
            log::error!("#{} is missing from the page", id);
            false
        }
    }
}
