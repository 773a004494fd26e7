//! Listener wiring for the page chrome and for markup produced by the
//! renderers. Content listeners are delegated from `#main-content` and
//! attached once, so they survive every commit without being re-added.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement};

use crate::app::App;
use crate::pages::controller::{self, CONTENT_REGION};
use crate::shared::dom;
use crate::shared::popup::open_resource_popup;

const CONTACT_FORM_ID: &str = "contact-form";
const CONTACT_ACK: &str = "Thank you for your message! Form submission is not configured yet.";

/// Folder label from a resource button caption such as
/// `View Semester 1 Resources`.
pub fn resource_label(caption: &str) -> String {
    caption
        .replace("View ", "")
        .replace("Hide ", "")
        .replace(" Resources", "")
}

/// What a click inside the content region asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentClick {
    Navigate(String),
    OpenResource { label: String, folder_id: String },
}

impl ContentClick {
    /// `cta_page` is the `data-cta-page` of the nearest CTA ancestor of the
    /// click target, `resource` the caption and folder id of the nearest
    /// resource button. A CTA wins when both are present.
    pub fn classify(
        cta_page: Option<String>,
        resource: Option<(String, String)>,
    ) -> Option<Self> {
        if let Some(page) = cta_page {
            return Some(ContentClick::Navigate(page));
        }
        resource.map(|(caption, folder_id)| ContentClick::OpenResource {
            label: resource_label(&caption),
            folder_id,
        })
    }
}

fn closest(ev: &Event, selector: &str) -> Option<Element> {
    ev.target()?.dyn_into::<Element>().ok()?.closest(selector).ok()?
}

pub fn close_mobile_menu() {
    if let Some(menu) = dom::element_by_id("nav-menu") {
        let _ = menu.class_list().remove_1("active");
    }
}

pub fn wire_mobile_menu() {
    let Some(hamburger) = dom::element_by_id("hamburger") else {
        log::warn!("#hamburger is missing from the page");
        return;
    };
    dom::listen(&hamburger, "click", |_| {
        if let Some(menu) = dom::element_by_id("nav-menu") {
            let _ = menu.class_list().toggle("active");
        }
    });
}

/// CTA buttons, resource buttons and the contact form, for whatever page is
/// committed now or later.
pub fn wire_content_region(app: &Rc<App>) {
    let Some(region) = dom::element_by_id(CONTENT_REGION) else {
        log::warn!("#{} is missing from the page", CONTENT_REGION);
        return;
    };

    let app = app.clone();
    dom::listen(&region, "click", move |ev| {
        let cta_page =
            closest(&ev, "[data-cta-page]").and_then(|e| e.get_attribute("data-cta-page"));
        let resource = closest(&ev, ".btn-resource").map(|button| {
            (
                button.text_content().unwrap_or_default(),
                button.get_attribute("data-folder-id").unwrap_or_default(),
            )
        });

        let Some(action) = ContentClick::classify(cta_page, resource) else {
            return;
        };
        ev.prevent_default();
        match action {
            ContentClick::Navigate(page) => controller::go_to(&app, page),
            ContentClick::OpenResource { label, folder_id } => {
                open_resource_popup(&app, &label, &folder_id)
            }
        }
    });

    dom::listen(&region, "submit", |ev| {
        let Some(form) = ev.target().and_then(|t| t.dyn_into::<HtmlFormElement>().ok()) else {
            return;
        };
        if form.id() != CONTACT_FORM_ID {
            return;
        }
        ev.prevent_default();
        log::info!("contact form submitted with {} fields; no backend configured", form.length());
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(CONTACT_ACK);
        }
        form.reset();
    });
}
