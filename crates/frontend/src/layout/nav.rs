use std::rc::Rc;

use contracts::shared::global_config::{ExternalLink, MenuItem};
use leptos::ev;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::interactions::close_mobile_menu;
use crate::app::App;
use crate::pages::controller;
use crate::shared::dom;

#[component]
pub fn NavMenu(
    items: Vec<MenuItem>,
    external: Vec<ExternalLink>,
    /// Current page identifier; the matching link gets `active`
    current: RwSignal<String>,
    on_select: Rc<dyn Fn(String)>,
) -> impl IntoView {
    view! {
        {items
            .into_iter()
            .map(|item| {
                let page = item.page.clone();
                let data_page = item.page.clone();
                let active_page = item.page;
                let on_select = on_select.clone();
                view! {
                    <li>
                        <a
                            href="#"
                            data-page=data_page
                            class:active=move || current.get() == active_page
                            on:click=move |ev: ev::MouseEvent| {
                                ev.prevent_default();
                                close_mobile_menu();
                                (on_select)(page.clone());
                            }
                        >
                            {item.label}
                        </a>
                    </li>
                }
            })
            .collect_view()}
        {external
            .into_iter()
            .map(|link| {
                view! {
                    <li>
                        <a href=link.url on:click=|_| close_mobile_menu()>
                            {link.label}
                        </a>
                    </li>
                }
            })
            .collect_view()}
    }
}

/// Fill `#nav-logo` and `#nav-menu` from the configuration.
pub fn mount_navigation(app: &Rc<App>) {
    let config = app.config();

    if let (Some(logo), Some(element)) = (config.logo(), dom::element_by_id("nav-logo")) {
        element.set_text_content(Some(logo));
    }

    let Some(items) = config.menu().map(<[MenuItem]>::to_vec) else {
        log::warn!("configuration declares no navigation menu");
        return;
    };
    let external = config
        .external_links()
        .map(<[ExternalLink]>::to_vec)
        .unwrap_or_else(|| app.settings.default_external_links.clone());

    let Some(menu) = dom::element_by_id("nav-menu").and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        log::error!("#nav-menu is missing from the page");
        return;
    };
    menu.set_inner_html("");

    let app = app.clone();
    let current = app.navigation.signal();
    let on_select: Rc<dyn Fn(String)> = Rc::new(move |page| controller::go_to(&app, page));

    mount_to(menu, move || {
        view! { <NavMenu items=items external=external current=current on_select=on_select /> }
    })
    .forget();
}
