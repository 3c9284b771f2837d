//! Browser side of the crochet catalog page
//!
//! Compiled to WebAssembly and loaded by the static page. On start it waits
//! for the DOM, reads the optional `#site-config` block, and wires the
//! navigation menu, category filter, anchor scrolling, recipe modal and
//! footer. Each section is wired independently: a section whose markup is
//! missing is logged and skipped.

pub mod cards;
pub mod clipboard;
pub mod config;
pub mod dom;
pub mod filter;
pub mod footer;
pub mod listener;
pub mod logging;
pub mod menu;
pub mod modal;
pub mod modal_view;
pub mod scroll;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{error, info, warn};
use wasm_bindgen_x::prelude::*;

use listener::EventListener;
use modal::SharedModal;

/// Everything registered on the page. Dropping it detaches all listeners.
pub struct Page {
    pub modal: Option<SharedModal>,
    listeners: Vec<EventListener>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start, wasm_bindgen = wasm_bindgen_x))]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            web_sys_x::console::error_1(&JsValue::from_str(&e.to_string()));
            return;
        }
    };

    if is_loading(&document) {
        let options = web_sys_x::AddEventListenerOptions::new();
        options.set_once(true);
        let target = document.clone();
        let on_ready = Closure::<dyn FnMut()>::once(move || boot(&document)).into_js_value();
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            on_ready.unchecked_ref(),
            &options,
        ) {
            let message = format!("Failed to wait for DOMContentLoaded: {e:?}");
            web_sys_x::console::error_1(&JsValue::from_str(&message));
        }
    } else {
        boot(&document);
    }
}

/// `document.readyState == "loading"`
fn is_loading(document: &web_sys_x::Document) -> bool {
    let state = js_sys_x::Reflect::get(document, &"readyState".into())
        .ok()
        .and_then(|state| state.as_string());
    is_loading_state(state.as_deref())
}

/// Only a document that is still parsing needs to wait for DOMContentLoaded.
/// An unreadable state is treated as parsed so the page is wired right away.
fn is_loading_state(state: Option<&str>) -> bool {
    state == Some("loading")
}

fn boot(document: &web_sys_x::Document) {
    let config = config::load_and_init_logging(document);

    let page = mount(document, config);
    info!(
        "Catalog page ready ({} listeners, modal {})",
        page.listeners.len(),
        if page.modal.is_some() { "enabled" } else { "disabled" }
    );
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

/// Wire every section of the page.
pub fn mount(document: &web_sys_x::Document, config: crochet_common::SiteConfig) -> Page {
    let config = Rc::new(config);
    let mut listeners = Vec::new();

    let nav_menu = match menu::bind(document) {
        Ok((handle, registered)) => {
            listeners.extend(registered);
            Some(handle)
        }
        Err(e) => {
            warn!("Navigation menu not wired: {e}");
            None
        }
    };

    match filter::bind(document) {
        Ok(registered) => listeners.extend(registered),
        Err(e) => warn!("Category filter not wired: {e}"),
    }

    match scroll::bind(document, nav_menu, &config) {
        Ok(registered) => listeners.extend(registered),
        Err(e) => warn!("Anchor scrolling not wired: {e}"),
    }

    footer::set_year(document);
    footer::set_contact_link(document, &config);

    let modal = match modal::bind(document, &config) {
        Ok((modal, registered)) => {
            listeners.extend(registered);
            Some(modal)
        }
        Err(e) => {
            error!("Recipe modal not wired: {e}");
            None
        }
    };

    if let Some(modal) = &modal {
        match cards::bind(document, modal, &config) {
            Ok(registered) => listeners.extend(registered),
            Err(e) => warn!("Product cards not wired: {e}"),
        }
        match clipboard::bind(document, modal, &config) {
            Ok(listener) => listeners.push(listener),
            Err(e) => warn!("Copy button not wired: {e}"),
        }
    }

    Page { modal, listeners }
}
