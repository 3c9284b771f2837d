//! Smooth scrolling for same-page anchors

use std::rc::Rc;

use crochet_common::{nav, SiteConfig};

use crate::dom::{self, DomError};
use crate::listener::EventListener;
use crate::menu::NavHandle;

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Intercept clicks on `#fragment` links whose target exists and scroll to it,
/// leaving room for the fixed header. The navigation menu is closed first.
pub fn bind(
    document: &web_sys_x::Document,
    nav_menu: Option<Rc<NavHandle>>,
    config: &SiteConfig,
) -> Result<Vec<EventListener>, DomError> {
    let anchors: Vec<web_sys_x::Element> = dom::query_all(document, ANCHOR_SELECTOR)?;
    let offset = config.scroll_offset;

    let listeners = anchors
        .iter()
        .map(|anchor| {
            let document = document.clone();
            let link = anchor.clone();
            let nav_menu = nav_menu.clone();
            EventListener::new(anchor, "click", move |event| {
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let Some(target) = nav::anchor_target(&href).and_then(|id| document.get_element_by_id(id))
                else {
                    return;
                };
                event.prevent_default();
                if let Some(nav_menu) = &nav_menu {
                    nav_menu.close();
                }
                scroll_to(&target, offset);
            })
        })
        .collect();

    Ok(listeners)
}

fn scroll_to(target: &web_sys_x::Element, offset: f64) {
    let Ok(window) = dom::window() else {
        return;
    };
    let top = nav::scroll_destination(
        target.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
        offset,
    );

    let options = web_sys_x::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys_x::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
