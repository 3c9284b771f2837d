//! Hamburger navigation menu

use std::cell::RefCell;
use std::rc::Rc;

use crochet_common::NavMenu;

use crate::dom::{self, DomError};
use crate::listener::EventListener;

const TOGGLE_ID: &str = "btn-hamburger";
const NAV_ID: &str = "main-nav";
const NAV_LINK_SELECTOR: &str = ".main-nav a";
const OPEN_CLASS: &str = "open";

/// The menu's state together with the elements that reflect it.
pub struct NavHandle {
    state: RefCell<NavMenu>,
    toggle: web_sys_x::Element,
    nav: web_sys_x::Element,
}

impl NavHandle {
    pub fn toggle(&self) {
        self.state.borrow_mut().toggle();
        self.sync();
    }

    /// Close the menu if it is open.
    pub fn close(&self) {
        if self.state.borrow_mut().close() {
            self.sync();
        }
    }

    fn sync(&self) {
        let menu = *self.state.borrow();
        let _ = self
            .nav
            .class_list()
            .toggle_with_force(OPEN_CLASS, menu.is_open());
        let _ = self
            .toggle
            .class_list()
            .toggle_with_force(OPEN_CLASS, menu.is_open());
        let _ = self
            .toggle
            .set_attribute("aria-expanded", menu.aria_expanded());
    }
}

/// Register the toggle button and the close-on-navigate links.
pub fn bind(
    document: &web_sys_x::Document,
) -> Result<(Rc<NavHandle>, Vec<EventListener>), DomError> {
    let toggle: web_sys_x::Element = dom::by_id(document, TOGGLE_ID)?;
    let nav: web_sys_x::Element = dom::by_id(document, NAV_ID)?;
    let handle = Rc::new(NavHandle {
        state: RefCell::new(NavMenu::new(nav.class_list().contains(OPEN_CLASS))),
        toggle: toggle.clone(),
        nav,
    });

    let mut listeners = Vec::new();

    let on_toggle = handle.clone();
    listeners.push(EventListener::new(&toggle, "click", move |_| {
        on_toggle.toggle();
    }));

    let links: Vec<web_sys_x::Element> = dom::query_all(document, NAV_LINK_SELECTOR)?;
    for link in links {
        let on_link = handle.clone();
        listeners.push(EventListener::new(&link, "click", move |_| {
            on_link.close();
        }));
    }

    Ok((handle, listeners))
}
