//! Category filter buttons

use crochet_common::CategoryFilter;
use tracing::debug;
use wasm_bindgen_x::JsCast;

use crate::cards::CARD_SELECTOR;
use crate::dom::{self, DomError};
use crate::listener::EventListener;

const BUTTON_SELECTOR: &str = ".filter-btn";
const GRID_ID: &str = "grid-products";
const ACTIVE_CLASS: &str = "active";

pub fn bind(document: &web_sys_x::Document) -> Result<Vec<EventListener>, DomError> {
    let buttons: Vec<web_sys_x::Element> = dom::query_all(document, BUTTON_SELECTOR)?;
    let cards: Vec<web_sys_x::HtmlElement> = dom::query_all(document, CARD_SELECTOR)?;
    let grid = document
        .get_element_by_id(GRID_ID)
        .and_then(|el| el.dyn_into::<web_sys_x::HtmlElement>().ok());

    let listeners = buttons
        .iter()
        .map(|button| {
            let clicked = button.clone();
            let buttons = buttons.clone();
            let cards = cards.clone();
            let grid = grid.clone();
            EventListener::new(button, "click", move |_| {
                for other in &buttons {
                    let _ = other.class_list().remove_1(ACTIVE_CLASS);
                }
                let _ = clicked.class_list().add_1(ACTIVE_CLASS);

                let value = clicked.get_attribute("data-filter");
                let filter = CategoryFilter::from_attr(value.as_deref());
                apply(&filter, &cards);

                if let Some(grid) = &grid {
                    let _ = grid.focus();
                }
            })
        })
        .collect();

    Ok(listeners)
}

/// Show matching cards and hide the rest.
fn apply(filter: &CategoryFilter, cards: &[web_sys_x::HtmlElement]) {
    let categories: Vec<Option<String>> = cards
        .iter()
        .map(|card| card.get_attribute("data-category"))
        .collect();
    let visibility = filter.visibility(categories.iter().map(Option::as_deref));

    let mut shown = 0;
    for (card, visible) in cards.iter().zip(visibility) {
        let style = card.style();
        if visible {
            let _ = style.remove_property("display");
            shown += 1;
        } else {
            let _ = style.set_property("display", "none");
        }
    }
    debug!("Filter {filter:?} shows {shown} of {} cards", cards.len());
}
