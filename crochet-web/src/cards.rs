//! Product cards: open the recipe modal from a card's image

use std::rc::Rc;

use crochet_common::{recipe, share, ModalContent, SiteConfig};
use tracing::warn;
use wasm_bindgen_x::JsCast;

use crate::dom::{self, DomError};
use crate::listener::EventListener;
use crate::modal::SharedModal;

pub const CARD_SELECTOR: &str = ".product-card";
const NAME_SELECTOR: &str = ".product-name";

/// Register image-click and keyboard activation on every card.
pub fn bind(
    document: &web_sys_x::Document,
    modal: &SharedModal,
    config: &Rc<SiteConfig>,
) -> Result<Vec<EventListener>, DomError> {
    let cards: Vec<web_sys_x::Element> = dom::query_all(document, CARD_SELECTOR)?;
    let mut listeners = Vec::with_capacity(cards.len() * 2);

    for card in cards {
        match dom::query::<web_sys_x::HtmlImageElement>(&card, "img") {
            Ok(image) => listeners.push(bind_image(document, &card, image, modal, config)),
            Err(DomError::MissingSelector(_)) => {}
            Err(e) => warn!("Skipping card image: {e}"),
        }

        let activated = card.clone();
        listeners.push(EventListener::new(&card, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<web_sys_x::KeyboardEvent>() else {
                return;
            };
            let key = event.key();
            if key == "Enter" || key == " " {
                event.prevent_default();
                if let Ok(image) = dom::query::<web_sys_x::HtmlElement>(&activated, "img") {
                    image.click();
                }
            }
        }));
    }

    Ok(listeners)
}

fn bind_image(
    document: &web_sys_x::Document,
    card: &web_sys_x::Element,
    image: web_sys_x::HtmlImageElement,
    modal: &SharedModal,
    config: &Rc<SiteConfig>,
) -> EventListener {
    let _ = image.style().set_property("cursor", "zoom-in");

    let document = document.clone();
    let card = card.clone();
    let clicked = image.clone();
    let modal = modal.clone();
    let config = config.clone();
    EventListener::new(&image, "click", move |event| {
        event.stop_propagation();
        let content = card_content(&document, &card, &clicked, &config);
        modal.borrow_mut().open(content);
    })
}

/// What the modal shows for a card, read from the card and its recipe block.
fn card_content(
    document: &web_sys_x::Document,
    card: &web_sys_x::Element,
    image: &web_sys_x::HtmlImageElement,
    config: &SiteConfig,
) -> ModalContent {
    let title = card
        .query_selector(NAME_SELECTOR)
        .ok()
        .flatten()
        .and_then(|name| name.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default();
    let recipe_id = card.get_attribute("data-recipe-id");
    let record = recipe::lookup(recipe_id.as_deref(), |block_id| {
        dom::text_by_id(document, block_id)
    });
    let share_text = share::card_share_message(record.as_ref(), &title, config.excerpt_chars);

    ModalContent {
        image_src: image.src(),
        title,
        recipe_html: record.map(|r| r.recipe),
        share_text: Some(share_text),
    }
}
