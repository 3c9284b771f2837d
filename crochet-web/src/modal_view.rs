//! DOM-backed [`ModalView`] for `#image-modal`

use crochet_common::{FocusError, ModalSlots, ModalView};
use tracing::warn;
use wasm_bindgen_x::JsCast;

use crate::dom::{self, DomError};

const MODAL_ID: &str = "image-modal";
const IMAGE_ID: &str = "modal-img";
const TITLE_ID: &str = "modal-title";
const RECIPE_ID: &str = "modal-recipe";
const SHARE_ID: &str = "btn-share-whatsapp";
const CLOSE_SELECTOR: &str = ".modal-close";

pub struct DomModalView {
    document: web_sys_x::Document,
    modal: web_sys_x::Element,
    image: web_sys_x::HtmlImageElement,
    title: web_sys_x::Element,
    recipe: web_sys_x::Element,
    share: web_sys_x::Element,
    close: web_sys_x::HtmlElement,
}

impl DomModalView {
    /// Look up every modal slot. Fails if any is missing.
    pub fn bind(document: &web_sys_x::Document) -> Result<Self, DomError> {
        let modal: web_sys_x::Element = dom::by_id(document, MODAL_ID)?;
        let close = dom::query(&modal, CLOSE_SELECTOR)?;
        Ok(Self {
            document: document.clone(),
            image: dom::by_id(document, IMAGE_ID)?,
            title: dom::by_id(document, TITLE_ID)?,
            recipe: dom::by_id(document, RECIPE_ID)?,
            share: dom::by_id(document, SHARE_ID)?,
            modal,
            close,
        })
    }

    pub fn modal(&self) -> &web_sys_x::Element {
        &self.modal
    }

    pub fn close_control(&self) -> &web_sys_x::HtmlElement {
        &self.close
    }

    /// Style of `<html>`, where scrolling is locked.
    fn root_style(&self) -> Option<web_sys_x::CssStyleDeclaration> {
        self.document
            .document_element()?
            .dyn_into::<web_sys_x::HtmlElement>()
            .ok()
            .map(|root| root.style())
    }
}

impl ModalView for DomModalView {
    type Focus = web_sys_x::Element;

    fn focused(&self) -> Option<web_sys_x::Element> {
        self.document.active_element()
    }

    fn render(&mut self, slots: &ModalSlots<'_>) {
        self.image.set_src(slots.image_src);
        self.image.set_alt(slots.image_alt);
        self.title.set_text_content(Some(slots.title));
        self.recipe.set_inner_html(slots.recipe_html);
        if let Err(e) = self.share.set_attribute("href", slots.share_href) {
            warn!("Failed to set share link: {e:?}");
        }
    }

    fn clear(&mut self) {
        self.image.set_src("");
        self.title.set_text_content(Some(""));
        self.recipe.set_inner_html("");
    }

    fn set_visible(&mut self, visible: bool) {
        let hidden = if visible { "false" } else { "true" };
        if let Err(e) = self.modal.set_attribute("aria-hidden", hidden) {
            warn!("Failed to toggle modal visibility: {e:?}");
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(style) = self.root_style() else {
            return;
        };
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(e) = result {
            warn!("Failed to change page scrolling: {e:?}");
        }
    }

    fn focus_close_control(&mut self) {
        let _ = self.close.focus();
    }

    fn restore_focus(&mut self, target: &web_sys_x::Element) -> Result<(), FocusError> {
        let element = target
            .dyn_ref::<web_sys_x::HtmlElement>()
            .ok_or_else(|| FocusError(format!("<{}> is not focusable", target.tag_name())))?;
        element.focus().map_err(|e| FocusError(format!("{e:?}")))
    }

    fn contains(&self, target: &web_sys_x::Element) -> bool {
        let node: &web_sys_x::Node = target;
        self.modal.contains(Some(node))
    }
}
