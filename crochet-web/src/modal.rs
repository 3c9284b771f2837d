//! Wiring of the recipe modal's own controls

use std::cell::RefCell;
use std::rc::Rc;

use crochet_common::{ModalController, SiteConfig, WhatsAppLink};
use tracing::debug;
use wasm_bindgen_x::JsCast;

use crate::dom::DomError;
use crate::listener::EventListener;
use crate::modal_view::DomModalView;

pub type SharedModal = Rc<RefCell<ModalController<DomModalView>>>;

/// Bind the modal and register its close, Escape and focus-containment
/// handlers.
pub fn bind(
    document: &web_sys_x::Document,
    config: &SiteConfig,
) -> Result<(SharedModal, Vec<EventListener>), DomError> {
    let view = DomModalView::bind(document)?;
    let modal_element = view.modal().clone();
    let close_control = view.close_control().clone();
    let modal: SharedModal = Rc::new(RefCell::new(ModalController::new(
        view,
        WhatsAppLink::new(config.whatsapp_number.clone()),
        config.labels.clone(),
    )));

    let mut listeners = Vec::new();

    let on_close = modal.clone();
    listeners.push(EventListener::new(&close_control, "click", move |_| {
        on_close.borrow_mut().close();
    }));

    let on_overlay = modal.clone();
    let overlay = modal_element.clone();
    listeners.push(EventListener::new(&modal_element, "click", move |event| {
        let on_overlay_itself = event
            .target()
            .is_some_and(|target| js_sys_x::Object::is(&target, &overlay));
        on_overlay.borrow_mut().handle_overlay_click(on_overlay_itself);
    }));

    let on_key = modal.clone();
    listeners.push(EventListener::new(document, "keydown", move |event| {
        if let Some(event) = event.dyn_ref::<web_sys_x::KeyboardEvent>() {
            on_key.borrow_mut().handle_key(&event.key());
        }
    }));

    // Opening and closing move focus themselves, which fires this listener
    // while the controller is borrowed. Those focus changes are skipped.
    let on_focus = modal.clone();
    listeners.push(EventListener::capture(document, "focus", move |event| {
        let Some(target) = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys_x::Element>().ok())
        else {
            return;
        };
        match on_focus.try_borrow_mut() {
            Ok(mut modal) => {
                if modal.handle_focus(&target) {
                    debug!("Focus moved back into the modal");
                }
            }
            Err(_) => debug!("Focus change during a modal transition"),
        }
    }));

    Ok((modal, listeners))
}
