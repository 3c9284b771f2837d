//! "Copy recipe" button
//!
//! Copies the displayed recipe as plain text. The async Clipboard API is tried
//! first; if it is missing or rejects the write, a hidden textarea is selected
//! and `document.execCommand("copy")` is used. If both fail the user is asked
//! to copy by hand.

use std::cell::RefCell;
use std::rc::Rc;

use crochet_common::{FeedbackPulse, SiteConfig};
use thiserror::Error;
use tracing::{debug, info, warn};
use wasm_bindgen_futures_x::{spawn_local, JsFuture};
use wasm_bindgen_x::{JsCast, JsValue};

use crate::dom::{self, DomError};
use crate::listener::EventListener;
use crate::modal::SharedModal;

const COPY_BUTTON_ID: &str = "btn-copy-recipe";

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard API unavailable")]
    Unavailable,
    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
    #[error("Copy command failed: {0}")]
    Legacy(String),
}

fn js_error(value: JsValue) -> String {
    format!("{value:?}")
}

/// Register the copy button's click handler.
pub fn bind(
    document: &web_sys_x::Document,
    modal: &SharedModal,
    config: &Rc<SiteConfig>,
) -> Result<EventListener, DomError> {
    let button: web_sys_x::HtmlElement = dom::by_id(document, COPY_BUTTON_ID)?;
    let pulse = Rc::new(RefCell::new(FeedbackPulse::default()));

    let document = document.clone();
    let modal = modal.clone();
    let config = config.clone();
    let label = button.clone();
    Ok(EventListener::new(&button, "click", move |_| {
        let text = modal.borrow().copy_text();
        if text.is_empty() {
            return;
        }
        spawn_local(copy_and_confirm(
            document.clone(),
            label.clone(),
            pulse.clone(),
            config.clone(),
            text,
        ));
    }))
}

async fn copy_and_confirm(
    document: web_sys_x::Document,
    button: web_sys_x::HtmlElement,
    pulse: Rc<RefCell<FeedbackPulse>>,
    config: Rc<SiteConfig>,
    text: String,
) {
    let copied = match write_text(&text).await {
        Ok(()) => true,
        Err(e) => {
            debug!("{e}, trying copy command");
            match copy_with_textarea(&document, &text) {
                Ok(()) => true,
                Err(e) => {
                    warn!("{e}");
                    if let Ok(window) = dom::window() {
                        let _ = window.alert_with_message(&config.labels.copy_failed_alert);
                    }
                    false
                }
            }
        }
    };

    if !copied {
        return;
    }
    info!("Copied recipe ({} chars)", text.chars().count());

    button.set_text_content(Some(&config.labels.copy_done));
    let token = pulse.borrow_mut().begin();
    sleep_ms(config.copy_feedback_ms).await;
    if pulse.borrow().should_revert(token) {
        button.set_text_content(Some(&config.labels.copy_idle));
    }
}

/// `navigator.clipboard.writeText(text)`
async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let navigator = dom::window()
        .map_err(|_| ClipboardError::Unavailable)?
        .navigator();
    let clipboard = js_sys_x::Reflect::get(&navigator, &"clipboard".into())
        .map_err(|_| ClipboardError::Unavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }
    let write = js_sys_x::Reflect::get(&clipboard, &"writeText".into())
        .map_err(|_| ClipboardError::Unavailable)?;
    let write = write
        .dyn_ref::<js_sys_x::Function>()
        .ok_or(ClipboardError::Unavailable)?;

    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::Rejected(js_error(e)))?
        .dyn_into::<js_sys_x::Promise>()
        .map_err(|_| ClipboardError::Unavailable)?;
    JsFuture::from(promise)
        .await
        .map_err(|e| ClipboardError::Rejected(js_error(e)))?;
    Ok(())
}

/// Select the text in an offscreen textarea and run the copy command.
fn copy_with_textarea(document: &web_sys_x::Document, text: &str) -> Result<(), ClipboardError> {
    let body = document
        .body()
        .ok_or_else(|| ClipboardError::Legacy("no document body".to_string()))?;
    let textarea = document
        .create_element("textarea")
        .map_err(|e| ClipboardError::Legacy(js_error(e)))?
        .dyn_into::<web_sys_x::HtmlTextAreaElement>()
        .map_err(|_| ClipboardError::Legacy("textarea has unexpected type".to_string()))?;
    textarea.set_value(text);
    let _ = textarea.set_attribute("readonly", "");
    let _ = textarea.set_attribute("style", "position:fixed;top:0;left:-9999px;opacity:0");
    body.append_child(&textarea)
        .map_err(|e| ClipboardError::Legacy(js_error(e)))?;
    textarea.select();

    let result = match document.dyn_ref::<web_sys_x::HtmlDocument>() {
        Some(html) => html
            .exec_command("copy")
            .map_err(|e| ClipboardError::Legacy(js_error(e))),
        None => Err(ClipboardError::Legacy("not an HTML document".to_string())),
    };
    textarea.remove();

    match result? {
        true => Ok(()),
        false => Err(ClipboardError::Legacy("copy command was refused".to_string())),
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
