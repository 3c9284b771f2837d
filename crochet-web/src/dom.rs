//! Element lookup helpers

use thiserror::Error;
use wasm_bindgen_x::{JsCast, JsValue};

#[derive(Error, Debug)]
pub enum DomError {
    #[error("No window")]
    NoWindow,
    #[error("No document")]
    NoDocument,
    #[error("Missing element #{0}")]
    MissingElement(String),
    #[error("Missing element matching {0}")]
    MissingSelector(String),
    #[error("Element {0} is not the expected type")]
    WrongType(String),
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{value:?}"))
    }
}

pub fn window() -> Result<web_sys_x::Window, DomError> {
    web_sys_x::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<web_sys_x::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Required element by id, cast to `T`.
pub fn by_id<T: JsCast>(document: &web_sys_x::Document, id: &str) -> Result<T, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType(format!("#{id}")))
}

/// Required descendant of `parent` matching `selector`, cast to `T`.
pub fn query<T: JsCast>(parent: &web_sys_x::Element, selector: &str) -> Result<T, DomError> {
    parent
        .query_selector(selector)?
        .ok_or_else(|| DomError::MissingSelector(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType(selector.to_string()))
}

/// Every element in the document matching `selector`, cast to `T`. Matches of
/// another type are skipped.
pub fn query_all<T: JsCast>(
    document: &web_sys_x::Document,
    selector: &str,
) -> Result<Vec<T>, DomError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Text of the element with the given id, if it exists.
pub fn text_by_id(document: &web_sys_x::Document, id: &str) -> Option<String> {
    document.get_element_by_id(id)?.text_content()
}
