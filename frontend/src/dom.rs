//! Small DOM helpers shared by the components.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, File, HtmlElement, HtmlInputElement};

use crate::AppResult;

/// Attach `handler` to `target` for the lifetime of the page.
///
/// The closure is leaked on purpose: the listeners live as long as the
/// document does.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> AppResult<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Element by id, cast to `T`. `None` when absent or of another type.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Every element matching `selector`.
pub fn query_all(root: &Document, selector: &str) -> AppResult<Vec<Element>> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// First file selected in `input`, if any.
pub fn first_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

/// Show or hide an element through its inline `display` style.
pub fn set_displayed(element: &HtmlElement, displayed: bool) -> AppResult<()> {
    let value = if displayed { "block" } else { "none" };
    element.style().set_property("display", value)?;
    Ok(())
}
