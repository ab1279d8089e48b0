//! Full-viewport loading overlay.
//!
//! The document holds the only state: an overlay is present when a
//! `.loading-overlay` node is, and the body's scroll lock follows it.

use leptos::html::{self, Div};
use leptos::*;
use web_sys::{Document, Element, HtmlElement};

use crate::config::LOADING_OVERLAY_CLASS;
use crate::dom::query_all;
use crate::{AppError, AppResult};

/// Handle on the page's loading overlay.
#[derive(Clone, Debug)]
pub struct LoadingOverlay {
    document: Document,
    body: HtmlElement,
}

impl LoadingOverlay {
    pub fn new(document: Document) -> AppResult<Self> {
        let body = document.body().ok_or(AppError::MissingElement("body"))?;
        Ok(Self { document, body })
    }

    /// Overlay for the current window's document.
    pub fn from_window() -> AppResult<Self> {
        Self::new(gloo_utils::document())
    }

    /// Replace any overlay with a new one showing `message` and lock scrolling.
    ///
    /// Returns the inserted node, which a later `show` detaches.
    pub fn show(&self, message: &str) -> AppResult<Element> {
        self.hide()?;

        let overlay = overlay_node(message);
        self.body.append_child(&overlay)?;
        self.body.style().set_property("overflow", "hidden")?;

        log::debug!("⏳ Loading overlay shown: {}", message);
        Ok(Element::clone(&overlay))
    }

    /// Remove the overlay and unlock scrolling.
    ///
    /// Returns whether an overlay was present. Without one, nothing is
    /// touched, including the body's scroll style.
    pub fn hide(&self) -> AppResult<bool> {
        let overlays = query_all(&self.document, &format!(".{}", LOADING_OVERLAY_CLASS))?;
        if overlays.is_empty() {
            return Ok(false);
        }

        for overlay in overlays {
            overlay.remove();
        }
        self.body.style().remove_property("overflow")?;

        log::debug!("Loading overlay hidden");
        Ok(true)
    }

    /// Hide the overlay only if `shown` is still the one on the page.
    ///
    /// An overlay shown since then is left alone.
    pub fn hide_shown(&self, shown: &Element) -> AppResult<bool> {
        if !shown.is_connected() {
            return Ok(false);
        }
        self.hide()
    }

    pub fn is_visible(&self) -> bool {
        self.document
            .query_selector(&format!(".{}", LOADING_OVERLAY_CLASS))
            .ok()
            .flatten()
            .is_some()
    }
}

fn overlay_node(message: &str) -> html::HtmlElement<Div> {
    let message = message.to_string();

    view! {
        <div class=LOADING_OVERLAY_CLASS>
            <div class="text-center">
                <div class="spinner-border text-primary" role="status">
                    <span class="visually-hidden">"Loading..."</span>
                </div>
                <p class="loading-text">{message}</p>
            </div>
        </div>
    }
}
