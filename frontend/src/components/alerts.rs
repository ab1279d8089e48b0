//! Flash alerts that close themselves.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::{ALERT_CLOSE_SELECTOR, ALERT_SELECTOR};
use crate::dom::query_all;
use crate::AppResult;

/// Alerts present at page load, closed after a delay.
#[derive(Clone, Debug)]
pub struct AlertDismisser {
    alerts: Vec<Element>,
    delay_ms: u32,
}

impl AlertDismisser {
    pub fn collect(document: &Document, delay_ms: u32) -> AppResult<Self> {
        Ok(Self {
            alerts: query_all(document, ALERT_SELECTOR)?,
            delay_ms,
        })
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Close every alert once the delay has elapsed.
    pub fn schedule(self) {
        if self.alerts.is_empty() {
            return;
        }

        spawn_local(async move {
            TimeoutFuture::new(self.delay_ms).await;
            let closed = self.dismiss_now();
            log::debug!("Auto-dismissed {}/{} alerts", closed, self.alerts.len());
        });
    }

    /// Click the close control of each alert still in the document.
    ///
    /// Returns how many alerts were closed.
    pub fn dismiss_now(&self) -> usize {
        let mut closed = 0;
        for alert in self.alerts.iter().filter(|alert| alert.is_connected()) {
            let close = alert
                .query_selector(ALERT_CLOSE_SELECTOR)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());

            if let Some(close) = close {
                close.click();
                closed += 1;
            }
        }
        closed
    }
}
