//! Busy state for forms while the browser posts them.
//!
//! The submit event is never cancelled: the guard only decorates the page
//! while the native form post is in flight.

use gloo_timers::future::TimeoutFuture;
use leptos::html::{self, Span};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlInputElement};

use crate::components::LoadingOverlay;
use crate::config::{FORM_FILE_INPUT_SELECTOR, SUBMIT_BUTTON_SELECTOR};
use crate::dom::listen;
use crate::{AppResult, FormSnapshot, SubmissionKind};

/// A submit button put into its busy state.
///
/// Holds the label markup it replaced so it can be put back.
#[derive(Debug)]
pub struct BusyButton {
    button: Element,
    original_label: String,
}

impl BusyButton {
    /// Disable `button` and replace its label with a spinner and `status`.
    ///
    /// On failure the button is put back as it was.
    pub fn begin(button: Element, status: &str) -> AppResult<Self> {
        let busy = Self {
            original_label: button.inner_html(),
            button,
        };

        if let Err(e) = busy.decorate(status) {
            busy.restore()?;
            return Err(e);
        }
        Ok(busy)
    }

    fn decorate(&self, status: &str) -> AppResult<()> {
        self.button.set_attribute("disabled", "disabled")?;
        self.button.set_inner_html("");
        self.button.append_child(&busy_spinner())?;
        self.button.append_with_str_1(&format!(" {}", status))?;
        Ok(())
    }

    /// Re-enable the button and put its original label back.
    ///
    /// Harmless on a button that has left the document.
    pub fn restore(self) -> AppResult<()> {
        self.button.remove_attribute("disabled")?;
        self.button.set_inner_html(&self.original_label);
        Ok(())
    }
}

/// One submission attempt: the busy button, if the form has one, and the
/// overlay node shown for it.
#[derive(Debug)]
pub struct PendingSubmission {
    button: Option<BusyButton>,
    overlay_node: Element,
}

impl PendingSubmission {
    /// Undo what this submission put on the page.
    ///
    /// The overlay is only hidden while it is still the one this submission
    /// showed.
    pub fn restore(self, overlay: &LoadingOverlay) -> AppResult<()> {
        if let Some(button) = self.button {
            button.restore()?;
        }
        overlay.hide_shown(&self.overlay_node)?;
        Ok(())
    }
}

/// Submission guard attached to one form.
#[derive(Clone, Debug)]
pub struct SubmissionGuard {
    form: Element,
    overlay: LoadingOverlay,
    failsafe_ms: u32,
}

impl SubmissionGuard {
    pub fn new(form: Element, overlay: LoadingOverlay, failsafe_ms: u32) -> Self {
        Self {
            form,
            overlay,
            failsafe_ms,
        }
    }

    /// Build a guard and listen to the form's `submit` events.
    pub fn attach(form: Element, overlay: LoadingOverlay, failsafe_ms: u32) -> AppResult<Self> {
        let guard = Self::new(form, overlay, failsafe_ms);
        let handler = guard.clone();
        let target: &EventTarget = guard.form.unchecked_ref();

        listen(target, "submit", move |_| {
            if let Err(e) = handler.on_submit() {
                log::error!("Submit handling failed: {}", e);
            }
        })?;

        Ok(guard)
    }

    fn submit_button(&self) -> AppResult<Option<Element>> {
        Ok(self.form.query_selector(SUBMIT_BUTTON_SELECTOR)?)
    }

    /// Read the facts the submission decision depends on.
    pub fn snapshot(&self) -> AppResult<FormSnapshot> {
        let has_file = self
            .form
            .query_selector(FORM_FILE_INPUT_SELECTOR)?
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .map(|files| files.length() > 0)
            .unwrap_or(false);

        let button_disabled = self
            .submit_button()?
            .map(|button| button.has_attribute("disabled"))
            .unwrap_or(false);

        Ok(FormSnapshot {
            enctype: self.form.get_attribute("enctype"),
            form_id: self.form.id(),
            has_file,
            button_disabled,
        })
    }

    /// React to a submit event.
    ///
    /// Returns the kind of submission that was decorated, if any.
    pub fn on_submit(&self) -> AppResult<Option<SubmissionKind>> {
        let snapshot = self.snapshot()?;
        let Some(kind) = snapshot.submission_kind() else {
            if snapshot.button_disabled {
                log::debug!("Submit button already disabled, letting the event through");
            }
            return Ok(None);
        };

        log::info!("📤 Submitting {:?} form '{}'", kind, snapshot.form_id);

        // Nothing stays on the page when a step fails: the button rolls
        // itself back, and a failed overlay puts the button back.
        let button = match self.submit_button()? {
            Some(button) => Some(BusyButton::begin(button, kind.busy_label())?),
            None => None,
        };

        let overlay_node = match self.overlay.show(kind.overlay_message()) {
            Ok(node) => node,
            Err(e) => {
                if let Some(button) = button {
                    button.restore()?;
                }
                return Err(e);
            }
        };

        self.arm_failsafe(PendingSubmission {
            button,
            overlay_node,
        });

        Ok(Some(kind))
    }

    /// Put the page back after `failsafe_ms` in case the post never unloads it.
    fn arm_failsafe(&self, pending: PendingSubmission) {
        let overlay = self.overlay.clone();
        let delay = self.failsafe_ms;

        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            log::warn!("⚠️ Submission still pending after {} ms, restoring the form", delay);

            if let Err(e) = pending.restore(&overlay) {
                log::warn!("Could not restore the form: {}", e);
            }
        });
    }
}

fn busy_spinner() -> html::HtmlElement<Span> {
    view! {
        <span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>
    }
}
