//! Page-load wiring of every behavior present on the page.

use std::rc::Rc;

use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::components::{AlertDismisser, DropZone, FilePreview, LoadingOverlay, SubmissionGuard};
use crate::config::{DROP_AREA_ID, FILE_INPUT_ID, PREVIEW_ID};
use crate::dom::{element_by_id, listen, query_all};
use crate::{AppResult, ControllerConfig};

/// Which optional fixtures were found and wired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InstalledFeatures {
    pub forms: usize,
    pub alerts: usize,
    pub preview: bool,
    pub drop_zone: bool,
}

/// The form controller of one page.
#[derive(Clone, Debug)]
pub struct FormController {
    overlay: LoadingOverlay,
    features: InstalledFeatures,
}

impl FormController {
    /// Wire every fixture present in `document`.
    ///
    /// Absent fixtures are skipped; only a missing `body` is an error.
    pub fn install(document: &Document, config: ControllerConfig) -> AppResult<Self> {
        let config = Rc::new(config);
        let overlay = LoadingOverlay::new(document.clone())?;
        let mut features = InstalledFeatures::default();

        for form in query_all(document, "form")? {
            SubmissionGuard::attach(form, overlay.clone(), config.failsafe_ms)?;
            features.forms += 1;
        }

        let alerts = AlertDismisser::collect(document, config.alert_dismiss_ms)?;
        features.alerts = alerts.len();
        alerts.schedule();

        let file_input = element_by_id::<HtmlInputElement>(document, FILE_INPUT_ID);

        match (&file_input, element_by_id::<HtmlElement>(document, PREVIEW_ID)) {
            (Some(input), Some(container)) => {
                FilePreview::attach(input.clone(), container, config.clone())?;
                features.preview = true;
            }
            _ => log::debug!("No #{}/#{} pair, preview disabled", FILE_INPUT_ID, PREVIEW_ID),
        }

        match (file_input, element_by_id::<HtmlElement>(document, DROP_AREA_ID)) {
            (Some(input), Some(area)) => {
                DropZone::attach(area, input)?;
                features.drop_zone = true;
            }
            _ => log::debug!("No #{}/#{} pair, drop zone disabled", DROP_AREA_ID, FILE_INPUT_ID),
        }

        log::info!("✅ Form controller installed: {:?}", features);
        Ok(Self { overlay, features })
    }

    pub fn features(&self) -> InstalledFeatures {
        self.features
    }

    pub fn overlay(&self) -> &LoadingOverlay {
        &self.overlay
    }
}

/// Install the controller now, or once the DOM is parsed.
pub fn boot(document: Document, config: ControllerConfig) -> AppResult<()> {
    if document.ready_state() != "loading" {
        FormController::install(&document, config)?;
        return Ok(());
    }

    let target = document.clone();
    let mut pending = Some(config);
    listen(&target, "DOMContentLoaded", move |_| {
        let Some(config) = pending.take() else {
            return;
        };
        if let Err(e) = FormController::install(&document, config) {
            log::error!("❌ Form controller installation failed: {}", e);
        }
    })
}
