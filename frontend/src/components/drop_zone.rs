//! Drag & drop bridge onto the file input.
//!
//! A drop hands the files to the input and fires `change`, so the preview
//! runs exactly as for a manual pick.

use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, EventInit, HtmlElement, HtmlInputElement};

use crate::config::HIGHLIGHT_CLASS;
use crate::dom::listen;
use crate::AppResult;

const DRAG_EVENTS: [&str; 4] = ["dragenter", "dragover", "dragleave", "drop"];

#[derive(Clone, Debug)]
pub struct DropZone {
    area: HtmlElement,
    input: HtmlInputElement,
}

impl DropZone {
    pub fn new(area: HtmlElement, input: HtmlInputElement) -> Self {
        Self { area, input }
    }

    /// Build a drop zone and listen to the drag events of `area`.
    pub fn attach(area: HtmlElement, input: HtmlInputElement) -> AppResult<Self> {
        let zone = Self::new(area, input);

        for name in DRAG_EVENTS {
            let handler = zone.clone();
            listen(&zone.area, name, move |event| handler.on_drag_event(&event))?;
        }

        Ok(zone)
    }

    fn on_drag_event(&self, event: &Event) {
        // Keep the browser from navigating to the dropped file.
        event.prevent_default();
        event.stop_propagation();

        let result = match event.type_().as_str() {
            "dragenter" | "dragover" => self.set_highlight(true),
            "dragleave" => self.set_highlight(false),
            "drop" => self
                .set_highlight(false)
                .and_then(|_| self.accept_drop(event).map(|_| ())),
            _ => Ok(()),
        };

        if let Err(e) = result {
            log::warn!("Drop zone error: {}", e);
        }
    }

    pub fn set_highlight(&self, on: bool) -> AppResult<()> {
        let classes = self.area.class_list();
        if on {
            classes.add_1(HIGHLIGHT_CLASS)?;
        } else {
            classes.remove_1(HIGHLIGHT_CLASS)?;
        }
        Ok(())
    }

    pub fn is_highlighted(&self) -> bool {
        self.area.class_list().contains(HIGHLIGHT_CLASS)
    }

    /// Move the dropped files into the input and notify its listeners.
    ///
    /// Returns `false` when the drop carried no files.
    pub fn accept_drop(&self, event: &Event) -> AppResult<bool> {
        let files = event
            .dyn_ref::<DragEvent>()
            .and_then(|drag| drag.data_transfer())
            .and_then(|transfer| transfer.files());

        let Some(files) = files.filter(|files| files.length() > 0) else {
            return Ok(false);
        };

        log::info!("📥 {} file(s) dropped", files.length());
        self.input.set_files(Some(&files));

        let init = EventInit::new();
        init.set_bubbles(true);
        let change = Event::new_with_event_init_dict("change", &init)?;
        self.input.dispatch_event(&change)?;

        Ok(true)
    }
}
