//! Inline preview of the print selected for upload.

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;
use web_sys::{File, HtmlElement, HtmlInputElement};

use crate::config::PREVIEW_ALT;
use crate::dom::{first_file, listen, set_displayed};
use crate::services::{is_image, read_as_data_url, validate_file};
use crate::{AppResult, ControllerConfig};

/// Preview container bound to a file input.
///
/// Each change bumps a generation counter. A read that finishes after a
/// newer selection (or a clear) is dropped, so the container always shows
/// the latest pick.
#[derive(Clone, Debug)]
pub struct FilePreview {
    input: HtmlInputElement,
    container: HtmlElement,
    config: Rc<ControllerConfig>,
    generation: Rc<Cell<u64>>,
}

impl FilePreview {
    pub fn new(input: HtmlInputElement, container: HtmlElement, config: Rc<ControllerConfig>) -> Self {
        Self {
            input,
            container,
            config,
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Build a preview and refresh it on every `change` of the input.
    pub fn attach(
        input: HtmlInputElement,
        container: HtmlElement,
        config: Rc<ControllerConfig>,
    ) -> AppResult<Self> {
        let preview = Self::new(input, container, config);
        let handler = preview.clone();

        listen(&preview.input, "change", move |_| handler.refresh())?;

        Ok(preview)
    }

    /// Current generation; bumped by every refresh.
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Show the input's current file, or clear the preview when it has none.
    pub fn refresh(&self) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let result = match first_file(&self.input) {
            Some(file) => self.load(file, generation),
            None => self.clear(),
        };

        if let Err(e) = result {
            log::warn!("Preview update failed: {}", e);
        }
    }

    fn load(&self, file: File, generation: u64) -> AppResult<()> {
        if let Err(err) = validate_file(&file, &self.config) {
            log::warn!("⚠️ {}", err);
            let notice = err.notice().map(str::to_string).unwrap_or_else(|| err.to_string());
            return self.show_notice(notice);
        }

        if !is_image(&file) {
            return self.show_caption(file.name());
        }

        let preview = self.clone();
        spawn_local(async move {
            match read_as_data_url(&file).await {
                Ok(url) if preview.generation.get() == generation => {
                    if let Err(e) = preview.show_image(url) {
                        log::warn!("Preview update failed: {}", e);
                    } else {
                        log::debug!("🖼️ Preview updated: {}", file.name());
                    }
                }
                Ok(_) => log::debug!("Dropping stale preview of {}", file.name()),
                Err(e) => log::warn!("Could not read {}: {}", file.name(), e),
            }
        });

        Ok(())
    }

    /// Empty and hide the preview.
    pub fn clear(&self) -> AppResult<()> {
        set_displayed(&self.container, false)?;
        self.container.set_inner_html("");
        Ok(())
    }

    fn show_image(&self, url: String) -> AppResult<()> {
        let image = view! { <img src=url class="img-fluid rounded" alt=PREVIEW_ALT/> };
        self.replace_content(&image)
    }

    fn show_caption(&self, name: String) -> AppResult<()> {
        let caption = view! { <p class="preview-file">"📄 " {name}</p> };
        self.replace_content(&caption)
    }

    fn show_notice(&self, text: String) -> AppResult<()> {
        let notice = view! { <p class="preview-error text-danger">{text}</p> };
        self.replace_content(&notice)
    }

    fn replace_content(&self, node: &web_sys::Node) -> AppResult<()> {
        self.container.set_inner_html("");
        self.container.append_child(node)?;
        set_displayed(&self.container, true)
    }
}
