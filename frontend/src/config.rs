//! Application configuration.
//!
//! Defaults live here as constants. A page template can override the
//! tunable subset by embedding a JSON block:
//!
//! ```html
//! <script id="form-controller-config" type="application/json">
//!   {"failsafeMs": 10000, "logLevel": "info"}
//! </script>
//! ```

use serde::Deserialize;
use web_sys::Document;

use crate::{AppError, AppResult};

// =============================================================================
// DOM contract
// =============================================================================

/// Id of the file input used for the preview and the drop zone.
pub const FILE_INPUT_ID: &str = "file";

/// Id of the preview container.
pub const PREVIEW_ID: &str = "preview";

/// Id of the drag & drop area.
pub const DROP_AREA_ID: &str = "drop-area";

/// Id of the event registration form.
pub const EVENT_FORM_ID: &str = "eventForm";

/// Id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "form-controller-config";

/// Form encoding used by upload forms.
pub const MULTIPART_ENCTYPE: &str = "multipart/form-data";

pub const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;
pub const FORM_FILE_INPUT_SELECTOR: &str = r#"input[type="file"]"#;
pub const ALERT_SELECTOR: &str = ".alert";
pub const ALERT_CLOSE_SELECTOR: &str = ".btn-close";

/// Class of the loading overlay node (styled by the site stylesheet).
pub const LOADING_OVERLAY_CLASS: &str = "loading-overlay";

/// Class toggled on the drop area while a drag hovers it.
pub const HIGHLIGHT_CLASS: &str = "highlight";

// =============================================================================
// Messages
// =============================================================================

/// Overlay message when none is given.
pub const DEFAULT_LOADING_MESSAGE: &str = "処理中...";

pub const UPLOAD_LOADING_MESSAGE: &str = "処理中...";
pub const UPLOAD_BUTTON_LABEL: &str = "処理中...";
pub const EVENT_LOADING_MESSAGE: &str = "カレンダーに登録中...";
pub const EVENT_BUTTON_LABEL: &str = "登録中...";

/// Alt text of the preview image.
pub const PREVIEW_ALT: &str = "プレビュー";

pub const UNSUPPORTED_FILE_NOTICE: &str = "このファイル形式はサポートされていません";
pub const FILE_TOO_LARGE_NOTICE: &str = "ファイルサイズが大きすぎます（16MBまで）";

// =============================================================================
// Tunables
// =============================================================================

/// Delay before alerts close themselves (milliseconds).
pub const ALERT_DISMISS_DELAY_MS: u32 = 5_000;

/// Delay before a disabled submit button is restored (milliseconds).
pub const SUBMIT_FAILSAFE_MS: u32 = 30_000;

/// Maximum upload size accepted by the server (in bytes).
///
/// 16 MB limit.
pub const MAX_UPLOAD_SIZE: u64 = 16 * 1024 * 1024;

/// Extensions accepted by the server's upload endpoint.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "pdf"];

pub const DEFAULT_LOG_LEVEL: &str = "debug";

/// Runtime configuration of the form controller.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControllerConfig {
    /// Delay before alerts are dismissed.
    pub alert_dismiss_ms: u32,
    /// Delay before the submit failsafe fires.
    pub failsafe_ms: u32,
    /// Largest file the preview accepts without a notice.
    pub max_upload_size: u64,
    /// Lower-case extensions the preview accepts.
    pub allowed_extensions: Vec<String>,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: ALERT_DISMISS_DELAY_MS,
            failsafe_ms: SUBMIT_FAILSAFE_MS,
            max_upload_size: MAX_UPLOAD_SIZE,
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ControllerConfig {
    /// Parse a JSON configuration block.
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Read the configuration block from the page, if any.
    ///
    /// Returns the defaults when the block is absent or empty.
    pub fn from_document(document: &Document) -> AppResult<Self> {
        let text = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json(&text)
    }

    /// [`from_document`](Self::from_document), falling back to the defaults.
    ///
    /// The parse error is handed back so it can be logged once logging is up.
    pub fn from_document_or_default(document: &Document) -> (Self, Option<AppError>) {
        match Self::from_document(document) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Configured log level, falling back to `debug` on unknown names.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}
