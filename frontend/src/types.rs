//! Common types used across the form controller.
//!
//! # Categories
//!
//! - **Submission Types** - what a form submit should trigger
//! - **Error Types** - controller error handling

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::{
    EVENT_BUTTON_LABEL, EVENT_FORM_ID, EVENT_LOADING_MESSAGE, FILE_TOO_LARGE_NOTICE,
    MULTIPART_ENCTYPE, UNSUPPORTED_FILE_NOTICE, UPLOAD_BUTTON_LABEL, UPLOAD_LOADING_MESSAGE,
};

// =============================================================================
// Submission Types
// =============================================================================

/// Kind of submission that puts the page into its busy state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionKind {
    /// Multipart form posting a selected print image.
    Upload,
    /// The `eventForm` registering events into the calendar.
    EventRegistration,
}

impl SubmissionKind {
    /// Message shown in the loading overlay.
    pub fn overlay_message(&self) -> &'static str {
        match self {
            SubmissionKind::Upload => UPLOAD_LOADING_MESSAGE,
            SubmissionKind::EventRegistration => EVENT_LOADING_MESSAGE,
        }
    }

    /// Status text placed next to the spinner on the submit button.
    pub fn busy_label(&self) -> &'static str {
        match self {
            SubmissionKind::Upload => UPLOAD_BUTTON_LABEL,
            SubmissionKind::EventRegistration => EVENT_BUTTON_LABEL,
        }
    }
}

/// Facts about a form read at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSnapshot {
    /// Value of the `enctype` attribute, if set.
    pub enctype: Option<String>,
    /// Form id (empty when unset).
    pub form_id: String,
    /// Whether the form's file input holds at least one file.
    pub has_file: bool,
    /// Whether the submit button already carries `disabled`.
    pub button_disabled: bool,
}

impl FormSnapshot {
    /// Decide what this submission triggers.
    ///
    /// A disabled button means a submission is already in flight and the
    /// event passes through untouched. The event form takes priority over
    /// the upload branch.
    pub fn submission_kind(&self) -> Option<SubmissionKind> {
        if self.button_disabled {
            return None;
        }
        if self.form_id == EVENT_FORM_ID {
            return Some(SubmissionKind::EventRegistration);
        }
        if self.enctype.as_deref() == Some(MULTIPART_ENCTYPE) && self.has_file {
            return Some(SubmissionKind::Upload);
        }
        None
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Form controller errors.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// A DOM call raised a JavaScript exception.
    #[error("DOM error: {0}")]
    Dom(String),

    /// A node the operation cannot do without is absent.
    #[error("Missing element: {0}")]
    MissingElement(&'static str),

    /// Reading a file to a data URL failed.
    #[error("File read error: {0}")]
    FileRead(String),

    /// The file extension is not accepted by the server.
    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    /// The file exceeds the upload limit.
    #[error("File too large: {size} bytes (limit {limit})")]
    FileTooLarge { size: u64, limit: u64 },

    /// The page configuration block could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// Short notice suitable for the preview area, for user-facing errors.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            AppError::UnsupportedFile(_) => Some(UNSUPPORTED_FILE_NOTICE),
            AppError::FileTooLarge { .. } => Some(FILE_TOO_LARGE_NOTICE),
            _ => None,
        }
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(format!("{:?}", value))
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Result type alias for controller operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn upload_form() -> FormSnapshot {
        FormSnapshot {
            enctype: Some(MULTIPART_ENCTYPE.to_string()),
            form_id: "uploadForm".to_string(),
            has_file: true,
            button_disabled: false,
        }
    }

    #[test]
    fn test_upload_with_file() {
        assert_eq!(upload_form().submission_kind(), Some(SubmissionKind::Upload));
    }

    #[test]
    fn test_upload_without_file_does_nothing() {
        let form = FormSnapshot {
            has_file: false,
            ..upload_form()
        };
        assert_eq!(form.submission_kind(), None);
    }

    #[test]
    fn test_file_on_plain_form_does_nothing() {
        let form = FormSnapshot {
            enctype: None,
            ..upload_form()
        };
        assert_eq!(form.submission_kind(), None);
    }

    #[test]
    fn test_event_form_wins_over_upload() {
        let form = FormSnapshot {
            form_id: EVENT_FORM_ID.to_string(),
            ..upload_form()
        };
        assert_eq!(form.submission_kind(), Some(SubmissionKind::EventRegistration));
    }

    #[test]
    fn test_disabled_button_passes_through() {
        let form = FormSnapshot {
            form_id: EVENT_FORM_ID.to_string(),
            button_disabled: true,
            ..Default::default()
        };
        assert_eq!(form.submission_kind(), None);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(SubmissionKind::EventRegistration.overlay_message(), "カレンダーに登録中...");
        assert_eq!(SubmissionKind::EventRegistration.busy_label(), "登録中...");
        assert_eq!(SubmissionKind::Upload.busy_label(), "処理中...");
    }

    #[test]
    fn test_error_notice() {
        let err = AppError::FileTooLarge { size: 20, limit: 10 };
        assert!(err.to_string().contains("limit 10"));
        assert_eq!(err.notice(), Some(FILE_TOO_LARGE_NOTICE));
        assert_eq!(AppError::MissingElement("body").notice(), None);
    }
}
