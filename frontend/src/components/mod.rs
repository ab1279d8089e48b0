//! DOM behaviors wired onto the server-rendered pages.
//!
//! # Page-wide
//! - [`LoadingOverlay`] - full-viewport spinner with scroll lock
//! - [`AlertDismisser`] - flash alerts closing after a delay
//!
//! # Form features
//! - [`SubmissionGuard`] - busy state while a form posts
//! - [`FilePreview`] - inline preview of the selected print
//! - [`DropZone`] - drag & drop onto the file input

mod overlay;
mod alerts;
mod submit_guard;
mod preview;
mod drop_zone;

pub use overlay::*;
pub use alerts::*;
pub use submit_guard::*;
pub use preview::*;
pub use drop_zone::*;
