//! Print Calendar - Form Controller (Rust/WebAssembly)
//!
//! Client-side behavior for the server-rendered pages that turn school
//! prints into calendar events. The pages are plain HTML forms; this crate
//! enhances them once the module is loaded.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  main (wasm start)                                          │
//! │  panic hook → config → console logging → window globals    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  FormController::install (on DOMContentLoaded)              │
//! │  ├── SubmissionGuard   (every <form>)                       │
//! │  ├── AlertDismisser    (.alert)                             │
//! │  ├── FilePreview       (#file + #preview)                   │
//! │  └── DropZone          (#drop-area + #file)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LoadingOverlay  ·  format_date / format_time               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - DOM contract, messages and tunables
//! - [`types`] - Submission decision and error types
//! - [`components`] - DOM behaviors (overlay, guard, preview, drop zone)
//! - [`services`] - File reading and upload rules
//! - [`format`] - Japanese date/time labels

use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod format;
pub mod dom;
pub mod components;
pub mod services;
pub mod controller;
pub mod bindings;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::ControllerConfig;

// Types
pub use types::{
    // Submission
    FormSnapshot, SubmissionKind,
    // Errors
    AppError, AppResult,
};

// Formatting
pub use format::{format_date, format_time};

// Components
pub use components::*;

// Services
pub use services::*;

// Controller
pub use controller::{boot, FormController, InstalledFeatures};

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - runs when the module is instantiated.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    let document = gloo_utils::document();

    // The level comes from the page, so read the config before logging
    let (config, config_error) = ControllerConfig::from_document_or_default(&document);

    _ = console_log::init_with_level(config.log_level());

    if let Some(e) = config_error {
        log::warn!("⚠️ {} - using defaults", e);
    }

    log::info!("🦀 Print Calendar - starting form controller");

    if let Err(e) = bindings::publish_globals() {
        log::error!("❌ Could not publish template API: {}", e);
    }

    if let Err(e) = boot(document, config) {
        log::error!("❌ Form controller installation failed: {}", e);
    }
}
