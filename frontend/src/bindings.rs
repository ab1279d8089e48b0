//! Functions exposed to the page templates.
//!
//! They are exported by wasm-bindgen and also published on `window`, so
//! inline template scripts can call `showLoading()` without importing the
//! module.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::LoadingOverlay;
use crate::config::DEFAULT_LOADING_MESSAGE;
use crate::{format_date, format_time, AppResult};

/// Show the loading overlay with `message` (default `処理中...`).
#[wasm_bindgen(js_name = "showLoading")]
pub fn show_loading(message: Option<String>) -> Result<(), JsValue> {
    let message = message.unwrap_or_else(|| DEFAULT_LOADING_MESSAGE.to_string());
    LoadingOverlay::from_window()?.show(&message)?;
    Ok(())
}

/// Hide the loading overlay, if shown.
#[wasm_bindgen(js_name = "hideLoading")]
pub fn hide_loading() -> Result<(), JsValue> {
    LoadingOverlay::from_window()?.hide()?;
    Ok(())
}

#[wasm_bindgen(js_name = "formatDate")]
pub fn format_date_js(date: &str) -> String {
    format_date(date)
}

#[wasm_bindgen(js_name = "formatTime")]
pub fn format_time_js(time: &str) -> String {
    format_time(time)
}

/// Publish the template API as globals on `window`.
pub fn publish_globals() -> AppResult<()> {
    let window = gloo_utils::window();

    let show = Closure::wrap(Box::new(show_loading) as Box<dyn Fn(Option<String>) -> Result<(), JsValue>>);
    let hide = Closure::wrap(Box::new(hide_loading) as Box<dyn Fn() -> Result<(), JsValue>>);
    let date = Closure::wrap(Box::new(|s: String| format_date(&s)) as Box<dyn Fn(String) -> String>);
    let time = Closure::wrap(Box::new(|s: String| format_time(&s)) as Box<dyn Fn(String) -> String>);

    set_global(&window, "showLoading", show.as_ref())?;
    set_global(&window, "hideLoading", hide.as_ref())?;
    set_global(&window, "formatDate", date.as_ref())?;
    set_global(&window, "formatTime", time.as_ref())?;

    // Globals live as long as the page.
    show.forget();
    hide.forget();
    date.forget();
    time.forget();

    log::debug!("Template API published on window");
    Ok(())
}

fn set_global(window: &web_sys::Window, name: &str, value: &JsValue) -> AppResult<()> {
    js_sys::Reflect::set(window.unchecked_ref(), &JsValue::from_str(name), value)?;
    Ok(())
}
