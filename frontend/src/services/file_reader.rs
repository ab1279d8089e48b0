//! Read browser files into data URLs.

use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

use crate::{AppError, AppResult};

/// Read `file` as a `data:` URL.
///
/// Resolves once the browser has finished encoding the file.
pub async fn read_as_data_url(file: &File) -> AppResult<String> {
    let reader = FileReader::new()?;

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let loaded = reader.clone();
        let onload = Closure::once_into_js(move || {
            let result = loaded.result().unwrap_or(JsValue::UNDEFINED);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let failed = reader.clone();
        let onerror = Closure::once_into_js(move || {
            let error = failed
                .error()
                .map(JsValue::from)
                .unwrap_or_else(|| JsValue::from_str("unknown read error"));
            let _ = reject.call1(&JsValue::NULL, &error);
        });

        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader
        .read_as_data_url(file)
        .map_err(|e| AppError::FileRead(format!("{:?}", e)))?;

    let result = JsFuture::from(promise)
        .await
        .map_err(|e| AppError::FileRead(format!("{:?}", e)))?;

    result
        .as_string()
        .ok_or_else(|| AppError::FileRead("reader result is not a string".to_string()))
}
