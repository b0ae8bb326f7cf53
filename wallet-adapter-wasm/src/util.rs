use anyhow::{anyhow, Context, Result};
use wasm_bindgen::JsValue;
use web_sys::Window;

pub fn window() -> Result<Window> {
    web_sys::window().context("could not get window")
}

pub fn reflect_get(target: &JsValue, key: &JsValue) -> Result<JsValue> {
    let result = js_sys::Reflect::get(target, key).map_err(|e| anyhow!("{:?}", e))?;
    Ok(result)
}

/// `null` and `undefined` are how an injected provider says "nothing".
pub fn is_nullish(value: &JsValue) -> bool {
    value.is_null() || value.is_undefined()
}
