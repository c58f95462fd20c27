//! Small helpers for driving global JS libraries through `js_sys::Reflect`.

use gloo_utils::format::JsValueSerdeExt;
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

/// Looks up a global such as `Chart` or `L` on `window`.
pub fn global(name: &str) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let value = Reflect::get(&window, &JsValue::from_str(name))?;
    if value.is_undefined() {
        return Err(JsValue::from_str(&format!("Global '{}' is not loaded", name)));
    }
    Ok(value)
}

/// Calls `target[name](...args)`.
pub fn call_method(target: &JsValue, name: &str, args: &Array) -> Result<JsValue, JsValue> {
    let func: Function = Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("'{}' is not a function", name)))?;
    func.apply(target, args)
}

/// Walks `obj.a.b.c`, failing on the first missing segment.
pub fn get_path(obj: &JsValue, path: &[&str]) -> Result<JsValue, JsValue> {
    path.iter().try_fold(obj.clone(), |current, key| {
        let next = Reflect::get(&current, &JsValue::from_str(key))?;
        if next.is_undefined() {
            Err(JsValue::from_str(&format!("Missing '{}' in {}", key, path.join("."))))
        } else {
            Ok(next)
        }
    })
}

pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    <JsValue as JsValueSerdeExt>::from_serde(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// `[lat, lng]` as a JS array
pub fn lat_lng(lat: f64, lng: f64) -> Array {
    Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng))
}

pub fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
