use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Retrieve the global `window` object when running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from(message));
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{message}");
}

/// Run `callback` once after `delay_ms` milliseconds.
///
/// # Errors
/// Returns an error if no window is available or the timer cannot be scheduled.
#[cfg(target_arch = "wasm32")]
pub fn schedule_timeout<F>(delay_ms: u32, callback: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    let timeout = Closure::once(callback);
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        timeout.as_ref().unchecked_ref(),
        delay,
    )?;
    timeout.forget();
    Ok(())
}

/// Outside the browser there is no event loop to defer to, so the callback runs inline.
///
/// # Errors
/// Never fails; the signature matches the browser build.
#[cfg(not(target_arch = "wasm32"))]
pub fn schedule_timeout<F>(delay_ms: u32, callback: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let _ = delay_ms;
    callback();
    Ok(())
}

/// Seed material for the session RNG.
#[must_use]
pub fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x0FF1_CE00_5CA7_70A0
    }
}
