use dioxus::prelude::*;

use crate::theme::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Touch devices keep the native pointer.
#[cfg(target_arch = "wasm32")]
pub fn is_touch_device() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let has_touch_start = js_sys::Reflect::has(&window, &wasm_bindgen::JsValue::from_str("ontouchstart"))
        .unwrap_or(false);
    has_touch_start || window.navigator().max_touch_points() > 0
}

#[cfg(not(target_arch = "wasm32"))]
pub fn is_touch_device() -> bool {
    false
}

#[component]
pub fn CustomCursor(theme: Theme, position: Signal<PointerPosition>) -> Element {
    let icon = theme.cursor_icon();
    let position = position();
    rsx! {
        div {
            class: "custom-cursor",
            aria_hidden: "true",
            style: "left: {position.x}px; top: {position.y}px; background-image: url({icon});",
        }
    }
}
