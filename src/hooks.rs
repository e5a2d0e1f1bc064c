use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

pub const FADE_IN_THRESHOLD: f64 = 0.1;

/// Suspends the current task for `duration` on the browser timer queue.
#[cfg(target_arch = "wasm32")]
pub async fn delay(duration: std::time::Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn delay(_duration: std::time::Duration) {}

pub fn fade_classes(visible: bool) -> &'static str {
    if visible {
        "fade-in is-visible"
    } else {
        "fade-in"
    }
}

#[cfg(target_arch = "wasm32")]
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>>,
}

/// Visibility latch for a section that fades in the first time it scrolls
/// into view.
#[derive(Clone, Copy)]
pub struct FadeIn {
    visible: Signal<bool>,
    #[cfg(target_arch = "wasm32")]
    handle: Signal<Option<ObserverHandle>>,
}

impl FadeIn {
    pub fn is_visible(&self) -> bool {
        (self.visible)()
    }

    pub fn class(&self) -> &'static str {
        fade_classes(self.is_visible())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn on_mounted(&self, event: MountedEvent) {
        use dioxus::web::WebEventExt;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};

        let mut handle = self.handle;
        if handle.read().is_some() {
            return;
        }
        let Ok(target) = event.data.as_ref().as_web_event().dyn_into::<web_sys::Element>() else {
            return;
        };
        let mut visible = self.visible;
        let closure = Rc::new(Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        visible.set(true);
                        observer.unobserve(&entry.target());
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>));
        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(FADE_IN_THRESHOLD));
        let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            closure.as_ref().as_ref().unchecked_ref(),
            &options,
        ) else {
            tracing::warn!("fade-in: observer unavailable, showing section");
            visible.set(true);
            return;
        };
        observer.observe(&target);
        handle.set(Some(ObserverHandle {
            observer,
            _closure: closure,
        }));
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn on_mounted(&self, _event: MountedEvent) {
        let mut visible = self.visible;
        visible.set(true);
    }
}

pub fn use_fade_in() -> FadeIn {
    let visible = use_signal(|| false);
    #[cfg(target_arch = "wasm32")]
    let handle = use_signal(|| None::<ObserverHandle>);
    #[cfg(target_arch = "wasm32")]
    use_drop(move || {
        if let Some(handle) = handle.read().as_ref() {
            handle.observer.disconnect();
        }
    });
    FadeIn {
        visible,
        #[cfg(target_arch = "wasm32")]
        handle,
    }
}
