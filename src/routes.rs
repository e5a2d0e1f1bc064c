use dioxus::prelude::*;
use std::time::Duration;

use crate::blog::BlogPage;
use crate::config::{use_runtime_config, RuntimeConfig};
use crate::contact::ContactPage;
use crate::cursor::{is_touch_device, CustomCursor, PointerPosition};
use crate::header::Header;
use crate::home::{Footer, HomePage};
use crate::hooks::delay;
use crate::navigation::{perform_scroll, NavAction, NavigationRequest, Page, ScrollRequest, WindowScroll};
use crate::projects::ProjectsPage;
use crate::starfield::NightSkyBackground;
use crate::state::AppState;
use crate::theme::apply_to_document;
use crate::widgets::LoadingScreen;

const MAIN_CSS: Asset = asset!("/assets/main.css");

pub const LOADING_DURATION: Duration = Duration::from_secs(2);
pub const SCROLLED_OFFSET: f64 = 10.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_OFFSET
}

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    let mut state = use_signal(AppState::default);

    use_hook(move || {
        spawn(async move {
            delay(LOADING_DURATION).await;
            state.write().finish_loading();
            tracing::debug!("loading screen dismissed");
        });
    });

    let body = match config_resource() {
        None => rsx! { LoadingScreen {} },
        Some(Ok(config)) => rsx! { Shell { config, state } },
        Some(Err(message)) => rsx! {
            main { class: "config-error",
                h1 { "Config load failed" }
                p { "{message}" }
            }
        },
    };

    rsx! {
        document::Title { "SID | Portfolio" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#14b8a6" }
        {body}
    }
}

#[cfg(target_arch = "wasm32")]
struct ScrollListener(std::rc::Rc<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>>);

#[component]
fn Shell(config: RuntimeConfig, state: Signal<AppState>) -> Element {
    use_context_provider(|| config);
    let mut state = state;
    let scrolled = use_signal(|| false);
    let mut pointer = use_signal(PointerPosition::default);
    let touch = use_hook(is_touch_device);

    use_effect(move || apply_to_document(state.read().theme()));

    #[cfg(target_arch = "wasm32")]
    {
        let mut listener = use_signal(|| None::<ScrollListener>);
        use_effect(move || {
            use wasm_bindgen::closure::Closure;
            use wasm_bindgen::JsCast;

            if listener.read().is_some() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            let mut scrolled = scrolled;
            let on_scroll = std::rc::Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
                let offset = web_sys::window()
                    .and_then(|window| window.scroll_y().ok())
                    .unwrap_or_default();
                let next = is_scrolled(offset);
                if scrolled() != next {
                    scrolled.set(next);
                }
            }) as Box<dyn FnMut(_)>));
            let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().as_ref().unchecked_ref());
            listener.set(Some(ScrollListener(on_scroll)));
        });
        use_drop(move || {
            use wasm_bindgen::JsCast;

            let binding = listener.read();
            let Some(ScrollListener(on_scroll)) = binding.as_ref() else {
                return;
            };
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("scroll", on_scroll.as_ref().as_ref().unchecked_ref());
            }
        });
    }

    let mut navigate = move |request: NavigationRequest| {
        let scroll = state.write().navigate(request.target, request.options);
        if let Some(ScrollRequest { target, delay: wait }) = scroll {
            spawn(async move {
                delay(wait).await;
                perform_scroll(&WindowScroll, &target);
            });
        }
    };
    let on_action = move |action: NavAction| match action {
        NavAction::ScrollNow(target) => {
            perform_scroll(&WindowScroll, &target);
        }
        NavAction::Navigate(request) => navigate(request),
    };

    let snapshot = state.read().clone();
    let theme = snapshot.theme();
    let page = snapshot.page();
    let root_class = if touch { "app-root" } else { "app-root cursor-none" };

    rsx! {
        div {
            class: root_class,
            onmousemove: move |event| {
                let point = event.client_coordinates();
                pointer.set(PointerPosition { x: point.x, y: point.y });
            },
            if theme.is_dark() {
                NightSkyBackground {}
            }
            if snapshot.is_loading() {
                LoadingScreen {}
            } else {
                if !touch {
                    CustomCursor { theme, position: pointer }
                }
                Header {
                    scrolled: scrolled(),
                    page,
                    theme,
                    on_action,
                    on_toggle_theme: move |_| {
                        state.write().toggle_theme();
                    },
                }
                {match page {
                    Page::Home => rsx! { HomePage { on_navigate: navigate } },
                    Page::Projects => rsx! { ProjectsPage {} },
                    Page::Blog => rsx! { BlogPage {} },
                    Page::Contact => {
                        let message = snapshot.contact_message().to_string();
                        rsx! { ContactPage { key: "{message}", initial_message: message.clone() } }
                    }
                }}
                if page != Page::Contact {
                    Footer {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_solid_past_offset() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }
}
