use dioxus::prelude::*;

use crate::hooks::use_fade_in;

/// Image that swaps to `fallback` once if the remote source fails to load.
#[component]
pub fn FallbackImage(src: String, fallback: String, alt: String, class: Option<String>) -> Element {
    let mut failed = use_signal(|| false);
    let shown = if failed() { fallback } else { src };
    let class = class.unwrap_or_default();
    rsx! {
        img {
            src: "{shown}",
            alt: "{alt}",
            class: "{class}",
            loading: "lazy",
            onerror: move |_| {
                if !failed() {
                    tracing::debug!("image failed to load, using placeholder");
                    failed.set(true);
                }
            },
        }
    }
}

/// Section wrapper that fades in once it intersects the viewport.
#[component]
pub fn FadeSection(id: Option<String>, class: Option<String>, children: Element) -> Element {
    let fade = use_fade_in();
    let class = class.unwrap_or_default();
    rsx! {
        section {
            id,
            class: "{class} {fade.class()}",
            onmounted: move |event| fade.on_mounted(event),
            {children}
        }
    }
}

#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div { class: "loading-screen", role: "status", aria_label: "Loading",
            div { class: "loader" }
        }
    }
}

#[component]
pub fn SunIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" }
        }
    }
}

#[component]
pub fn MoonIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            path { d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" }
        }
    }
}

#[component]
pub fn MenuIcon(open: bool) -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            if open {
                path { d: "M6 18L18 6M6 6l12 12" }
            } else {
                path { d: "M4 6h16M4 12h16M4 18h16" }
            }
        }
    }
}

#[component]
pub fn ArrowIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon-small",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            path { d: "M5 12h14M12 5l7 7-7 7" }
        }
    }
}
