use dioxus::prelude::*;

use crate::navigation::{
    logo_action, section_action, NavAction, NavigationOptions, NavigationRequest, Page, Section,
    CV_REQUEST_MESSAGE,
};
use crate::theme::Theme;
use crate::widgets::{MenuIcon, MoonIcon, SunIcon};

/// One entry of the header menu, resolved against the current page on click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuEntry {
    Section(Section),
    Page(Page),
    Cv,
}

const MENU: [(&str, MenuEntry); 7] = [
    ("ABOUT", MenuEntry::Section(Section::About)),
    ("EDUCATION", MenuEntry::Section(Section::Education)),
    ("PROJECTS", MenuEntry::Page(Page::Projects)),
    ("SKILLS", MenuEntry::Section(Section::Skills)),
    ("CERTIFICATES", MenuEntry::Section(Section::Certificates)),
    ("BLOG", MenuEntry::Page(Page::Blog)),
    ("CV", MenuEntry::Cv),
];

impl MenuEntry {
    fn action(self, current: Page) -> NavAction {
        match self {
            Self::Section(section) => section_action(current, section),
            Self::Page(page) => NavAction::Navigate(NavigationRequest::to(page)),
            Self::Cv => NavAction::Navigate(NavigationRequest::with_options(
                Page::Contact,
                NavigationOptions::with_message(CV_REQUEST_MESSAGE),
            )),
        }
    }
}

fn contact_action() -> NavAction {
    NavAction::Navigate(NavigationRequest::to(Page::Contact))
}

pub fn header_classes(scrolled: bool, menu_open: bool) -> &'static str {
    match (scrolled, menu_open) {
        (true, _) => "site-header is-scrolled",
        (false, true) => "site-header is-open",
        (false, false) => "site-header",
    }
}

#[component]
fn NavLinks(page: Page, on_select: EventHandler<NavAction>) -> Element {
    rsx! {
        for (label, entry) in MENU {
            button {
                key: "{label}",
                class: "nav-link",
                onclick: move |_| on_select.call(entry.action(page)),
                "{label}"
            }
        }
    }
}

#[component]
pub fn Header(
    scrolled: bool,
    page: Page,
    theme: Theme,
    on_action: EventHandler<NavAction>,
    on_toggle_theme: EventHandler<()>,
) -> Element {
    let mut menu_open = use_signal(|| false);
    let open = menu_open();

    let mut dispatch = move |action: NavAction| {
        menu_open.set(false);
        on_action.call(action);
    };

    rsx! {
        header { class: header_classes(scrolled, open),
            div { class: "container header-bar",
                div { class: "logo-frame",
                    a {
                        href: "#",
                        class: "logo",
                        onclick: move |event| {
                            event.prevent_default();
                            dispatch(logo_action(page));
                        },
                        "SID"
                    }
                }
                nav { class: "nav-desktop",
                    NavLinks { page, on_select: move |action| dispatch(action) }
                }
                div { class: "header-actions",
                    button {
                        class: "theme-toggle",
                        aria_label: "Toggle theme",
                        onclick: move |_| on_toggle_theme.call(()),
                        if theme.is_dark() { SunIcon {} } else { MoonIcon {} }
                    }
                    button {
                        class: "outline-button",
                        onclick: move |_| on_action.call(contact_action()),
                        "Contact Me"
                    }
                }
                div { class: "menu-toggle",
                    button {
                        aria_label: "Toggle menu",
                        onclick: move |_| menu_open.set(!open),
                        MenuIcon { open }
                    }
                }
            }
            if open {
                div { class: "mobile-menu",
                    nav { class: "mobile-nav",
                        NavLinks { page, on_select: move |action| dispatch(action) }
                        div { class: "mobile-actions",
                            button {
                                class: "theme-toggle",
                                aria_label: "Toggle theme",
                                onclick: move |_| on_toggle_theme.call(()),
                                if theme.is_dark() { SunIcon {} } else { MoonIcon {} }
                            }
                            button {
                                class: "outline-button",
                                onclick: move |_| dispatch(contact_action()),
                                "Contact Me"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::ScrollTarget;
    use dioxus::dioxus_core::VirtualDom;
    use pretty_assertions::assert_eq;

    #[component]
    fn HeaderHarness(page: Page, theme: Theme) -> Element {
        rsx! {
            Header {
                scrolled: false,
                page,
                theme,
                on_action: move |_| {},
                on_toggle_theme: move |_| {},
            }
        }
    }

    #[test]
    fn header_renders_on_every_page() {
        for page in [Page::Home, Page::Projects, Page::Blog, Page::Contact] {
            for theme in [Theme::Light, Theme::Dark] {
                let mut dom = VirtualDom::new_with_props(HeaderHarness, HeaderHarnessProps { page, theme });
                dom.rebuild_in_place();
            }
        }
    }

    #[test]
    fn contact_button_opens_blank_contact_page() {
        assert_eq!(
            contact_action(),
            NavAction::Navigate(NavigationRequest::to(Page::Contact))
        );
    }

    #[test]
    fn cv_entry_always_requests_cv_message() {
        for page in [Page::Home, Page::Blog, Page::Contact] {
            let NavAction::Navigate(request) = MenuEntry::Cv.action(page) else {
                panic!("cv entry must navigate");
            };
            assert_eq!(request.target, Page::Contact);
            assert_eq!(request.options.message.as_deref(), Some(CV_REQUEST_MESSAGE));
        }
    }

    #[test]
    fn section_entry_scrolls_in_place_on_home() {
        assert_eq!(
            MenuEntry::Section(Section::Skills).action(Page::Home),
            NavAction::ScrollNow(ScrollTarget::Anchor("skills".to_string()))
        );
    }

    #[test]
    fn scrolled_header_wins_over_open_menu() {
        assert_eq!(header_classes(true, true), "site-header is-scrolled");
        assert_eq!(header_classes(false, true), "site-header is-open");
    }
}
