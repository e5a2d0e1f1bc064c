use std::time::Duration;

pub const DEFAULT_CONTACT_MESSAGE: &str =
    "Hey Sid, love the website! I'd like to chat about some opportunities you might like!";
pub const CV_REQUEST_MESSAGE: &str = "Hey Siddharth, I am reaching out about potential opportunities that align with your skillset. I'd like to have your CV for discussing potential fits.";

/// Delay between switching to the home view and scrolling it, so the
/// sections exist in the DOM.
pub const SCROLL_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Projects,
    Blog,
    Contact,
}

impl Page {
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Blog => "blog",
            Self::Contact => "contact",
        }
    }
}

/// Anchored sections of the home view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Education,
    Skills,
    Certificates,
}

impl Section {
    pub fn anchor_id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Certificates => "certificates",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationOptions {
    pub message: Option<String>,
    pub section_id: Option<String>,
}

impl NavigationOptions {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            section_id: None,
        }
    }

    pub fn with_section(section: Section) -> Self {
        Self {
            message: None,
            section_id: Some(section.anchor_id().to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationRequest {
    pub target: Page,
    pub options: NavigationOptions,
}

impl NavigationRequest {
    pub fn to(target: Page) -> Self {
        Self {
            target,
            options: NavigationOptions::default(),
        }
    }

    pub fn with_options(target: Page, options: NavigationOptions) -> Self {
        Self { target, options }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Anchor(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: ScrollTarget,
    pub delay: Duration,
}

/// What a header link resolves to given the page currently shown.
#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    ScrollNow(ScrollTarget),
    Navigate(NavigationRequest),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewRouter {
    page: Page,
    contact_message: String,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self {
            page: Page::Home,
            contact_message: CV_REQUEST_MESSAGE.to_string(),
        }
    }
}

impl ViewRouter {
    pub fn page(&self) -> Page {
        self.page
    }

    pub fn contact_message(&self) -> &str {
        &self.contact_message
    }

    /// Replaces the current page. Only a move to home schedules a scroll.
    pub fn navigate(&mut self, target: Page, options: NavigationOptions) -> Option<ScrollRequest> {
        let NavigationOptions {
            message,
            section_id,
        } = options;

        match message {
            Some(message) if !message.is_empty() => self.contact_message = message,
            _ if target == Page::Contact => {
                self.contact_message = DEFAULT_CONTACT_MESSAGE.to_string();
            }
            _ => {}
        }

        tracing::debug!(from = self.page.name(), to = target.name(), "navigate");
        self.page = target;

        if target != Page::Home {
            return None;
        }
        let target = match section_id {
            Some(id) if !id.is_empty() => ScrollTarget::Anchor(id),
            _ => ScrollTarget::Top,
        };
        Some(ScrollRequest {
            target,
            delay: SCROLL_DELAY,
        })
    }
}

pub fn section_action(current: Page, section: Section) -> NavAction {
    if current == Page::Home {
        NavAction::ScrollNow(ScrollTarget::Anchor(section.anchor_id().to_string()))
    } else {
        NavAction::Navigate(NavigationRequest::with_options(
            Page::Home,
            NavigationOptions::with_section(section),
        ))
    }
}

pub fn logo_action(current: Page) -> NavAction {
    if current == Page::Home {
        NavAction::ScrollNow(ScrollTarget::Top)
    } else {
        NavAction::Navigate(NavigationRequest::to(Page::Home))
    }
}

/// Something that can scroll the document.
pub trait ScrollSurface {
    fn scroll_to_top(&self);
    /// Returns `false` when no element carries `id`.
    fn scroll_to_anchor(&self, id: &str) -> bool;
}

pub fn perform_scroll<S: ScrollSurface + ?Sized>(surface: &S, target: &ScrollTarget) -> bool {
    match target {
        ScrollTarget::Top => {
            surface.scroll_to_top();
            true
        }
        ScrollTarget::Anchor(id) => {
            let found = surface.scroll_to_anchor(id);
            if !found {
                tracing::debug!(anchor = %id, "scroll target missing");
            }
            found
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

#[cfg(target_arch = "wasm32")]
impl ScrollSurface for WindowScroll {
    fn scroll_to_top(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_to_anchor(&self, id: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ScrollSurface for WindowScroll {
    fn scroll_to_top(&self) {}

    fn scroll_to_anchor(&self, _id: &str) -> bool {
        false
    }
}
