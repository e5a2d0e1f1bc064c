use crate::navigation::{NavigationOptions, Page, ScrollRequest, ViewRouter};
use crate::theme::Theme;

/// Top-level application state, owned by the shell and handed to children
/// only as read-only props.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    router: ViewRouter,
    theme: Theme,
    loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            router: ViewRouter::default(),
            theme: Theme::Light,
            loading: true,
        }
    }
}

impl AppState {
    pub fn page(&self) -> Page {
        self.router.page()
    }

    pub fn contact_message(&self) -> &str {
        self.router.contact_message()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn navigate(&mut self, target: Page, options: NavigationOptions) -> Option<ScrollRequest> {
        self.router.navigate(target, options)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = self.theme.name(), "theme toggled");
        self.theme
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }
}
