use dioxus::prelude::*;

const CURSOR_WHITE: Asset = asset!("/assets/cursor-white.svg");
const CURSOR_BLACK: Asset = asset!("/assets/cursor-black.svg");

pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn cursor_icon(self) -> Asset {
        match self {
            Self::Light => CURSOR_BLACK,
            Self::Dark => CURSOR_WHITE,
        }
    }
}

/// Mirrors the theme onto the `dark` class of the document root.
#[cfg(target_arch = "wasm32")]
pub fn apply_to_document(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    if root
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())
        .is_err()
    {
        tracing::warn!(theme = theme.name(), "failed to update document theme class");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_to_document(_theme: Theme) {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggling_twice_restores_mode() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn only_dark_is_dark() {
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
        assert_eq!(Theme::default(), Theme::Light);
    }
}
