//! Color-scheme handling for the page shell.

use leptos::*;

/// Active color scheme, mirrored as a class on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// System preference via `prefers-color-scheme`, defaulting to light.
fn system_theme() -> Theme {
    let prefers_dark = window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);

    if prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Theme signal from context, or a detached one when no provider mounted.
pub fn use_theme() -> RwSignal<Theme> {
    use_context::<RwSignal<Theme>>().unwrap_or_else(|| create_rw_signal(system_theme()))
}

/// Provides the theme signal and keeps `<html class=...>` in sync.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = create_rw_signal(system_theme());
    provide_context(theme);

    create_effect(move |_| {
        let class = theme.get().class();
        if let Some(root) = document().document_element() {
            root.set_class_name(class);
        }
    });

    children()
}
