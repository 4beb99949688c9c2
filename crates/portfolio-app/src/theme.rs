//! Theme wrapper for the portfolio shell.

use dioxus::prelude::*;

/// Available themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Navy gradient with blue glow accents.
    #[default]
    DeepOcean,
}

impl Theme {
    /// Returns the CSS class value for this theme.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::DeepOcean => "deep-ocean",
        }
    }
}

/// Global signal for the current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(Theme::default);

/// Root component that applies the current theme.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();
    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}
