//! Section navigation menu.

use dioxus::prelude::*;

use portfolio_core::{AppState, SectionId};

/// Vertical menu of the five sections. The active item carries the
/// highlight bar styling; clicks switch sections directly.
#[component]
pub fn Menu(state: Signal<AppState>) -> Element {
    let mut state_write = state;
    let active = state.read().nav.active_section();

    rsx! {
        nav {
            class: "menu",
            ul {
                class: "menu-list",

                for section in SectionId::all().iter().copied() {
                    li {
                        key: "{section.id()}",
                        class: if active == Some(section) { "menu-item active" } else { "menu-item" },
                        onclick: move |_| {
                            state_write.write().nav.select_section(section);
                        },
                        "{section.label()}"
                    }
                }
            }
        }
    }
}
