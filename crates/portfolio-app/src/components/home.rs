//! Home panel: welcome banner, role line, and quick contact links.

use dioxus::prelude::*;

use portfolio_core::content;

#[component]
pub fn HomePanel() -> Element {
    rsx! {
        div {
            class: "home-panel",

            h1 {
                class: "home-title fade-down",
                "WELCOME"
            }

            div {
                class: "home-role fade-in delay-1",
                "{content::OWNER_ROLE}"
            }

            p {
                class: "home-subtitle fade-in delay-2",
                "{content::HOME_INTRO}"
            }

            div {
                class: "home-links fade-up delay-3",

                for row in content::home_links() {
                    div {
                        key: "{row.label}",
                        class: "info-item",
                        div { class: "info-icon", "{row.icon}" }
                        span {
                            "{row.label}: "
                            if let Some(link) = row.link {
                                a { href: "{link}", "{row.value}" }
                            } else {
                                "{row.value}"
                            }
                        }
                    }
                }
            }
        }
    }
}
