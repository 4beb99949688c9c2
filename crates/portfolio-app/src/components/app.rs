//! Root application component: start gate, header, menu, active section.

use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use portfolio_core::nav::REVEAL_DELAY_MS;
use portfolio_core::{content, AppState};

use crate::theme::ThemedRoot;

use super::{Background, Menu, Section};

/// Root application component.
///
/// The start gate listens for any key press or click on the whole
/// container; once the experience has started both paths fall through
/// [`NavState::activate`](portfolio_core::NavState::activate) as no-ops,
/// and the prompt itself unmounts.
#[component]
pub fn App(state: Signal<AppState>) -> Element {
    let mut state_write = state;
    let started = state.read().nav.started();
    let active = state.read().nav.active_section();

    rsx! {
        ThemedRoot {
            div {
                class: "app-container",
                tabindex: 0,
                autofocus: true,
                onclick: move |_| start_experience(&mut state_write),
                onkeydown: move |_| start_experience(&mut state_write),

                Background { state }

                HeaderName { started }

                if !started {
                    div {
                        class: "start-prompt",
                        "{content::START_PROMPT}"
                    }
                }

                if started {
                    div {
                        class: "content-layout",

                        Menu { state }

                        if let Some(section) = active {
                            Section { key: "{section.id()}", state }
                        }
                    }
                }
            }
        }
    }
}

/// Dismisses the start gate and schedules the one-shot home reveal.
///
/// The spawned task is scoped to the calling component, so it is
/// cancelled if the view unmounts before the delay elapses.
fn start_experience(state: &mut Signal<AppState>) {
    if state.write().nav.activate() {
        tracing::info!("start gate dismissed");
        let mut state = *state;
        spawn(async move {
            sleep(Duration::from_millis(REVEAL_DELAY_MS)).await;
            state.write().nav.reveal_default();
        });
    }
}

/// Angled name box in the top-left corner, revealed after activation.
#[component]
fn HeaderName(started: bool) -> Element {
    rsx! {
        div {
            class: if started { "header-name visible" } else { "header-name" },
            div {
                class: "header-name-box",
                h1 {
                    class: "header-name-text",
                    "{content::OWNER_NAME}"
                }
            }
        }
    }
}
