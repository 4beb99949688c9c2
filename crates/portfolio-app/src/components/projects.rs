//! Projects panel: card grid and drilled-in detail view.

use dioxus::prelude::*;

use portfolio_core::{content, AppState};

/// Projects panel. Shows the card grid until a project is drilled into,
/// then the detail view with a back button.
#[component]
pub fn ProjectsPanel(state: Signal<AppState>) -> Element {
    let mut state_write = state;
    let selected = state.read().nav.selected_project();

    let Some(project) = selected else {
        return rsx! {
            div {
                class: "projects-panel",

                h2 {
                    class: "panel-title fade-left",
                    "Projects"
                }

                p {
                    class: "panel-intro fade-in delay-1",
                    "{content::PROJECTS_INTRO}"
                }

                div {
                    class: "projects-grid",

                    for project in content::projects() {
                        div {
                            key: "{project.id}",
                            class: "project-card fade-up",
                            onclick: move |_| {
                                state_write.write().nav.select_project(Some(project));
                            },

                            h3 { class: "project-card-title", "{project.title}" }
                            p { class: "project-card-desc", "{project.short_desc}" }
                            div {
                                class: "project-tags",
                                for tag in project.tags {
                                    span { key: "{tag}", class: "project-tag", "{tag}" }
                                }
                            }
                        }
                    }
                }
            }
        };
    };

    rsx! {
        div {
            class: "project-detail fade-in",

            div {
                class: "detail-header",
                button {
                    class: "back-button",
                    onclick: move |_| {
                        state_write.write().nav.select_project(None);
                    },
                    "← Back to Projects"
                }
            }

            div {
                class: "project-content-box",

                h2 { class: "detail-title", "{project.title}" }

                div {
                    class: "detail-tags",
                    for tag in project.tags {
                        span { key: "{tag}", class: "detail-tag", "{tag}" }
                    }
                }

                div {
                    class: "detail-section",
                    h3 { class: "detail-section-title", "Overview" }
                    p { class: "detail-text", "{project.long_desc}" }
                }

                div {
                    class: "detail-section",
                    h3 { class: "detail-section-title", "Key Features" }
                    ul {
                        class: "features-list",
                        for (idx, feature) in project.features.iter().enumerate() {
                            li { key: "{idx}", "{feature}" }
                        }
                    }
                }

                div {
                    class: "detail-section",
                    h3 { class: "detail-section-title", "Technologies Used" }
                    p { class: "detail-text", "{project.technologies}" }
                }

                div {
                    class: "detail-section",
                    h3 { class: "detail-section-title", "Challenges & Solutions" }
                    p { class: "detail-text", "{project.challenges}" }
                }
            }
        }
    }
}
