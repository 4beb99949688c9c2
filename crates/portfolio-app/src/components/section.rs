//! Section frame: watermark title, content panel, and the tilted image
//! box shown while a project is drilled into.

use dioxus::prelude::*;

use portfolio_core::{AppState, Project, SectionId};

use super::{AboutPanel, ContactPanel, HomePanel, ProjectsPanel, ResumePanel};

/// Frame around the active section's panel.
#[component]
pub fn Section(state: Signal<AppState>) -> Element {
    let nav = state.read().nav;
    let Some(section) = nav.active_section() else {
        return rsx! {};
    };
    // The image panel only accompanies a drilled-in project.
    let project = if section == SectionId::Projects {
        nav.selected_project()
    } else {
        None
    };

    rsx! {
        div {
            class: "section-container",

            h2 {
                class: "section-watermark",
                "{section.title()}"
            }

            if let Some(project) = project {
                div {
                    class: "centered-wrapper",

                    ProjectImageBox { project }

                    div {
                        class: "content-panel with-project",
                        PanelBody { state, section }
                    }
                }
            } else {
                div {
                    class: "content-panel",
                    PanelBody { state, section }
                }
            }
        }
    }
}

/// Dispatches to the active section's panel component.
#[component]
fn PanelBody(state: Signal<AppState>, section: SectionId) -> Element {
    match section {
        SectionId::Home => rsx! { HomePanel {} },
        SectionId::About => rsx! { AboutPanel {} },
        SectionId::Projects => rsx! { ProjectsPanel { state } },
        SectionId::Resume => rsx! { ResumePanel { state } },
        SectionId::Contact => rsx! { ContactPanel {} },
    }
}

/// 3D-tilted screenshot box for the drilled-in project. Falls back to a
/// placeholder label when no screenshot exists.
#[component]
fn ProjectImageBox(project: &'static Project) -> Element {
    let image_style = match project.image {
        Some(url) => format!("background-image: url({url});"),
        None => String::new(),
    };
    let label = if project.image.is_some() {
        project.title
    } else {
        "Project Screenshot Coming Soon"
    };

    rsx! {
        div {
            class: "project-image-box",
            div {
                class: "project-image-frame",
                div {
                    class: "project-image",
                    style: "{image_style}",
                    div {
                        class: "project-image-label",
                        "{label}"
                    }
                }
            }
        }
    }
}
