//! Resume panel with its tab strip: experience, education, skills, awards.

use dioxus::prelude::*;

use portfolio_core::{content, AppState, ResumeTab};

#[component]
pub fn ResumePanel(state: Signal<AppState>) -> Element {
    let mut state_write = state;
    let active_tab = state.read().nav.resume_tab();

    rsx! {
        div {
            class: "resume-panel",

            div {
                class: "resume-nav",
                for tab in ResumeTab::all().iter().copied() {
                    button {
                        key: "{tab.label()}",
                        class: if active_tab == tab { "resume-nav-button active" } else { "resume-nav-button" },
                        onclick: move |_| {
                            state_write.write().nav.select_resume_tab(tab);
                        },
                        "{tab.label()}"
                    }
                }
            }

            div {
                class: "resume-section fade-up",
                key: "{active_tab.label()}",
                match active_tab {
                    ResumeTab::Experience => rsx! { ExperienceTab {} },
                    ResumeTab::Education => rsx! { EducationTab {} },
                    ResumeTab::Skills => rsx! { SkillsTab {} },
                    ResumeTab::Awards => rsx! { AwardsTab {} },
                }
            }
        }
    }
}

#[component]
fn ExperienceTab() -> Element {
    rsx! {
        h2 { class: "panel-title", "Professional Experience" }

        div {
            class: "info-block",
            for entry in content::experience() {
                div {
                    key: "{entry.company}",
                    class: "experience-item",

                    h4 { class: "position-title", "{entry.position}" }
                    div {
                        class: "company-info",
                        span { class: "company-name", "{entry.company}" }
                        span { class: "company-location", "{entry.location}" }
                    }
                    span { class: "duration", "{entry.duration}" }
                    ul {
                        class: "bullet-list",
                        for (idx, bullet) in entry.bullets.iter().enumerate() {
                            li { key: "{idx}", "{bullet}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EducationTab() -> Element {
    rsx! {
        h2 { class: "panel-title", "Education" }

        div {
            class: "info-block",
            for entry in content::education() {
                div {
                    key: "{entry.institution}",
                    class: "education-item",

                    h4 { class: "institution-name", "{entry.institution}" }
                    div {
                        class: "degree-info",
                        if let Some(degree) = entry.degree {
                            span { class: "degree", "{degree} " }
                        }
                        span { class: "duration", "{entry.duration}" }
                    }
                    if let Some(gpa) = entry.gpa {
                        div { "{gpa}" }
                    }
                    h5 { class: "coursework-title", "{entry.coursework_title}" }
                    ul {
                        class: "coursework-list",
                        for (idx, course) in entry.coursework.iter().enumerate() {
                            li { key: "{idx}", "{course}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillsTab() -> Element {
    rsx! {
        h2 { class: "panel-title", "Technical Skills" }

        div {
            class: "info-block skills-container",
            for category in content::skill_categories() {
                div {
                    key: "{category.title}",
                    class: "skill-category",

                    h5 { class: "category-title", "{category.title}" }
                    div {
                        class: "skills-grid",
                        for entry in category.entries {
                            span { key: "{entry}", class: "skill-tag pop-in", "{entry}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AwardsTab() -> Element {
    rsx! {
        h2 { class: "panel-title", "Awards & Honours" }

        div {
            class: "info-block awards-container",
            for category in content::award_categories() {
                div {
                    key: "{category.title}",
                    class: "award-category",

                    h5 { class: "category-title", "{category.title}" }
                    ul {
                        class: "bullet-list",
                        for (idx, entry) in category.entries.iter().enumerate() {
                            li { key: "{idx}", "{entry}" }
                        }
                    }
                }
            }
        }
    }
}
