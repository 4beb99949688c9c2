//! About panel: bio paragraphs, skill pills, and interests.

use dioxus::prelude::*;

use portfolio_core::content;

#[component]
pub fn AboutPanel() -> Element {
    rsx! {
        div {
            class: "about-panel",

            h2 {
                class: "panel-title fade-left",
                "About Me"
            }

            div {
                class: "fade-in delay-1",

                div {
                    class: "about-section",
                    for (idx, paragraph) in content::about_paragraphs().iter().enumerate() {
                        p { key: "{idx}", "{paragraph}" }
                    }
                }

                div {
                    class: "about-section",
                    h3 { class: "subsection-title", "Core Skills" }
                    div {
                        class: "skills-grid",
                        for skill in content::skills() {
                            div {
                                key: "{skill.name}",
                                class: "skill-pill pop-in",
                                span { class: "skill-icon", "{skill.icon}" }
                                "{skill.name}"
                            }
                        }
                    }
                }

                div {
                    class: "about-section",
                    h3 { class: "subsection-title", "Interests & Focus Areas" }
                    ul {
                        class: "interests-list",
                        for (idx, interest) in content::interests().iter().enumerate() {
                            li { key: "{idx}", "{interest}" }
                        }
                    }
                }
            }
        }
    }
}
