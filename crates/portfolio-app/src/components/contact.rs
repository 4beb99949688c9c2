//! Contact panel: message form plus contact info and social links.

use dioxus::prelude::*;

use portfolio_core::content;

#[component]
pub fn ContactPanel() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        // Required-field semantics are enforced by the inputs; there is
        // no backend, so a submission is logged and acknowledged.
        tracing::info!(
            name = %name.read(),
            email = %email.read(),
            subject = %subject.read(),
            "contact form submitted"
        );
        name.set(String::new());
        email.set(String::new());
        subject.set(String::new());
        message.set(String::new());
        submitted.set(true);
    };

    rsx! {
        div {
            class: "contact-panel",

            h2 {
                class: "panel-title fade-left",
                "Contact"
            }

            p {
                class: "panel-intro fade-in delay-1",
                "{content::CONTACT_INTRO}"
            }

            div {
                class: "contact-layout",

                form {
                    class: "contact-form fade-in delay-2",
                    onsubmit: submit,

                    div {
                        class: "form-field",
                        label { r#for: "name", "Name" }
                        input {
                            id: "name",
                            r#type: "text",
                            required: true,
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            required: true,
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "subject", "Subject" }
                        input {
                            id: "subject",
                            r#type: "text",
                            required: true,
                            value: "{subject}",
                            oninput: move |evt| subject.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "message", "Message" }
                        textarea {
                            id: "message",
                            required: true,
                            value: "{message}",
                            oninput: move |evt| message.set(evt.value()),
                        }
                    }

                    button {
                        class: "submit-button",
                        r#type: "submit",
                        "SEND MESSAGE"
                    }

                    if submitted() {
                        p {
                            class: "submit-confirmation",
                            "Message sent. Thank you!"
                        }
                    }
                }

                div {
                    class: "contact-info fade-in delay-3",

                    h3 { class: "subsection-title", "Contact Information" }

                    div {
                        class: "info-list",
                        for row in content::contact_rows() {
                            div {
                                key: "{row.label}",
                                class: "info-item",
                                div { class: "info-icon", "{row.icon}" }
                                div {
                                    strong { "{row.label}:" }
                                    br {}
                                    if let Some(link) = row.link {
                                        a { href: "{link}", "{row.value}" }
                                    } else {
                                        "{row.value}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "social-links",
                        for social in content::social_links() {
                            a {
                                key: "{social.label}",
                                class: "social-link",
                                href: "{social.url}",
                                aria_label: "{social.label}",
                                "{social.icon}"
                            }
                        }
                    }
                }
            }
        }
    }
}
