use crate::Route;
use crate::auth::{REGISTER_FAILED, REGISTER_OK, sign_up, use_session};
use crate::models::RegisterRequest;
use crate::notify::use_notifier;
use crate::validation::check_registration;
use crate::views::{InlineSpinner, ParticlesBackground};
use dioxus::prelude::*;

const BENEFITS: [&str; 4] = [
    "Send unlimited tokens of gratitude",
    "Receive beautiful email notifications",
    "Redeem tokens for amazing rewards",
    "Track your gratitude journey",
];

#[component]
pub fn Register() -> Element {
    let session = use_session();
    let notifier = use_notifier();
    let nav = use_navigator();

    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut show_confirm = use_signal(|| false);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        async move {
            if busy() {
                return;
            }
            if let Err(problem) = check_registration(&password.read(), &confirm.read()) {
                notifier.error(problem);
                return;
            }

            let request = RegisterRequest {
                first_name: first_name(),
                last_name: last_name(),
                email: email(),
                password: password(),
            };
            busy.set(true);
            let outcome = sign_up(session, request).await;
            busy.set(false);
            match outcome {
                Ok(user) => {
                    log::info!("Registered {}", user.email);
                    notifier.success(REGISTER_OK);
                    nav.push(Route::Dashboard {});
                }
                Err(e) => notifier.error(e.user_message(REGISTER_FAILED)),
            }
        }
    };

    rsx! {
        div { id: "register-page", class: "page auth-page",
            ParticlesBackground {}
            div { class: "auth-column fade-up",
                div { class: "auth-header",
                    Link { to: Route::Home {}, class: "back-link", "← Back to Home" }
                    div { class: "auth-mark", "♥" }
                    h2 { "Join the Community" }
                    p { class: "muted", "Create your account and start spreading gratitude today" }
                }

                div { class: "glass auth-card",
                    form { class: "form", onsubmit: submit,
                        div { class: "field-row",
                            div { class: "field",
                                label { r#for: "firstName", "First Name" }
                                input {
                                    id: "firstName",
                                    r#type: "text",
                                    autocomplete: "given-name",
                                    required: true,
                                    class: "input-field",
                                    placeholder: "John",
                                    value: "{first_name}",
                                    oninput: move |evt| first_name.set(evt.value()),
                                }
                            }
                            div { class: "field",
                                label { r#for: "lastName", "Last Name" }
                                input {
                                    id: "lastName",
                                    r#type: "text",
                                    autocomplete: "family-name",
                                    required: true,
                                    class: "input-field",
                                    placeholder: "Doe",
                                    value: "{last_name}",
                                    oninput: move |evt| last_name.set(evt.value()),
                                }
                            }
                        }

                        div { class: "field",
                            label { r#for: "email", "Email Address" }
                            input {
                                id: "email",
                                r#type: "email",
                                autocomplete: "email",
                                required: true,
                                class: "input-field",
                                placeholder: "john@example.com",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }

                        div { class: "field",
                            label { r#for: "password", "Password" }
                            div { class: "password-wrap",
                                input {
                                    id: "password",
                                    r#type: if show_password() { "text" } else { "password" },
                                    autocomplete: "new-password",
                                    required: true,
                                    class: "input-field",
                                    placeholder: "Create a password",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                }
                                button {
                                    r#type: "button",
                                    class: "reveal",
                                    onclick: move |_| show_password.set(!show_password()),
                                    if show_password() {
                                        "Hide"
                                    } else {
                                        "Show"
                                    }
                                }
                            }
                        }

                        div { class: "field",
                            label { r#for: "confirmPassword", "Confirm Password" }
                            div { class: "password-wrap",
                                input {
                                    id: "confirmPassword",
                                    r#type: if show_confirm() { "text" } else { "password" },
                                    autocomplete: "new-password",
                                    required: true,
                                    class: "input-field",
                                    placeholder: "Confirm your password",
                                    value: "{confirm}",
                                    oninput: move |evt| confirm.set(evt.value()),
                                }
                                button {
                                    r#type: "button",
                                    class: "reveal",
                                    onclick: move |_| show_confirm.set(!show_confirm()),
                                    if show_confirm() {
                                        "Hide"
                                    } else {
                                        "Show"
                                    }
                                }
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "btn-primary btn-block",
                            disabled: busy(),
                            if busy() {
                                InlineSpinner {}
                            } else {
                                "Create Account"
                            }
                        }

                        p { class: "auth-switch",
                            "Already have an account? "
                            Link { to: Route::Login {}, "Sign in here" }
                        }
                    }

                    div { class: "benefits",
                        h3 { "What you'll get:" }
                        ul {
                            for benefit in BENEFITS {
                                li { key: "{benefit}", "✓ {benefit}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
