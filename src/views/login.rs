use crate::Route;
use crate::auth::{LOGIN_FAILED, LOGIN_OK, sign_in, use_session};
use crate::notify::use_notifier;
use crate::views::{InlineSpinner, ParticlesBackground};
use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let notifier = use_notifier();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        async move {
            if busy() {
                return;
            }
            busy.set(true);
            let outcome = sign_in(session, email(), password()).await;
            busy.set(false);
            match outcome {
                Ok(user) => {
                    log::info!("Signed in as {}", user.email);
                    notifier.success(LOGIN_OK);
                    nav.push(Route::Dashboard {});
                }
                Err(e) => notifier.error(e.user_message(LOGIN_FAILED)),
            }
        }
    };

    rsx! {
        div { id: "login-page", class: "page auth-page",
            ParticlesBackground {}
            div { class: "auth-column fade-up",
                div { class: "auth-header",
                    Link { to: Route::Home {}, class: "back-link", "← Back to Home" }
                    div { class: "auth-mark", "♥" }
                    h2 { "Welcome Back" }
                    p { class: "muted", "Sign in to your account to continue spreading gratitude" }
                }

                div { class: "glass auth-card",
                    form { class: "form", onsubmit: submit,
                        div { class: "field",
                            label { r#for: "email", "Email Address" }
                            input {
                                id: "email",
                                name: "email",
                                r#type: "email",
                                autocomplete: "email",
                                required: true,
                                class: "input-field",
                                placeholder: "Enter your email",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }

                        div { class: "field",
                            label { r#for: "password", "Password" }
                            div { class: "password-wrap",
                                input {
                                    id: "password",
                                    name: "password",
                                    r#type: if show_password() { "text" } else { "password" },
                                    autocomplete: "current-password",
                                    required: true,
                                    class: "input-field",
                                    placeholder: "Enter your password",
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

                        button {
                            r#type: "submit",
                            class: "btn-primary btn-block",
                            disabled: busy(),
                            if busy() {
                                InlineSpinner {}
                            } else {
                                "Sign In"
                            }
                        }

                        p { class: "auth-switch",
                            "Don't have an account? "
                            Link { to: Route::Register {}, "Sign up here" }
                        }
                    }
                }
            }
        }
    }
}
