use crate::Route;
use crate::auth::use_session;
use crate::views::{AnimatedButton, AnimatedGradient, GlassCard, ParticlesBackground};
use dioxus::prelude::*;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "💌",
        "Send Gratitude",
        "Thank anyone in your community with a token and a personal message.",
    ),
    (
        "🎁",
        "Redeem Rewards",
        "Turn the tokens you receive into coffee, tickets, gifts and experiences.",
    ),
    (
        "📈",
        "Track Your Journey",
        "Every token sent and received is kept in your transaction history.",
    ),
    (
        "🛡️",
        "Secure by Default",
        "Your account is protected and every transfer is verified by the server.",
    ),
];

const STEPS: &[(&str, &str)] = &[
    ("Create an account", "Sign up in seconds with your email."),
    ("Find someone to thank", "Search a colleague or friend by email."),
    ("Send tokens", "Pick an amount, add a message, and send."),
];

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // re-runs when the session signs in or out
    let balance = use_resource(move || async move {
        let (authenticated, api) = {
            let session = session.read();
            (session.is_authenticated(), session.api())
        };
        if !authenticated {
            return None;
        }
        match api.balance().await {
            Ok(balance) => Some(balance),
            Err(e) => {
                log::warn!("Could not load balance for home page: {}", e);
                None
            }
        }
    });

    let authenticated = session.read().is_authenticated();

    rsx! {
        div { id: "home-page", class: "page",
            section { class: "hero",
                ParticlesBackground {}
                AnimatedGradient { class: "hero-gradient" }
                div { class: "hero-grid",
                    div { class: "hero-copy fade-up",
                        span { class: "pill", "✨ Spread gratitude, one token at a time" }
                        h1 { class: "hero-title",
                            "Say "
                            span { class: "gradient-text", "thank you" }
                            " in a way that lasts"
                        }
                        p { class: "hero-subtitle",
                            "Token of Thanks lets you send tokens of appreciation to the people who make your day better, and lets them turn that gratitude into real rewards."
                        }
                        div { class: "hero-actions",
                            if authenticated {
                                AnimatedButton {
                                    onclick: move |_| {
                                        nav.push(Route::Dashboard {});
                                    },
                                    "Go to Dashboard"
                                }
                                AnimatedButton {
                                    variant: "secondary",
                                    onclick: move |_| {
                                        nav.push(Route::SendTokens {});
                                    },
                                    "Send Tokens"
                                }
                            } else {
                                AnimatedButton {
                                    onclick: move |_| {
                                        nav.push(Route::Register {});
                                    },
                                    "Get Started"
                                }
                                AnimatedButton {
                                    variant: "secondary",
                                    onclick: move |_| {
                                        nav.push(Route::Login {});
                                    },
                                    "Sign In"
                                }
                            }
                        }
                    }

                    GlassCard { class: "wallet-card", variant: "primary", delay: 2,
                        h3 { "Your Token Wallet" }
                        match &*balance.read() {
                            Some(Some(amount)) => rsx! {
                                div { class: "wallet-balance gradient-text", "{amount}" }
                                p { class: "muted", "tokens available" }
                            },
                            _ if authenticated => rsx! {
                                div { class: "wallet-balance gradient-text", "…" }
                                p { class: "muted", "loading your balance" }
                            },
                            _ => rsx! {
                                div { class: "wallet-balance muted", "🔒" }
                                p { class: "muted",
                                    Link { to: Route::Login {}, "Sign in" }
                                    " to view your balance"
                                }
                            },
                        }
                    }
                }
            }

            section { class: "features",
                h2 { class: "section-title", "Why Token of Thanks?" }
                div { class: "feature-grid",
                    for (index , (icon , title , text)) in FEATURES.iter().enumerate() {
                        GlassCard { key: "{title}", delay: index as u32,
                            div { class: "feature-icon", "{icon}" }
                            h3 { "{title}" }
                            p { class: "muted", "{text}" }
                        }
                    }
                }
            }

            section { class: "steps",
                h2 { class: "section-title", "How it works" }
                ol { class: "step-list",
                    for (index , (title , text)) in STEPS.iter().enumerate() {
                        li { key: "{index}", class: "step",
                            span { class: "step-number", {(index + 1).to_string()} }
                            div {
                                h4 { "{title}" }
                                p { class: "muted", "{text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { id: "not-found-page", class: "page container",
            h1 { "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "btn-primary", "Back to Home" }
        }
    }
}
