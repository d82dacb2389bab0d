use crate::Route;
use crate::auth::{LOGOUT_OK, use_session};
use crate::notify::use_notifier;
use dioxus::prelude::*;

const NAV_ITEMS: [(Route, &str, &str); 4] = [
    (Route::Home {}, "Home", "🏠"),
    (Route::Dashboard {}, "Dashboard", "👤"),
    (Route::Rewards {}, "Rewards", "🎁"),
    (Route::TransactionHistory {}, "History", "🕘"),
];

#[component]
pub fn Navbar() -> Element {
    let mut session = use_session();
    let notifier = use_notifier();
    let nav = use_navigator();
    let mut menu_open = use_signal(|| false);

    let user = session.read().user().cloned();

    let logout = move |_: MouseEvent| {
        match session.write().logout() {
            Ok(()) => notifier.success(LOGOUT_OK),
            Err(e) => notifier.error(e.to_string()),
        }
        menu_open.set(false);
        nav.push(Route::Home {});
    };

    rsx! {
        nav { id: "navbar", class: "navbar",
            div { class: "nav-inner",
                Link { to: Route::Home {}, class: "brand",
                    span { class: "brand-mark", "♥" }
                    span { class: "brand-name gradient-text", "Token of Thanks" }
                    span { class: "brand-sparkle", "✨" }
                }

                div { class: if menu_open() { "nav-links open" } else { "nav-links" },
                    for (target , name , icon) in NAV_ITEMS {
                        Link {
                            key: "{name}",
                            to: target,
                            class: "nav-link",
                            active_class: "active",
                            onclick: move |_| menu_open.set(false),
                            span { class: "nav-icon", "{icon}" }
                            "{name}"
                        }
                    }
                }

                div { class: "nav-account",
                    match user {
                        Some(user) => rsx! {
                            div { class: "user-chip",
                                span { class: "avatar", "{user.initial()}" }
                                div { class: "user-chip-text",
                                    span { class: "user-name", "{user.full_name()}" }
                                    span { class: "user-balance", "{user.token_balance} tokens" }
                                }
                            }
                            button { class: "btn-ghost", onclick: logout, "Logout" }
                        },
                        None => rsx! {
                            Link { to: Route::Login {}, class: "btn-ghost", "Login" }
                            Link { to: Route::Register {}, class: "btn-primary", "Sign Up" }
                        },
                    }
                }

                button {
                    class: "menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() {
                        "✕"
                    } else {
                        "☰"
                    }
                }
            }
        }
        main { class: "page-main", Outlet::<Route> {} }
    }
}
