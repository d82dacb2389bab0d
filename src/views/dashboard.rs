use crate::Route;
use crate::auth::use_session;
use crate::config::RECENT_ACTIVITY_LIMIT;
use crate::error::ApiError;
use crate::history::{describe, format_short_date};
use crate::models::Transaction;
use crate::notify::use_notifier;
use crate::views::{GlassCard, LoadingSpinner, ParticlesBackground};
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let mut session = use_session();
    let notifier = use_notifier();

    // peek: writing the balance back must not re-trigger this fetch
    let overview = use_resource(move || async move {
        let api = session.peek().api();
        let balance = api.balance().await?;
        let recent = api.recent(RECENT_ACTIVITY_LIMIT).await?;
        session.write().update_balance(balance);
        Ok::<(i64, Vec<Transaction>), ApiError>((balance, recent))
    });

    use_effect(move || {
        if let Some(Err(e)) = &*overview.read() {
            log::error!("Dashboard load failed: {}", e);
            notifier.error("Failed to load dashboard data");
        }
    });

    let (first_name, viewer_id) = {
        let session = session.read();
        (
            session.user().map(|u| u.first_name.clone()).unwrap_or_default(),
            session.user_id().unwrap_or_default().to_string(),
        )
    };

    rsx! {
        div { id: "dashboard-page", class: "page",
            ParticlesBackground {}
            div { class: "container",
                header { class: "page-header fade-up",
                    h1 { "Welcome back, "
                        span { class: "gradient-text", "{first_name}" }
                        "!"
                    }
                    p { class: "muted", "Here's what's happening with your gratitude tokens." }
                }

                match &*overview.read() {
                    None => rsx! {
                        LoadingSpinner {}
                    },
                    Some(Err(e)) => rsx! {
                        GlassCard { hover: false,
                            p { class: "error-message", "Error loading dashboard: {e}" }
                        }
                    },
                    Some(Ok((balance, recent))) => rsx! {
                        div { class: "dashboard-grid",
                            GlassCard { class: "balance-card", variant: "primary",
                                p { class: "muted", "Your Balance" }
                                div { class: "balance-value gradient-text", "{balance}" }
                                p { class: "muted", "tokens available" }
                            }

                            GlassCard { class: "actions-card", hover: false, delay: 1,
                                h3 { "Quick Actions" }
                                div { class: "quick-actions",
                                    Link { to: Route::SendTokens {}, class: "quick-action",
                                        span { class: "quick-icon", "✉️" }
                                        span { "Send Tokens" }
                                    }
                                    Link { to: Route::Rewards {}, class: "quick-action",
                                        span { class: "quick-icon", "🎁" }
                                        span { "Redeem Rewards" }
                                    }
                                    Link { to: Route::TransactionHistory {}, class: "quick-action",
                                        span { class: "quick-icon", "🕘" }
                                        span { "View History" }
                                    }
                                }
                            }
                        }

                        section { class: "recent fade-up",
                            div { class: "section-head",
                                h2 { "Recent Activity" }
                                Link { to: Route::TransactionHistory {}, class: "link", "View all →" }
                            }
                            div { class: "glass list-card",
                                if recent.is_empty() {
                                    div { class: "empty-state",
                                        div { class: "empty-icon", "💜" }
                                        h3 { "No transactions yet" }
                                        p { class: "muted", "Send your first token of thanks to get started." }
                                        Link { to: Route::SendTokens {}, class: "btn-primary", "Send Tokens" }
                                    }
                                } else {
                                    ul { class: "transactions-list",
                                        for tx in recent.iter() {
                                            TransactionRow {
                                                key: "{tx.id}",
                                                tx: tx.clone(),
                                                viewer_id: viewer_id.clone(),
                                                short_date: true,
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

/// One ledger entry, shared by the dashboard and the history page.
#[component]
pub fn TransactionRow(tx: Transaction, viewer_id: String, #[props(default)] short_date: bool) -> Element {
    let line = describe(&tx, &viewer_id);
    let date = if short_date {
        tx.created_at.map(format_short_date).unwrap_or_default()
    } else {
        line.date.clone()
    };

    rsx! {
        li { class: "transaction-card",
            div { class: "transaction-main",
                span { class: "transaction-icon", "{line.icon}" }
                div {
                    p { class: "transaction-headline", "{line.headline}" }
                    if let Some(message) = &line.message {
                        p { class: "transaction-message", "{message}" }
                    }
                    if !date.is_empty() {
                        p { class: "transaction-date", "📅 {date}" }
                    }
                }
            }
            div { class: "transaction-side",
                p { class: "transaction-amount {line.tone}", "{line.amount}" }
                p { class: "transaction-direction", "{line.direction_label}" }
            }
        }
    }
}
