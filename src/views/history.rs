use super::dashboard::TransactionRow;
use crate::auth::use_session;
use crate::config::HISTORY_PAGE_SIZE;
use crate::history::{HistoryCursor, PageStats, TransactionFilter};
use crate::notify::use_notifier;
use crate::views::{LoadingSpinner, ParticlesBackground};
use dioxus::prelude::*;

#[component]
pub fn TransactionHistory() -> Element {
    let session = use_session();
    let notifier = use_notifier();
    let mut cursor = use_signal(HistoryCursor::default);

    // refetches whenever the cursor is written
    let page = use_resource(move || async move {
        let page = cursor.read().page;
        let api = session.peek().api();
        api.history(page, HISTORY_PAGE_SIZE).await
    });

    use_effect(move || {
        if let Some(Err(e)) = &*page.read() {
            log::error!("Error fetching transactions: {}", e);
            notifier.error("Failed to load transaction history");
        }
    });

    let viewer_id = session
        .read()
        .user_id()
        .unwrap_or_default()
        .to_string();
    let current = cursor();

    rsx! {
        div { id: "history-page", class: "page",
            ParticlesBackground {}
            div { class: "container",
                header { class: "page-header fade-up",
                    h1 { "Transaction History" }
                    p { class: "muted", "View all your token transactions" }
                }

                match &*page.read() {
                    None => rsx! {
                        LoadingSpinner {}
                    },
                    Some(Err(e)) => rsx! {
                        p { class: "error-message", "Error loading history: {e}" }
                    },
                    Some(Ok(history)) => {
                        let stats = PageStats::compute(&history.pagination, &history.transactions, &viewer_id);
                        let shown: Vec<_> = current
                            .filter
                            .apply(&history.transactions, &viewer_id)
                            .into_iter()
                            .cloned()
                            .collect();
                        let pagination = history.pagination;
                        rsx! {
                            div { class: "stats-grid",
                                div { class: "glass stat",
                                    div { class: "stat-value gradient-text", "{stats.total}" }
                                    div { class: "muted", "Total Transactions" }
                                }
                                div { class: "glass stat",
                                    div { class: "stat-value tone-in", "{stats.received}" }
                                    div { class: "muted", "Received" }
                                }
                                div { class: "glass stat",
                                    div { class: "stat-value tone-purchase", "{stats.purchases}" }
                                    div { class: "muted", "Purchases" }
                                }
                            }

                            div { class: "filters",
                                span { class: "filter-label", "Filter transactions:" }
                                for option in TransactionFilter::ALL {
                                    button {
                                        key: "{option.id()}",
                                        class: if option == current.filter { "filter active" } else { "filter" },
                                        onclick: move |_| cursor.write().set_filter(option),
                                        "{option.display_name()}"
                                    }
                                }
                            }

                            div { class: "glass list-card",
                                if shown.is_empty() {
                                    div { class: "empty-state",
                                        div { class: "empty-icon", "🕘" }
                                        h3 { "No transactions found" }
                                        p { class: "muted", "{current.filter.empty_message()}" }
                                    }
                                } else {
                                    ul { class: "transactions-list",
                                        for tx in shown {
                                            TransactionRow {
                                                key: "{tx.id}",
                                                tx: tx.clone(),
                                                viewer_id: viewer_id.clone(),
                                            }
                                        }
                                    }
                                }
                            }

                            if pagination.total_pages > 1 {
                                div { class: "pagination",
                                    button {
                                        class: "btn-ghost",
                                        disabled: !pagination.has_prev_page,
                                        onclick: move |_| {
                                            cursor.write().prev(&pagination);
                                        },
                                        "← Previous"
                                    }
                                    span { class: "muted", "Page {current.page} of {pagination.total_pages}" }
                                    button {
                                        class: "btn-ghost",
                                        disabled: !pagination.has_next_page,
                                        onclick: move |_| {
                                            cursor.write().next(&pagination);
                                        },
                                        "Next →"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
