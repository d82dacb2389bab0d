use crate::api::ApiClient;
use crate::auth::{Session, use_session};
use crate::error::ApiError;
use crate::models::Reward;
use crate::notify::{Notifier, use_notifier};
use crate::rewards::{
    Availability, CategoryFilter, LOAD_FAILED, REDEEM_FAILED, low_stock, redeemed_message,
};
use crate::views::{InlineSpinner, LoadingSpinner, ParticlesBackground};
use dioxus::prelude::*;

/// Signals behind the rewards page.
#[derive(Clone, Copy, PartialEq)]
struct RewardsState {
    catalog: Signal<Vec<Reward>>,
    balance: Signal<i64>,
    loading: Signal<bool>,
    redeeming: Signal<Option<String>>,
}

fn use_rewards_state() -> RewardsState {
    RewardsState {
        catalog: use_signal(Vec::new),
        balance: use_signal(|| 0),
        loading: use_signal(|| true),
        redeeming: use_signal(|| None),
    }
}

impl RewardsState {
    async fn load(mut self, api: ApiClient, notifier: Notifier) {
        let outcome = async {
            let rewards = api.rewards().await?;
            let current = api.balance().await?;
            Ok::<_, ApiError>((rewards, current))
        }
        .await;
        match outcome {
            Ok((rewards, current)) => {
                self.catalog.set(rewards);
                self.balance.set(current);
            }
            Err(e) => {
                log::error!("Error fetching rewards: {}", e);
                notifier.error(LOAD_FAILED);
            }
        }
        self.loading.set(false);
    }

    /// Redeem, then refetch the catalog since stock changed on the server.
    async fn redeem(mut self, mut session: Signal<Session>, notifier: Notifier, reward: Reward) {
        self.redeeming.set(Some(reward.id.clone()));
        let api = session.peek().api();
        match api.redeem(&reward.id).await {
            Ok(response) => {
                self.balance.set(response.new_balance);
                session.write().update_balance(response.new_balance);
                let name = response
                    .transaction
                    .reward_name()
                    .unwrap_or(&reward.name)
                    .to_string();
                notifier.success(redeemed_message(&name));

                match api.rewards().await {
                    Ok(rewards) => self.catalog.set(rewards),
                    Err(e) => log::error!("Error refreshing rewards: {}", e),
                }
            }
            Err(e) => notifier.error(e.user_message(REDEEM_FAILED)),
        }
        self.redeeming.set(None);
    }
}

#[component]
pub fn Rewards() -> Element {
    let session = use_session();
    let notifier = use_notifier();
    let state = use_rewards_state();
    let mut selected = use_signal(CategoryFilter::default);

    use_future(move || async move {
        let api = session.peek().api();
        state.load(api, notifier).await;
    });

    let redeem = move |reward: Reward| {
        spawn(state.redeem(session, notifier, reward));
    };

    if *state.loading.read() {
        return rsx! {
            LoadingSpinner {}
        };
    }

    let filter = selected();
    let visible: Vec<Reward> = filter
        .apply(&state.catalog.read())
        .into_iter()
        .cloned()
        .collect();
    let current_balance = *state.balance.read();
    let in_flight = state.redeeming.read().clone();

    rsx! {
        div { id: "rewards-page", class: "page",
            ParticlesBackground {}
            div { class: "container",
                header { class: "page-header fade-up",
                    div { class: "title-row",
                        div {
                            h1 { "Rewards" }
                            p { class: "muted", "Redeem your tokens for amazing rewards" }
                        }
                        div { class: "glass balance-strip",
                            span { class: "muted", "Your balance" }
                            span { class: "balance-inline gradient-text", "{current_balance} tokens" }
                        }
                    }
                }

                div { class: "filters",
                    span { class: "filter-label", "Filter by category:" }
                    for option in CategoryFilter::options() {
                        button {
                            key: "{option.id()}",
                            class: if option == filter { "filter active" } else { "filter" },
                            onclick: move |_| selected.set(option),
                            "{option.display_name()}"
                        }
                    }
                }

                if visible.is_empty() {
                    div { class: "glass empty-state",
                        div { class: "empty-icon", "🎁" }
                        h3 { "No rewards found" }
                        p { class: "muted", "{filter.empty_message()}" }
                    }
                } else {
                    div { class: "reward-grid",
                        for (index , reward) in visible.into_iter().enumerate() {
                            RewardCard {
                                key: "{reward.id}",
                                availability: Availability::of(&reward, current_balance, in_flight.as_deref()),
                                delay: index as u32,
                                onredeem: move |r: Reward| redeem(r),
                                reward: reward.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RewardCard(
    reward: Reward,
    availability: Availability,
    delay: u32,
    onredeem: EventHandler<Reward>,
) -> Element {
    let delay_ms = 300 + delay * 100;
    let category = reward.category;
    let clicked = reward.clone();

    rsx! {
        div {
            class: "glass reward-card fade-up",
            style: "animation-delay: {delay_ms}ms;",
            div { class: "reward-art", "🎁" }
            div { class: "reward-meta",
                span { class: "{category.badge_class()}",
                    "{category.icon()} "
                    "{category.as_str()}"
                }
                if reward.stock > 0 {
                    span { class: "muted small", "{reward.stock} left" }
                }
            }
            h3 { "{reward.name}" }
            p { class: "muted", "{reward.description}" }
            div { class: "reward-footer",
                div { class: "reward-cost gradient-text", "{reward.token_cost} tokens" }
                button {
                    class: "btn-primary",
                    disabled: !availability.can_redeem(),
                    onclick: move |_| onredeem.call(clicked.clone()),
                    if availability == Availability::Redeeming {
                        InlineSpinner {}
                    } else {
                        "{availability.label()}"
                    }
                }
            }
            if low_stock(&reward) {
                div { class: "stock-warning", "⚠️ Only {reward.stock} left in stock!" }
            }
        }
    }
}
