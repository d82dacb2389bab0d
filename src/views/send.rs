use crate::Route;
use crate::auth::{Session, use_session};
use crate::config::SEND_REDIRECT_DELAY_MS;
use crate::models::{SendRequest, UserRef};
use crate::notify::{sleep, use_notifier};
use crate::validation::{SEND_FAILED, check_send, parse_amount, sent_message, should_search};
use crate::views::{InlineSpinner, ParticlesBackground};
use dioxus::prelude::*;

const SUGGESTED_MESSAGES: [&str; 5] = [
    "Thank you for being amazing! 💜",
    "You make the world a better place! 🌟",
    "Grateful for your kindness and support! 🙏",
    "You deserve all the appreciation! ✨",
    "Thank you for being you! 💖",
];

/// Dropdown state for the recipient field. Each keystroke takes a new ticket
/// and only the newest ticket may fill the dropdown.
#[derive(Clone, Debug, Default, PartialEq)]
struct RecipientSearch {
    seq: u64,
    results: Vec<UserRef>,
    open: bool,
}

impl RecipientSearch {
    /// Returns a ticket when the query is long enough to look up.
    fn begin(&mut self, query: &str) -> Option<u64> {
        self.seq += 1;
        if should_search(query) {
            Some(self.seq)
        } else {
            self.results.clear();
            self.open = false;
            None
        }
    }

    fn finish(&mut self, ticket: u64, users: Vec<UserRef>) -> bool {
        if ticket != self.seq {
            return false;
        }
        self.results = users;
        self.open = true;
        true
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn visible(&self) -> &[UserRef] {
        if self.open { &self.results } else { &[] }
    }
}

async fn lookup(session: Signal<Session>, mut search: Signal<RecipientSearch>, ticket: u64, query: String) {
    let api = session.peek().api();
    match api.search_users(&query).await {
        Ok(users) => {
            if !search.write().finish(ticket, users) {
                log::debug!("Dropping stale results for {:?}", query);
            }
        }
        Err(e) => log::error!("Error searching users: {}", e),
    }
}

#[component]
pub fn SendTokens() -> Element {
    let mut session = use_session();
    let notifier = use_notifier();
    let nav = use_navigator();

    let mut recipient = use_signal(String::new);
    let mut amount_raw = use_signal(|| "1".to_string());
    let mut message = use_signal(String::new);
    let mut balance = use_signal(|| 0i64);
    let mut search = use_signal(RecipientSearch::default);
    let mut busy = use_signal(|| false);

    use_future(move || async move {
        let api = session.peek().api();
        match api.balance().await {
            Ok(value) => balance.set(value),
            Err(e) => log::error!("Error fetching balance: {}", e),
        }
    });

    let on_recipient = move |evt: FormEvent| {
        let query = evt.value();
        recipient.set(query.clone());
        let ticket = search.write().begin(&query);
        if let Some(ticket) = ticket {
            spawn(lookup(session, search, ticket, query));
        }
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        async move {
            if busy() {
                return;
            }
            let amount = parse_amount(&amount_raw.read());
            if let Err(problem) = check_send(&recipient.read(), amount, balance()) {
                notifier.error(problem);
                return;
            }

            let request = SendRequest {
                recipient_email: recipient().trim().to_string(),
                amount,
                message: message(),
            };
            busy.set(true);
            let api = session.peek().api();
            let outcome = api.send(&request).await;
            busy.set(false);

            match outcome {
                Ok(response) => {
                    notifier.success(sent_message(amount));
                    balance.set(response.new_balance);
                    session.write().update_balance(response.new_balance);
                    recipient.set(String::new());
                    amount_raw.set("1".to_string());
                    message.set(String::new());
                    search.write().close();

                    sleep(SEND_REDIRECT_DELAY_MS).await;
                    nav.push(Route::Dashboard {});
                }
                Err(e) => notifier.error(e.user_message(SEND_FAILED)),
            }
        }
    };

    let over_balance = parse_amount(&amount_raw.read()) > balance();

    rsx! {
        div { id: "send-page", class: "page",
            ParticlesBackground {}
            div { class: "container narrow",
                header { class: "page-header fade-up",
                    Link { to: Route::Dashboard {}, class: "back-link", "← Back to Dashboard" }
                    h1 { "Send Tokens" }
                    p { class: "muted", "Spread gratitude to someone special" }
                }

                div { class: "glass balance-strip",
                    span { class: "muted", "Your balance" }
                    span { class: "balance-inline gradient-text", "{balance} tokens" }
                }

                div { class: "glass form-card",
                    form { class: "form", onsubmit: submit,
                        div { class: "field search-field",
                            label { r#for: "recipientEmail", "Recipient Email" }
                            input {
                                id: "recipientEmail",
                                r#type: "email",
                                required: true,
                                autocomplete: "off",
                                class: "input-field",
                                placeholder: "Enter recipient's email",
                                value: "{recipient}",
                                oninput: on_recipient,
                            }
                            if !search.read().visible().is_empty() {
                                div { class: "glass search-results",
                                    for (email , user) in search.read().visible().iter().cloned().map(|u| (u.email.clone(), u)) {
                                        button {
                                            key: "{user.id}",
                                            r#type: "button",
                                            class: "search-result",
                                            onclick: move |_| {
                                                recipient.set(email.clone());
                                                search.write().close();
                                            },
                                            span { class: "avatar", "👤" }
                                            div {
                                                div { class: "result-name", "{user.full_name()}" }
                                                div { class: "result-email muted", "{user.email}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "field",
                            label { r#for: "amount", "Amount" }
                            input {
                                id: "amount",
                                r#type: "number",
                                min: "1",
                                max: "{balance}",
                                step: "1",
                                required: true,
                                class: "input-field",
                                placeholder: "Enter amount",
                                value: "{amount_raw}",
                                oninput: move |evt| amount_raw.set(evt.value()),
                            }
                            p { class: "hint muted", "Available: {balance} tokens" }
                        }

                        div { class: "field",
                            label { r#for: "message", "Message (optional)" }
                            textarea {
                                id: "message",
                                rows: "4",
                                class: "input-field",
                                placeholder: "Write a message of thanks...",
                                value: "{message}",
                                oninput: move |evt| message.set(evt.value()),
                            }
                            div { class: "suggestions",
                                span { class: "muted", "Suggestions:" }
                                for suggestion in SUGGESTED_MESSAGES {
                                    button {
                                        key: "{suggestion}",
                                        r#type: "button",
                                        class: "suggestion",
                                        onclick: move |_| message.set(suggestion.to_string()),
                                        "{suggestion}"
                                    }
                                }
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "btn-primary btn-block",
                            disabled: busy() || over_balance,
                            if busy() {
                                InlineSpinner {}
                            } else {
                                "Send Tokens"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::provide_session;
    use crate::config::ClientConfig;
    use crate::storage::MemoryTokenStore;
    use crate::testing::{MockBackend, drive, drive_until, user_json};
    use dioxus_core::VirtualDom;
    use serde_json::json;
    use std::cell::RefCell;
    use std::sync::Arc;

    thread_local! {
        static DROPDOWN: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    fn user(email: &str) -> UserRef {
        UserRef {
            email: email.to_string(),
            ..UserRef::default()
        }
    }

    #[test]
    fn test_short_query_closes_dropdown() {
        let mut search = RecipientSearch::default();
        let ticket = search.begin("bob").unwrap();
        assert!(search.finish(ticket, vec![user("bob@example.com")]));
        assert_eq!(search.visible().len(), 1);

        assert_eq!(search.begin("bo"), None);
        assert!(search.visible().is_empty());
    }

    #[test]
    fn test_only_newest_ticket_fills_dropdown() {
        let mut search = RecipientSearch::default();
        let first = search.begin("bob").unwrap();
        let second = search.begin("bobby").unwrap();

        assert!(search.finish(second, vec![user("bobby@example.com")]));
        assert!(!search.finish(first, vec![user("bob@example.com")]));
        assert_eq!(search.visible(), &[user("bobby@example.com")]);

        search.close();
        assert!(search.visible().is_empty());
    }

    /// Starts a lookup for "bob", then the user deletes a character before
    /// the answer arrives.
    #[component]
    fn SearchHost(url: String) -> Element {
        let session = provide_session(
            ClientConfig::new(url),
            Arc::new(MemoryTokenStore::with_token("jwt")),
        );
        let mut search = use_signal(RecipientSearch::default);

        use_hook(move || {
            let ticket = search.write().begin("bob");
            if let Some(ticket) = ticket {
                spawn(lookup(session, search, ticket, "bob".to_string()));
            }
            search.write().begin("bo");
        });

        let emails = search.read().visible().iter().map(|u| u.email.clone()).collect();
        DROPDOWN.with(|dropdown| *dropdown.borrow_mut() = emails);

        rsx! {}
    }

    #[tokio::test]
    async fn test_late_answer_for_abandoned_query_is_dropped() {
        let mock = MockBackend::new().respond(
            "GET",
            "/api/users/search",
            200,
            json!({ "users": [user_json("u2", "Bob", 4)] }),
        );
        let url = mock.start().await;

        let mut dom = VirtualDom::new_with_props(SearchHost, SearchHostProps { url });
        dom.rebuild_in_place();
        assert!(drive_until(&mut dom, 3_000, || !mock.requests().is_empty()).await);
        drive(&mut dom, 200).await;

        assert_eq!(mock.last().query.as_deref(), Some("email=bob"));
        DROPDOWN.with(|dropdown| assert!(dropdown.borrow().is_empty()));
    }
}
