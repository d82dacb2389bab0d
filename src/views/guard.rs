use crate::Route;
use crate::auth::{Session, use_session};
use crate::views::LoadingSpinner;
use dioxus::prelude::*;

/// What a protected page shows for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Gate {
    Checking,
    SignIn,
    Open,
}

impl Gate {
    fn of(session: &Session) -> Self {
        if session.is_loading() {
            Gate::Checking
        } else if session.is_authenticated() {
            Gate::Open
        } else {
            Gate::SignIn
        }
    }
}

/// Layout for the pages that need a signed-in user. Waits for the session
/// check, then either renders the page or sends the visitor to Login.
#[component]
pub fn RequireAuth() -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_effect(move || {
        if Gate::of(&session.read()) == Gate::SignIn {
            log::debug!("No session, redirecting to login");
            nav.replace(Route::Login {});
        }
    });

    let gate = Gate::of(&session.read());
    match gate {
        Gate::Checking => rsx! {
            LoadingSpinner {}
        },
        Gate::SignIn => rsx! {},
        Gate::Open => rsx! {
            Outlet::<Route> {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{provide_session, restore_session};
    use crate::config::ClientConfig;
    use crate::models::User;
    use crate::storage::MemoryTokenStore;
    use crate::testing::{MockBackend, drive, drive_until, user_json};
    use dioxus_core::VirtualDom;
    use serde_json::json;
    use std::cell::RefCell;
    use std::sync::Arc;

    thread_local! {
        static GATES: RefCell<Vec<(Gate, bool)>> = const { RefCell::new(Vec::new()) };
    }

    fn session(store: MemoryTokenStore) -> Session {
        Session::new(ClientConfig::new("http://127.0.0.1:9"), Arc::new(store))
    }

    #[test]
    fn test_gate_follows_session_check() {
        let mut guest = session(MemoryTokenStore::default());
        assert_eq!(Gate::of(&guest), Gate::Checking);
        guest.apply_restore(None);
        assert_eq!(Gate::of(&guest), Gate::SignIn);

        let mut member = session(MemoryTokenStore::with_token("jwt"));
        assert_eq!(Gate::of(&member), Gate::Checking);
        let user: User = serde_json::from_value(user_json("u1", "Alice", 10)).unwrap();
        member.apply_restore(Some(Ok(user)));
        assert_eq!(Gate::of(&member), Gate::Open);
    }

    #[component]
    fn GateHost(url: String) -> Element {
        let session = provide_session(
            ClientConfig::new(url),
            Arc::new(MemoryTokenStore::with_token("stale")),
        );
        use_future(move || restore_session(session));

        let gate = Gate::of(&session.read());
        let has_token = session.read().has_token();
        GATES.with(|gates| gates.borrow_mut().push((gate, has_token)));

        rsx! {}
    }

    #[tokio::test]
    async fn test_rejected_token_sends_visitor_to_sign_in() {
        let mock = MockBackend::new().respond(
            "GET",
            "/api/auth/me",
            401,
            json!({ "message": "Token is not valid" }),
        );
        let url = mock.start().await;

        let mut dom = VirtualDom::new_with_props(GateHost, GateHostProps { url });
        dom.rebuild_in_place();
        assert!(drive_until(&mut dom, 3_000, || !mock.requests().is_empty()).await);
        drive(&mut dom, 100).await;

        assert_eq!(mock.last().authorization.as_deref(), Some("Bearer stale"));
        GATES.with(|gates| {
            let gates = gates.borrow();
            assert_eq!(gates.first(), Some(&(Gate::Checking, true)));
            assert_eq!(gates.last(), Some(&(Gate::SignIn, false)));
        });
    }
}
