//! Session state: who is signed in and which bearer token to send
//!
//! The async helpers on `Session` are for callers that own it outright (the
//! terminal client, tests). Components hold it in a `Signal` and use the
//! `sign_*` functions below, which never keep a borrow across an await.

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{AuthResponse, RegisterRequest, User};
use crate::storage::TokenStore;
use dioxus::prelude::*;
use std::sync::Arc;

pub const LOGIN_OK: &str = "Welcome back!";
pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTER_OK: &str = "Account created successfully!";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const LOGOUT_OK: &str = "Logged out successfully";

pub struct Session {
    api: ApiClient,
    store: Arc<dyn TokenStore>,
    user: Option<User>,
    loading: bool,
}

impl Session {
    /// Picks up a previously stored token. The session stays `loading`
    /// until `restore` has checked that token against the backend.
    pub fn new(config: ClientConfig, store: Arc<dyn TokenStore>) -> Self {
        let token = store.load();
        Self {
            api: ApiClient::new(config).with_token(token),
            store,
            user: None,
            loading: true,
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.clone()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_token(&self) -> bool {
        self.api.token().is_some()
    }

    /// Outcome of `GET /api/auth/me`, or `None` when there was no token to
    /// check. A rejected token is dropped from storage.
    pub fn apply_restore(&mut self, outcome: Option<Result<User>>) {
        match outcome {
            Some(Ok(user)) => {
                log::info!("Session restored for {}", user.email);
                self.user = Some(user);
            }
            Some(Err(e)) => {
                log::warn!("Auth check failed: {}", e);
                self.forget();
            }
            None => {}
        }
        self.loading = false;
    }

    /// Outcome of a login or register call.
    pub fn apply_auth(&mut self, outcome: Result<AuthResponse>) -> Result<User> {
        let AuthResponse { token, user } = outcome?;
        self.store.save(&token)?;
        self.api = self.api.with_token(Some(token));
        self.user = Some(user.clone());
        self.loading = false;
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        self.api = self.api.with_token(None);
        self.user = None;
        Ok(())
    }

    pub fn update_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Keeps the cached user in step after a send or a redemption.
    pub fn update_balance(&mut self, balance: i64) {
        if let Some(user) = self.user.as_mut() {
            user.token_balance = balance;
        }
    }

    fn forget(&mut self) {
        if let Err(e) = self.store.clear() {
            log::error!("Could not clear stored token: {}", e);
        }
        self.api = self.api.with_token(None);
        self.user = None;
    }

    pub async fn restore(&mut self) -> Option<User> {
        let outcome = if self.has_token() {
            Some(self.api.me().await)
        } else {
            None
        };
        self.apply_restore(outcome);
        self.user.clone()
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let outcome = self.api.login(email, password).await;
        self.apply_auth(outcome)
    }

    pub async fn register(&mut self, request: &RegisterRequest) -> Result<User> {
        let outcome = self.api.register(request).await;
        self.apply_auth(outcome)
    }
}

// --- Dioxus context ---

pub fn provide_session(config: ClientConfig, store: Arc<dyn TokenStore>) -> Signal<Session> {
    use_context_provider(move || Signal::new(Session::new(config, store)))
}

pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

pub async fn restore_session(mut session: Signal<Session>) {
    let api = session.read().api();
    let outcome = if api.token().is_some() {
        Some(api.me().await)
    } else {
        None
    };
    session.write().apply_restore(outcome);
}

pub async fn sign_in(mut session: Signal<Session>, email: String, password: String) -> Result<User> {
    let api = session.read().api();
    let outcome = api.login(&email, &password).await;
    session.write().apply_auth(outcome)
}

pub async fn sign_up(mut session: Signal<Session>, request: RegisterRequest) -> Result<User> {
    let api = session.read().api();
    let outcome = api.register(&request).await;
    session.write().apply_auth(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::storage::MemoryTokenStore;
    use crate::testing::{MockBackend, user_json};
    use serde_json::json;

    fn session(url: &str, store: Arc<MemoryTokenStore>) -> Session {
        Session::new(ClientConfig::new(url), store)
    }

    #[tokio::test]
    async fn test_restore_without_token_makes_no_request() {
        let mock = MockBackend::new();
        let url = mock.start().await;
        let mut session = session(&url, Arc::new(MemoryTokenStore::default()));
        assert!(session.is_loading());

        assert_eq!(session.restore().await, None);

        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_restore_with_valid_token() {
        let mock = MockBackend::new().respond(
            "GET",
            "/api/auth/me",
            200,
            json!({ "user": user_json("u1", "Ada", 12) }),
        );
        let url = mock.start().await;
        let store = Arc::new(MemoryTokenStore::with_token("stored"));
        let mut session = session(&url, store.clone());

        let user = session.restore().await.unwrap();

        assert_eq!(user.id, "u1");
        assert!(session.is_authenticated());
        assert_eq!(mock.last().authorization.as_deref(), Some("Bearer stored"));
        assert_eq!(store.load().as_deref(), Some("stored"));
    }

    #[tokio::test]
    async fn test_restore_with_rejected_token_clears_storage() {
        let mock = MockBackend::new().respond(
            "GET",
            "/api/auth/me",
            401,
            json!({ "message": "Token expired" }),
        );
        let url = mock.start().await;
        let store = Arc::new(MemoryTokenStore::with_token("stale"));
        let mut session = session(&url, store.clone());

        assert_eq!(session.restore().await, None);

        assert!(!session.is_loading());
        assert!(!session.has_token());
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn test_login_persists_token_and_user() {
        let mock = MockBackend::new()
            .respond(
                "POST",
                "/api/auth/login",
                200,
                json!({ "token": "fresh", "user": user_json("u1", "Ada", 50) }),
            )
            .respond("GET", "/api/tokens/balance", 200, json!({ "balance": 50 }));
        let url = mock.start().await;
        let store = Arc::new(MemoryTokenStore::default());
        let mut session = session(&url, store.clone());

        let user = session.login("ada@example.com", "secret1").await.unwrap();
        assert_eq!(user.token_balance, 50);
        assert_eq!(store.load().as_deref(), Some("fresh"));

        // later calls carry the new token
        session.api().balance().await.unwrap();
        assert_eq!(mock.last().authorization.as_deref(), Some("Bearer fresh"));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_session_empty() {
        let mock = MockBackend::new().respond(
            "POST",
            "/api/auth/login",
            401,
            json!({ "message": "Invalid credentials" }),
        );
        let url = mock.start().await;
        let store = Arc::new(MemoryTokenStore::default());
        let mut session = session(&url, store.clone());

        let err = session.login("ada@example.com", "wrong").await.unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 401, .. }));
        assert_eq!(err.user_message(LOGIN_FAILED), "Invalid credentials");
        assert!(!session.is_authenticated());
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn test_register_then_logout() {
        let mock = MockBackend::new().respond(
            "POST",
            "/api/auth/register",
            201,
            json!({ "token": "new-user", "user": user_json("u7", "Grace", 0) }),
        );
        let url = mock.start().await;
        let store = Arc::new(MemoryTokenStore::default());
        let mut session = session(&url, store.clone());

        let request = RegisterRequest {
            first_name: "Grace".to_string(),
            last_name: "Tester".to_string(),
            email: "grace@example.com".to_string(),
            password: "hopper1".to_string(),
        };
        session.register(&request).await.unwrap();
        assert_eq!(mock.last().body["firstName"], "Grace");
        assert!(session.is_authenticated());

        session.logout().unwrap();
        assert!(!session.is_authenticated());
        assert!(!session.has_token());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_update_balance_only_touches_signed_in_user() {
        let store = Arc::new(MemoryTokenStore::default());
        let mut session = Session::new(ClientConfig::default(), store);
        session.update_balance(99);
        assert!(session.user().is_none());

        let user: User = serde_json::from_value(user_json("u1", "Ada", 10)).unwrap();
        session.update_user(user);
        session.update_balance(99);
        assert_eq!(session.user().unwrap().token_balance, 99);
    }
}
