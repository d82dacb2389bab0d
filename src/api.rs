//! Typed client for the gratitude token REST API
//!
//! One method per endpoint. Authenticated calls carry the session's bearer
//! token; nothing is retried or queued.

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::models::{
    AuthResponse, BalanceResponse, ErrorBody, HistoryResponse, LoginRequest, MeResponse,
    RedeemResponse, RegisterRequest, RewardsResponse, Reward, SearchResponse, SendRequest,
    SendResponse, Transaction, User, UserRef,
};
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: None,
        }
    }

    /// Same connection pool, different bearer token.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone(),
            token,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.config.endpoint(path))
    }

    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        self.authed_url(method, &self.config.endpoint(path))
    }

    fn authed_url(&self, method: Method, url: &str) -> Result<RequestBuilder> {
        let token = self.token.as_deref().ok_or(ApiError::Unauthenticated)?;
        Ok(self.http.request(method, url).bearer_auth(token))
    }

    /// `<base><prefix>/<id>/<action>`, with `id` escaped as one path segment.
    fn item_url(&self, prefix: &str, id: &str, action: &str) -> Result<Url> {
        if matches!(id.trim(), "" | "." | "..") {
            return Err(ApiError::InvalidRequest(format!("bad id '{}'", id)));
        }
        let mut url = Url::parse(&self.config.endpoint(prefix))
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidRequest("base URL cannot take a path".to_string()))?
            .push(id)
            .push(action);
        Ok(url)
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().to_string();

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("{} {} failed: {}", method, url, e);
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            log::error!(
                "{} {} answered {}: {}",
                method,
                url,
                status.as_u16(),
                body.message.as_deref().unwrap_or("-")
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: body.message,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            log::error!("{} {} returned an unexpected body: {}", method, url, e);
            ApiError::Decode(e.to_string())
        })
    }

    // --- auth ---

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.execute(self.request(Method::POST, "/api/auth/login").json(&body))
            .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.execute(self.request(Method::POST, "/api/auth/register").json(request))
            .await
    }

    pub async fn me(&self) -> Result<User> {
        let response: MeResponse = self
            .execute(self.authed(Method::GET, "/api/auth/me")?)
            .await?;
        Ok(response.user)
    }

    // --- tokens ---

    pub async fn balance(&self) -> Result<i64> {
        let response: BalanceResponse = self
            .execute(self.authed(Method::GET, "/api/tokens/balance")?)
            .await?;
        Ok(response.balance)
    }

    pub async fn history(&self, page: u32, limit: u32) -> Result<HistoryResponse> {
        let builder = self
            .authed(Method::GET, "/api/tokens/history")?
            .query(&[("page", page), ("limit", limit)]);
        self.execute(builder).await
    }

    /// Latest transactions, newest first, without paging metadata.
    pub async fn recent(&self, limit: u32) -> Result<Vec<Transaction>> {
        let builder = self
            .authed(Method::GET, "/api/tokens/history")?
            .query(&[("limit", limit)]);
        let response: HistoryResponse = self.execute(builder).await?;
        Ok(response.transactions)
    }

    pub async fn send(&self, request: &SendRequest) -> Result<SendResponse> {
        self.execute(self.authed(Method::POST, "/api/tokens/send")?.json(request))
            .await
    }

    // --- rewards ---

    pub async fn rewards(&self) -> Result<Vec<Reward>> {
        let response: RewardsResponse = self
            .execute(self.authed(Method::GET, "/api/rewards")?)
            .await?;
        Ok(response.rewards)
    }

    pub async fn redeem(&self, reward_id: &str) -> Result<RedeemResponse> {
        let url = self.item_url("/api/rewards", reward_id, "redeem")?;
        self.execute(self.authed_url(Method::POST, url.as_str())?).await
    }

    // --- users ---

    pub async fn search_users(&self, email: &str) -> Result<Vec<UserRef>> {
        let builder = self
            .authed(Method::GET, "/api/users/search")?
            .query(&[("email", email)]);
        let response: SearchResponse = self.execute(builder).await?;
        Ok(response.users)
    }
}
