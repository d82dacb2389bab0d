//! Wire types for the gratitude token API
//!
//! The backend owns these records; the client only reads them. Field names
//! follow the backend's camelCase JSON, and ids accept both `id` and `_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub token_balance: i64,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn initial(&self) -> String {
        self.first_name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Sender or recipient as embedded in a transaction. The backend may omit
/// fields it did not populate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl UserRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Send,
    Receive,
    Purchase,
    Redeem,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(alias = "_id")]
    pub id: String,
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub sender: Option<UserRef>,
    #[serde(default)]
    pub recipient: Option<UserRef>,
    pub amount: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Name of the redeemed reward, recorded by the backend in `metadata`.
    pub fn reward_name(&self) -> Option<&str> {
        self.metadata.get("rewardName").and_then(|v| v.as_str())
    }

    pub fn is_sent_by(&self, user_id: &str) -> bool {
        self.sender.as_ref().is_some_and(|s| s.id == user_id)
    }

    pub fn is_received_by(&self, user_id: &str) -> bool {
        self.recipient.as_ref().is_some_and(|r| r.id == user_id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RewardCategory {
    Food,
    Entertainment,
    Shopping,
    Experience,
    #[serde(other)]
    Other,
}

impl RewardCategory {
    pub const ALL: [RewardCategory; 5] = [
        RewardCategory::Food,
        RewardCategory::Entertainment,
        RewardCategory::Shopping,
        RewardCategory::Experience,
        RewardCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RewardCategory::Food => "FOOD",
            RewardCategory::Entertainment => "ENTERTAINMENT",
            RewardCategory::Shopping => "SHOPPING",
            RewardCategory::Experience => "EXPERIENCE",
            RewardCategory::Other => "OTHER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RewardCategory::Food => "Food & Drinks",
            RewardCategory::Entertainment => "Entertainment",
            RewardCategory::Shopping => "Shopping",
            RewardCategory::Experience => "Experiences",
            RewardCategory::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RewardCategory::Food => "☕",
            RewardCategory::Entertainment => "🎬",
            RewardCategory::Shopping => "🛍️",
            RewardCategory::Experience => "⭐",
            RewardCategory::Other => "🎁",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            RewardCategory::Food => "badge badge-food",
            RewardCategory::Entertainment => "badge badge-entertainment",
            RewardCategory::Shopping => "badge badge-shopping",
            RewardCategory::Experience => "badge badge-experience",
            RewardCategory::Other => "badge badge-other",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: RewardCategory,
    pub token_cost: i64,
    #[serde(default)]
    pub stock: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_transactions: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

// --- Requests ---

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    pub recipient_email: String,
    pub amount: i64,
    pub message: String,
}

// --- Responses ---

#[derive(Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MeResponse {
    pub user: User,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BalanceResponse {
    pub balance: i64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct HistoryResponse {
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SendResponse {
    pub new_balance: i64,
    #[serde(default)]
    pub transaction: Option<Transaction>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RewardsResponse {
    pub rewards: Vec<Reward>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RedeemResponse {
    pub new_balance: i64,
    pub transaction: Transaction,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SearchResponse {
    pub users: Vec<UserRef>,
}

/// Error body the backend sends alongside non-2xx statuses.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
