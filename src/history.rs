//! Presentation of the transaction ledger as seen by one user
//!
//! The backend stores a SEND once; whether it reads as "sent" or "received"
//! depends on who is looking. Everything here is relative to the viewer.

use crate::models::{Pagination, Transaction, TransactionType};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionFilter {
    #[default]
    All,
    Sent,
    Received,
    Purchased,
    Redeemed,
}

impl TransactionFilter {
    pub const ALL: [TransactionFilter; 5] = [
        TransactionFilter::All,
        TransactionFilter::Sent,
        TransactionFilter::Received,
        TransactionFilter::Purchased,
        TransactionFilter::Redeemed,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TransactionFilter::All => "ALL",
            TransactionFilter::Sent => "SEND",
            TransactionFilter::Received => "RECEIVE",
            TransactionFilter::Purchased => "PURCHASE",
            TransactionFilter::Redeemed => "REDEEM",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionFilter::All => "All Transactions",
            TransactionFilter::Sent => "Sent",
            TransactionFilter::Received => "Received",
            TransactionFilter::Purchased => "Purchased",
            TransactionFilter::Redeemed => "Redeemed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|f| f.id() == raw)
    }

    pub fn empty_message(&self) -> String {
        match self {
            TransactionFilter::All => "You haven't made any transactions yet.".to_string(),
            other => format!("No {} transactions found.", other.id().to_lowercase()),
        }
    }

    pub fn matches(&self, tx: &Transaction, viewer_id: &str) -> bool {
        let direction = Direction::of(tx, viewer_id);
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Sent => {
                tx.transaction_type == TransactionType::Send && direction == Direction::Outgoing
            }
            TransactionFilter::Received => match tx.transaction_type {
                TransactionType::Receive => true,
                TransactionType::Send => direction == Direction::Incoming,
                _ => false,
            },
            TransactionFilter::Purchased => tx.transaction_type == TransactionType::Purchase,
            TransactionFilter::Redeemed => tx.transaction_type == TransactionType::Redeem,
        }
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction], viewer_id: &str) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|tx| self.matches(tx, viewer_id))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Outgoing,
    Incoming,
}

impl Direction {
    pub fn of(tx: &Transaction, viewer_id: &str) -> Self {
        if tx.is_sent_by(viewer_id) {
            Direction::Outgoing
        } else {
            Direction::Incoming
        }
    }
}

/// One ledger row, ready to print or render.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionLine {
    pub id: String,
    pub headline: String,
    pub message: Option<String>,
    pub amount: String,
    pub tone: &'static str,
    pub icon: &'static str,
    pub direction_label: &'static str,
    pub date: String,
}

pub fn describe(tx: &Transaction, viewer_id: &str) -> TransactionLine {
    let direction = Direction::of(tx, viewer_id);
    let counterparty = match direction {
        Direction::Outgoing => tx.recipient.as_ref(),
        Direction::Incoming => tx.sender.as_ref(),
    }
    .map(|u| u.full_name())
    .unwrap_or_default();

    let (headline, outgoing) = match tx.transaction_type {
        TransactionType::Send if direction == Direction::Outgoing => {
            (format!("Sent to {}", counterparty), true)
        }
        TransactionType::Send | TransactionType::Receive => {
            (format!("Received from {}", counterparty), false)
        }
        TransactionType::Purchase => ("Token Purchase".to_string(), false),
        TransactionType::Redeem => ("Reward Redemption".to_string(), true),
    };

    let tone = match tx.transaction_type {
        TransactionType::Send if outgoing => "tone-out",
        TransactionType::Send | TransactionType::Receive => "tone-in",
        TransactionType::Purchase => "tone-purchase",
        TransactionType::Redeem => "tone-redeem",
    };

    let icon = match tx.transaction_type {
        TransactionType::Send => "✉️",
        TransactionType::Receive => "💜",
        TransactionType::Purchase => "➕",
        TransactionType::Redeem => "🎁",
    };

    TransactionLine {
        id: tx.id.clone(),
        headline,
        message: tx.message.clone().filter(|m| !m.trim().is_empty()),
        amount: format!("{}{}", if outgoing { "-" } else { "+" }, tx.amount),
        tone,
        icon,
        direction_label: if outgoing { "Sent" } else { "Received" },
        date: tx.created_at.map(format_date).unwrap_or_default(),
    }
}

/// `Oct 16, 2026, 09:44 AM`
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// `10/16/2026`
pub fn format_short_date(date: DateTime<Utc>) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Page position plus the active filter. Picking a new filter starts
/// over from the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCursor {
    pub page: u32,
    pub filter: TransactionFilter,
}

impl Default for HistoryCursor {
    fn default() -> Self {
        Self {
            page: 1,
            filter: TransactionFilter::All,
        }
    }
}

impl HistoryCursor {
    pub fn set_filter(&mut self, filter: TransactionFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn next(&mut self, pagination: &Pagination) -> bool {
        if pagination.has_next_page {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self, pagination: &Pagination) -> bool {
        if pagination.has_prev_page && self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageStats {
    pub total: u64,
    pub received: usize,
    pub purchases: usize,
}

impl PageStats {
    /// `total` covers the whole ledger; the counts cover the loaded page.
    pub fn compute(pagination: &Pagination, transactions: &[Transaction], viewer_id: &str) -> Self {
        Self {
            total: pagination.total_transactions,
            received: transactions
                .iter()
                .filter(|tx| tx.is_received_by(viewer_id))
                .count(),
            purchases: transactions
                .iter()
                .filter(|tx| tx.transaction_type == TransactionType::Purchase)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRef;
    use chrono::TimeZone;

    fn person(id: &str, first: &str) -> Option<UserRef> {
        Some(UserRef {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: "Tester".to_string(),
            email: String::new(),
        })
    }

    fn tx(id: &str, kind: TransactionType, sender: &str, recipient: &str, amount: i64) -> Transaction {
        Transaction {
            id: id.to_string(),
            transaction_type: kind,
            sender: (!sender.is_empty()).then(|| person(sender, sender)).flatten(),
            recipient: (!recipient.is_empty()).then(|| person(recipient, recipient)).flatten(),
            amount,
            message: None,
            metadata: serde_json::Value::Null,
            created_at: Some(Utc.with_ymd_and_hms(2026, 10, 16, 9, 44, 0).unwrap()),
        }
    }

    #[test]
    fn test_send_reads_differently_per_viewer() {
        let t = tx("t1", TransactionType::Send, "ada", "bob", 5);

        let as_sender = describe(&t, "ada");
        assert_eq!(as_sender.headline, "Sent to bob Tester");
        assert_eq!(as_sender.amount, "-5");
        assert_eq!(as_sender.tone, "tone-out");

        let as_recipient = describe(&t, "bob");
        assert_eq!(as_recipient.headline, "Received from ada Tester");
        assert_eq!(as_recipient.amount, "+5");
        assert_eq!(as_recipient.tone, "tone-in");
    }

    #[test]
    fn test_purchase_and_redeem_lines() {
        let purchase = describe(&tx("t2", TransactionType::Purchase, "", "ada", 20), "ada");
        assert_eq!(purchase.headline, "Token Purchase");
        assert_eq!(purchase.amount, "+20");

        let mut redeem = tx("t3", TransactionType::Redeem, "ada", "", 30);
        assert_eq!(describe(&redeem, "ada").headline, "Reward Redemption");
        redeem.metadata = serde_json::json!({ "rewardName": "Latte" });
        let line = describe(&redeem, "ada");
        // the reward name does not change the ledger headline
        assert_eq!(line.headline, "Reward Redemption");
        assert_eq!(line.amount, "-30");
    }

    #[test]
    fn test_blank_message_is_hidden() {
        let mut t = tx("t1", TransactionType::Send, "ada", "bob", 1);
        t.message = Some("  ".to_string());
        assert_eq!(describe(&t, "ada").message, None);
    }

    #[test]
    fn test_filters() {
        let ledger = vec![
            tx("1", TransactionType::Send, "ada", "bob", 1),
            tx("2", TransactionType::Send, "bob", "ada", 2),
            tx("3", TransactionType::Receive, "carl", "ada", 3),
            tx("4", TransactionType::Purchase, "", "ada", 4),
            tx("5", TransactionType::Redeem, "ada", "", 5),
        ];
        let ids = |f: TransactionFilter| {
            f.apply(&ledger, "ada")
                .iter()
                .map(|t| t.id.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(TransactionFilter::All).len(), 5);
        assert_eq!(ids(TransactionFilter::Sent), vec!["1"]);
        assert_eq!(ids(TransactionFilter::Received), vec!["2", "3"]);
        assert_eq!(ids(TransactionFilter::Purchased), vec!["4"]);
        assert_eq!(ids(TransactionFilter::Redeemed), vec!["5"]);
    }

    #[test]
    fn test_filter_parse_and_empty_message() {
        assert_eq!(TransactionFilter::parse("receive"), Some(TransactionFilter::Received));
        assert_eq!(TransactionFilter::parse("nope"), None);
        assert_eq!(
            TransactionFilter::Purchased.empty_message(),
            "No purchase transactions found."
        );
    }

    #[test]
    fn test_cursor_moves_only_where_pages_exist() {
        let mut cursor = HistoryCursor::default();
        let first = Pagination {
            current_page: 1,
            total_pages: 2,
            total_transactions: 15,
            has_next_page: true,
            has_prev_page: false,
        };
        assert!(!cursor.prev(&first));
        assert!(cursor.next(&first));
        assert_eq!(cursor.page, 2);

        let last = Pagination {
            current_page: 2,
            has_next_page: false,
            has_prev_page: true,
            ..first
        };
        assert!(!cursor.next(&last));
        assert!(cursor.prev(&last));
        assert_eq!(cursor.page, 1);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut cursor = HistoryCursor {
            page: 4,
            filter: TransactionFilter::All,
        };
        cursor.set_filter(TransactionFilter::Redeemed);
        assert_eq!(cursor.page, 1);
        assert_eq!(cursor.filter, TransactionFilter::Redeemed);
    }

    #[test]
    fn test_page_stats() {
        let ledger = vec![
            tx("1", TransactionType::Send, "bob", "ada", 1),
            tx("2", TransactionType::Purchase, "", "ada", 4),
            tx("3", TransactionType::Send, "ada", "bob", 1),
        ];
        let pagination = Pagination {
            total_transactions: 42,
            ..Default::default()
        };
        let stats = PageStats::compute(&pagination, &ledger, "ada");
        assert_eq!(
            stats,
            PageStats {
                total: 42,
                received: 2,
                purchases: 1
            }
        );
    }

    #[test]
    fn test_date_formats() {
        let date = Utc.with_ymd_and_hms(2026, 3, 5, 14, 7, 0).unwrap();
        assert_eq!(format_date(date), "Mar 5, 2026, 02:07 PM");
        assert_eq!(format_short_date(date), "3/5/2026");
    }
}
