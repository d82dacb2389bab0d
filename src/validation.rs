//! Local form checks. Advisory only: the backend has the final word.

use crate::config::{MIN_PASSWORD_LEN, SEARCH_MIN_CHARS};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";
pub const INSUFFICIENT_BALANCE: &str = "Insufficient token balance";
pub const AMOUNT_TOO_SMALL: &str = "Amount must be at least 1 token";
pub const RECIPIENT_REQUIRED: &str = "Recipient email is required";
pub const SEND_FAILED: &str = "Failed to send tokens";

/// Mismatch is reported before length, matching what the form shows.
pub fn check_registration(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(())
}

pub fn check_send(recipient: &str, amount: i64, balance: i64) -> Result<(), &'static str> {
    if recipient.trim().is_empty() {
        return Err(RECIPIENT_REQUIRED);
    }
    if amount > balance {
        return Err(INSUFFICIENT_BALANCE);
    }
    if amount < 1 {
        return Err(AMOUNT_TOO_SMALL);
    }
    Ok(())
}

/// Parse the amount field. An unparsable entry counts as 0 so that the
/// minimum-amount check catches it.
pub fn parse_amount(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}

pub fn sent_message(amount: i64) -> String {
    format!("Successfully sent {} tokens!", amount)
}

pub fn should_search(query: &str) -> bool {
    query.trim().chars().count() >= SEARCH_MIN_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_checks() {
        assert_eq!(check_registration("secret1", "secret2"), Err(PASSWORD_MISMATCH));
        assert_eq!(check_registration("abc", "abc"), Err(PASSWORD_TOO_SHORT));
        // mismatch wins even when both are short
        assert_eq!(check_registration("ab", "cd"), Err(PASSWORD_MISMATCH));
        assert_eq!(check_registration("abcdef", "abcdef"), Ok(()));
    }

    #[test]
    fn test_send_checks() {
        assert_eq!(check_send("", 1, 10), Err(RECIPIENT_REQUIRED));
        assert_eq!(check_send("bob@example.com", 11, 10), Err(INSUFFICIENT_BALANCE));
        assert_eq!(check_send("bob@example.com", 0, 10), Err(AMOUNT_TOO_SMALL));
        assert_eq!(check_send("bob@example.com", -3, 10), Err(AMOUNT_TOO_SMALL));
        assert_eq!(check_send("bob@example.com", 10, 10), Ok(()));
    }

    #[test]
    fn test_zero_balance_reports_insufficient_first() {
        assert_eq!(check_send("bob@example.com", 1, 0), Err(INSUFFICIENT_BALANCE));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 7 "), 7);
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("abc"), 0);
    }

    #[test]
    fn test_sent_message() {
        assert_eq!(sent_message(3), "Successfully sent 3 tokens!");
    }

    #[test]
    fn test_search_threshold() {
        assert!(!should_search("bo"));
        assert!(!should_search("  b "));
        assert!(should_search("bob"));
    }
}
