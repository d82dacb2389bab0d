use crate::config::LOW_STOCK_THRESHOLD;
use crate::models::{Reward, RewardCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(RewardCategory),
}

impl CategoryFilter {
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(RewardCategory::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn id(&self) -> &'static str {
        match self {
            CategoryFilter::All => "ALL",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Rewards",
            CategoryFilter::Only(category) => category.display_name(),
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim().to_ascii_uppercase();
        Self::options().into_iter().find(|f| f.id() == raw)
    }

    pub fn apply<'a>(&self, rewards: &'a [Reward]) -> Vec<&'a Reward> {
        rewards
            .iter()
            .filter(|r| match self {
                CategoryFilter::All => true,
                CategoryFilter::Only(category) => r.category == *category,
            })
            .collect()
    }

    pub fn empty_message(&self) -> String {
        match self {
            CategoryFilter::All => "No rewards are currently available.".to_string(),
            CategoryFilter::Only(category) => format!(
                "No rewards found in the {} category.",
                category.as_str().to_lowercase()
            ),
        }
    }
}

/// What the redeem button should say and whether it can be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Redeeming,
    OutOfStock,
    Insufficient,
    Available,
}

impl Availability {
    /// `redeeming` is the id of the reward whose request is in flight.
    pub fn of(reward: &Reward, balance: i64, redeeming: Option<&str>) -> Self {
        if redeeming == Some(reward.id.as_str()) {
            Availability::Redeeming
        } else if reward.stock == 0 {
            Availability::OutOfStock
        } else if balance < reward.token_cost {
            Availability::Insufficient
        } else {
            Availability::Available
        }
    }

    pub fn can_redeem(&self) -> bool {
        matches!(self, Availability::Available)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Availability::Redeeming => "Redeeming...",
            Availability::OutOfStock => "Out of Stock",
            Availability::Insufficient => "Insufficient Tokens",
            Availability::Available => "Redeem",
        }
    }
}

pub fn low_stock(reward: &Reward) -> bool {
    reward.stock > 0 && reward.stock <= LOW_STOCK_THRESHOLD
}

pub fn redeemed_message(reward_name: &str) -> String {
    format!("Successfully redeemed {}!", reward_name)
}

pub const REDEEM_FAILED: &str = "Failed to redeem reward";
pub const LOAD_FAILED: &str = "Failed to load rewards";

#[cfg(test)]
mod tests {
    use super::*;

    fn reward(id: &str, category: RewardCategory, cost: i64, stock: u32) -> Reward {
        Reward {
            id: id.to_string(),
            name: format!("Reward {}", id),
            description: String::new(),
            category,
            token_cost: cost,
            stock,
        }
    }

    #[test]
    fn test_category_filter() {
        let catalog = vec![
            reward("a", RewardCategory::Food, 5, 1),
            reward("b", RewardCategory::Shopping, 5, 1),
            reward("c", RewardCategory::Food, 5, 1),
        ];
        assert_eq!(CategoryFilter::All.apply(&catalog).len(), 3);
        let food: Vec<_> = CategoryFilter::Only(RewardCategory::Food)
            .apply(&catalog)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(food, vec!["a", "c"]);
        assert!(
            CategoryFilter::Only(RewardCategory::Experience)
                .apply(&catalog)
                .is_empty()
        );
    }

    #[test]
    fn test_filter_options_and_parse() {
        let options = CategoryFilter::options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0].display_name(), "All Rewards");
        assert_eq!(
            CategoryFilter::parse("experience"),
            Some(CategoryFilter::Only(RewardCategory::Experience))
        );
        assert_eq!(
            CategoryFilter::Only(RewardCategory::Entertainment).empty_message(),
            "No rewards found in the entertainment category."
        );
    }

    #[test]
    fn test_availability_precedence() {
        let r = reward("a", RewardCategory::Food, 10, 0);
        // out of stock beats insufficient balance
        assert_eq!(Availability::of(&r, 0, None), Availability::OutOfStock);
        assert_eq!(Availability::of(&r, 0, Some("a")), Availability::Redeeming);

        let r = reward("b", RewardCategory::Food, 10, 3);
        assert_eq!(Availability::of(&r, 9, None), Availability::Insufficient);
        assert_eq!(Availability::of(&r, 10, None), Availability::Available);
        assert_eq!(Availability::of(&r, 10, Some("other")), Availability::Available);
        assert!(Availability::Available.can_redeem());
        assert!(!Availability::Redeeming.can_redeem());
    }

    #[test]
    fn test_low_stock_window() {
        assert!(!low_stock(&reward("a", RewardCategory::Other, 1, 0)));
        assert!(low_stock(&reward("a", RewardCategory::Other, 1, 1)));
        assert!(low_stock(&reward("a", RewardCategory::Other, 1, 5)));
        assert!(!low_stock(&reward("a", RewardCategory::Other, 1, 6)));
    }
}
