use std::fmt;

use jiff::civil::{Date, date};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::Filterable;
use crate::money::Cents;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Paused,
    Cancelled,
    Expired,
}

impl SubscriptionStatus {
    pub const ALL: [SubscriptionStatus; 4] = [
        SubscriptionStatus::Active,
        SubscriptionStatus::Paused,
        SubscriptionStatus::Cancelled,
        SubscriptionStatus::Expired,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Paused => "paused",
            SubscriptionStatus::Cancelled => "cancelled",
            SubscriptionStatus::Expired => "expired",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "badge-green",
            SubscriptionStatus::Paused => "badge-yellow",
            SubscriptionStatus::Cancelled => "badge-red",
            SubscriptionStatus::Expired => "badge-gray",
        }
    }

    /// Label for the row's action button. The buttons are presentational
    /// only; nothing in this scope mutates a subscription.
    pub fn action_label(self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Pause",
            SubscriptionStatus::Paused => "Resume",
            SubscriptionStatus::Cancelled | SubscriptionStatus::Expired => "Cancel",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One billing relationship. The owner fields are denormalized copies,
/// not live references into the user store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub user_avatar: Option<String>,
    pub plan: String,
    pub status: SubscriptionStatus,
    pub amount: Cents,
    pub renewal_date: Date,
    pub start_date: Date,
}

impl Filterable for SubscriptionRecord {
    type Status = SubscriptionStatus;

    fn status(&self) -> SubscriptionStatus {
        self.status
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.user_name.as_str(),
            self.user_email.as_str(),
            self.plan.as_str(),
        ]
        .into_iter()
    }
}

/// Monthly revenue: the exact sum of amounts over active subscriptions
/// only, computed from the full store regardless of any list filter.
pub fn monthly_revenue(subscriptions: &[SubscriptionRecord]) -> Cents {
    subscriptions
        .iter()
        .filter(|s| s.status == SubscriptionStatus::Active)
        .map(|s| s.amount)
        .sum()
}

/// The mock subscriptions backing the Subscriptions page.
pub fn seed_subscriptions() -> Vec<SubscriptionRecord> {
    vec![
        SubscriptionRecord {
            id: Uuid::from_u128(1),
            user_name: "John Doe".into(),
            user_email: "john@example.com".into(),
            user_avatar: Some(
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face"
                    .into(),
            ),
            plan: "Pro Plan".into(),
            status: SubscriptionStatus::Active,
            amount: Cents::new(2999),
            renewal_date: date(2024, 7, 15),
            start_date: date(2024, 1, 15),
        },
        SubscriptionRecord {
            id: Uuid::from_u128(2),
            user_name: "Jane Smith".into(),
            user_email: "jane@example.com".into(),
            user_avatar: Some(
                "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face"
                    .into(),
            ),
            plan: "Premium Plan".into(),
            status: SubscriptionStatus::Active,
            amount: Cents::new(4999),
            renewal_date: date(2024, 7, 20),
            start_date: date(2024, 2, 20),
        },
        SubscriptionRecord {
            id: Uuid::from_u128(3),
            user_name: "Mike Johnson".into(),
            user_email: "mike@example.com".into(),
            user_avatar: None,
            plan: "Basic Plan".into(),
            status: SubscriptionStatus::Paused,
            amount: Cents::new(1999),
            renewal_date: date(2024, 8, 1),
            start_date: date(2024, 3, 1),
        },
        SubscriptionRecord {
            id: Uuid::from_u128(4),
            user_name: "Sarah Wilson".into(),
            user_email: "sarah@example.com".into(),
            user_avatar: None,
            plan: "Pro Plan".into(),
            status: SubscriptionStatus::Cancelled,
            amount: Cents::new(2999),
            renewal_date: date(2024, 6, 5),
            start_date: date(2024, 1, 5),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{StatusFilter, count_with_status, visible};

    fn sub(status: SubscriptionStatus, amount: Cents) -> SubscriptionRecord {
        SubscriptionRecord {
            id: Uuid::new_v4(),
            user_name: "Someone".into(),
            user_email: "someone@example.com".into(),
            user_avatar: None,
            plan: "Pro Plan".into(),
            status,
            amount,
            renewal_date: date(2024, 7, 1),
            start_date: date(2024, 1, 1),
        }
    }

    #[test]
    fn revenue_counts_active_amounts_only() {
        use SubscriptionStatus::*;
        let subs: Vec<_> = [Active, Active, Paused, Cancelled]
            .into_iter()
            .map(|status| sub(status, Cents::new(2999)))
            .collect();

        assert_eq!(count_with_status(&subs, Active), 2);
        assert_eq!(monthly_revenue(&subs).to_string(), "59.98");
    }

    #[test]
    fn aggregates_ignore_the_list_filter() {
        let subs = seed_subscriptions();
        let revenue_before = monthly_revenue(&subs);
        let active_before = count_with_status(&subs, SubscriptionStatus::Active);

        // Narrow the visible list; the summary numbers must not move.
        let narrowed = visible(
            &subs,
            "premium",
            StatusFilter::Only(SubscriptionStatus::Paused),
        );
        assert!(narrowed.is_empty());
        assert_eq!(monthly_revenue(&subs), revenue_before);
        assert_eq!(
            count_with_status(&subs, SubscriptionStatus::Active),
            active_before
        );
    }

    #[test]
    fn seed_revenue_matches_the_two_active_plans() {
        let subs = seed_subscriptions();
        // 29.99 + 49.99
        assert_eq!(monthly_revenue(&subs), Cents::new(7998));
    }

    #[test]
    fn plan_is_searchable() {
        let subs = seed_subscriptions();
        let hits = visible(&subs, "basic", StatusFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].user_name, "Mike Johnson");
    }

    #[test]
    fn action_labels_follow_status() {
        use SubscriptionStatus::*;
        assert_eq!(Active.action_label(), "Pause");
        assert_eq!(Paused.action_label(), "Resume");
        assert_eq!(Cancelled.action_label(), "Cancel");
        assert_eq!(Expired.action_label(), "Cancel");
    }
}
