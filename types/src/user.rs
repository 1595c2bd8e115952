use std::fmt;

use jiff::civil::{Date, date};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::Filterable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    pub const ALL: [UserStatus; 3] = [
        UserStatus::Active,
        UserStatus::Inactive,
        UserStatus::Pending,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Pending => "pending",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Badge style modifier for this status.
    pub fn badge_class(self) -> &'static str {
        match self {
            UserStatus::Active => "badge-green",
            UserStatus::Inactive => "badge-red",
            UserStatus::Pending => "badge-yellow",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
    pub created_at: Date,
    pub avatar: Option<String>,
}

/// Candidate fields for the add-user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UserRecord {
    /// A freshly added account: new id, status Active, created today.
    ///
    /// Duplicate emails are accepted; there is no uniqueness check.
    pub fn create(candidate: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: candidate.name,
            email: candidate.email,
            role: candidate.role,
            status: UserStatus::Active,
            created_at: jiff::Zoned::now().date(),
            avatar: None,
        }
    }
}

impl Filterable for UserRecord {
    type Status = UserStatus;

    fn status(&self) -> UserStatus {
        self.status
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.email.as_str()].into_iter()
    }
}

/// The mock accounts backing the Users page.
pub fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: Uuid::from_u128(1),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            role: "Administrator".into(),
            status: UserStatus::Active,
            created_at: date(2024, 1, 15),
            avatar: Some(
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face"
                    .into(),
            ),
        },
        UserRecord {
            id: Uuid::from_u128(2),
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            role: "User".into(),
            status: UserStatus::Active,
            created_at: date(2024, 1, 20),
            avatar: Some(
                "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face"
                    .into(),
            ),
        },
        UserRecord {
            id: Uuid::from_u128(3),
            name: "Mike Johnson".into(),
            email: "mike@example.com".into(),
            role: "User".into(),
            status: UserStatus::Pending,
            created_at: date(2024, 2, 1),
            avatar: None,
        },
        UserRecord {
            id: Uuid::from_u128(4),
            name: "Sarah Wilson".into(),
            email: "sarah@example.com".into(),
            role: "User".into(),
            status: UserStatus::Inactive,
            created_at: date(2024, 2, 5),
            avatar: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{StatusFilter, visible};

    #[test]
    fn add_user_appends_one_active_record_dated_today() {
        let mut users = seed_users();
        let before = users.len();

        users.push(UserRecord::create(NewUser {
            name: "Ann".into(),
            email: "ann@x.com".into(),
            role: "User".into(),
        }));

        assert_eq!(users.len(), before + 1);
        let added = users.last().unwrap();
        assert_eq!(added.status, UserStatus::Active);
        assert_eq!(added.created_at, jiff::Zoned::now().date());
        assert_eq!(added.email, "ann@x.com");
        assert!(added.avatar.is_none());
    }

    #[test]
    fn duplicate_emails_are_accepted() {
        let mut users = seed_users();
        users.push(UserRecord::create(NewUser {
            name: "John Again".into(),
            email: "john@example.com".into(),
            role: "User".into(),
        }));
        let dupes = users
            .iter()
            .filter(|u| u.email == "john@example.com")
            .count();
        assert_eq!(dupes, 2);
    }

    #[test]
    fn pending_selector_on_seed_returns_the_single_pending_user() {
        let users = seed_users();
        let hits = visible(&users, "", StatusFilter::Only(UserStatus::Pending));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Mike Johnson");
    }

    #[test]
    fn query_matches_name_or_email() {
        let users = seed_users();
        let by_name = visible(&users, "sarah", StatusFilter::All);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].email, "sarah@example.com");

        let by_email = visible(&users, "jane@", StatusFilter::All);
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Jane Smith");
    }

    #[test]
    fn status_labels_round_trip_and_reject_junk() {
        for status in UserStatus::ALL {
            assert_eq!(UserStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(UserStatus::from_label("suspended"), None);
    }

}
