pub mod filter;
mod money;
pub mod session;
mod subscription;
mod user;

pub use money::Cents;
pub use subscription::{
    SubscriptionRecord, SubscriptionStatus, monthly_revenue, seed_subscriptions,
};
pub use user::{NewUser, UserRecord, UserStatus, seed_users};
