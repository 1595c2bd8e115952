mod components;

mod layout;
pub use layout::DashboardLayout;

mod login;
pub use login::Login;

mod overview;
pub use overview::Overview;

mod users;
pub use users::Users;

mod subscriptions;
pub use subscriptions::Subscriptions;

mod settings;
pub use settings::Settings;

mod not_found;
pub use not_found::NotFound;
