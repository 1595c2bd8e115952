use serde::{Deserialize, Serialize};

/// The signed-in identity shown in the shell and the settings form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: Option<String>,
}

/// The session gate's only transition into the logged-in state.
///
/// Any non-empty email/password pair is accepted; this is a mock with no
/// credential verification. Returns `None` when a field is empty, which
/// leaves the gate logged out.
pub fn log_in(email: &str, password: &str) -> Option<CurrentUser> {
    if email.trim().is_empty() || password.is_empty() {
        return None;
    }
    Some(CurrentUser {
        name: "Admin User".into(),
        email: email.to_string(),
        role: "Administrator".into(),
        avatar: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_non_empty_pair_is_accepted() {
        let user = log_in("a@b.com", "x").expect("gate should open");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.role, "Administrator");
    }

    #[test]
    fn empty_fields_keep_the_gate_closed() {
        assert!(log_in("", "secret").is_none());
        assert!(log_in("a@b.com", "").is_none());
        assert!(log_in("   ", "secret").is_none());
    }
}
