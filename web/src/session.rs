use dioxus::prelude::*;
use types::session::CurrentUser;

/// Session gate state - `None` is logged out. Provided at the app root,
/// read by the route guards and the shell.
#[derive(Clone, Copy)]
pub struct SessionState(Signal<Option<CurrentUser>>);

impl SessionState {
    pub fn current(&self) -> Option<CurrentUser> {
        self.0.read().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.0.read().is_some()
    }

    pub fn log_in(&mut self, user: CurrentUser) {
        self.0.set(Some(user));
    }

    pub fn log_out(&mut self) {
        self.0.set(None);
    }
}

pub fn provide_session() -> SessionState {
    use_context_provider(|| SessionState(Signal::new(None)))
}

/// Get the session state for the gate and the shell.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
