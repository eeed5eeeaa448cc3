//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::coordinator::Coordinator;
use crate::core::session::CurrentUser;
use crate::core::state::App;

pub fn demo_user() -> CurrentUser {
    CurrentUser::new("demo", "demo", "demo@loopzy.com")
}

/// A coordinator already signed in as `demo_user()`, on (Home, []).
pub fn signed_in_coordinator() -> Coordinator {
    let mut coordinator = Coordinator::default();
    coordinator.sign_in(demo_user());
    coordinator
}

/// Creates a signed-in test App.
pub fn test_app() -> App {
    App::new(signed_in_coordinator())
}
