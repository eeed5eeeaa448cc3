//! # Application State
//!
//! Core business state for Loopzy. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── coordinator: Coordinator      // session + router
//! │   ├── session: Session          // auth flag, current user
//! │   └── router: Router            // tab + navigation stack
//! ├── status_message: String        // status bar text
//! ├── is_loading: bool              // waiting for the auth service
//! ├── error: Option<String>         // error banner
//! └── notice: Option<String>        // success banner (e.g. reset code sent)
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::coordinator::Coordinator;
use crate::core::route::Route;

pub struct App {
    pub coordinator: Coordinator,
    pub status_message: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl App {
    pub fn new(coordinator: Coordinator) -> Self {
        Self {
            coordinator,
            status_message: String::from("Welcome to Loopzy!"),
            is_loading: false,
            error: None,
            notice: None,
        }
    }

    /// The screen the UI should show right now.
    ///
    /// Signed out, an empty stack means the login screen. Signed in, it
    /// means the selected tab's root. Auth routes left on the stack after
    /// sign-in never happen because login clears it.
    pub fn current_screen(&self) -> Route {
        let router = self.coordinator.router();
        match router.current_route() {
            Some(route) => route,
            None if self.coordinator.is_authenticated() => router.current_tab().root_route(),
            None => Route::LOGIN,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Coordinator::default())
    }
}
