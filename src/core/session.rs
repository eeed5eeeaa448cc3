//! # Session
//!
//! Who is signed in. Lives inside the `Coordinator`, which is the only
//! thing allowed to change it.
//!
//! `current_user` is only ever filled in as a side effect of a successful
//! sign-in and is cleared on logout. `is_authenticated` is what the UI
//! switches on to decide between the auth flow and the tabbed interface.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl CurrentUser {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
        }
    }

    /// A user with a fresh UUID v4 id.
    pub fn with_new_id(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), username, email)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) is_authenticated: bool,
    pub(crate) current_user: Option<CurrentUser>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.current_user.as_ref()
    }
}
