//! # Routes
//!
//! Every screen Loopzy can show is identified by a `Route` value.
//!
//! ```text
//! Route
//! ├── Auth(AuthRoute)        // pre-login flow
//! │   ├── Login
//! │   ├── Signup
//! │   └── ForgotPassword
//! └── Main(MainRoute)        // post-login, one per tab
//!     ├── Home
//!     ├── Discover
//!     ├── Create
//!     ├── Inbox
//!     └── Profile(ProfileRoute)
//!         ├── Main
//!         ├── Settings
//!         └── EditProfile
//! ```
//!
//! `Tab` is the one canonical type for the selected top-level destination.
//! `MainRoute::tab()` tells you which tab owns a main route.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Auth(AuthRoute),
    Main(MainRoute),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthRoute {
    Login,
    Signup,
    ForgotPassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainRoute {
    Home,
    Discover,
    Create,
    Inbox,
    Profile(ProfileRoute),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileRoute {
    Main,
    Settings,
    EditProfile,
}

/// Top-level destination in the signed-in interface. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Home,
    Discover,
    Create,
    Inbox,
    Profile,
}

impl Route {
    pub const LOGIN: Route = Route::Auth(AuthRoute::Login);
    pub const SETTINGS: Route = Route::Main(MainRoute::Profile(ProfileRoute::Settings));
    pub const EDIT_PROFILE: Route = Route::Main(MainRoute::Profile(ProfileRoute::EditProfile));

    pub fn is_auth(&self) -> bool {
        matches!(self, Route::Auth(_))
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Auth(AuthRoute::Login) => "Sign In",
            Route::Auth(AuthRoute::Signup) => "Sign Up",
            Route::Auth(AuthRoute::ForgotPassword) => "Forgot Password",
            Route::Main(MainRoute::Profile(ProfileRoute::Settings)) => "Settings",
            Route::Main(MainRoute::Profile(ProfileRoute::EditProfile)) => "Edit Profile",
            Route::Main(main) => main.tab().title(),
        }
    }
}

impl MainRoute {
    /// The tab whose navigation context this route belongs to.
    pub fn tab(&self) -> Tab {
        match self {
            MainRoute::Home => Tab::Home,
            MainRoute::Discover => Tab::Discover,
            MainRoute::Create => Tab::Create,
            MainRoute::Inbox => Tab::Inbox,
            MainRoute::Profile(_) => Tab::Profile,
        }
    }
}

impl Tab {
    /// All tabs in tab-bar order.
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Discover, Tab::Create, Tab::Inbox, Tab::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Discover => "Discover",
            Tab::Create => "Create",
            Tab::Inbox => "Inbox",
            Tab::Profile => "Profile",
        }
    }

    /// The route shown when this tab's stack is empty.
    pub fn root_route(&self) -> Route {
        Route::Main(match self {
            Tab::Home => MainRoute::Home,
            Tab::Discover => MainRoute::Discover,
            Tab::Create => MainRoute::Create,
            Tab::Inbox => MainRoute::Inbox,
            Tab::Profile => MainRoute::Profile(ProfileRoute::Main),
        })
    }

    fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Next tab to the right, wrapping around.
    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// Next tab to the left, wrapping around.
    pub fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}
