//! # Core Application Logic
//!
//! This module contains Loopzy's navigation and session logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Router (tab + stack) │
//!                    │  • Coordinator (auth)   │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Mobile   │      │  Auth API  │
//!     │  Adapter   │      │  Adapter   │      │  (future)  │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: `Route` and `Tab`: every screen as a value
//! - [`router`]: `Router`: the navigation stack and selected tab
//! - [`coordinator`]: `Coordinator`: session state driving the router
//! - [`deep_link`]: URL → `DeepLink`
//! - [`state`]: The `App` struct: all application state in one place
//! - [`action`]: The `Action` enum: everything that can happen in the app
//! - [`auth`]: `AuthService` and the simulated implementation
//! - [`validation`]: form field checks
//! - [`config`]: layered settings

pub mod action;
pub mod auth;
pub mod config;
pub mod coordinator;
pub mod deep_link;
pub mod route;
pub mod router;
pub mod session;
pub mod state;
pub mod validation;

pub use coordinator::Coordinator;
pub use deep_link::DeepLink;
pub use route::{AuthRoute, MainRoute, ProfileRoute, Route, Tab};
pub use router::Router;
pub use session::{CurrentUser, Session};
