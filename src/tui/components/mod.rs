//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: Top status bar showing the current screen and status
//! - `TabBar`: Bottom tab strip, signed-in only
//! - `Screen`: Body for the current route
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `AuthForm`: Text fields for the auth screens
//!
//! Components receive external data as props, never by reaching into
//! global state. The router and session are read by the parent (`ui.rs`)
//! and passed down.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (Top status bar)
//! ├── tab_bar.rs      (Tab strip)
//! ├── screen.rs       (Route body)
//! └── auth_form.rs    (Auth text fields)
//! ```

pub mod auth_form;
pub mod screen;
pub mod tab_bar;
mod title_bar;

pub use auth_form::{AuthForm, FormEvent};
pub use screen::Screen;
pub use tab_bar::TabBar;
pub use title_bar::TitleBar;
