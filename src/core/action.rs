//! # Actions
//!
//! Everything that can happen in Loopzy becomes an `Action`.
//! User picks a tab? That's `Action::SelectTab(tab)`.
//! The auth service answers? That's `Action::SignInFinished(result)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the adapter should
//! start. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state
//! and the returned effect.

use log::{debug, info, warn};

use crate::core::auth::AuthError;
use crate::core::route::{AuthRoute, Route, Tab};
use crate::core::session::CurrentUser;
use crate::core::state::App;
use crate::core::validation::{ResetMethod, SignupForm, validate_reset_target, validate_sign_in};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Push a screen onto the current stack.
    Navigate(Route),
    /// Pop the current screen.
    Back,
    SelectTab(Tab),
    OpenCreate,
    OpenSettings,
    OpenDeepLink(String),
    SubmitSignIn { email: String, password: String },
    SignInFinished(Result<CurrentUser, AuthError>),
    SubmitSignup(SignupForm),
    SignupFinished(Result<CurrentUser, AuthError>),
    SubmitResetCode { method: ResetMethod, target: String },
    ResetCodeFinished(Result<ResetMethod, AuthError>),
    SignOut,
    DismissBanner,
    Quit,
}

/// I/O the adapter must perform after `update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SignIn { email: String, password: String },
    SignUp(SignupForm),
    SendResetCode { method: ResetMethod, target: String },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(route) => {
            clear_banners(app);
            clear_status(app);
            app.coordinator.router_mut().navigate(route);
            Effect::None
        }
        Action::Back => {
            clear_banners(app);
            clear_status(app);
            app.coordinator.router_mut().pop();
            Effect::None
        }
        Action::SelectTab(tab) => {
            if app.coordinator.is_authenticated() {
                clear_status(app);
                app.coordinator.router_mut().navigate_to_tab(tab);
            }
            Effect::None
        }
        Action::OpenCreate => {
            if app.coordinator.is_authenticated() {
                clear_status(app);
                app.coordinator.navigate_to_create();
            }
            Effect::None
        }
        Action::OpenSettings => {
            if app.coordinator.is_authenticated() {
                clear_status(app);
                app.coordinator.navigate_to_settings();
            }
            Effect::None
        }
        Action::OpenDeepLink(url) => {
            if app.coordinator.resolve_deep_link(&url) {
                clear_status(app);
            } else {
                app.status_message = format!("Unrecognized link: {url}");
            }
            Effect::None
        }
        Action::SubmitSignIn { email, password } => {
            if app.is_loading {
                return Effect::None;
            }
            match validate_sign_in(&email, &password) {
                Ok(()) => {
                    start_loading(app, "Signing in...");
                    Effect::SignIn { email, password }
                }
                Err(e) => {
                    app.error = Some(e.to_string());
                    Effect::None
                }
            }
        }
        Action::SubmitSignup(form) => {
            if app.is_loading {
                return Effect::None;
            }
            match form.validate() {
                Ok(()) => {
                    start_loading(app, "Creating account...");
                    Effect::SignUp(form)
                }
                Err(e) => {
                    app.error = Some(e.to_string());
                    Effect::None
                }
            }
        }
        Action::SignInFinished(result) | Action::SignupFinished(result) => {
            app.is_loading = false;
            match result {
                Ok(user) => {
                    app.status_message = format!("Signed in as {}", user.username);
                    app.coordinator.sign_in(user);
                }
                Err(e) => {
                    warn!("Authentication failed: {}", e);
                    app.status_message.clear();
                    app.error = Some(e.to_string());
                }
            }
            Effect::None
        }
        Action::SubmitResetCode { method, target } => {
            if app.is_loading {
                return Effect::None;
            }
            match validate_reset_target(method, &target) {
                Ok(()) => {
                    start_loading(app, "Sending reset code...");
                    Effect::SendResetCode { method, target }
                }
                Err(e) => {
                    app.error = Some(e.to_string());
                    Effect::None
                }
            }
        }
        Action::ResetCodeFinished(result) => {
            app.is_loading = false;
            app.status_message.clear();
            match result {
                Ok(method) => {
                    // Back to the screen that opened the reset form, unless
                    // the user already left it while the request was running.
                    let router = app.coordinator.router_mut();
                    if router.current_route() == Some(Route::Auth(AuthRoute::ForgotPassword)) {
                        router.pop();
                    }
                    app.notice = Some(format!(
                        "Reset code sent successfully! Check your {} for further instructions.",
                        method.noun()
                    ));
                }
                Err(e) => app.error = Some(e.to_string()),
            }
            Effect::None
        }
        Action::SignOut => {
            clear_banners(app);
            app.coordinator.sign_out();
            app.status_message = String::from("Signed out");
            Effect::None
        }
        Action::DismissBanner => {
            clear_banners(app);
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

fn start_loading(app: &mut App, status: &str) {
    clear_banners(app);
    app.is_loading = true;
    app.status_message = status.to_string();
}

/// Navigation drops stale status text. A request in flight keeps its
/// "...ing" status until it finishes.
fn clear_status(app: &mut App) {
    if !app.is_loading {
        app.status_message.clear();
    }
}

fn clear_banners(app: &mut App) {
    app.error = None;
    app.notice = None;
}
