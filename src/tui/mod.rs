//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop only redraws when something changed: a terminal event,
//! an action from a background auth task, or a new router revision. While
//! an auth request is in flight it redraws every ~80ms to animate the spinner.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::auth::AuthService;
use crate::core::config::ResolvedConfig;
use crate::core::coordinator::Coordinator;
use crate::core::route::{AuthRoute, Route, Tab};
use crate::core::state::App;
use crate::core::validation::SignupForm;
use crate::tui::component::EventHandler;
use crate::tui::components::{AuthForm, FormEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Fields for the auth screen currently shown, if any
    pub form: Option<AuthForm>,
}

impl TuiState {
    pub fn new() -> Self {
        Self { form: None }
    }

    /// Keep the form in step with the current screen. A form is rebuilt
    /// (and its fields cleared) whenever a different auth screen appears.
    pub fn sync_form(&mut self, screen: Route) {
        let shown = self.form.as_ref().map(|f| Route::Auth(f.route));
        if shown != Some(screen) {
            self.form = AuthForm::for_route(screen);
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Startup options from the command line.
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    pub deep_link: Option<String>,
    pub demo_login: bool,
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for field editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

/// Translate a terminal event into a core action for the current screen.
/// Form editing is handled here too, since field buffers are TUI state.
pub fn map_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    if matches!(event, TuiEvent::Resize) {
        return None;
    }

    let screen = app.current_screen();
    let at_root = app.coordinator.router().is_at_root();

    match screen {
        Route::Auth(auth) => match event {
            TuiEvent::Escape if auth == AuthRoute::Login => Some(Action::Quit),
            TuiEvent::Escape => Some(Action::Back),
            TuiEvent::OpenSignup if auth == AuthRoute::Login => {
                Some(Action::Navigate(Route::Auth(AuthRoute::Signup)))
            }
            TuiEvent::OpenForgotPassword if auth == AuthRoute::Login => {
                Some(Action::Navigate(Route::Auth(AuthRoute::ForgotPassword)))
            }
            _ => {
                let form = tui.form.as_mut()?;
                match form.handle_event(event)? {
                    FormEvent::Submit => Some(submit_action(form)),
                }
            }
        },
        Route::Main(_) => {
            let tab = app.coordinator.router().current_tab();
            match event {
                TuiEvent::Escape if at_root => Some(Action::Quit),
                TuiEvent::Escape => Some(Action::Back),
                TuiEvent::Left => Some(Action::SelectTab(tab.previous())),
                TuiEvent::Right => Some(Action::SelectTab(tab.next())),
                TuiEvent::InputChar(c @ '1'..='5') => {
                    let index = (*c as usize) - ('1' as usize);
                    Some(Action::SelectTab(Tab::ALL[index]))
                }
                TuiEvent::InputChar('s') => Some(Action::OpenSettings),
                TuiEvent::InputChar('e') if tab == Tab::Profile => {
                    Some(Action::Navigate(Route::EDIT_PROFILE))
                }
                TuiEvent::InputChar('c') => Some(Action::OpenCreate),
                TuiEvent::InputChar('o') => Some(Action::SignOut),
                TuiEvent::InputChar('q') => Some(Action::Quit),
                _ => None,
            }
        }
    }
}

fn submit_action(form: &AuthForm) -> Action {
    match form.route {
        AuthRoute::Login => Action::SubmitSignIn {
            email: form.value(0).trim().to_string(),
            password: form.value(1),
        },
        AuthRoute::Signup => Action::SubmitSignup(SignupForm {
            full_name: form.value(0),
            email: form.value(1).trim().to_string(),
            phone_number: form.value(2).trim().to_string(),
            username: form.value(3).trim().to_string(),
            password: form.value(4),
            confirm_password: form.value(5),
            agreed_to_terms: form.is_checked(6),
        }),
        AuthRoute::ForgotPassword => Action::SubmitResetCode {
            method: form.reset_method,
            target: form.value(0).trim().to_string(),
        },
    }
}

pub fn run(config: ResolvedConfig, options: RunOptions) -> std::io::Result<()> {
    let auth: Arc<dyn AuthService> = Arc::new(config.auth_service());
    info!("Using {} auth service", auth.name());

    let mut app = App::new(Coordinator::default());
    let mut tui = TuiState::new();

    if options.demo_login {
        let user = config.auth_service().demo_user();
        update(&mut app, Action::SignInFinished(Ok(user)));
    }
    if let Some(url) = options.deep_link {
        update(&mut app, Action::OpenDeepLink(url));
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut last_revision = app.coordinator.router().revision();

    loop {
        tui.sync_form(app.current_screen());

        let revision = app.coordinator.router().revision();
        if revision != last_revision || app.is_loading {
            needs_redraw = true;
            last_revision = revision;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Route changes from earlier events in this batch need a fresh form
            tui.sync_form(app.current_screen());
            if let Some(action) = map_event(&app, &mut tui, &event) {
                let effect = update(&mut app, action);
                if apply_effect(effect, &auth, &tx) {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (auth results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if apply_effect(effect, &auth, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    info!("Loopzy shutting down");
    Ok(())
}

/// Start whatever I/O `effect` asks for. Returns true when the app should quit.
fn apply_effect(effect: Effect, auth: &Arc<dyn AuthService>, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        other => {
            spawn_auth_request(other, auth.clone(), tx.clone());
            false
        }
    }
}

fn spawn_auth_request(effect: Effect, auth: Arc<dyn AuthService>, tx: mpsc::Sender<Action>) {
    info!("Spawning auth request: {}", effect_name(&effect));
    tokio::spawn(async move {
        let action = match effect {
            Effect::SignIn { email, password } => {
                Action::SignInFinished(auth.sign_in(&email, &password).await)
            }
            Effect::SignUp(form) => Action::SignupFinished(auth.sign_up(&form).await),
            Effect::SendResetCode { method, target } => Action::ResetCodeFinished(
                auth.send_reset_code(method, &target).await.map(|()| method),
            ),
            Effect::None | Effect::Quit => return,
        };
        if tx.send(action).is_err() {
            warn!("Failed to send auth result: receiver dropped");
        }
    });
}

fn effect_name(effect: &Effect) -> &'static str {
    match effect {
        Effect::SignIn { .. } => "sign_in",
        Effect::SignUp(_) => "sign_up",
        Effect::SendResetCode { .. } => "send_reset_code",
        Effect::None => "none",
        Effect::Quit => "quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::route::{MainRoute, ProfileRoute};
    use crate::core::validation::ResetMethod;
    use crate::test_support::test_app;

    fn type_str(app: &App, tui: &mut TuiState, s: &str) {
        for c in s.chars() {
            assert_eq!(map_event(app, tui, &TuiEvent::InputChar(c)), None);
        }
    }

    #[test]
    fn test_login_form_submits_sign_in() {
        let app = App::default();
        let mut tui = TuiState::new();
        tui.sync_form(app.current_screen());

        type_str(&app, &mut tui, " demo@loopzy.com");
        map_event(&app, &mut tui, &TuiEvent::NextField);
        type_str(&app, &mut tui, "password");

        assert_eq!(
            map_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::SubmitSignIn {
                email: "demo@loopzy.com".to_string(),
                password: "password".to_string(),
            })
        );
    }

    #[test]
    fn test_login_shortcuts() {
        let app = App::default();
        let mut tui = TuiState::new();
        tui.sync_form(app.current_screen());
        assert_eq!(
            map_event(&app, &mut tui, &TuiEvent::OpenSignup),
            Some(Action::Navigate(Route::Auth(AuthRoute::Signup)))
        );
        assert_eq!(
            map_event(&app, &mut tui, &TuiEvent::OpenForgotPassword),
            Some(Action::Navigate(Route::Auth(AuthRoute::ForgotPassword)))
        );
        assert_eq!(map_event(&app, &mut tui, &TuiEvent::Escape), Some(Action::Quit));
    }

    #[test]
    fn test_escape_on_signup_goes_back() {
        let mut app = App::default();
        update(&mut app, Action::Navigate(Route::Auth(AuthRoute::Signup)));
        let mut tui = TuiState::new();
        tui.sync_form(app.current_screen());
        assert_eq!(map_event(&app, &mut tui, &TuiEvent::Escape), Some(Action::Back));
        // Signup shortcuts are login-only; Ctrl+N falls through to the form
        assert_eq!(map_event(&app, &mut tui, &TuiEvent::OpenSignup), None);
    }

    #[test]
    fn test_signup_form_submits_phone_and_terms() {
        let mut app = App::default();
        update(&mut app, Action::Navigate(Route::Auth(AuthRoute::Signup)));
        let mut tui = TuiState::new();
        tui.sync_form(app.current_screen());

        let values = [
            "New User",
            "new@loopzy.com",
            "5550100",
            "newbie",
            "Secret123",
            "Secret123",
        ];
        for value in values {
            type_str(&app, &mut tui, value);
            map_event(&app, &mut tui, &TuiEvent::NextField);
        }
        map_event(&app, &mut tui, &TuiEvent::InputChar(' '));

        assert_eq!(
            map_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::SubmitSignup(SignupForm {
                full_name: "New User".to_string(),
                email: "new@loopzy.com".to_string(),
                phone_number: "5550100".to_string(),
                username: "newbie".to_string(),
                password: "Secret123".to_string(),
                confirm_password: "Secret123".to_string(),
                agreed_to_terms: true,
            }))
        );
    }

    #[test]
    fn test_forgot_password_submits_chosen_method() {
        let mut app = App::default();
        update(&mut app, Action::Navigate(Route::Auth(AuthRoute::ForgotPassword)));
        let mut tui = TuiState::new();
        tui.sync_form(app.current_screen());

        assert_eq!(map_event(&app, &mut tui, &TuiEvent::Right), None);
        type_str(&app, &mut tui, "5550100");
        assert_eq!(
            map_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::SubmitResetCode {
                method: ResetMethod::Phone,
                target: "5550100".to_string(),
            })
        );
    }

    #[test]
    fn test_sync_form_rebuilds_on_route_change() {
        let mut tui = TuiState::new();
        tui.sync_form(Route::LOGIN);
        if let Some(form) = tui.form.as_mut() {
            form.fields[0].value.push_str("kept");
        }
        tui.sync_form(Route::LOGIN);
        assert_eq!(tui.form.as_ref().unwrap().value(0), "kept");

        tui.sync_form(Route::Auth(AuthRoute::Signup));
        assert_eq!(tui.form.as_ref().unwrap().route, AuthRoute::Signup);

        tui.sync_form(Route::Main(MainRoute::Home));
        assert!(tui.form.is_none());
    }

    #[test]
    fn test_main_keys_map_to_navigation() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(
            map_event(&app, &mut tui, &TuiEvent::Right),
            Some(Action::SelectTab(Tab::Discover))
        );
        assert_eq!(
            map_event(&app, &mut tui, &TuiEvent::Left),
            Some(Action::SelectTab(Tab::Profile))
        );
        assert_eq!(
            map_event(&app, &mut tui, &TuiEvent::InputChar('4')),
            Some(Action::SelectTab(Tab::Inbox))
        );
        assert_eq!(map_event(&app, &mut tui, &TuiEvent::InputChar('e')), None);
        assert_eq!(map_event(&app, &mut tui, &TuiEvent::Escape), Some(Action::Quit));

        update(&mut app, Action::OpenSettings);
        assert_eq!(
            map_event(&app, &mut tui, &TuiEvent::InputChar('e')),
            Some(Action::Navigate(Route::Main(MainRoute::Profile(
                ProfileRoute::EditProfile
            ))))
        );
        assert_eq!(map_event(&app, &mut tui, &TuiEvent::Escape), Some(Action::Back));
    }

    #[test]
    fn test_force_quit_everywhere() {
        let mut tui = TuiState::new();
        assert_eq!(
            map_event(&App::default(), &mut tui, &TuiEvent::ForceQuit),
            Some(Action::Quit)
        );
        assert_eq!(
            map_event(&test_app(), &mut tui, &TuiEvent::ForceQuit),
            Some(Action::Quit)
        );
    }

    #[tokio::test]
    async fn test_spawned_sign_in_reports_back() {
        let auth: Arc<dyn AuthService> = Arc::new(crate::core::auth::SimulatedAuthService::new(
            "demo@loopzy.com".to_string(),
            "password".to_string(),
            std::time::Duration::ZERO,
        ));
        let (tx, rx) = mpsc::channel();
        let quit = apply_effect(
            Effect::SignIn {
                email: "demo@loopzy.com".to_string(),
                password: "password".to_string(),
            },
            &auth,
            &tx,
        );
        assert!(!quit);

        let action = tokio::task::spawn_blocking(move || rx.recv().unwrap())
            .await
            .unwrap();
        assert!(matches!(action, Action::SignInFinished(Ok(ref user)) if user.username == "demo"));
    }
}
