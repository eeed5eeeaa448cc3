use crate::core::route::{AuthRoute, Route};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Screen, TabBar, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let session = app.coordinator.session();
    let signed_in = session.is_authenticated();
    let screen = app.current_screen();

    let tab_bar_height = if signed_in { 3 } else { 0 };
    let layout = Layout::vertical([
        Length(1),
        Length(1),
        Min(0),
        Length(tab_bar_height),
        Length(1),
    ]);
    let [title_area, banner_area, main_area, tab_area, help_area] = layout.areas(frame.area());

    // Title bar
    let mut title_bar = TitleBar::new(
        screen.title().to_string(),
        app.status_message.clone(),
        app.is_loading,
    );
    title_bar.spinner_frame = spinner_frame;
    title_bar.render(frame, title_area);

    draw_banner(frame, banner_area, app);

    // Main area
    if let Some(form) = tui.form.as_mut() {
        form.disabled = app.is_loading;
    }
    let form = if screen.is_auth() {
        tui.form.as_mut()
    } else {
        None
    };
    Screen::new(screen, session.current_user(), form).render(frame, main_area);

    if signed_in {
        TabBar::new(app.coordinator.router().current_tab()).render(frame, tab_area);
    }

    frame.render_widget(
        Line::styled(help_text(screen), Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(error) = &app.error {
        frame.render_widget(
            Line::styled(format!("✗ {error}"), Style::default().fg(Color::Red)),
            area,
        );
    } else if let Some(notice) = &app.notice {
        frame.render_widget(
            Line::styled(format!("✓ {notice}"), Style::default().fg(Color::Green)),
            area,
        );
    }
}

pub fn help_text(screen: Route) -> &'static str {
    match screen {
        Route::Auth(AuthRoute::Login) => {
            "Enter sign in · Tab next field · Ctrl+N sign up · Ctrl+R forgot password · Esc quit"
        }
        Route::Auth(AuthRoute::Signup) => {
            "Enter create account · Tab next field · Space agree to terms · Esc back"
        }
        Route::Auth(AuthRoute::ForgotPassword) => {
            "Enter send code · ←/→ email or phone · Esc back"
        }
        Route::Main(_) => {
            "←/→ or 1-5 tabs · s settings · e edit profile · c create · o sign out · Esc back"
        }
    }
}
