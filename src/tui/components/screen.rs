//! # Screen Component
//!
//! Draws the body for whatever `Route` is current: the auth forms while
//! signed out, placeholder feeds and profile pages while signed in.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `AuthForm` lives in `TuiState`
//! - `Screen` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::route::{AuthRoute, MainRoute, ProfileRoute, Route};
use crate::core::session::CurrentUser;
use crate::tui::component::Component;
use crate::tui::components::auth_form::AuthForm;

pub struct Screen<'a> {
    route: Route,
    user: Option<&'a CurrentUser>,
    form: Option<&'a mut AuthForm>,
}

impl<'a> Screen<'a> {
    pub fn new(
        route: Route,
        user: Option<&'a CurrentUser>,
        form: Option<&'a mut AuthForm>,
    ) -> Self {
        Self { route, user, form }
    }

    fn auth_heading(auth: AuthRoute) -> (&'static str, &'static str) {
        match auth {
            AuthRoute::Login => ("∞ Welcome to Loopzy", "Sign in to continue"),
            AuthRoute::Signup => (
                "Join Loopzy",
                "Create your account and enjoy the world of entertainment",
            ),
            AuthRoute::ForgotPassword => (
                "Forgot Password",
                "Enter your email or phone and we'll send you a reset code",
            ),
        }
    }

    fn main_body(&self, main: MainRoute) -> Vec<Line<'static>> {
        let dim = Style::default().fg(Color::DarkGray);
        let username = self
            .user
            .map(|u| format!("@{}", u.username))
            .unwrap_or_else(|| "@username".to_string());
        match main {
            MainRoute::Home => vec![
                Line::from("Following  ·  For You"),
                Line::from(""),
                Line::styled("Video Feed Goes Here", dim),
            ],
            MainRoute::Discover => vec![
                Line::from("Search"),
                Line::from(""),
                Line::styled("Discover Content Goes Here", dim),
            ],
            MainRoute::Create => vec![
                Line::from("Create"),
                Line::from(""),
                Line::styled("Record or upload a loop", dim),
            ],
            MainRoute::Inbox => vec![
                Line::from("Inbox"),
                Line::from(""),
                Line::styled("Messages and Notifications", dim),
            ],
            MainRoute::Profile(ProfileRoute::Main) => vec![
                Line::from(username),
                Line::from(""),
                Line::styled("Profile Content Goes Here", dim),
            ],
            MainRoute::Profile(ProfileRoute::Settings) => vec![
                Line::from("Account"),
                Line::from("Privacy"),
                Line::from("Notifications"),
                Line::from(""),
                Line::styled("e: edit profile   o: sign out", dim),
            ],
            MainRoute::Profile(ProfileRoute::EditProfile) => {
                let mut lines = vec![Line::from(username)];
                if let Some(user) = self.user {
                    lines.push(Line::styled(user.email.clone(), dim));
                }
                lines.push(Line::from(""));
                lines.push(Line::styled("Profile editing is not available yet", dim));
                lines
            }
        }
    }

    fn render_auth(&mut self, frame: &mut Frame, area: Rect, auth: AuthRoute) {
        let (heading, subtitle) = Self::auth_heading(auth);
        let form_height = self.form.as_ref().map(|f| f.height()).unwrap_or(0);

        let [heading_area, form_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(form_height),
        ])
        .flex(Flex::Center)
        .areas(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                heading,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::styled(subtitle, Style::default().fg(Color::Gray)),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(header, heading_area);

        let [form_column] = Layout::horizontal([Constraint::Max(50)])
            .flex(Flex::Center)
            .areas(form_area);
        if let Some(form) = self.form.as_deref_mut() {
            form.render(frame, form_column);
        }
    }
}

impl Component for Screen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.route {
            Route::Auth(auth) => self.render_auth(frame, area, auth),
            Route::Main(main) => {
                let body = Paragraph::new(self.main_body(main))
                    .alignment(Alignment::Center)
                    .block(Block::bordered().title(self.route.title()))
                    .wrap(Wrap { trim: true });
                frame.render_widget(body, area);
            }
        }
    }
}
