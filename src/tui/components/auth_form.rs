//! # AuthForm Component
//!
//! The text fields for the login, signup, and forgot-password screens.
//!
//! ## Responsibilities
//!
//! - Capture text input into the focused field
//! - Move focus between fields (Tab / Shift+Tab / arrows)
//! - Mask secret fields
//! - Toggle checkboxes with Space
//! - Switch the reset method (Email / Phone) with ←/→ on the reset form
//! - Emit `FormEvent::Submit` on Enter
//!
//! Field buffers are internal state. Which screen the form belongs to is
//! decided by the parent; it rebuilds the form when the route changes.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::route::{AuthRoute, Route};
use crate::core::validation::ResetMethod;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Secret,
    Checkbox { checked: bool },
}

#[derive(Debug, Clone)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
}

impl Field {
    fn new(label: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            value: String::new(),
            kind,
        }
    }

    fn text(label: &'static str) -> Self {
        Self::new(label, FieldKind::Text)
    }

    fn secret(label: &'static str) -> Self {
        Self::new(label, FieldKind::Secret)
    }

    fn checkbox(label: &'static str) -> Self {
        Self::new(label, FieldKind::Checkbox { checked: false })
    }

    fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Text => self.value.clone(),
            FieldKind::Secret => "•".repeat(self.value.chars().count()),
            FieldKind::Checkbox { checked } => {
                let mark = if checked { "[x]" } else { "[ ]" };
                format!("{mark} I agree to the Terms of Service and Privacy Policy")
            }
        }
    }

    fn is_checkbox(&self) -> bool {
        matches!(self.kind, FieldKind::Checkbox { .. })
    }
}

#[derive(Debug, Clone)]
pub struct AuthForm {
    pub route: AuthRoute,
    pub fields: Vec<Field>,
    pub focused: usize,
    /// Only meaningful on the forgot-password form
    pub reset_method: ResetMethod,
    /// Props: dims the form while a request is in flight
    pub disabled: bool,
}

impl AuthForm {
    pub fn new(route: AuthRoute) -> Self {
        let reset_method = ResetMethod::default();
        let fields = match route {
            AuthRoute::Login => vec![Field::text("Email"), Field::secret("Password")],
            AuthRoute::Signup => vec![
                Field::text("Full name"),
                Field::text("Email"),
                Field::text("Phone number"),
                Field::text("Username"),
                Field::secret("Password"),
                Field::secret("Confirm password"),
                Field::checkbox("Terms"),
            ],
            AuthRoute::ForgotPassword => vec![Field::text(reset_method.label())],
        };
        Self {
            route,
            fields,
            focused: 0,
            reset_method,
            disabled: false,
        }
    }

    /// A form for `route`, or `None` if the screen has no fields.
    pub fn for_route(route: Route) -> Option<Self> {
        match route {
            Route::Auth(auth) => Some(Self::new(auth)),
            Route::Main(_) => None,
        }
    }

    pub fn value(&self, index: usize) -> String {
        self.fields
            .get(index)
            .map(|f| f.value.clone())
            .unwrap_or_default()
    }

    pub fn is_checked(&self, index: usize) -> bool {
        matches!(
            self.fields.get(index).map(|f| f.kind),
            Some(FieldKind::Checkbox { checked: true })
        )
    }

    fn switch_reset_method(&mut self) {
        self.reset_method = self.reset_method.toggle();
        if let Some(field) = self.fields.first_mut() {
            field.label = self.reset_method.label();
        }
    }

    /// Rows needed to draw every field.
    pub fn height(&self) -> u16 {
        self.fields.len() as u16 * 3
    }

    fn focused_field(&mut self) -> Option<&mut Field> {
        self.fields.get_mut(self.focused)
    }
}

impl EventHandler for AuthForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        if self.disabled {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) => {
                if let Some(field) = self.focused_field() {
                    match &mut field.kind {
                        FieldKind::Checkbox { checked } => {
                            if *c == ' ' {
                                *checked = !*checked;
                            }
                        }
                        _ => field.value.push(*c),
                    }
                }
                None
            }
            TuiEvent::Paste(text) => {
                // Fields are single-line
                let line = text.lines().next().unwrap_or("").to_string();
                if let Some(field) = self.focused_field() {
                    if !field.is_checkbox() {
                        field.value.push_str(&line);
                    }
                }
                None
            }
            TuiEvent::Backspace => {
                if let Some(field) = self.focused_field() {
                    field.value.pop();
                }
                None
            }
            TuiEvent::Left | TuiEvent::Right if self.route == AuthRoute::ForgotPassword => {
                self.switch_reset_method();
                None
            }
            TuiEvent::NextField => {
                if !self.fields.is_empty() {
                    self.focused = (self.focused + 1) % self.fields.len();
                }
                None
            }
            TuiEvent::PreviousField => {
                if !self.fields.is_empty() {
                    self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
                }
                None
            }
            TuiEvent::Submit => Some(FormEvent::Submit),
            _ => None,
        }
    }
}

impl Component for AuthForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical(vec![Constraint::Length(3); self.fields.len()]).split(area);
        for (i, (field, row)) in self.fields.iter().zip(rows.iter()).enumerate() {
            let is_focused = i == self.focused && !self.disabled;
            let border_style = if is_focused {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let mut text_style = Style::default();
            if self.disabled {
                text_style = text_style.add_modifier(Modifier::DIM);
            }
            let paragraph = Paragraph::new(field.display_value())
                .style(text_style)
                .block(
                    Block::bordered()
                        .title(field.label)
                        .border_style(border_style),
                );
            frame.render_widget(paragraph, *row);

            if is_focused && !field.is_checkbox() {
                let x = row.x + 1 + field.value.chars().count() as u16;
                let max_x = row.x + row.width.saturating_sub(2);
                frame.set_cursor_position(Position::new(x.min(max_x), row.y + 1));
            }
        }
    }
}
