//! # TitleBar Component
//!
//! Top status bar: app name, current screen, and the transient status.
//!
//! TitleBar is purely presentational. It receives all data as props and
//! has no internal state.
//!
//! The text changes based on state:
//!
//! 1. **Loading**: `"Loopzy | Sign In | Signing in... ⠋"`
//! 2. **Status message**: `"Loopzy | Home | Signed in as demo"`
//! 3. **Default**: `"Loopzy | Home"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct TitleBar {
    pub screen_title: String,
    pub status_message: String,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(screen_title: String, status_message: String, is_loading: bool) -> Self {
        Self {
            screen_title,
            status_message,
            is_loading,
            spinner_frame: 0,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("Loopzy | {}", self.screen_title);
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.is_loading {
            text.push(' ');
            text.push(SPINNER[self.spinner_frame % SPINNER.len()]);
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
