//! # TabBar Component
//!
//! Bottom bar listing the five tabs with the selected one highlighted.
//! Only shown when signed in.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Tabs};

use crate::core::route::Tab;
use crate::tui::component::Component;

pub struct TabBar {
    pub selected: Tab,
}

impl TabBar {
    pub fn new(selected: Tab) -> Self {
        Self { selected }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
            .collect();
        let selected = Tab::ALL
            .iter()
            .position(|t| *t == self.selected)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .select(selected)
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)))
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }
}
