//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::constants::STATUS_HINTS;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let dragging = app.controller().dragging_row().is_some();
        let status_text = if dragging {
            "↔ Swiping...".to_string()
        } else if let Some(message) = &app.status_message {
            format!("{} • {}", message, STATUS_HINTS)
        } else if let Some(latest) = app.logger().latest() {
            format!("{} • {}", latest, STATUS_HINTS)
        } else {
            STATUS_HINTS.to_string()
        };

        let status_color = if dragging {
            Color::Yellow
        } else if app.status_message.is_some() {
            Color::Green
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
