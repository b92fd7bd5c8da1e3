//! Swipe list component
//!
//! Each item is one line. The content is shifted right by the row's reveal
//! offset, uncovering the action control underneath at the left edge. The
//! control's width comes from `swipe.action_width`, the same value that bounds
//! the drag, so the rendered control and the gesture always agree.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::{App, Item};
use crate::constants::{ACTION_LABEL, LIST_TITLE, SWIPING_CLASS};
use crate::swipe::row::is_row_open;

pub struct SwipeListView;

impl SwipeListView {
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let action_columns = usize::from(app.ui_config().action_columns(app.swipe_config()));
        let items: Vec<ListItem> = app
            .items
            .iter()
            .map(|item| Self::render_item(app, item, action_columns))
            .collect();

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(LIST_TITLE));
        f.render_widget(list, area);
    }

    fn render_item(app: &App, item: &Item, action_columns: usize) -> ListItem<'static> {
        let Some(row) = app.row_element(item.id) else {
            return ListItem::new(Line::from(item.title.clone()));
        };
        let surface = app.controller().surface();
        let revealed = usize::from(app.offset_columns(row)).min(action_columns);

        let mut spans = Vec::new();
        if revealed > 0 {
            let label = format!("{:^width$}", ACTION_LABEL, width = action_columns);
            let visible: String = label.chars().take(revealed).collect();
            spans.push(Span::styled(
                visible,
                Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }

        let content_style = if surface.has_class(row, SWIPING_CLASS) {
            Style::default().fg(Color::Yellow)
        } else if is_row_open(surface, row) {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {}", item.title), content_style));

        ListItem::new(Line::from(spans))
    }
}
