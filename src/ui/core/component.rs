use super::actions::AppAction;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> AppAction;

    fn handle_mouse_events(&mut self, _mouse: MouseEvent) -> AppAction {
        AppAction::None
    }

    fn update(&mut self, action: AppAction) -> AppAction {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
