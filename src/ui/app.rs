//! Application state and the swipe list it hosts

use super::components::{StatusBar, SwipeListView};
use super::core::{AppAction, Component};
use super::layout::LayoutManager;
use crate::config::{Config, SwipeConfig, UiConfig};
use crate::constants::{
    ACTION_CLASS, ATTR_ID, CONTENT_CLASS, ROW_CLASS, SUCCESS_ITEM_ADDED, SUCCESS_ITEM_DELETED, SUCCESS_REFRESHED,
};
use crate::logger::Logger;
use crate::surface::{ElementId, ElementSpec, Surface};
use crate::swipe::{ActionError, ActionHandler, InputSource, PointerEvent, PointerKind, RowKey, SwipeController};
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::info;
use ratatui::{layout::Rect, Frame};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

const LIST_CLASS: &str = "swipe-list";
const STATUS_CLASS: &str = "status-bar";

/// One entry of the demo list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: RowKey,
    pub title: String,
}

/// Action handler standing in for the host application: a tapped action
/// control becomes a delete request on the app's action channel.
pub struct ChannelActionHandler {
    sender: UnboundedSender<AppAction>,
}

impl ChannelActionHandler {
    pub fn new(sender: UnboundedSender<AppAction>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl ActionHandler for ChannelActionHandler {
    async fn invoke(&self, id: RowKey) -> Result<(), ActionError> {
        self.sender
            .send(AppAction::DeleteItem(id))
            .map_err(|_| ActionError::Unavailable("application is shutting down".to_string()))
    }
}

/// Application state
pub struct App {
    pub items: Vec<Item>,
    pub status_message: Option<String>,
    controller: SwipeController,
    rows: BTreeMap<RowKey, ElementId>,
    list: Option<ElementId>,
    status: Option<ElementId>,
    ui_config: UiConfig,
    logger: Logger,
    action_rx: UnboundedReceiver<AppAction>,
    next_id: RowKey,
    list_area: Rect,
    status_area: Rect,
    pressed: Option<Option<ElementId>>,
    should_quit: bool,
}

impl App {
    /// Create the app with a few starter items
    pub fn new(config: &Config, logger: Logger) -> anyhow::Result<Self> {
        let items = ["Buy milk", "Call the plumber", "Renew passport", "Water the plants", "Book train tickets"]
            .iter()
            .zip(1..)
            .map(|(title, id)| Item {
                id,
                title: (*title).to_string(),
            })
            .collect();
        Self::with_items(config, logger, items)
    }

    pub fn with_items(config: &Config, logger: Logger, items: Vec<Item>) -> anyhow::Result<Self> {
        let mut surface = Surface::new();
        let root = surface.root();
        let list = surface.append(root, ElementSpec::new().class(LIST_CLASS));
        let status = surface.append(root, ElementSpec::new().class(STATUS_CLASS));

        let mut controller = SwipeController::with_surface(surface, config.swipe)?;
        let (action_tx, action_rx) = unbounded_channel();
        controller.register_action_handler(Arc::new(ChannelActionHandler::new(action_tx)));

        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        let mut app = Self {
            items,
            status_message: None,
            controller,
            rows: BTreeMap::new(),
            list,
            status,
            ui_config: config.ui.clone(),
            logger,
            action_rx,
            next_id,
            list_area: Rect::default(),
            status_area: Rect::default(),
            pressed: None,
            should_quit: false,
        };
        app.sync_rows();
        Ok(app)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn controller(&self) -> &SwipeController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SwipeController {
        &mut self.controller
    }

    pub fn swipe_config(&self) -> &SwipeConfig {
        self.controller.config()
    }

    pub fn ui_config(&self) -> &UiConfig {
        &self.ui_config
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Row element rendering `id`
    pub fn row_element(&self, id: RowKey) -> Option<ElementId> {
        self.rows.get(&id).copied()
    }

    /// Actions delivered by the action handler since the last call
    pub fn process_background_actions(&mut self) -> Vec<AppAction> {
        let mut actions = Vec::new();
        while let Ok(action) = self.action_rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Bring the row elements in line with `items`: rows of removed items go
    /// away, new items get fresh rows, and the controller attaches to them.
    fn sync_rows(&mut self) {
        let live: HashSet<RowKey> = self.items.iter().map(|item| item.id).collect();
        let surface = self.controller.surface_mut();
        self.rows.retain(|id, row| {
            if live.contains(id) {
                true
            } else {
                surface.remove(*row);
                false
            }
        });

        if let Some(list) = self.list {
            for item in &self.items {
                if self.rows.contains_key(&item.id) {
                    continue;
                }
                if let Some(row) = build_row(surface, list, item.id) {
                    self.rows.insert(item.id, row);
                }
            }
        }
        self.controller.sync();
    }

    /// Drop every row element and build new ones, like a list re-render.
    fn rebuild_rows(&mut self) {
        let surface = self.controller.surface_mut();
        for row in self.rows.values() {
            surface.remove(*row);
        }
        self.rows.clear();
        self.sync_rows();
    }

    fn notify(&mut self, message: String) {
        info!("{}", message);
        self.status_message = Some(message);
    }

    /// Element under a terminal cell, using the last rendered layout
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ElementId> {
        if contains(self.status_area, column, row) {
            return self.status;
        }
        if !contains(self.list_area, column, row) {
            return None;
        }

        let inner = LayoutManager::list_inner(self.list_area);
        if !contains(inner, column, row) {
            return self.list;
        }
        let index = usize::from(row - inner.y);
        let Some(element) = self.items.get(index).and_then(|item| self.row_element(item.id)) else {
            return self.list;
        };

        let surface = self.controller.surface();
        let relative = column - inner.x;
        let revealed = self
            .offset_columns(element)
            .min(self.ui_config.action_columns(self.swipe_config()));
        let part = if relative < revealed {
            surface.find_descendant(element, ACTION_CLASS)
        } else {
            surface.find_descendant(element, CONTENT_CLASS)
        };
        part.or(Some(element))
    }

    /// Reveal offset of a row expressed in terminal columns
    pub fn offset_columns(&self, row: ElementId) -> u16 {
        let cell = i32::from(self.ui_config.cell_width.max(1));
        u16::try_from(self.controller.offset(row) / cell).unwrap_or(0)
    }

    fn pointer(&mut self, kind: PointerKind, x: i32, target: Option<ElementId>) {
        self.controller
            .handle_pointer(PointerEvent::new(kind, InputSource::Mouse, x, target));
    }
}

fn build_row(surface: &mut Surface, list: ElementId, id: RowKey) -> Option<ElementId> {
    let row = surface.append(list, ElementSpec::new().class(ROW_CLASS).data(ATTR_ID, id.to_string()))?;
    surface.append(row, ElementSpec::new().class(ACTION_CLASS));
    surface.append(row, ElementSpec::new().class(CONTENT_CLASS));
    Some(row)
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

impl Component for App {
    fn handle_key_events(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Char('a') => AppAction::AddItem,
            KeyCode::Char('r') => AppAction::Refresh,
            KeyCode::Esc => AppAction::CloseSwipes,
            _ => AppAction::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> AppAction {
        if !self.ui_config.mouse_enabled {
            return AppAction::None;
        }
        let x = i32::from(mouse.column).saturating_mul(i32::from(self.ui_config.cell_width));
        let target = self.hit_test(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = Some(target);
                self.pointer(PointerKind::Down, x, target);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.pointer(PointerKind::Move, x, target);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.pointer(PointerKind::Up, x, target);
                // Press and release on the same element make a click
                if self.pressed.take() == Some(target) {
                    self.pointer(PointerKind::Click, x, target);
                }
            }
            _ => {}
        }
        AppAction::None
    }

    fn update(&mut self, action: AppAction) -> AppAction {
        match action {
            AppAction::DeleteItem(id) => {
                let before = self.items.len();
                self.items.retain(|item| item.id != id);
                if self.items.len() < before {
                    self.sync_rows();
                    self.notify(format!("{} (#{})", SUCCESS_ITEM_DELETED, id));
                }
                AppAction::None
            }
            AppAction::AddItem => {
                let id = self.next_id;
                self.next_id += 1;
                self.items.push(Item {
                    id,
                    title: format!("New item {}", id),
                });
                self.sync_rows();
                self.notify(format!("{} (#{})", SUCCESS_ITEM_ADDED, id));
                AppAction::None
            }
            AppAction::Refresh => {
                self.rebuild_rows();
                self.notify(SUCCESS_REFRESHED.to_string());
                AppAction::None
            }
            AppAction::CloseSwipes => {
                self.controller.close_all_swipes();
                AppAction::None
            }
            AppAction::Quit => {
                self.should_quit = true;
                AppAction::Quit
            }
            AppAction::None => AppAction::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [list_area, status_area] = LayoutManager::main_layout(rect);
        self.list_area = list_area;
        self.status_area = status_area;

        SwipeListView::render(f, list_area, self);
        StatusBar::render(f, status_area, self);
    }
}
