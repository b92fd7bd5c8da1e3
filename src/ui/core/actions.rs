use crate::swipe::RowKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    // Item operations
    DeleteItem(RowKey),
    AddItem,
    Refresh,

    // Swipe state
    CloseSwipes,

    // App control
    Quit,
    None,
}
