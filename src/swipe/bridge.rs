//! Forwards taps on a revealed action control to the host application.

use super::registry::RowRegistry;
use super::row::{row_key, RowKey};
use super::input::EventOutcome;
use crate::constants::{ACTION_CLASS, ROW_CLASS};
use crate::surface::{ElementId, Surface};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;

/// Errors an action handler may report. The bridge logs them and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Action rejected: {0}")]
    Rejected(String),

    #[error("Action handler unavailable: {0}")]
    Unavailable(String),
}

/// Host-side collaborator invoked with the identifier of the row whose
/// action control was tapped.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    async fn invoke(&self, id: RowKey) -> Result<(), ActionError>;
}

#[derive(Default)]
pub struct ActionBridge {
    handler: Option<Arc<dyn ActionHandler>>,
}

impl ActionBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the handler. A later registration replaces the earlier one.
    pub fn register(&mut self, handler: Arc<dyn ActionHandler>) {
        if self.handler.replace(handler).is_some() {
            debug!("Action handler replaced");
        } else {
            debug!("Action handler registered");
        }
    }

    pub fn is_registered(&self) -> bool {
        self.handler.is_some()
    }

    /// Fire-and-forget invocation on the current tokio runtime. Returns
    /// whether the invocation was scheduled.
    pub fn dispatch(&self, id: RowKey) -> bool {
        let Some(handler) = self.handler.clone() else {
            debug!("No action handler registered; dropping action for row {}", id);
            return false;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                info!("Dispatching action for row {}", id);
                runtime.spawn(async move {
                    if let Err(e) = handler.invoke(id).await {
                        warn!("Action for row {} failed: {}", id, e);
                    }
                });
                true
            }
            Err(_) => {
                warn!("No async runtime available; dropping action for row {}", id);
                false
            }
        }
    }

    /// Click listener for action controls. A click on an action control is
    /// consumed: the owning row's identifier is dispatched (when valid) and the
    /// row closes whatever the handler later reports.
    pub fn handle_click(
        &self,
        target: Option<ElementId>,
        surface: &mut Surface,
        registry: &mut RowRegistry,
    ) -> EventOutcome {
        let Some(button) = target.and_then(|target| surface.closest(target, ACTION_CLASS)) else {
            return EventOutcome::default();
        };
        let Some(row) = surface.closest(button, ROW_CLASS) else {
            return EventOutcome::consumed();
        };

        match row_key(surface, row) {
            Some(id) => {
                self.dispatch(id);
            }
            None => debug!("Row {} has no valid identifier; action skipped", row),
        }
        registry.request_close(Some(row), surface);
        EventOutcome::consumed()
    }
}
