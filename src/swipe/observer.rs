//! Attaches gesture trackers to eligible rows, including rows inserted after
//! startup.
//!
//! Every structural change triggers a full re-scan rather than a diff of the
//! inserted nodes. Rows already carrying the initialized marker are skipped,
//! so scanning is idempotent.

use super::gesture::GestureTracker;
use crate::constants::{ATTR_INITIALIZED, ATTR_TRUE, ROW_CLASS};
use crate::surface::{ElementId, Mutation, Surface};
use log::debug;
use std::collections::BTreeMap;
use tokio::sync::mpsc::UnboundedReceiver;

pub struct AttachmentObserver {
    trackers: BTreeMap<ElementId, GestureTracker>,
    mutations: UnboundedReceiver<Mutation>,
}

impl AttachmentObserver {
    /// Subscribe to `surface` and attach to the rows already present.
    pub fn observe(surface: &mut Surface) -> Self {
        let mutations = surface.subscribe();
        let mut observer = Self {
            trackers: BTreeMap::new(),
            mutations,
        };
        observer.scan(surface);
        observer
    }

    /// Attach trackers to uninitialized rows and drop trackers whose row is
    /// gone. Returns the number of newly attached rows.
    pub fn scan(&mut self, surface: &mut Surface) -> usize {
        self.trackers.retain(|row, _| surface.contains(*row));

        let mut attached = 0;
        for row in surface.query_class(ROW_CLASS) {
            if surface.data(row, ATTR_INITIALIZED).is_some() {
                continue;
            }
            self.trackers.insert(row, GestureTracker::attach(row, surface));
            surface.set_data(row, ATTR_INITIALIZED, ATTR_TRUE);
            attached += 1;
        }
        if attached > 0 {
            debug!("Attached swipe tracking to {} row(s)", attached);
        }
        attached
    }

    /// Drain pending structural notifications and re-scan if there were any.
    pub fn pump(&mut self, surface: &mut Surface) -> usize {
        let mut changed = false;
        while self.mutations.try_recv().is_ok() {
            changed = true;
        }
        if changed {
            self.scan(surface)
        } else {
            0
        }
    }

    pub fn tracker(&self, row: ElementId) -> Option<&GestureTracker> {
        self.trackers.get(&row)
    }

    pub fn tracker_mut(&mut self, row: ElementId) -> Option<&mut GestureTracker> {
        self.trackers.get_mut(&row)
    }

    pub fn is_attached(&self, row: ElementId) -> bool {
        self.trackers.contains_key(&row)
    }

    pub fn attached_count(&self) -> usize {
        self.trackers.len()
    }
}
