//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Every change writes a fresh snapshot so subscribers see it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::fixtures;
use crate::models::Task;
use crate::tasks::toggle_task;

/// Mutable dashboard state
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Farm tasks in display order
    pub tasks: Vec<Task>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            tasks: fixtures::initial_tasks(),
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

// ========================
// Store Helper Functions
// ========================

/// Toggle task `id`. Returns true if the snapshot changed.
pub fn store_toggle_task(store: &DashboardStore, id: u32) -> bool {
    let next = store.tasks().with_untracked(|tasks| {
        let next = toggle_task(tasks, id);
        (next != *tasks).then_some(next)
    });

    match next {
        Some(tasks) => {
            let completed = tasks.iter().find(|t| t.id == id).map(|t| t.completed);
            store.tasks().set(tasks);
            log::debug!("[STORE] task {} completed -> {:?}", id, completed);
            true
        }
        None => {
            log::warn!("[STORE] toggle ignored, no task with id {}", id);
            false
        }
    }
}
