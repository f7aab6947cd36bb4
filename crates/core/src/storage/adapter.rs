//! Snapshot persistence
//!
//! Translates between the in-memory task list and the storage slot
//! holding its serialized snapshot. Persistence is best-effort: a
//! failing slot loses data but never interrupts the session.

use tracing::{debug, warn};

use super::backend::StorageBackend;
use crate::task::Task;

/// Name of the slot holding the persisted task list
pub const STORAGE_KEY: &str = "my-todo-list";

/// Stateless translation layer between task list snapshots and storage
pub struct PersistenceAdapter {
    backend: Box<dyn StorageBackend>,
}

impl PersistenceAdapter {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Write a full snapshot of the task list to the storage slot
    ///
    /// Failures are logged and swallowed; the in-memory list stays
    /// authoritative for the rest of the session.
    pub fn save(&self, tasks: &[Task]) {
        let json = match serde_json::to_string(tasks) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize task list: {}", e);
                return;
            }
        };

        if let Err(e) = self.backend.write(STORAGE_KEY, &json) {
            warn!("Failed to write snapshot: {}", e);
        }
    }

    /// Load the persisted snapshot, if a valid one exists
    ///
    /// An absent slot, an unreadable slot, or a value that is not an
    /// array of objects with a `text` string all yield `None`; the
    /// caller starts from an empty list instead of a partial one.
    pub fn load(&self) -> Option<Vec<Task>> {
        let raw = match self.backend.read(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read snapshot: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => {
                debug!("Loaded {} tasks from snapshot", tasks.len());
                Some(tasks)
            }
            Err(e) => {
                warn!("Ignoring invalid snapshot: {}", e);
                None
            }
        }
    }
}
