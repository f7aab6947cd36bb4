//! In-memory storage backend
//!
//! Keeps slots in a shared map. Useful as a test double and for
//! sessions that should not touch the filesystem.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::backend::StorageBackend;
use crate::Result;

/// Storage backend holding slot values in memory
///
/// Clones share the same underlying map, so a caller can keep a handle
/// for inspection while a store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_slot() {
        let backend = MemoryBackend::new();
        assert!(backend.read("slot").unwrap().is_none());
    }

    #[test]
    fn test_clones_share_slots() {
        let backend = MemoryBackend::new();
        let handle = backend.clone();

        backend.write("slot", "shared").unwrap();
        assert_eq!(handle.read("slot").unwrap().as_deref(), Some("shared"));
    }
}
