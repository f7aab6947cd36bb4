//! Task list state machine
//!
//! Owns the ordered task list and the edit cursor, and persists a full
//! snapshot after every mutation. Task identity is positional: the
//! index a task has in the rendered list is the handle the host passes
//! back into every operation.

use tracing::debug;

use super::model::Task;
use crate::storage::PersistenceAdapter;

/// Snapshot of the list handed back to the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState<'a> {
    /// Tasks in insertion order
    pub tasks: &'a [Task],
    /// Index of the task currently being edited, if any
    pub editing: Option<usize>,
}

/// Owner of the task list and the operations that mutate it
pub struct TaskStore {
    tasks: Vec<Task>,
    editing: Option<usize>,
    persistence: PersistenceAdapter,
}

impl TaskStore {
    /// Open a store over the given persistence layer
    ///
    /// The persisted snapshot, if a valid one exists, is applied before
    /// the store accepts its first command; otherwise the list starts
    /// empty.
    pub fn open(persistence: PersistenceAdapter) -> Self {
        let tasks = persistence.load().unwrap_or_default();
        Self {
            tasks,
            editing: None,
            persistence,
        }
    }

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Index of the task currently being edited, if any
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    /// Current view state for the rendering collaborator
    pub fn view(&self) -> ViewState<'_> {
        ViewState {
            tasks: &self.tasks,
            editing: self.editing,
        }
    }

    /// Append a new task, or commit the pending edit if one is active
    ///
    /// Whitespace-only text is ignored and leaves a pending edit
    /// pending. Committing an edit replaces the text of the targeted
    /// task in place, keeps its completion flag, and clears the edit
    /// cursor; otherwise the task is appended, not yet completed.
    pub fn add_or_update(&mut self, text: &str) -> ViewState<'_> {
        if text.trim().is_empty() {
            return self.view();
        }

        match self.editing.take() {
            Some(index) => {
                self.tasks[index].text = text.to_string();
                debug!("Updated task at index {}", index);
            }
            None => {
                self.tasks.push(Task::new(text));
                debug!("Added task at index {}", self.tasks.len() - 1);
            }
        }

        self.persistence.save(&self.tasks);
        self.view()
    }

    /// Begin editing the task at `index`, returning its current text
    ///
    /// The text is returned so the host can preload its input widget.
    /// The list itself is not touched and nothing is persisted.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn begin_edit(&mut self, index: usize) -> &str {
        assert!(index < self.tasks.len(), "task index {} out of bounds", index);
        self.editing = Some(index);
        &self.tasks[index].text
    }

    /// Remove the task at `index`, shifting later tasks down by one
    ///
    /// Deleting the task being edited clears the edit cursor; a cursor
    /// past the deleted index shifts down with its task.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn delete(&mut self, index: usize) -> ViewState<'_> {
        self.tasks.remove(index);
        self.editing = match self.editing {
            Some(editing) if editing == index => None,
            Some(editing) if editing > index => Some(editing - 1),
            other => other,
        };
        debug!("Deleted task at index {}", index);

        self.persistence.save(&self.tasks);
        self.view()
    }

    /// Flip the completion flag of the task at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn toggle_complete(&mut self, index: usize) -> ViewState<'_> {
        let task = &mut self.tasks[index];
        task.completed = !task.completed;
        debug!("Toggled task at index {} to {}", index, task.completed);

        self.persistence.save(&self.tasks);
        self.view()
    }
}
