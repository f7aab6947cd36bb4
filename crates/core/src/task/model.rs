//! Task model definitions

use serde::{Deserialize, Serialize};

/// A single entry in the task list
///
/// Snapshots written before the completion flag existed may lack
/// `completed`; it deserializes to `false` in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task() {
        let task = Task::new("Test task");
        assert_eq!(task.text, "Test task");
        assert!(!task.completed);
    }

    #[test]
    fn test_completed_defaults_to_false() {
        let task: Task = serde_json::from_str(r#"{"text": "Old entry"}"#).unwrap();
        assert_eq!(task.text, "Old entry");
        assert!(!task.completed);
    }
}
