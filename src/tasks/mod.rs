//! Task board: action items extracted from the discussion.

pub mod detect;

pub use detect::detect_action_item;

use serde::{Deserialize, Serialize};

/// One extracted action item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub assigned_to: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u64, text: impl Into<String>, assigned_to: impl Into<String>) -> Self {
        Task {
            id,
            text: text.into(),
            assigned_to: assigned_to.into(),
            completed: false,
        }
    }
}

/// Ordered task list with manual toggle / delete operations.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskBoard {
    pub fn new() -> Self {
        TaskBoard::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task and return its id.
    pub fn add(&mut self, text: impl Into<String>, assigned_to: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task::new(id, text, assigned_to));
        id
    }

    /// Flip completion of the task with the given id. Unknown ids are ignored.
    pub fn toggle(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.completed = !task.completed;
        }
    }

    /// Remove the task with the given id. Unknown ids are ignored.
    pub fn delete(&mut self, id: u64) {
        self.tasks.retain(|task| task.id != id);
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}
