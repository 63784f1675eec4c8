use crate::types::task::{Task, TaskDraft, TaskPatch};

/// In-memory task collection. Owns id assignment and patch-merge semantics;
/// callers serialize access through the state mutex.
///
/// Ids are assigned as `len + 1` at insertion, so a create that follows a
/// delete can reuse a live id. `update` targets the first match, `delete`
/// removes every match, which keeps that documented anomaly contained.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// All tasks in insertion order.
    pub(crate) fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Appends a new task and returns it. Never fails; absent draft fields
    /// arrive already defaulted.
    pub(crate) fn create(&mut self, draft: TaskDraft) -> Task {
        let task = Task {
            id: self.tasks.len() as u64 + 1,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            due_date: draft.due_date,
        };
        self.tasks.push(task.clone());
        task
    }

    /// Merges `patch` over the first task whose id matches and returns the
    /// updated record, or `None` when no task has that id.
    pub(crate) fn update(&mut self, id: u64, patch: TaskPatch) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        Some(task.clone())
    }

    /// Removes every task whose id matches. A missing id is a no-op; no
    /// error is signaled either way.
    pub(crate) fn delete(&mut self, id: u64) {
        self.tasks.retain(|task| task.id != id);
    }
}
