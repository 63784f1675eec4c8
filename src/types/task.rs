use serde::{Deserialize, Serialize};

/// A single task record as stored and served over the wire.
///
/// `due_date` is kept as the client-supplied string; nothing on the write
/// path parses or validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

/// Body of a create request. Every field is optional on the wire; missing
/// fields take their defaults and unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, rename = "dueDate")]
    pub due_date: String,
}

/// Body of an update request: present fields overwrite, absent fields keep
/// their prior values. The id is not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
}
