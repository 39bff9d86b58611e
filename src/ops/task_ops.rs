use std::collections::HashSet;

use crate::model::task::{Task, TaskId};

/// Error type for building a task list from outside data
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task {0} has empty text")]
    EmptyText(TaskId),
    #[error("duplicate task id: {0}")]
    DuplicateId(TaskId),
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Trim `text`; `None` when nothing but whitespace remains
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

pub fn position(tasks: &[Task], id: &TaskId) -> Option<usize> {
    tasks.iter().position(|t| &t.id == id)
}

pub fn find_task<'a>(tasks: &'a [Task], id: &TaskId) -> Option<&'a Task> {
    tasks.iter().find(|t| &t.id == id)
}

pub fn find_task_mut<'a>(tasks: &'a mut [Task], id: &TaskId) -> Option<&'a mut Task> {
    tasks.iter_mut().find(|t| &t.id == id)
}

// ---------------------------------------------------------------------------
// Mutation
// ---------------------------------------------------------------------------

/// Flip `completed` on the matching task. Returns false if no task matched.
pub fn toggle_completed(tasks: &mut [Task], id: &TaskId) -> bool {
    match find_task_mut(tasks, id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

/// Replace the text of the matching task, leaving id and completion alone
pub fn set_text(tasks: &mut [Task], id: &TaskId, text: String) -> bool {
    match find_task_mut(tasks, id) {
        Some(task) => {
            task.text = text;
            true
        }
        None => false,
    }
}

/// Remove the matching task, preserving the order of the rest
pub fn remove_task(tasks: &mut Vec<Task>, id: &TaskId) -> Option<Task> {
    let idx = position(tasks, id)?;
    Some(tasks.remove(idx))
}

/// Check that a list can back a store: trimmed non-empty text, unique ids.
/// Text is trimmed in place.
pub fn validate_tasks(tasks: &mut [Task]) -> Result<(), TaskError> {
    let mut seen = HashSet::new();
    for task in tasks.iter_mut() {
        task.text = normalize_text(&task.text)
            .ok_or_else(|| TaskError::EmptyText(task.id.clone()))?;
        if !seen.insert(task.id.clone()) {
            return Err(TaskError::DuplicateId(task.id.clone()));
        }
    }
    Ok(())
}
