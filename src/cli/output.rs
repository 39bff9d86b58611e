use crate::model::store::{Phase, Snapshot};
use crate::model::task::Task;

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as a one-line summary
pub fn format_task_line(task: &Task) -> String {
    format!("{} {}  {}", task.checkbox(), task.id, task.text)
}

/// Describe the open form, if any
pub fn format_phase(snapshot: &Snapshot) -> Option<String> {
    match &snapshot.phase {
        Phase::Idle => None,
        Phase::Adding => Some(format!("adding: {:?}", snapshot.draft)),
        Phase::Editing(id) => Some(format!("editing {}: {:?}", id, snapshot.draft)),
    }
}

/// Full text listing: tasks, then the form line, then a count footer
pub fn format_snapshot(snapshot: &Snapshot) -> Vec<String> {
    let mut lines: Vec<String> = if snapshot.tasks.is_empty() {
        vec!["(no tasks)".to_string()]
    } else {
        snapshot.tasks.iter().map(format_task_line).collect()
    };
    if let Some(form) = format_phase(snapshot) {
        lines.push(String::new());
        lines.push(form);
    }
    let done = snapshot.tasks.iter().filter(|t| t.completed).count();
    lines.push(String::new());
    lines.push(format!("{} tasks, {} done", snapshot.tasks.len(), done));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::IdStyle;
    use crate::model::store::TaskListStore;
    use pretty_assertions::assert_eq;

    fn store() -> TaskListStore {
        let mut a = Task::new("1", "Buy milk");
        a.completed = true;
        TaskListStore::with_tasks(IdStyle::Counter, vec![a, Task::new("2", "Walk dog")]).unwrap()
    }

    #[test]
    fn task_line() {
        assert_eq!(format_task_line(&Task::new("7", "Call mom")), "[ ] 7  Call mom");
    }

    #[test]
    fn idle_listing() {
        let lines = format_snapshot(&store().snapshot());
        assert_eq!(
            lines,
            vec![
                "[x] 1  Buy milk",
                "[ ] 2  Walk dog",
                "",
                "2 tasks, 1 done",
            ]
        );
    }

    #[test]
    fn editing_listing_shows_form() {
        let mut store = store();
        store.show_edit_form(&"2".into());
        store.update_draft("Walk the dog");
        let lines = format_snapshot(&store.snapshot());
        assert_eq!(lines[3], "editing 2: \"Walk the dog\"");
    }

    #[test]
    fn empty_listing() {
        let store = TaskListStore::new(IdStyle::Counter);
        let lines = format_snapshot(&store.snapshot());
        assert_eq!(lines, vec!["(no tasks)", "", "0 tasks, 0 done"]);
    }
}
