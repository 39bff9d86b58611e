//! The task list state machine.
//!
//! [`TaskListStore`] owns the task list, the shared draft text, the editing
//! cursor and the input-visibility flag. Every operation is total: invalid
//! targets and blank drafts leave the store untouched. Operations return
//! whether anything changed so callers can skip a redraw, but nothing
//! depends on that.

use serde::Serialize;

use super::config::IdStyle;
use super::intent::Intent;
use super::task::{Task, TaskId};
use crate::ops::ids::IdGenerator;
use crate::ops::task_ops::{self, TaskError};

/// Which form, if any, is open
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Adding,
    Editing(TaskId),
}

/// Owned copy of everything a presentation layer renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub draft: String,
    pub editing: Option<TaskId>,
    pub input_visible: bool,
    pub phase: Phase,
}

#[derive(Debug, Clone, Default)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    draft: String,
    /// Always names a task in `tasks` when set
    editing: Option<TaskId>,
    input_visible: bool,
    ids: IdGenerator,
}

impl TaskListStore {
    pub fn new(style: IdStyle) -> Self {
        TaskListStore {
            ids: IdGenerator::new(style),
            ..Default::default()
        }
    }

    /// Build a store around an existing list. Text is trimmed; blank text or
    /// repeated ids are rejected.
    pub fn with_tasks(style: IdStyle, mut tasks: Vec<Task>) -> Result<Self, TaskError> {
        task_ops::validate_tasks(&mut tasks)?;
        let mut ids = IdGenerator::new(style);
        for task in &tasks {
            ids.observe(&task.id);
        }
        Ok(TaskListStore {
            tasks,
            ids,
            ..Default::default()
        })
    }

    // --- Accessors ---

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn editing(&self) -> Option<&TaskId> {
        self.editing.as_ref()
    }

    pub fn input_visible(&self) -> bool {
        self.input_visible
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        task_ops::find_task(&self.tasks, id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn phase(&self) -> Phase {
        match (&self.editing, self.input_visible) {
            (Some(id), _) => Phase::Editing(id.clone()),
            (None, true) => Phase::Adding,
            (None, false) => Phase::Idle,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            draft: self.draft.clone(),
            editing: self.editing.clone(),
            input_visible: self.input_visible,
            phase: self.phase(),
        }
    }

    // --- Forms ---

    /// Open the input for a new task. The draft is left as is.
    pub fn show_add_form(&mut self) -> bool {
        let changed = !self.input_visible || self.editing.is_some();
        self.input_visible = true;
        self.editing = None;
        changed
    }

    /// Open the input on an existing task, seeding the draft with its text
    pub fn show_edit_form(&mut self, id: &TaskId) -> bool {
        let Some(task) = task_ops::find_task(&self.tasks, id) else {
            return false;
        };
        self.draft = task.text.clone();
        self.editing = Some(id.clone());
        self.input_visible = true;
        true
    }

    pub fn update_draft(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.draft == text {
            return false;
        }
        self.draft = text;
        true
    }

    /// Close the input and drop whatever was typed
    pub fn cancel_form(&mut self) -> bool {
        let changed = self.input_visible || self.editing.is_some() || !self.draft.is_empty();
        self.close_form();
        changed
    }

    // --- Commits ---

    /// Append the draft as a new task. Ignored while the draft is blank.
    pub fn commit_add(&mut self) -> bool {
        let Some(text) = task_ops::normalize_text(&self.draft) else {
            return false;
        };
        let id = self.ids.next_id(&self.tasks);
        tracing::debug!(id = %id, "task added");
        self.tasks.push(Task::new(id, text));
        self.close_form();
        true
    }

    /// Replace the edited task's text with the draft. Ignored while the draft
    /// is blank or nothing is being edited.
    pub fn commit_edit(&mut self) -> bool {
        let Some(text) = task_ops::normalize_text(&self.draft) else {
            return false;
        };
        let Some(id) = self.editing.clone() else {
            return false;
        };
        if !task_ops::set_text(&mut self.tasks, &id, text) {
            return false;
        }
        tracing::debug!(id = %id, "task edited");
        self.close_form();
        true
    }

    /// Save/Add button: edit when a task is being edited, add otherwise
    pub fn commit(&mut self) -> bool {
        if self.editing.is_some() {
            self.commit_edit()
        } else {
            self.commit_add()
        }
    }

    // --- Task actions ---

    pub fn toggle_complete(&mut self, id: &TaskId) -> bool {
        task_ops::toggle_completed(&mut self.tasks, id)
    }

    /// Remove a task. Deleting the task under edit closes the form as well.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        if task_ops::remove_task(&mut self.tasks, id).is_none() {
            return false;
        }
        if self.editing.as_ref() == Some(id) {
            tracing::debug!(id = %id, "deleted task under edit, closing form");
            self.close_form();
        }
        true
    }

    /// Dispatch an intent to the matching operation
    pub fn apply(&mut self, intent: &Intent) -> bool {
        let changed = match intent {
            Intent::ShowAddForm => self.show_add_form(),
            Intent::ShowEditForm { id } => self.show_edit_form(id),
            Intent::UpdateDraft { text } => self.update_draft(text.as_str()),
            Intent::CommitAdd => self.commit_add(),
            Intent::CommitEdit => self.commit_edit(),
            Intent::Commit => self.commit(),
            Intent::ToggleComplete { id } => self.toggle_complete(id),
            Intent::DeleteTask { id } => self.delete_task(id),
            Intent::CancelForm => self.cancel_form(),
        };
        if changed {
            tracing::debug!(op = intent.name(), tasks = self.tasks.len(), "intent applied");
        } else {
            tracing::trace!(op = intent.name(), "intent ignored");
        }
        changed
    }

    fn close_form(&mut self) {
        self.draft.clear();
        self.editing = None;
        self.input_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(tasks: &[(&str, &str)]) -> TaskListStore {
        let tasks = tasks.iter().map(|(id, text)| Task::new(*id, *text)).collect();
        TaskListStore::with_tasks(IdStyle::Counter, tasks).unwrap()
    }

    fn id(s: &str) -> TaskId {
        TaskId::from(s)
    }

    #[test]
    fn starts_idle_and_empty() {
        let store = TaskListStore::new(IdStyle::Counter);
        assert!(store.is_empty());
        assert_eq!(store.draft(), "");
        assert_eq!(store.editing(), None);
        assert!(!store.input_visible());
        assert_eq!(store.phase(), Phase::Idle);
    }

    #[test]
    fn add_flow() {
        let mut store = TaskListStore::new(IdStyle::Counter);
        assert!(store.show_add_form());
        assert_eq!(store.phase(), Phase::Adding);
        store.update_draft("Buy milk");
        assert!(store.commit_add());

        assert_eq!(store.tasks(), &[Task::new("1", "Buy milk")]);
        assert!(!store.input_visible());
        assert_eq!(store.draft(), "");
        assert_eq!(store.phase(), Phase::Idle);
    }

    #[test]
    fn add_trims_draft() {
        let mut store = TaskListStore::new(IdStyle::Counter);
        store.show_add_form();
        store.update_draft("   Walk dog \t");
        store.commit_add();
        assert_eq!(store.tasks()[0].text, "Walk dog");
    }

    #[test]
    fn blank_draft_is_ignored() {
        for blank in ["", " ", "\t\n", "    "] {
            let mut store = store_with(&[("1", "A")]);
            store.show_add_form();
            store.update_draft(blank);
            assert!(!store.commit_add());
            assert_eq!(store.len(), 1);
            // Form stays open so the user can keep typing
            assert!(store.input_visible());
        }
    }

    #[test]
    fn add_form_keeps_draft() {
        let mut store = TaskListStore::new(IdStyle::Counter);
        store.update_draft("typed early");
        store.show_add_form();
        assert_eq!(store.draft(), "typed early");
    }

    #[test]
    fn add_form_drops_editing_cursor() {
        let mut store = store_with(&[("1", "A")]);
        store.show_edit_form(&id("1"));
        assert!(store.show_add_form());
        assert_eq!(store.editing(), None);
        assert_eq!(store.phase(), Phase::Adding);
    }

    #[test]
    fn edit_form_seeds_draft() {
        let mut store = store_with(&[("1", "A"), ("2", "B")]);
        assert!(store.show_edit_form(&id("2")));
        assert_eq!(store.draft(), "B");
        assert_eq!(store.editing(), Some(&id("2")));
        assert!(store.input_visible());
        assert_eq!(store.phase(), Phase::Editing(id("2")));
    }

    #[test]
    fn edit_form_on_missing_id_is_noop() {
        let mut store = store_with(&[("1", "A")]);
        store.update_draft("half typed");
        assert!(!store.show_edit_form(&id("9")));
        assert_eq!(store.draft(), "half typed");
        assert_eq!(store.editing(), None);
        assert!(!store.input_visible());
    }

    #[test]
    fn edit_flow_changes_only_text() {
        let mut store = store_with(&[("1", "A"), ("2", "B")]);
        store.toggle_complete(&id("2"));
        store.show_edit_form(&id("2"));
        store.update_draft("  Bee  ");
        assert!(store.commit_edit());

        assert_eq!(store.tasks()[0], Task::new("1", "A"));
        assert_eq!(
            store.tasks()[1],
            Task {
                id: id("2"),
                text: "Bee".into(),
                completed: true,
            }
        );
        assert_eq!(store.editing(), None);
        assert_eq!(store.draft(), "");
        assert!(!store.input_visible());
    }

    #[test]
    fn commit_edit_needs_cursor_and_text() {
        let mut store = store_with(&[("1", "A")]);
        store.update_draft("text");
        assert!(!store.commit_edit());

        store.show_edit_form(&id("1"));
        store.update_draft("  ");
        assert!(!store.commit_edit());
        assert_eq!(store.tasks()[0].text, "A");
        assert_eq!(store.editing(), Some(&id("1")));
    }

    #[test]
    fn commit_routes_on_cursor() {
        let mut store = store_with(&[("1", "A")]);
        store.show_edit_form(&id("1"));
        store.update_draft("A2");
        assert!(store.commit());
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].text, "A2");

        store.show_add_form();
        store.update_draft("B");
        assert!(store.commit());
        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[1].text, "B");
    }

    #[test]
    fn toggle_scenario() {
        let mut store = store_with(&[("1", "A")]);
        assert!(store.toggle_complete(&id("1")));
        assert_eq!(
            store.tasks(),
            &[Task {
                id: id("1"),
                text: "A".into(),
                completed: true,
            }]
        );
        assert!(!store.toggle_complete(&id("nope")));
    }

    #[test]
    fn delete_scenario() {
        let mut store = store_with(&[("1", "A"), ("2", "B")]);
        assert!(store.delete_task(&id("1")));
        assert_eq!(store.tasks(), &[Task::new("2", "B")]);
        assert!(!store.delete_task(&id("1")));
    }

    #[test]
    fn deleting_task_under_edit_closes_form() {
        let mut store = store_with(&[("1", "A"), ("2", "B")]);
        store.show_edit_form(&id("1"));
        store.update_draft("changed");
        store.delete_task(&id("1"));

        assert_eq!(store.editing(), None);
        assert_eq!(store.draft(), "");
        assert!(!store.input_visible());
        assert_eq!(store.phase(), Phase::Idle);
    }

    #[test]
    fn deleting_other_task_keeps_form() {
        let mut store = store_with(&[("1", "A"), ("2", "B")]);
        store.show_edit_form(&id("1"));
        store.update_draft("changed");
        store.delete_task(&id("2"));

        assert_eq!(store.editing(), Some(&id("1")));
        assert_eq!(store.draft(), "changed");
        assert!(store.input_visible());
    }

    #[test]
    fn cancel_resets_form() {
        let mut store = store_with(&[("1", "A")]);
        store.show_edit_form(&id("1"));
        store.update_draft("discard me");
        assert!(store.cancel_form());
        assert_eq!(store.tasks()[0].text, "A");
        assert_eq!(store.draft(), "");
        assert_eq!(store.editing(), None);
        assert!(!store.input_visible());

        assert!(!store.cancel_form());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = TaskListStore::new(IdStyle::Counter);
        for text in ["A", "B"] {
            store.update_draft(text);
            store.commit_add();
        }
        let last = store.tasks()[1].id.clone();
        store.delete_task(&last);
        store.update_draft("C");
        store.commit_add();
        assert_eq!(store.tasks()[1].id, id("3"));
    }

    #[test]
    fn seeded_ids_are_skipped() {
        let mut store = store_with(&[("1", "A"), ("5", "B")]);
        store.update_draft("C");
        store.commit_add();
        assert_eq!(store.tasks()[2].id, id("6"));
    }

    #[test]
    fn largest_seeded_id_does_not_overflow() {
        let max = i64::MAX.to_string();
        let mut store = store_with(&[(max.as_str(), "max")]);
        store.update_draft("next");
        assert!(store.commit_add());
        assert_eq!(store.tasks()[1].id, id(&format!("{}-1", max)));

        store.delete_task(&id(&max));
        store.update_draft("again");
        assert!(store.commit_add());
        let issued: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(issued, vec![format!("{}-1", max), format!("{}-2", max)]);
    }

    #[test]
    fn largest_seeded_id_is_not_reissued_after_delete() {
        let max = i64::MAX.to_string();
        let mut store = store_with(&[(max.as_str(), "max")]);
        assert!(store.delete_task(&id(&max)));
        store.update_draft("next");
        assert!(store.commit_add());
        assert_ne!(store.tasks()[0].id, id(&max));
    }

    #[test]
    fn apply_dispatches_intents() {
        let mut store = TaskListStore::new(IdStyle::Counter);
        let script = [
            Intent::ShowAddForm,
            Intent::UpdateDraft {
                text: "Buy milk".into(),
            },
            Intent::Commit,
            Intent::ToggleComplete { id: id("1") },
        ];
        for intent in &script {
            assert!(store.apply(intent));
        }
        assert!(!store.apply(&Intent::DeleteTask { id: id("2") }));
        assert!(store.tasks()[0].completed);
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut store = store_with(&[("1", "A")]);
        store.show_edit_form(&id("1"));
        let snap = store.snapshot();
        assert_eq!(snap.tasks, store.tasks());
        assert_eq!(snap.draft, "A");
        assert_eq!(snap.editing, Some(id("1")));
        assert!(snap.input_visible);
        assert_eq!(snap.phase, Phase::Editing(id("1")));
    }

    #[test]
    fn snapshot_serializes_phase() {
        let store = store_with(&[("1", "A")]);
        let json = serde_json::to_value(store.snapshot()).unwrap();
        assert_eq!(json["phase"], "idle");
        assert_eq!(json["input_visible"], false);
        assert_eq!(json["tasks"][0]["id"], "1");

        let mut store = store;
        store.show_edit_form(&id("1"));
        let json = serde_json::to_value(store.snapshot()).unwrap();
        assert_eq!(json["phase"]["editing"], "1");
    }
}
