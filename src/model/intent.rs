use serde::{Deserialize, Serialize};

use super::task::TaskId;

/// A user intent forwarded by a presentation layer to the store.
///
/// Serialized as a JSON object tagged by `op`, e.g.
/// `{"op":"update_draft","text":"Buy milk"}` or `{"op":"toggle_complete","id":"3"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Intent {
    ShowAddForm,
    ShowEditForm { id: TaskId },
    UpdateDraft { text: String },
    CommitAdd,
    CommitEdit,
    /// The Save/Add button: edit when a task is being edited, add otherwise
    Commit,
    ToggleComplete { id: TaskId },
    DeleteTask { id: TaskId },
    CancelForm,
}

impl Intent {
    /// The `op` tag as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Intent::ShowAddForm => "show_add_form",
            Intent::ShowEditForm { .. } => "show_edit_form",
            Intent::UpdateDraft { .. } => "update_draft",
            Intent::CommitAdd => "commit_add",
            Intent::CommitEdit => "commit_edit",
            Intent::Commit => "commit",
            Intent::ToggleComplete { .. } => "toggle_complete",
            Intent::DeleteTask { .. } => "delete_task",
            Intent::CancelForm => "cancel_form",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_unit_intent() {
        let intent: Intent = serde_json::from_str(r#"{"op":"commit_add"}"#).unwrap();
        assert_eq!(intent, Intent::CommitAdd);
    }

    #[test]
    fn parse_intent_with_fields() {
        let intent: Intent =
            serde_json::from_str(r#"{"op":"update_draft","text":"  Buy milk "}"#).unwrap();
        assert_eq!(
            intent,
            Intent::UpdateDraft {
                text: "  Buy milk ".into()
            }
        );

        let intent: Intent = serde_json::from_str(r#"{"op":"delete_task","id":"2"}"#).unwrap();
        assert_eq!(intent, Intent::DeleteTask { id: "2".into() });
    }

    #[test]
    fn unknown_op_is_rejected() {
        assert!(serde_json::from_str::<Intent>(r#"{"op":"reorder"}"#).is_err());
    }

    #[test]
    fn name_matches_wire_tag() {
        let intent = Intent::ToggleComplete { id: "1".into() };
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["op"], intent.name());
    }
}
