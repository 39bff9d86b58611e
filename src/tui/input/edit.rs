use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::intent::Intent;
use crate::tui::app::App;
use crate::util::unicode;

/// Key map while the add/edit form is open. Every change to the text is
/// forwarded to the store as an UpdateDraft intent; the caret stays here.
pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => {
            app.dispatch(Intent::CancelForm);
        }
        KeyCode::Enter => {
            app.dispatch(Intent::Commit);
        }

        KeyCode::Left if ctrl => {
            app.caret = unicode::word_left(app.store.draft(), app.caret);
        }
        KeyCode::Right if ctrl => {
            app.caret = unicode::word_right(app.store.draft(), app.caret);
        }
        KeyCode::Left => {
            if let Some(pos) = unicode::prev_boundary(app.store.draft(), app.caret) {
                app.caret = pos;
            }
        }
        KeyCode::Right => {
            if let Some(pos) = unicode::next_boundary(app.store.draft(), app.caret) {
                app.caret = pos;
            }
        }
        KeyCode::Home => app.caret = 0,
        KeyCode::End => app.caret = app.store.draft().len(),
        KeyCode::Char('a') if ctrl => app.caret = 0,
        KeyCode::Char('e') if ctrl => app.caret = app.store.draft().len(),

        KeyCode::Char('u') if ctrl => {
            app.caret = 0;
            app.dispatch(Intent::UpdateDraft {
                text: String::new(),
            });
        }
        KeyCode::Backspace => backspace(app),
        KeyCode::Delete => delete_forward(app),
        KeyCode::Char(c) if !ctrl => {
            let mut buf = [0u8; 4];
            insert_str(app, c.encode_utf8(&mut buf));
        }
        _ => {}
    }
}

/// Insert text at the caret
pub(super) fn insert_str(app: &mut App, text: &str) {
    let mut draft = app.store.draft().to_string();
    draft.insert_str(app.caret, text);
    app.caret += text.len();
    app.dispatch(Intent::UpdateDraft { text: draft });
}

fn backspace(app: &mut App) {
    let draft = app.store.draft();
    let Some(start) = unicode::prev_boundary(draft, app.caret) else {
        return;
    };
    let mut next = draft.to_string();
    next.replace_range(start..app.caret, "");
    app.caret = start;
    app.dispatch(Intent::UpdateDraft { text: next });
}

fn delete_forward(app: &mut App) {
    let draft = app.store.draft();
    let Some(end) = unicode::next_boundary(draft, app.caret) else {
        return;
    };
    let mut next = draft.to_string();
    next.replace_range(app.caret..end, "");
    app.dispatch(Intent::UpdateDraft { text: next });
}
