mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

use edit::*;
use navigate::*;

/// Handle a key event. The open form (if any) decides which key map applies.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts everything; any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    if app.store.input_visible() {
        handle_form(app, key);
    } else {
        handle_list(app, key);
    }
}

/// Handle a bracketed paste event. Only the open form takes pasted text;
/// newlines collapse to spaces since the draft is a single line.
pub fn handle_paste(app: &mut App, text: &str) {
    if !app.store.input_visible() || text.is_empty() {
        return;
    }
    let clean = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
    insert_str(app, &clean);
}
