use crossterm::event::{KeyCode, KeyEvent};

use crate::model::intent::Intent;
use crate::tui::app::App;

/// Key map while no form is open
pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Home | KeyCode::Char('g') => app.selected = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.selected = app.store.len().saturating_sub(1);
        }

        KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Char('+') => {
            app.dispatch(Intent::ShowAddForm);
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(id) = selected_id(app) {
                app.dispatch(Intent::ToggleComplete { id });
            }
        }
        KeyCode::Char('e') => {
            if let Some(id) = selected_id(app) {
                app.dispatch(Intent::ShowEditForm { id });
            }
        }
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(id) = selected_id(app) {
                app.dispatch(Intent::DeleteTask { id });
            }
        }
        _ => {}
    }
}

fn selected_id(app: &App) -> Option<crate::model::task::TaskId> {
    app.selected_task().map(|t| t.id.clone())
}
