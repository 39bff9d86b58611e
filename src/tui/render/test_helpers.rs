use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::config::{Config, IdConfig, IdStyle};
use crate::model::store::TaskListStore;
use crate::model::task::Task;
use crate::tui::app::App;
use crate::tui::input::handle_key;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Config with counter ids so tasks are "1", "2", ...
pub fn test_config() -> Config {
    Config {
        ids: IdConfig {
            style: IdStyle::Counter,
        },
        ..Default::default()
    }
}

/// Build an App whose list holds `texts`, with ids "1".."n"
pub fn app_with_tasks(texts: &[&str]) -> App {
    let tasks = texts
        .iter()
        .enumerate()
        .map(|(i, text)| Task::new((i + 1).to_string(), *text))
        .collect();
    let store = TaskListStore::with_tasks(IdStyle::Counter, tasks).unwrap();
    App::with_store(store, &test_config())
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn press_ctrl(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::CONTROL));
}

/// Type each character as a separate key press
pub fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}
