use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::config::{Config, UiConfig};
use crate::model::intent::Intent;
use crate::model::store::TaskListStore;
use crate::model::task::Task;

use super::input;
use super::render;
use super::theme::Theme;

/// Main application state: the store plus presentation-only bits
pub struct App {
    pub store: TaskListStore,
    /// Row under the list cursor
    pub selected: usize,
    /// Caret byte offset into the draft
    pub caret: usize,
    pub theme: Theme,
    pub ui: UiConfig,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_store(TaskListStore::new(config.ids.style), config)
    }

    pub fn with_store(store: TaskListStore, config: &Config) -> Self {
        App {
            store,
            selected: 0,
            caret: 0,
            theme: Theme::from_config(&config.ui),
            ui: config.ui.clone(),
            show_help: false,
            should_quit: false,
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.selected)
    }

    /// Placeholder for the input bar, depending on whether a task is being edited
    pub fn placeholder(&self) -> &str {
        if self.store.editing().is_some() {
            &self.ui.edit_placeholder
        } else {
            &self.ui.add_placeholder
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.store.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    /// Forward an intent to the store and keep the cursor and caret valid
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let len_before = self.store.len();
        let changed = self.store.apply(&intent);
        if !changed {
            return false;
        }
        match intent {
            Intent::ShowAddForm | Intent::ShowEditForm { .. } => {
                self.caret = self.store.draft().len();
            }
            Intent::CommitAdd | Intent::Commit if self.store.len() > len_before => {
                self.selected = self.store.len() - 1;
            }
            _ => {}
        }
        self.clamp();
        true
    }

    fn clamp(&mut self) {
        let len = self.store.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        let draft = self.store.draft();
        if self.caret > draft.len() || !draft.is_char_boundary(self.caret) {
            self.caret = draft.len();
        }
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app);
    tracing::info!(tasks = app.store.len(), "tui stopped");

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
