use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::store::Phase;
use crate::tui::app::App;
use crate::util::unicode;

fn key_hints(phase: &Phase) -> &'static str {
    match phase {
        Phase::Idle => "a add  e edit  space toggle  d delete  ? help",
        Phase::Adding | Phase::Editing(_) => "Enter save  Esc cancel",
    }
}

/// Render the status row (bottom of screen): mode, counts, key hints
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let phase = app.store.phase();

    let mode = match phase {
        Phase::Idle => " LIST ",
        Phase::Adding => " ADD ",
        Phase::Editing(_) => " EDIT ",
    };
    let mut spans = vec![
        Span::styled(
            mode,
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " {}/{} done",
                app.store.completed_count(),
                app.store.len()
            ),
            Style::default().fg(app.theme.text).bg(bg),
        ),
    ];

    if app.ui.show_key_hints {
        let hint = key_hints(&phase);
        let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        let hint_width = unicode::display_width(hint);
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
