use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::tui::app::App;
use crate::util::unicode;

/// First visible row so that `selected` stays on screen
pub(super) fn scroll_offset(selected: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    selected.saturating_sub(height - 1)
}

/// Render the task list: checkbox, text, strikethrough for completed tasks
pub fn render_task_list(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let tasks = app.store.tasks();

    if tasks.is_empty() {
        let empty = Paragraph::new(" No tasks yet. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    let width = area.width as usize;
    let offset = scroll_offset(app.selected, height);
    let editing = app.store.editing();

    let lines: Vec<Line> = tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, task)| {
            let is_cursor = i == app.selected;
            let is_editing = editing == Some(&task.id);
            task_line(app, task, is_cursor, is_editing, width)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn task_line<'a>(
    app: &App,
    task: &'a Task,
    is_cursor: bool,
    is_editing: bool,
    width: usize,
) -> Line<'a> {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };

    let marker = if is_editing { "\u{270E}" } else { " " };
    let box_color = if task.completed { theme.done } else { theme.dim };
    let mut text_style = Style::default()
        .fg(theme.task_color(task.completed))
        .bg(bg);
    if task.completed {
        text_style = text_style.add_modifier(Modifier::CROSSED_OUT);
    }
    if is_cursor {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    // marker + checkbox + space
    let prefix_width = 5;
    let text = unicode::truncate_to_width(&task.text, width.saturating_sub(prefix_width));
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(theme.highlight).bg(bg)),
        Span::styled(task.checkbox(), Style::default().fg(box_color).bg(bg)),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(text, text_style),
    ];

    // Pad cursor line so the selection spans the full width
    if is_cursor {
        let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        }
    }
    Line::from(spans)
}
