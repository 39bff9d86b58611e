use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::App;
use crate::util::unicode;

/// Byte offset where the visible window of `draft` starts so that the caret
/// column fits in `width` cells
pub(super) fn visible_start(draft: &str, caret: usize, width: usize) -> usize {
    let col = unicode::caret_col(draft, caret);
    if width == 0 || col < width {
        return 0;
    }
    let skip = col + 1 - width;
    let mut dropped = 0;
    for (i, g) in draft.grapheme_indices(true) {
        if dropped >= skip {
            return i;
        }
        dropped += unicode::display_width(g);
    }
    draft.len()
}

/// Render the single-line input used for both adding and editing
pub fn render_input_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.input_bg;
    let title = if app.store.editing().is_some() {
        " Edit task "
    } else {
        " New task "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight).bg(bg))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let draft = app.store.draft();
    let width = inner.width as usize;
    let line = if draft.is_empty() {
        Line::from(Span::styled(
            app.placeholder().to_string(),
            Style::default()
                .fg(theme.dim)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        let start = visible_start(draft, app.caret, width);
        Line::from(Span::styled(
            draft[start..].to_string(),
            Style::default().fg(theme.text_bright).bg(bg),
        ))
    };
    frame.render_widget(Paragraph::new(line), inner);

    if inner.width > 0 && inner.height > 0 {
        let start = visible_start(draft, app.caret, width);
        let col = unicode::caret_col(&draft[start..], app.caret - start) as u16;
        frame.set_cursor_position(Position::new(inner.x + col.min(inner.width - 1), inner.y));
    }
}
