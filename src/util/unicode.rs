//! Grapheme and terminal-width helpers for the single-line draft editor.
//!
//! Offsets are byte offsets into the draft and always sit on grapheme
//! boundaries, so slicing with them never panics.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cells occupied by `s[..offset]`, i.e. the caret column
pub fn caret_col(s: &str, offset: usize) -> usize {
    display_width(&s[..offset.min(s.len())])
}

/// Cut `s` to at most `max_cells`, ending with `…` when something was dropped
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w > max_cells - 1 {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Boundary of the grapheme after the one at `offset`, or None at the end
pub fn next_boundary(s: &str, offset: usize) -> Option<usize> {
    let g = s.get(offset..)?.graphemes(true).next()?;
    Some(offset + g.len())
}

/// Start of the grapheme ending at `offset`, or None at the start
pub fn prev_boundary(s: &str, offset: usize) -> Option<usize> {
    let g = s.get(..offset)?.graphemes(true).next_back()?;
    Some(offset - g.len())
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

/// Start of the word left of `offset` (whitespace-delimited)
pub fn word_left(s: &str, offset: usize) -> usize {
    let mut pos = offset.min(s.len());
    let mut seen_word = false;
    for (i, g) in s[..pos].grapheme_indices(true).rev() {
        if is_blank(g) {
            if seen_word {
                break;
            }
        } else {
            seen_word = true;
        }
        pos = i;
    }
    pos
}

/// Start of the next word right of `offset`, or the end of `s`
pub fn word_right(s: &str, offset: usize) -> usize {
    let start = offset.min(s.len());
    let mut left_word = false;
    for (i, g) in s[start..].grapheme_indices(true) {
        if is_blank(g) {
            left_word = true;
        } else if left_word {
            return start + i;
        }
    }
    s.len()
}
