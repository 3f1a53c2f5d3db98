//! Frame composition: viewport slice, highlighting, cursor overlay and
//! relative line numbers.

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};

use crate::cursor::Cursor;
use crate::document::Document;
use crate::highlight::tokenize;
use crate::theme::Theme;
use crate::viewport::Viewport;

/// Compose the frame for the current document, cursor and viewport.
///
/// The cursor row carries its absolute 1-based line number; every other
/// visible row is numbered by its distance from the cursor row, vim-style.
pub fn render_frame(
    doc: &Document,
    cursor: &Cursor,
    viewport: &Viewport,
    theme: &Theme,
) -> Text<'static> {
    let lines = doc.lines();
    let end = (viewport.offset + viewport.height).min(lines.len());
    let mut rows = Vec::with_capacity(end.saturating_sub(viewport.offset));

    for row in viewport.offset..end {
        // Horizontal scroll is a character slice applied before tokenizing.
        let visible: String = lines[row].chars().skip(viewport.x_offset).collect();
        let mut spans = styled_spans(&visible, theme);

        let number = if row == cursor.row {
            // Cursor scrolled off the left edge is simply not overlaid.
            if let Some(col) = cursor.col.checked_sub(viewport.x_offset) {
                spans = overlay_cursor(spans, col, theme.cursor);
            }
            absolute_number(cursor.row)
        } else {
            relative_number(cursor.row.abs_diff(row))
        };

        rows.push(prefixed(number, spans, theme));
    }

    Text::from(rows)
}

/// Tokenize and style one visible line.
fn styled_spans(line: &str, theme: &Theme) -> Vec<Span<'static>> {
    tokenize(line)
        .into_iter()
        .map(|t| Span::styled(t.text.to_string(), theme.token_style(t.kind)))
        .collect()
}

/// Render the single character at `col` with the cursor style, keeping token
/// styling on either side. At one-past-end the cursor is a styled space.
fn overlay_cursor(
    spans: Vec<Span<'static>>,
    col: usize,
    cursor_style: Style,
) -> Vec<Span<'static>> {
    let mut out = Vec::with_capacity(spans.len() + 2);
    let mut seen = 0usize;
    let mut placed = false;

    for span in spans {
        let len = span.content.chars().count();
        if placed || col >= seen + len {
            seen += len;
            out.push(span);
            continue;
        }

        // The cursor falls inside this span: split around that character.
        let text: &str = &span.content;
        let start = text
            .char_indices()
            .nth(col - seen)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        let ch_len = text[start..].chars().next().map(char::len_utf8).unwrap_or(0);

        if start > 0 {
            out.push(Span::styled(text[..start].to_string(), span.style));
        }
        out.push(Span::styled(
            text[start..start + ch_len].to_string(),
            cursor_style,
        ));
        if start + ch_len < text.len() {
            out.push(Span::styled(text[start + ch_len..].to_string(), span.style));
        }

        seen += len;
        placed = true;
    }

    if !placed {
        // One-past-end, or an empty line.
        out.push(Span::styled(" ".to_string(), cursor_style));
    }
    out
}

/// `%4s` plus three spaces, as the cursor row's gutter.
fn absolute_number(row: usize) -> String {
    format!("{:>4}   ", row + 1)
}

/// `%5s` plus two spaces, aligning with the cursor row's gutter.
fn relative_number(distance: usize) -> String {
    format!("{:>5}  ", distance)
}

fn prefixed(number: String, spans: Vec<Span<'static>>, theme: &Theme) -> Line<'static> {
    let mut all = Vec::with_capacity(spans.len() + 1);
    all.push(Span::styled(number, theme.line_number));
    all.extend(spans);
    Line::from(all)
}
