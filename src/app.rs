//! The viewing session: document, cursor and viewport behind a single writer.
//!
//! One input or resize event is applied here, fully, before the next one is
//! read; nothing else mutates the triple.

use ratatui::text::Text;

use crate::cursor::Cursor;
use crate::document::Document;
use crate::input::Action;
use crate::render;
use crate::theme::Theme;
use crate::viewport::Viewport;

/// One viewing session over a single document.
pub struct App {
    document: Document,
    cursor: Cursor,
    /// Sized on the first resize event; `None` until then.
    viewport: Option<Viewport>,
    theme: Theme,
    /// Dot-path the descend action queries.
    query_path: String,
    should_quit: bool,
}

impl App {
    pub fn new(document: Document, theme: Theme, query_path: impl Into<String>) -> Self {
        Self {
            document,
            cursor: Cursor::new(),
            viewport: None,
            theme,
            query_path: query_path.into(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// Apply a terminal size. The first call sizes the viewport with the
    /// view at the top; later calls renormalize the scroll offset.
    pub fn resize(&mut self, width: u16, height: u16) {
        let (width, height) = (width as usize, height as usize);
        match self.viewport.as_mut() {
            None => self.viewport = Some(Viewport::new(width, height)),
            Some(vp) => {
                vp.resize(width, height, self.cursor.row, self.document.line_count());
                tracing::debug!(offset = vp.offset, width, height, "viewport resized");
            }
        }
        self.cursor.move_to_row(self.cursor.row, self.document.lines());
    }

    /// Apply one input action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::CursorUp => self.move_cursor(-1),
            Action::CursorDown => self.move_cursor(1),
            Action::HalfPageUp => self.move_cursor(-self.half_page()),
            Action::HalfPageDown => self.move_cursor(self.half_page()),
            Action::ScrollLeft => {
                if let Some(vp) = self.viewport.as_mut() {
                    vp.scroll_left(1);
                }
            }
            Action::ScrollRight => {
                if let Some(vp) = self.viewport.as_mut() {
                    vp.scroll_right(1);
                }
            }
            Action::Descend => self.descend(),
        }
    }

    /// Compose the frame for the current state. Empty until the first
    /// resize has sized the viewport.
    pub fn frame(&self) -> Text<'static> {
        match &self.viewport {
            Some(vp) => render::render_frame(&self.document, &self.cursor, vp, &self.theme),
            None => Text::default(),
        }
    }

    fn move_cursor(&mut self, d_row: isize) {
        self.cursor.move_by(d_row, 0, self.document.lines());
        if let Some(vp) = self.viewport.as_mut() {
            vp.ensure_cursor_visible(self.cursor.row);
        }
    }

    /// Half of the visible window, in rows.
    fn half_page(&self) -> isize {
        let height = self.viewport.map(|vp| vp.height).unwrap_or(0);
        (self.document.line_count().min(height) / 2) as isize
    }

    /// Replace the document with the subtree at the configured path and
    /// return to the top. A failed lookup leaves the document untouched.
    fn descend(&mut self) {
        match self.document.query_field(&self.query_path) {
            Ok(node) => {
                let node = node.clone();
                self.document.replace_root(node);
                self.cursor = Cursor::new();
                if let Some(vp) = self.viewport.as_mut() {
                    vp.offset = 0;
                }
                tracing::info!(path = %self.query_path, "descended into field");
            }
            Err(err) => {
                tracing::warn!(path = %self.query_path, %err, "field query failed");
            }
        }
    }
}
