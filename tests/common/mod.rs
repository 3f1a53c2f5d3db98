//! Shared test harness: drives the viewer against an in-memory terminal.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;

use jsonlens::app::App;
use jsonlens::document::Document;
use jsonlens::input::action_for_key;
use jsonlens::theme::Theme;

pub struct ViewerTestHarness {
    pub app: App,
    terminal: Terminal<TestBackend>,
}

impl ViewerTestHarness {
    /// Viewer over `json` with a `width` x `height` terminal and the
    /// default descend path.
    pub fn new(json: &str, width: u16, height: u16) -> Result<Self> {
        Self::with_query(json, width, height, "merchant")
    }

    pub fn with_query(json: &str, width: u16, height: u16, query: &str) -> Result<Self> {
        let document = Document::parse(json)?;
        let mut app = App::new(document, Theme::dark(), query);
        app.resize(width, height);
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self { app, terminal })
    }

    /// Feed one key press through the real key map.
    pub fn send_key(&mut self, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        if let Some(action) = action_for_key(&key) {
            self.app.apply(action);
        }
    }

    /// Apply a window resize to both the fake terminal and the app.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal.backend_mut().resize(width, height);
        self.app.resize(width, height);
    }

    /// Draw the current frame to the test terminal.
    pub fn render(&mut self) -> Result<()> {
        let frame = self.app.frame();
        self.terminal
            .draw(|f| f.render_widget(Paragraph::new(frame), f.area()))?;
        Ok(())
    }

    /// The visible screen as one string, one row per line, trailing blanks
    /// trimmed.
    pub fn screen_to_string(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let mut rows = Vec::with_capacity(area.height as usize);
        for y in 0..area.height {
            let mut row = String::new();
            for x in 0..area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    row.push_str(cell.symbol());
                }
            }
            rows.push(row.trim_end().to_string());
        }
        rows.join("\n")
    }

    pub fn assert_screen_contains(&self, needle: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(needle),
            "expected screen to contain {:?}. Screen:\n{}",
            needle,
            screen
        );
    }
}
