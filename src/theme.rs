//! Color theme for the viewer.
//!
//! Built once at startup and handed read-only to the renderer; there is no
//! process-wide styling state.

use ratatui::style::{Color, Modifier, Style};

use crate::highlight::TokenKind;

/// The named styles the renderer draws with.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Object keys.
    pub key: Style,
    /// String values.
    pub string: Style,
    /// Numeric values.
    pub number: Style,
    /// `true` / `false` / `null`.
    pub literal: Style,
    /// The cursor glyph. Applied instead of the token style so the cursor
    /// stays visible through the coloring pass.
    pub cursor: Style,
    /// Line number prefixes.
    pub line_number: Style,
}

impl Theme {
    /// Default dark theme.
    pub fn dark() -> Self {
        Self {
            key: Style::default().fg(Color::Rgb(0x7a, 0xa2, 0xf7)),
            string: Style::default().fg(Color::Rgb(0x9e, 0xce, 0x6a)),
            number: Style::default().fg(Color::Rgb(0xff, 0x9e, 0x64)),
            literal: Style::default().fg(Color::Rgb(0xbb, 0x9a, 0xf7)),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            line_number: Style::default(),
        }
    }

    /// The style for a token kind.
    pub fn token_style(&self, kind: TokenKind) -> Style {
        match kind {
            TokenKind::Key => self.key,
            TokenKind::Str => self.string,
            TokenKind::Number => self.number,
            TokenKind::Literal => self.literal,
            TokenKind::Plain => Style::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
