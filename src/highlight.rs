//! Line tokenizer: classifies one rendered line into highlightable spans.
//!
//! Pure and stateless: the same line always yields the same tokens, and the
//! tokens concatenate back to exactly the input. Classification is purely
//! textual, so it also works on lines sliced for horizontal scrolling.

/// Classification of a token within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An object key (the part before a top-level colon).
    Key,
    /// A string value.
    Str,
    /// A numeric value.
    Number,
    /// A bare `true`, `false` or `null`.
    Literal,
    /// Anything else: punctuation, brackets, indentation.
    Plain,
}

/// A classified substring of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

/// Split one line into an ordered sequence of classified tokens.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    if line.is_empty() {
        return Vec::new();
    }
    if let Some(colon) = top_level_colon(line) {
        let key = &line[..colon];
        let rest = &line[colon..];
        // The colon plus the whitespace after it separate key from value.
        let value_start = rest[1..]
            .find(|c: char| !c.is_whitespace())
            .map(|i| i + 1)
            .unwrap_or(rest.len());
        let (sep, value) = rest.split_at(value_start);

        let mut tokens = vec![
            Token::new(TokenKind::Key, key),
            Token::new(TokenKind::Plain, sep),
        ];
        if !value.is_empty() {
            tokens.push(Token::new(classify_value(value), value));
        }
        return tokens;
    }
    if line.contains('"') {
        return vec![Token::new(TokenKind::Str, line)];
    }
    vec![Token::new(classify_bare(line), line)]
}

fn classify_value(value: &str) -> TokenKind {
    if value.starts_with('"') {
        TokenKind::Str
    } else if is_numeric(value) {
        TokenKind::Number
    } else if is_literal(value) {
        TokenKind::Literal
    } else {
        TokenKind::Plain
    }
}

fn classify_bare(line: &str) -> TokenKind {
    if is_numeric(line) {
        TokenKind::Number
    } else if is_literal(line) {
        TokenKind::Literal
    } else {
        TokenKind::Plain
    }
}

/// Byte index of the first colon outside any double-quoted region, honoring
/// backslash escapes. `None` when every colon sits inside a string, as in an
/// array element holding a timestamp.
fn top_level_colon(line: &str) -> Option<usize> {
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            ':' if !in_string => return Some(i),
            _ => {}
        }
    }
    None
}

/// Numeric test used for highlighting: trim, strip one trailing comma, trim,
/// then accept anything the float parser accepts. Deliberately looser than
/// the JSON number grammar (exponents, leading zeros and signs all pass).
pub fn is_numeric(s: &str) -> bool {
    let s = normalize_value(s);
    !s.is_empty() && s.parse::<f64>().is_ok()
}

/// True for a bare boolean or null, normalized like `is_numeric`.
pub fn is_literal(s: &str) -> bool {
    matches!(normalize_value(s), "true" | "false" | "null")
}

fn normalize_value(s: &str) -> &str {
    let s = s.trim();
    let s = s.strip_suffix(',').unwrap_or(s);
    s.trim()
}
