//! Document model: the parsed JSON tree and its pretty-printed line view.

use serde_json::Value;
use thiserror::Error;

/// Failure modes of dot-path field lookup.
///
/// Both are recoverable: the caller keeps the current document and surfaces
/// the condition as a diagnostic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The path named a key missing from the object it reached.
    #[error("field '{0}' not found")]
    FieldNotFound(String),
    /// The path tried to descend into a value that is not an object.
    #[error("cannot access field '{0}' on non-object value")]
    NotAnObject(String),
}

/// A parsed JSON document together with its rendered line sequence.
///
/// The tree is owned exclusively by the document and never mutated in place;
/// `replace_root` substitutes a whole new tree and re-renders. The line
/// sequence is fully replaced on every render, never patched.
pub struct Document {
    root: Value,
    lines: Vec<String>,
}

impl Document {
    /// Parse a document from JSON text. A malformed document is fatal at
    /// startup; there is no partial or degraded rendering.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let root: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(root))
    }

    /// Build a document from an already-parsed tree.
    pub fn from_value(root: Value) -> Self {
        let lines = render_lines(&root);
        Self { root, lines }
    }

    /// The current root value.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The rendered line sequence.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Replace the root with a new tree and re-render the lines. Callers
    /// reset the cursor and redraw.
    pub fn replace_root(&mut self, root: Value) {
        self.root = root;
        self.lines = render_lines(&self.root);
    }

    /// Look up a field by dot-notation path (e.g. `merchant.city`).
    ///
    /// Every step of the walk must land on an object; the empty path
    /// returns the root.
    pub fn query_field(&self, path: &str) -> Result<&Value, QueryError> {
        if path.is_empty() {
            return Ok(&self.root);
        }
        let mut current = &self.root;
        for segment in path.split('.') {
            match current {
                Value::Object(map) => {
                    current = map
                        .get(segment)
                        .ok_or_else(|| QueryError::FieldNotFound(segment.to_string()))?;
                }
                _ => return Err(QueryError::NotAnObject(segment.to_string())),
            }
        }
        Ok(current)
    }
}

/// Pretty-print a tree into lines: 2-space indentation, quoted keys in
/// insertion order, array elements one per line.
fn render_lines(root: &Value) -> Vec<String> {
    let text = serde_json::to_string_pretty(root)
        .expect("serializing an in-memory JSON value cannot fail");
    text.split('\n').map(str::to_string).collect()
}
