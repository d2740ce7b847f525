//! Document tree for emitted source text.
//!
//! Emitters build a [`Doc`] out of literal text, line breaks and indented
//! blocks; [`Doc::render`] turns it into a string. Indentation is tracked in
//! one place, the printer, so emitters never count spaces or decide where a
//! separator goes relative to an indent change.
//!
//! Indentation is written lazily, just before the next piece of text on a
//! line. Lines left empty therefore never carry trailing whitespace.

use std::fmt;

/// Width of one nesting level.
pub const INDENT_WIDTH: usize = 2;

/// A tree of formatted segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Doc {
    /// Literal text.
    Text(String),
    /// A line break followed by the current indentation.
    Line,
    /// Segments printed one after another.
    Concat(Vec<Doc>),
    /// The inner document with indentation increased by the given width.
    Nest(usize, Box<Doc>),
    /// The inner document indented to the column where it starts.
    Align(Box<Doc>),
}

impl Doc {
    pub fn text(text: impl Into<String>) -> Self {
        Doc::Text(text.into())
    }

    pub fn line() -> Self {
        Doc::Line
    }

    pub fn concat(parts: impl IntoIterator<Item = Doc>) -> Self {
        Doc::Concat(parts.into_iter().collect())
    }

    /// Interleave `items` with `sep`. No separator is emitted for zero or
    /// one item.
    pub fn join(items: impl IntoIterator<Item = Doc>, sep: Doc) -> Self {
        let mut parts = Vec::new();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                parts.push(sep.clone());
            }
            parts.push(item);
        }
        Doc::Concat(parts)
    }

    /// Increase indentation of every line break inside `self` by `width`.
    pub fn nest(self, width: usize) -> Self {
        Doc::Nest(width, Box::new(self))
    }

    /// One nesting level deeper.
    pub fn indent(self) -> Self {
        self.nest(INDENT_WIDTH)
    }

    /// Line breaks inside `self` return to the column `self` starts at.
    pub fn align(self) -> Self {
        Doc::Align(Box::new(self))
    }

    /// Serialize the document.
    pub fn render(&self) -> String {
        let mut printer = Printer::default();
        printer.print(self, 0);
        printer.out
    }
}

impl From<&str> for Doc {
    fn from(text: &str) -> Self {
        Doc::text(text)
    }
}

impl From<String> for Doc {
    fn from(text: String) -> Self {
        Doc::Text(text)
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Printer
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
struct Printer {
    out: String,
    /// Column of the next character on the current line.
    column: usize,
    /// Indentation owed to the current line, written before its first text.
    pending: Option<usize>,
}

impl Printer {
    fn print(&mut self, doc: &Doc, indent: usize) {
        match doc {
            Doc::Text(text) => self.text(text),
            Doc::Line => {
                self.out.push('\n');
                self.column = 0;
                self.pending = Some(indent);
            }
            Doc::Concat(parts) => {
                for part in parts {
                    self.print(part, indent);
                }
            }
            Doc::Nest(width, inner) => self.print(inner, indent + width),
            Doc::Align(inner) => {
                let column = self.pending.unwrap_or(self.column);
                self.print(inner, column);
            }
        }
    }

    fn text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(width) = self.pending.take() {
            self.out.push_str(&" ".repeat(width));
            self.column = width;
        }
        self.out.push_str(text);
        // Documentation strings may span lines.
        match text.rfind('\n') {
            Some(pos) => self.column = text[pos + 1..].chars().count(),
            None => self.column += text.chars().count(),
        }
    }
}
