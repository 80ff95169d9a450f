//! Pretty-printing of display trees.
//!
//! The layout follows Python's `pprint`: a container that fits in the
//! remaining width is written on one line, otherwise one entry per line with
//! the first entry on the bracket's line. Dictionaries keep their key order.
//!
//! ```text
//! { b"announce": b"http://tracker.example.com/announce",
//!   b"info": { b"length": 2,
//!              b"name": b"a.txt",
//!              b"pieces": "20 bytes (hidden in this output)"}}
//! ```

use bytes::Bytes;
use indexmap::IndexMap;

use crate::bencode::Value;
use crate::display::DisplayValue;
use crate::metainfo::MetainfoError;
use crate::redact::redact;

/// Default number of spaces added per nesting level.
pub const DEFAULT_INDENT: usize = 2;

/// Default maximum line width.
pub const DEFAULT_WIDTH: usize = 200;

/// Layout settings for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces added per nesting level.
    pub indent: usize,
    /// Preferred maximum line width. Scalars that cannot be split may exceed it.
    pub width: usize,
    /// Containers nested deeper than this are shown as `{...}` / `[...]`.
    pub depth: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            width: DEFAULT_WIDTH,
            depth: None,
        }
    }
}

impl RenderOptions {
    /// Sets the spaces added per nesting level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the preferred maximum line width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets how many container levels are shown. `None` shows all of them.
    pub fn with_depth(mut self, depth: Option<usize>) -> Self {
        self.depth = depth;
        self
    }
}

/// Renders a display tree to text.
///
/// # Examples
///
/// ```
/// use torrent_pprint::bencode::Value;
/// use torrent_pprint::display::DisplayValue;
/// use torrent_pprint::render::{render, RenderOptions};
///
/// let value = DisplayValue::from(Value::dict([("length", Value::Integer(2))]));
/// assert_eq!(render(&value, &RenderOptions::default()), "{b\"length\": 2}");
/// ```
pub fn render(value: &DisplayValue, options: &RenderOptions) -> String {
    let mut printer = Printer {
        options,
        out: String::new(),
    };
    printer.format(value, 0, 0, 0);
    printer.out
}

/// Redacts a borrowed torrent and renders it.
///
/// # Errors
///
/// Any error of [`redact`]. Nothing is rendered when redaction fails.
pub fn pformat_torrent(metainfo: &Value, options: &RenderOptions) -> Result<String, MetainfoError> {
    let display = redact(metainfo)?;
    Ok(render(&display, options))
}

/// Redacts a borrowed torrent and prints it to stdout.
pub fn pprint_torrent(metainfo: &Value, options: &RenderOptions) -> Result<(), MetainfoError> {
    println!("{}", pformat_torrent(metainfo, options)?);
    Ok(())
}

struct Printer<'a> {
    options: &'a RenderOptions,
    out: String,
}

impl Printer<'_> {
    /// Writes `value` starting at `column`, keeping `allowance` characters free
    /// for whatever closes the line after it. `level` counts enclosing containers.
    fn format(&mut self, value: &DisplayValue, column: usize, allowance: usize, level: usize) {
        let flat = repr(value, level, self.options.depth);
        if column + text_width(&flat) + allowance <= self.options.width {
            self.out.push_str(&flat);
            return;
        }

        match value {
            DisplayValue::Dict(dict) if !dict.is_empty() && !self.elided(level + 1) => {
                self.format_dict(dict, column, allowance, level + 1)
            }
            DisplayValue::List(list) if !list.is_empty() && !self.elided(level + 1) => {
                self.format_list(list, column, allowance, level + 1)
            }
            DisplayValue::Text(text) => {
                let chunks = self.chunks(column, allowance, words(text), |word: &&str| {
                    word.escape_debug().count()
                });
                let pieces = chunks
                    .into_iter()
                    .map(|chunk| format!("{:?}", chunk.concat()))
                    .collect();
                self.write_pieces(pieces, flat, column);
            }
            DisplayValue::Bytes(bytes) => {
                // Byte strings break only between four-byte runs.
                let parts: Vec<&[u8]> = bytes.chunks(4).collect();
                let chunks = self.chunks(column, allowance, parts, |part: &&[u8]| {
                    part.escape_ascii().count()
                });
                let pieces = chunks
                    .into_iter()
                    .map(|chunk| bytes_repr(&chunk.concat()))
                    .collect();
                self.write_pieces(pieces, flat, column);
            }
            _ => self.out.push_str(&flat),
        }
    }

    fn elided(&self, level: usize) -> bool {
        self.options.depth.is_some_and(|depth| level > depth)
    }

    fn child_column(&self, column: usize) -> usize {
        column + self.options.indent.max(1)
    }

    fn open(&mut self, bracket: char, column: usize) -> usize {
        let child = self.child_column(column);
        self.out.push(bracket);
        self.push_spaces(child - column - 1);
        child
    }

    fn format_dict(
        &mut self,
        dict: &IndexMap<Bytes, DisplayValue>,
        column: usize,
        allowance: usize,
        level: usize,
    ) {
        let child = self.open('{', column);
        let last = dict.len() - 1;
        for (i, (key, value)) in dict.iter().enumerate() {
            if i > 0 {
                self.out.push_str(",\n");
                self.push_spaces(child);
            }
            let key = bytes_repr(key);
            self.out.push_str(&key);
            self.out.push_str(": ");
            let value_column = child + text_width(&key) + 2;
            let trailing = if i == last { allowance + 1 } else { 1 };
            self.format(value, value_column, trailing, level);
        }
        self.out.push('}');
    }

    fn format_list(
        &mut self,
        list: &[DisplayValue],
        column: usize,
        allowance: usize,
        level: usize,
    ) {
        let child = self.open('[', column);
        let last = list.len() - 1;
        for (i, value) in list.iter().enumerate() {
            if i > 0 {
                self.out.push_str(",\n");
                self.push_spaces(child);
            }
            let trailing = if i == last { allowance + 1 } else { 1 };
            self.format(value, child, trailing, level);
        }
        self.out.push(']');
    }

    /// Packs the parts of a scalar into runs whose escaped form fits on a line
    /// after an opening parenthesis. Parts are never split, so a part wider than
    /// the room left is a run of its own.
    fn chunks<P, F>(
        &self,
        column: usize,
        allowance: usize,
        parts: Vec<P>,
        escaped_len: F,
    ) -> Vec<Vec<P>>
    where
        F: Fn(&P) -> usize,
    {
        // Room for the literal's prefix and quotes, and the parentheses.
        let available = self
            .options
            .width
            .saturating_sub(column + allowance + 1 + 3);

        let mut chunks = Vec::new();
        let mut current = Vec::new();
        let mut current_len = 0;
        for part in parts {
            let len = escaped_len(&part);
            if !current.is_empty() && current_len + len > available {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            current.push(part);
            current_len += len;
        }
        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }

    fn write_pieces(&mut self, pieces: Vec<String>, flat: String, column: usize) {
        if pieces.len() <= 1 {
            self.out.push_str(&flat);
            return;
        }

        self.out.push('(');
        for (i, piece) in pieces.iter().enumerate() {
            if i > 0 {
                self.out.push('\n');
                self.push_spaces(column + 1);
            }
            self.out.push_str(piece);
        }
        self.out.push(')');
    }

    fn push_spaces(&mut self, count: usize) {
        self.out.extend(std::iter::repeat(' ').take(count));
    }
}

fn repr(value: &DisplayValue, level: usize, depth: Option<usize>) -> String {
    let elided = depth.is_some_and(|depth| level + 1 > depth);
    match value {
        DisplayValue::Integer(i) => i.to_string(),
        DisplayValue::Text(text) => format!("{:?}", text),
        DisplayValue::Bytes(bytes) => bytes_repr(bytes),
        DisplayValue::List(list) if list.is_empty() => "[]".to_string(),
        DisplayValue::List(_) if elided => "[...]".to_string(),
        DisplayValue::List(list) => {
            let items: Vec<String> = list.iter().map(|v| repr(v, level + 1, depth)).collect();
            format!("[{}]", items.join(", "))
        }
        DisplayValue::Dict(dict) if dict.is_empty() => "{}".to_string(),
        DisplayValue::Dict(_) if elided => "{...}".to_string(),
        DisplayValue::Dict(dict) => {
            let items: Vec<String> = dict
                .iter()
                .map(|(k, v)| format!("{}: {}", bytes_repr(k), repr(v, level + 1, depth)))
                .collect();
            format!("{{{}}}", items.join(", "))
        }
    }
}

fn bytes_repr(bytes: &[u8]) -> String {
    format!("b\"{}\"", bytes.escape_ascii())
}

/// Splits text into words, each keeping the whitespace that follows it.
fn words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut after_space = false;
    for (i, c) in text.char_indices() {
        if after_space && !c.is_whitespace() {
            words.push(&text[start..i]);
            start = i;
        }
        after_space = c.is_whitespace();
    }
    if start < text.len() {
        words.push(&text[start..]);
    }
    words
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}
