//! Block segmentation: paragraphs, lists and fenced code.
//!
//! Scans content left to right. Three identical fence characters
//! (```` ``` ```` or `~~~`) anywhere outside a code block open one;
//! text before them on the same line is flushed first. The block runs
//! until a line starting with the same three characters, or to end of
//! input when the fence is never closed. Outside fences, a blank line
//! separates paragraphs.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::core::segment::span::TextSpan;

/// Kind of a segmented block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    Code,
    List,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Code => "code",
            BlockKind::List => "list",
        }
    }
}

/// A block of a message.
///
/// `language` is only ever set for [`BlockKind::Code`], and only
/// when the opening fence carried a hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub kind: BlockKind,
    pub span: TextSpan<'a>,
    pub language: Option<String>,
}

impl<'a> Block<'a> {
    /// The block's trimmed text.
    pub fn text(&self) -> &'a str {
        self.span.as_str()
    }
}

/// Collects blocks up to a fixed count; anything past it is dropped.
struct BlockSink<'a> {
    content: &'a str,
    blocks: Vec<Block<'a>>,
    max_blocks: usize,
}

impl<'a> BlockSink<'a> {
    fn is_full(&self) -> bool {
        self.blocks.len() >= self.max_blocks
    }

    fn push_text(&mut self, range: Range<usize>) {
        if self.is_full() || range.is_empty() {
            return;
        }
        let span = TextSpan::of(self.content, range).trim();
        if span.is_empty() {
            return;
        }
        let kind = if is_list(span.as_str()) {
            BlockKind::List
        } else {
            BlockKind::Text
        };
        self.blocks.push(Block {
            kind,
            span,
            language: None,
        });
    }

    fn push_code(&mut self, range: Range<usize>, language: Option<String>) {
        if self.is_full() {
            return;
        }
        let raw = TextSpan::of(self.content, range);
        let body = raw.as_str();

        let Some(first_visible) = body.find(|c: char| !c.is_ascii_whitespace()) else {
            return;
        };
        // Keep the indentation of the first code line, drop blank lines above it
        let start = body[..first_visible].rfind('\n').map_or(0, |p| p + 1);
        let end = body.trim_end_matches(|c: char| c.is_ascii_whitespace()).len();

        self.blocks.push(Block {
            kind: BlockKind::Code,
            span: raw.slice(start..end),
            language,
        });
    }
}

/// Parsed opening fence.
struct Fence {
    body: Range<usize>,
    language: Option<String>,
    /// Where scanning continues after the closing fence line
    resume: usize,
}

pub(crate) fn split_blocks(
    content: &str,
    max_blocks: usize,
    max_language_len: usize,
) -> Vec<Block<'_>> {
    let bytes = content.as_bytes();
    let len = bytes.len();
    let mut sink = BlockSink {
        content,
        blocks: Vec::new(),
        max_blocks,
    };

    let mut text_start = 0;
    let mut i = 0;

    while i < len && !sink.is_full() {
        if is_fence(bytes, i) {
            sink.push_text(text_start..i);
            let fence = parse_fence(content, i, max_language_len);
            sink.push_code(fence.body, fence.language);
            i = fence.resume;
            text_start = i;
            continue;
        }

        if bytes[i] == b'\n' {
            if let Some(next_line) = paragraph_break(bytes, i) {
                sink.push_text(text_start..i);
                i = next_line;
                text_start = i;
                continue;
            }
        }

        i += 1;
    }

    sink.push_text(text_start..len);
    sink.blocks
}

fn is_fence(bytes: &[u8], i: usize) -> bool {
    let Some(run) = bytes.get(i..i + 3) else {
        return false;
    };
    matches!(run[0], b'`' | b'~') && run[1] == run[0] && run[2] == run[0]
}

/// If the newline at `i` starts a paragraph break, the offset of the
/// first byte after the blank line.
fn paragraph_break(bytes: &[u8], i: usize) -> Option<usize> {
    let mut j = i + 1;
    while j < bytes.len() && matches!(bytes[j], b' ' | b'\t' | b'\r') {
        j += 1;
    }
    if j >= bytes.len() {
        Some(bytes.len())
    } else if bytes[j] == b'\n' {
        Some(j + 1)
    } else {
        None
    }
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|p| from + p)
}

fn parse_fence(content: &str, start: usize, max_language_len: usize) -> Fence {
    let bytes = content.as_bytes();
    let len = bytes.len();
    let marker = bytes[start];

    let mut j = start + 3;
    while j < len && bytes[j] == marker {
        j += 1;
    }

    let line_end = find_byte(bytes, j, b'\n').unwrap_or(len);
    let hint = content[j..line_end].trim_matches(|c: char| c.is_ascii_whitespace());
    let language = Some(truncate_to_boundary(hint, max_language_len))
        .filter(|hint| !hint.is_empty())
        .map(str::to_string);

    let body_start = (line_end + 1).min(len);
    match closing_fence(bytes, body_start, marker) {
        Some(close) => {
            let resume = find_byte(bytes, close, b'\n').map_or(len, |p| p + 1);
            Fence {
                body: body_start..close,
                language,
                resume,
            }
        }
        // Unclosed fence: the rest of the content is code
        None => Fence {
            body: body_start..len,
            language,
            resume: len,
        },
    }
}

fn closing_fence(bytes: &[u8], from: usize, marker: u8) -> Option<usize> {
    let mut pos = from;
    while pos < bytes.len() {
        if is_fence(bytes, pos) && bytes[pos] == marker {
            return Some(pos);
        }
        pos = find_byte(bytes, pos, b'\n')? + 1;
    }
    None
}

fn truncate_to_boundary(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fn is_list(text: &str) -> bool {
    let mut lines = text
        .lines()
        .map(str::trim_start)
        .filter(|line| !line.is_empty())
        .peekable();
    lines.peek().is_some() && lines.all(is_list_item)
}

fn is_list_item(line: &str) -> bool {
    if line.starts_with("- ") || line.starts_with("* ") || line.starts_with("+ ") {
        return true;
    }
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && (line[digits..].starts_with(". ") || line[digits..].starts_with(") "))
}
