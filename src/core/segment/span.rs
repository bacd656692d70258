//! Borrowed views into caller-owned content.

use std::ops::Range;

/// An immutable view into a caller-owned text buffer.
///
/// A span never copies: it borrows the slice it describes and
/// remembers the byte offset of that slice within the original
/// content, so the lifetime `'a` ties every span to the buffer it
/// came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan<'a> {
    offset: usize,
    text: &'a str,
}

impl<'a> TextSpan<'a> {
    /// Span covering an entire buffer.
    pub fn whole(text: &'a str) -> Self {
        Self { offset: 0, text }
    }

    /// Span over `content[range]`.
    ///
    /// The range must fall on character boundaries; the segmenter
    /// only ever cuts at ASCII bytes, which always qualify.
    pub(crate) fn of(content: &'a str, range: Range<usize>) -> Self {
        Self {
            offset: range.start,
            text: &content[range],
        }
    }

    /// Byte offset of the span within the original content.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte offset one past the end of the span.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Byte range of the span within the original content.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The borrowed text.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Sub-span for a byte range relative to this span.
    pub(crate) fn slice(&self, range: Range<usize>) -> TextSpan<'a> {
        TextSpan {
            offset: self.offset + range.start,
            text: &self.text[range],
        }
    }

    /// Span with leading and trailing ASCII whitespace removed.
    pub fn trim(&self) -> TextSpan<'a> {
        let start_trimmed = self.text.trim_start_matches(|c: char| c.is_ascii_whitespace());
        let lead = self.text.len() - start_trimmed.len();
        let trimmed = start_trimmed.trim_end_matches(|c: char| c.is_ascii_whitespace());
        TextSpan {
            offset: self.offset + lead,
            text: trimmed,
        }
    }
}

impl AsRef<str> for TextSpan<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}
