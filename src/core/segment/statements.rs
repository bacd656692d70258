//! Statement segmentation within a block.
//!
//! Code blocks split into lines. Prose (text and list blocks)
//! splits into sentences using ASCII punctuation heuristics.

use crate::core::segment::abbreviations::is_abbreviation;
use crate::core::segment::blocks::{Block, BlockKind};
use crate::core::segment::span::TextSpan;

pub(crate) fn split_statements<'a>(block: &Block<'a>, max_statements: usize) -> Vec<TextSpan<'a>> {
    match block.kind {
        BlockKind::Code => split_lines(block.span, max_statements),
        BlockKind::Text | BlockKind::List => split_sentences(block.span, max_statements),
    }
}

fn split_lines(span: TextSpan<'_>, max_statements: usize) -> Vec<TextSpan<'_>> {
    let text = span.as_str();
    let mut statements = Vec::new();
    let mut start = 0;

    while statements.len() < max_statements {
        let end = text[start..].find('\n').map_or(text.len(), |p| start + p);
        let line = span.slice(start..end).trim();
        if !line.is_empty() {
            statements.push(line);
        }
        if end >= text.len() {
            break;
        }
        start = end + 1;
    }

    statements
}

fn split_sentences(span: TextSpan<'_>, max_statements: usize) -> Vec<TextSpan<'_>> {
    let text = span.as_str();
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut statements = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < len && statements.len() < max_statements {
        if !is_terminator(bytes[i]) {
            i += 1;
            continue;
        }

        // "?!" and "..." end a sentence together
        let mut end = i + 1;
        while end < len && is_terminator(bytes[end]) {
            end += 1;
        }
        let lone_period = bytes[i] == b'.' && end == i + 1;
        while end < len && is_closer(bytes[end]) {
            end += 1;
        }

        let abbreviated = lone_period && is_abbreviation(word_before(text, i));
        if is_sentence_boundary(bytes, end) && !abbreviated {
            let sentence = span.slice(start..end).trim();
            if !sentence.is_empty() {
                statements.push(sentence);
            }
            start = end;
        }
        i = end;
    }

    if statements.len() < max_statements {
        let rest = span.slice(start..len).trim();
        if !rest.is_empty() {
            statements.push(rest);
        }
    }

    statements
}

fn is_terminator(b: u8) -> bool {
    matches!(b, b'.' | b'!' | b'?')
}

fn is_closer(b: u8) -> bool {
    matches!(b, b'"' | b'\'' | b')' | b']')
}

/// Whether the byte at `end` (just past punctuation and closers)
/// lets the sentence end there.
fn is_sentence_boundary(bytes: &[u8], end: usize) -> bool {
    if end >= bytes.len() {
        return true;
    }
    if !bytes[end].is_ascii_whitespace() {
        return false;
    }

    let mut k = end;
    while k < bytes.len() && matches!(bytes[k], b' ' | b'\t' | b'\r') {
        k += 1;
    }
    let Some(&next) = bytes.get(k) else {
        return true;
    };
    next == b'\n' || next.is_ascii_uppercase() || matches!(next, b'"' | b'\'' | b'(' | b'[')
}

/// The word directly before the period at `dot`, including inner
/// periods so that "e.g" and "i.e" are seen whole.
fn word_before(text: &str, dot: usize) -> &str {
    let bytes = text.as_bytes();
    let mut start = dot;
    while start > 0 && (bytes[start - 1].is_ascii_alphabetic() || bytes[start - 1] == b'.') {
        start -= 1;
    }
    text[start..dot].trim_start_matches('.')
}
