//! ASCII tokenizer.
//!
//! Lowercases contiguous ASCII alphanumeric runs and treats every
//! other byte (punctuation, whitespace, any byte of a multi-byte
//! UTF-8 sequence) as a separator. Runs shorter than two bytes are
//! dropped; runs longer than the per-token bound are truncated.

/// Hard upper bound on a token's length in bytes
pub const MAX_TOKEN_LEN: usize = 255;

/// Tokens shorter than this are discarded
pub const MIN_TOKEN_LEN: usize = 2;

/// Tokenizer with a configurable per-token length bound.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    max_token_len: usize,
}

impl Tokenizer {
    /// Create a tokenizer. The bound is clamped to
    /// `MIN_TOKEN_LEN..=MAX_TOKEN_LEN`.
    pub fn new(max_token_len: usize) -> Self {
        Self {
            max_token_len: max_token_len.clamp(MIN_TOKEN_LEN, MAX_TOKEN_LEN),
        }
    }

    pub fn max_token_len(&self) -> usize {
        self.max_token_len
    }

    /// Tokenize `text`, producing at most `max_tokens` tokens.
    pub fn tokenize(&self, text: &str, max_tokens: usize) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::with_capacity(self.max_token_len);
        let mut run_len = 0usize;

        for &byte in text.as_bytes() {
            if tokens.len() >= max_tokens {
                return tokens;
            }
            if byte.is_ascii_alphanumeric() {
                // Past the bound the run keeps going but nothing is kept
                if run_len < self.max_token_len {
                    current.push(byte.to_ascii_lowercase() as char);
                }
                run_len += 1;
            } else {
                flush(&mut current, &mut tokens);
                run_len = 0;
            }
        }

        if tokens.len() < max_tokens {
            flush(&mut current, &mut tokens);
        }
        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(MAX_TOKEN_LEN)
    }
}

fn flush(current: &mut String, tokens: &mut Vec<String>) {
    if current.len() >= MIN_TOKEN_LEN {
        tokens.push(current.clone());
    }
    current.clear();
}

/// Tokenize with the default per-token bound.
pub fn tokenize(text: &str, max_tokens: usize) -> Vec<String> {
    Tokenizer::default().tokenize(text, max_tokens)
}
