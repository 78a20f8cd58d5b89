//! # Tokenizer
//!
//! Walks a [`SourceBuffer`] one character at a time and classifies each
//! character through the symbol table. Every character, including the final
//! padding character, produces exactly one token, so an input of N characters
//! yields N + 1 tokens and the raw values concatenate back to the padded
//! input:
//!
//! ```
//! use markspan_syntax::source::SourceBuffer;
//! use markspan_syntax::tokenizer::tokenize;
//!
//! let buffer = SourceBuffer::from_text("# Hi\n");
//! let out = tokenize(&buffer);
//! assert_eq!(out.tokens.len(), 6);
//! assert_eq!(out.tokens.text(0..6), "# Hi\n ");
//! ```
//!
//! The cursor stops on the padding character with
//! [`Status::EndOfInput`]. If it ever addresses a position the buffer does
//! not hold, tokenizing stops with [`Status::ColumnOverflow`] instead.

use crate::cursor::Cursor;
use crate::diagnostics::Status;
use crate::source::SourceBuffer;
use crate::token::{Token, Tokens};

/// Character-by-character tokenizer over a source buffer.
pub struct Tokenizer<'a> {
    buffer: &'a SourceBuffer,
    cursor: Cursor,
    status: Status,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Self {
            buffer,
            cursor: Cursor::new(),
            status: Status::Ok,
            done: false,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn status(&self) -> Status {
        self.status
    }

    fn advance(&mut self) {
        if self.cursor.offset + 1 >= self.buffer.size() {
            self.status = Status::EndOfInput;
            self.done = true;
            return;
        }
        let row_len = self.buffer.row_len(self.cursor.row).unwrap_or(0);
        self.cursor.step(row_len);
        self.status = Status::Ok;
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let Some(ch) = self.buffer.char_at(self.cursor.row, self.cursor.col) else {
            self.status = Status::ColumnOverflow;
            self.done = true;
            return None;
        };
        let token = Token::classify(ch);
        self.advance();
        Some(token)
    }
}

/// Result of running the tokenizer to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    pub tokens: Tokens,
    pub cursor: Cursor,
    pub status: Status,
}

/// Tokenize the whole buffer.
pub fn tokenize(buffer: &SourceBuffer) -> Tokenized {
    let mut tokenizer = Tokenizer::new(buffer);
    let tokens: Tokens = tokenizer.by_ref().collect();
    log::debug!(
        "tokenized {} tokens, stopped with {}",
        tokens.len(),
        tokenizer.status()
    );
    Tokenized {
        tokens,
        cursor: tokenizer.cursor(),
        status: tokenizer.status(),
    }
}
