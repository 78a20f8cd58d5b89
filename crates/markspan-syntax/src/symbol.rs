//! # Symbol Classification
//!
//! The fixed table that maps a single source character to a [`TokenKind`].
//! It has no state; the tokenizer consults it once per character.
//!
//! | Character                       | Kind         |
//! |---------------------------------|--------------|
//! | `#`                             | `HEADER`     |
//! | `(` `)` `[` `]` `*` `~`         | `ENCLOSER`   |
//! | `=` `-`                         | `PUNCTUATOR` |
//! | `\n`                            | `NEWLINE`    |
//! | anything else                   | `LITERAL`    |
//!
//! The table is expressed as a [Logos] enum so that every entry is a single
//! `#[token]` attribute. All patterns are exactly one character long, so
//! lexing a one-character string yields exactly one symbol.
//!
//! ```
//! use markspan_syntax::symbol::{TokenKind, classify};
//!
//! assert_eq!(classify('#'), TokenKind::HEADER);
//! assert_eq!(classify('*'), TokenKind::ENCLOSER);
//! assert_eq!(classify('x'), TokenKind::LITERAL);
//! ```
//!
//! [Logos]: https://docs.rs/logos

use logos::Logos;

/// Kinds a token can be classified as.
///
/// We use SCREAMING_CASE to match the names used in diagnostics and span
/// dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    /// `#` heading marker
    HEADER,
    /// Brackets, parentheses, `*` and `~`
    ENCLOSER,
    /// `=` and `-`
    PUNCTUATOR,
    /// Line break
    NEWLINE,
    /// Everything else, and every masked token
    LITERAL,
}

/// Raw symbols recognised by the Logos lexer.
///
/// This enum exists separately from [`TokenKind`] because Logos needs to
/// derive on it; several symbols collapse onto the same kind.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    #[token("#")]
    Hash,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("*")]
    Star,

    #[token("~")]
    Tilde,

    #[token("=")]
    Equals,

    #[token("-")]
    Dash,

    #[token("\n")]
    Newline,

    /// Any single character outside the table
    #[regex(r"[^#()\[\]*~=\n-]")]
    Other,
}

impl Symbol {
    fn kind(self) -> TokenKind {
        match self {
            Symbol::Hash => TokenKind::HEADER,
            Symbol::LParen
            | Symbol::RParen
            | Symbol::LBracket
            | Symbol::RBracket
            | Symbol::Star
            | Symbol::Tilde => TokenKind::ENCLOSER,
            Symbol::Equals | Symbol::Dash => TokenKind::PUNCTUATOR,
            Symbol::Newline => TokenKind::NEWLINE,
            Symbol::Other => TokenKind::LITERAL,
        }
    }
}

/// Classify one character.
///
/// Characters absent from the table, including any the lexer rejects, are
/// `LITERAL`.
pub fn classify(ch: char) -> TokenKind {
    let mut buf = [0u8; 4];
    let mut lexer = Symbol::lexer(ch.encode_utf8(&mut buf));
    match lexer.next() {
        Some(Ok(symbol)) => symbol.kind(),
        _ => TokenKind::LITERAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case('#', TokenKind::HEADER)]
    #[case('(', TokenKind::ENCLOSER)]
    #[case(')', TokenKind::ENCLOSER)]
    #[case('[', TokenKind::ENCLOSER)]
    #[case(']', TokenKind::ENCLOSER)]
    #[case('*', TokenKind::ENCLOSER)]
    #[case('~', TokenKind::ENCLOSER)]
    #[case('=', TokenKind::PUNCTUATOR)]
    #[case('-', TokenKind::PUNCTUATOR)]
    #[case('\n', TokenKind::NEWLINE)]
    fn table_entries(#[case] ch: char, #[case] expected: TokenKind) {
        assert_eq!(classify(ch), expected);
    }

    #[rstest]
    #[case('a')]
    #[case(' ')]
    #[case('\t')]
    #[case('\r')]
    #[case('>')]
    #[case('`')]
    #[case('é')]
    #[case('字')]
    fn characters_outside_table_are_literal(#[case] ch: char) {
        assert_eq!(classify(ch), TokenKind::LITERAL);
    }
}
