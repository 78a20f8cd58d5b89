//! Classified tokens and the owned token buffer rules operate on.

use std::ops::Range;

use crate::symbol::{TokenKind, classify};

/// Raw value a masked token carries.
pub const MASK_RAW: char = ' ';

/// One classified source character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: char,
}

impl Token {
    /// Classify `raw` through the symbol table.
    pub fn classify(raw: char) -> Self {
        Self {
            kind: classify(raw),
            raw,
        }
    }

    /// The neutral literal a claimed token is overwritten with.
    pub fn masked() -> Self {
        Self {
            kind: TokenKind::LITERAL,
            raw: MASK_RAW,
        }
    }

    pub fn is_masked(&self) -> bool {
        *self == Self::masked()
    }
}

/// The token sequence produced by the tokenizer.
///
/// The length never changes once built. The only mutation is [`Tokens::mask`],
/// which rules use to claim tokens so later rules skip them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    tokens: Vec<Token>,
}

impl Tokens {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Raw character at `index`, if any.
    pub fn raw(&self, index: usize) -> Option<char> {
        self.tokens.get(index).map(|t| t.raw)
    }

    /// Kind at `index`, if any.
    pub fn kind(&self, index: usize) -> Option<TokenKind> {
        self.tokens.get(index).map(|t| t.kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Claim the token at `index`.
    ///
    /// Postcondition: kind is `LITERAL` and raw is a single space. Masking an
    /// already-masked token changes nothing; indices past the end are ignored.
    pub fn mask(&mut self, index: usize) {
        if let Some(token) = self.tokens.get_mut(index) {
            *token = Token::masked();
        }
    }

    /// Index of the first `NEWLINE` at or after `from`.
    pub fn find_newline(&self, from: usize) -> Option<usize> {
        self.find(from, |t| t.kind == TokenKind::NEWLINE)
    }

    /// Index of the first token at or after `from` whose raw value is `raw`.
    pub fn find_raw(&self, from: usize, raw: char) -> Option<usize> {
        self.find(from, |t| t.raw == raw)
    }

    fn find(&self, from: usize, pred: impl Fn(&Token) -> bool) -> Option<usize> {
        self.tokens
            .get(from..)?
            .iter()
            .position(pred)
            .map(|offset| from + offset)
    }

    /// Concatenated raw values over `range`, clamped to the buffer.
    pub fn text(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.tokens.len());
        let start = range.start.min(end);
        self.tokens[start..end].iter().map(|t| t.raw).collect()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
