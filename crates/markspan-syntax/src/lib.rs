//! # markspan-syntax
//!
//! Turns a small markdown subset (`#`/`##` headings, `*italic*` spans, plain
//! text) into a flat list of typed, position-tagged spans over a token
//! stream.
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → SourceBuffer → Tokenizer → Tokens → Rules → Vec<SpanNode>
//!               (line records)  (cursor)    (masked in place)
//! ```
//!
//! ### 1. Tokenizer ([`tokenizer`] module)
//!
//! Walks the line-indexed buffer one character at a time and classifies each
//! character through the fixed [`symbol`] table. One token per character,
//! plus one for the padding character appended to every buffer:
//!
//! ```text
//! "# Hi\n" → [HEADER '#', LITERAL ' ', LITERAL 'H', LITERAL 'i', NEWLINE, LITERAL ' ']
//! ```
//!
//! ### 2. Rules ([`rules`] module)
//!
//! An ordered list of passes over the token buffer. The heading rule claims
//! headings and masks their markers so nothing downstream re-reads them, the
//! italic rule pairs `*` markers, and the literal rule sweeps up every index
//! nobody claimed.
//!
//! ### 3. Parse State ([`state`] module)
//!
//! [`ParseState`] owns the buffer, cursor, tokens, spans and status for one
//! input, and runs the phases. Soft failures are reported through a
//! [`DiagnosticSink`] and recorded in the status; they never abort.
//!
//! ## Quick Start
//!
//! ```
//! use markspan_syntax::{parse_str, Diagnostic, ParseOptions, Tag};
//!
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let state = parse_str("# Hello\n*there*\n", ParseOptions::default(), &mut diagnostics);
//!
//! let heading = state.spans()[0];
//! assert_eq!(heading.tag, Tag::HEADING);
//! assert_eq!(state.text_of(&heading), "Hello");
//!
//! let italic = state.spans()[1];
//! assert_eq!(italic.tag, Tag::ITALIC);
//! assert_eq!(state.text_of(&italic), "there");
//! assert!(diagnostics.is_empty());
//! ```
//!
//! ## Span Bounds
//!
//! Heading and literal spans store an exclusive `end`; italic spans store an
//! inclusive one. [`SpanNode::covered`] turns either into a half-open range.
//! The list is in discovery order (headings, italics, literals) unless
//! [`SpanOrder::Source`] is configured.

pub mod cursor;
pub mod diagnostics;
pub mod options;
pub mod rules;
pub mod source;
pub mod span;
pub mod state;
pub mod symbol;
pub mod token;
pub mod tokenizer;

use std::path::Path;

pub use diagnostics::{Diagnostic, DiagnosticSink, Status, StderrSink};
pub use options::{LiteralCoverage, ParseOptions, SpanOrder};
pub use source::LoadError;
pub use span::{SpanNode, Tag};
pub use state::ParseState;
pub use symbol::TokenKind;
pub use token::{Token, Tokens};

/// Parse in-memory text.
pub fn parse_str(text: &str, options: ParseOptions, sink: &mut dyn DiagnosticSink) -> ParseState {
    let mut state = ParseState::from_text(text, options);
    state.parse(sink);
    state
}

/// Load and parse a file.
///
/// Fails only when the file cannot be read; a wrong extension gives a state
/// with [`Status::InvalidFile`] and no spans.
pub fn parse_file(
    path: impl AsRef<Path>,
    options: ParseOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<ParseState, LoadError> {
    let mut state = ParseState::load(path, options, sink)?;
    state.parse(sink);
    Ok(state)
}
