use crate::span::SpanNode;
use crate::symbol::TokenKind;
use crate::token::Tokens;

use super::Rule;

const MARKER: char = '*';

/// `*text*` pairs.
///
/// The span runs from the token after the opening marker to the token before
/// the closing one, both inclusive. Scanning resumes right after the closing
/// marker. An opening marker with no partner is skipped.
///
/// Unlike headings, italic markers are not masked once claimed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItalicRule;

impl Rule for ItalicRule {
    fn name(&self) -> &'static str {
        "italic"
    }

    fn apply(&self, tokens: &mut Tokens, _claimed: &[SpanNode], from: usize) -> Vec<SpanNode> {
        let mut nodes = Vec::new();
        let mut i = from;

        while i < tokens.len() {
            let opens = tokens
                .get(i)
                .is_some_and(|t| t.kind == TokenKind::ENCLOSER && t.raw == MARKER);
            if opens && let Some(close) = tokens.find_raw(i + 1, MARKER) {
                nodes.push(SpanNode::italic(i + 1, close - 1));
                i = close + 1;
                continue;
            }
            i += 1;
        }

        log::debug!("italic rule claimed {} spans", nodes.len());
        nodes
    }
}
