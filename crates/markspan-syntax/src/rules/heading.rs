use crate::span::SpanNode;
use crate::symbol::TokenKind;
use crate::token::Tokens;

use super::Rule;

/// `#` and `##` headings terminated by a newline.
///
/// A single marker gives depth 0 with content starting two tokens after it;
/// a doubled marker gives depth 1 with content starting three tokens after
/// the first. In both cases one space after the marker is assumed and
/// skipped. The span ends (exclusive) at the terminating newline.
///
/// Postcondition: for each emitted heading the first marker and the token
/// after it are masked. A heading with no newline after it is dropped
/// without masking anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingRule;

impl Rule for HeadingRule {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn apply(&self, tokens: &mut Tokens, _claimed: &[SpanNode], from: usize) -> Vec<SpanNode> {
        let mut nodes = Vec::new();

        for i in from..tokens.len() {
            if tokens.kind(i) != Some(TokenKind::HEADER) {
                continue;
            }
            let depth = usize::from(tokens.kind(i + 1) == Some(TokenKind::HEADER));
            let Some(newline) = tokens.find_newline(i + 1) else {
                log::debug!("heading marker at {i} has no terminating newline");
                continue;
            };

            nodes.push(SpanNode::heading(i + 2 + depth, newline, depth));
            tokens.mask(i);
            tokens.mask(i + 1);
        }

        log::debug!("heading rule claimed {} spans", nodes.len());
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::tokens;
    use crate::token::Token;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_marker_is_depth_zero() {
        let mut toks = tokens("# Title\n");
        let nodes = HeadingRule.apply(&mut toks, &[], 0);

        assert_eq!(nodes, vec![SpanNode::heading(2, 7, 0)]);
        assert_eq!(toks.text(2..7), "Title");
    }

    #[test]
    fn double_marker_is_depth_one() {
        let mut toks = tokens("## Sub\n");
        let nodes = HeadingRule.apply(&mut toks, &[], 0);

        assert_eq!(nodes, vec![SpanNode::heading(3, 6, 1)]);
        assert_eq!(toks.text(3..6), "Sub");
    }

    #[test]
    fn markers_are_masked() {
        let mut toks = tokens("# Title\n");
        HeadingRule.apply(&mut toks, &[], 0);

        assert_eq!(toks.get(0), Some(&Token::masked()));
        assert_eq!(toks.get(1), Some(&Token::masked()));
        assert_eq!(toks.text(0..9), "  Title\n ");
    }

    #[test]
    fn double_markers_are_both_masked() {
        let mut toks = tokens("## Sub\n");
        HeadingRule.apply(&mut toks, &[], 0);

        assert!(toks.get(0).is_some_and(Token::is_masked));
        assert!(toks.get(1).is_some_and(Token::is_masked));
        assert_eq!(toks.kind(2), Some(TokenKind::LITERAL));
    }

    #[test]
    fn second_pass_finds_nothing() {
        let mut toks = tokens("# Title\n## Sub\n");
        let first = HeadingRule.apply(&mut toks, &[], 0);
        let masked = toks.clone();
        let second = HeadingRule.apply(&mut toks, &first, 0);

        assert_eq!(first.len(), 2);
        assert!(second.is_empty());
        assert_eq!(toks, masked);
    }

    #[test]
    fn unterminated_heading_is_dropped() {
        let mut toks = tokens("# Title");
        let before = toks.clone();
        let nodes = HeadingRule.apply(&mut toks, &[], 0);

        assert!(nodes.is_empty());
        assert_eq!(toks, before);
    }

    #[test]
    fn headings_on_several_lines() {
        let mut toks = tokens("# One\ntext\n## Two\n");
        let nodes = HeadingRule.apply(&mut toks, &[], 0);

        assert_eq!(
            nodes,
            vec![SpanNode::heading(2, 5, 0), SpanNode::heading(14, 17, 1)]
        );
        assert_eq!(toks.text(2..5), "One");
        assert_eq!(toks.text(14..17), "Two");
    }

    #[test]
    fn triple_marker_yields_two_headings() {
        // `##` claims the first two markers, the third is read on its own.
        let mut toks = tokens("### X\n");
        let nodes = HeadingRule.apply(&mut toks, &[], 0);

        assert_eq!(
            nodes,
            vec![SpanNode::heading(3, 5, 1), SpanNode::heading(4, 5, 0)]
        );
    }

    #[test]
    fn bare_marker_masks_its_newline() {
        let mut toks = tokens("#\nrest\n");
        let nodes = HeadingRule.apply(&mut toks, &[], 0);

        assert_eq!(nodes, vec![SpanNode::heading(2, 1, 0)]);
        assert!(nodes[0].covered().is_empty());
        assert!(toks.get(1).is_some_and(Token::is_masked));
    }

    #[test]
    fn marker_mid_line_still_matches() {
        let mut toks = tokens("a # b\n");
        let nodes = HeadingRule.apply(&mut toks, &[], 0);
        assert_eq!(nodes, vec![SpanNode::heading(4, 5, 0)]);
    }

    #[test]
    fn scan_respects_start_index() {
        let mut toks = tokens("# A\n# B\n");
        let nodes = HeadingRule.apply(&mut toks, &[], 4);
        assert_eq!(nodes, vec![SpanNode::heading(6, 7, 0)]);
        assert_eq!(toks.raw(0), Some('#'));
    }
}
