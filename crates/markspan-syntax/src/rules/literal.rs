use crate::options::LiteralCoverage;
use crate::span::SpanNode;
use crate::token::Tokens;

use super::Rule;

/// Fallback that claims plain text as one-token `LITERAL` spans.
///
/// Requires every structural rule to have run, since it reads their spans
/// through `claimed`. Masks nothing.
///
/// With [`LiteralCoverage::Uncovered`] every index outside all claimed spans
/// gets a span, so headings, italics and literals together account for each
/// token exactly once (as long as no italic sits inside a heading).
/// [`LiteralCoverage::Inverted`] keeps the older predicate, which asks for an
/// index before a node's start and after its end at once and so never
/// matches an ordinary node.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralRule {
    coverage: LiteralCoverage,
}

impl LiteralRule {
    pub fn new(coverage: LiteralCoverage) -> Self {
        Self { coverage }
    }

    pub fn coverage(&self) -> LiteralCoverage {
        self.coverage
    }
}

impl Rule for LiteralRule {
    fn name(&self) -> &'static str {
        "literal"
    }

    fn is_structural(&self) -> bool {
        false
    }

    fn apply(&self, tokens: &mut Tokens, claimed: &[SpanNode], from: usize) -> Vec<SpanNode> {
        let indices = from..tokens.len();
        let nodes: Vec<SpanNode> = match self.coverage {
            LiteralCoverage::Uncovered => indices
                .filter(|&i| !claimed.iter().any(|node| node.covers(i)))
                .map(SpanNode::literal)
                .collect(),
            LiteralCoverage::Inverted => {
                let mut nodes = Vec::new();
                for i in indices {
                    for node in claimed {
                        if i < node.start && i > node.end {
                            nodes.push(SpanNode::literal(i));
                        }
                    }
                }
                nodes
            }
        };

        log::debug!(
            "literal rule ({:?}) index buffer: {:?}",
            self.coverage,
            nodes.iter().map(|n| n.start).collect::<Vec<_>>()
        );
        nodes
    }
}
