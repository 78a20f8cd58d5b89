//! # Rules
//!
//! Each rule scans the token buffer from an explicit start index and returns
//! the span nodes it claims. Rules run in a fixed order over the same buffer,
//! and an earlier rule may mask tokens so that later rules do not re-match
//! them:
//!
//! | Order | Rule      | Requires                       | Masks                          |
//! |-------|-----------|--------------------------------|--------------------------------|
//! | 1     | `heading` | nothing                        | the marker and the token after |
//! | 2     | `italic`  | heading markers already masked | nothing                        |
//! | 3     | `literal` | all structural spans claimed   | nothing                        |
//!
//! The literal rule is the only one that reads the spans claimed so far.

mod heading;
mod italic;
mod literal;

pub use heading::HeadingRule;
pub use italic::ItalicRule;
pub use literal::LiteralRule;

use crate::options::ParseOptions;
use crate::span::SpanNode;
use crate::token::Tokens;

/// A named pass over the token buffer.
pub trait Rule {
    fn name(&self) -> &'static str;

    /// Structural rules claim markup. The pipeline reports missing data when
    /// every structural rule has run and nothing was claimed.
    fn is_structural(&self) -> bool {
        true
    }

    /// Scan `tokens` from index `from`, returning newly claimed spans.
    ///
    /// `claimed` holds every span emitted by earlier rules, in discovery
    /// order.
    fn apply(&self, tokens: &mut Tokens, claimed: &[SpanNode], from: usize) -> Vec<SpanNode>;
}

/// The ordered list of rules a parse runs.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Heading, then italic, then literal fallback.
    pub fn standard(options: &ParseOptions) -> Self {
        Self {
            rules: vec![
                Box::new(HeadingRule),
                Box::new(ItalicRule),
                Box::new(LiteralRule::new(options.literal_coverage)),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|r| r.name()).collect()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::source::SourceBuffer;
    use crate::token::Tokens;
    use crate::tokenizer::tokenize;

    pub fn tokens(input: &str) -> Tokens {
        tokenize(&SourceBuffer::from_text(input)).tokens
    }
}
