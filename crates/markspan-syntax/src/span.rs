//! Span nodes: the flat output of the rule pipeline.

use std::fmt;
use std::ops::Range;

/// Structural meaning of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum Tag {
    HEADING,
    ITALIC,
    LITERAL,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tag::HEADING => "HEADING",
            Tag::ITALIC => "ITALIC",
            Tag::LITERAL => "LITERAL",
        };
        f.write_str(s)
    }
}

/// A claimed range of tokens and its structural meaning.
///
/// Bound conventions follow the rule that produced the node: `HEADING` and
/// `LITERAL` nodes store an exclusive `end`, `ITALIC` nodes an inclusive one.
/// Use [`SpanNode::covered`] to get a uniform half-open range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpanNode {
    pub start: usize,
    pub end: usize,
    pub tag: Tag,
    /// 0 or 1 for headings (`#` / `##`), 0 otherwise.
    pub depth: usize,
}

impl SpanNode {
    pub fn heading(start: usize, end: usize, depth: usize) -> Self {
        Self {
            start,
            end,
            tag: Tag::HEADING,
            depth,
        }
    }

    pub fn italic(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            tag: Tag::ITALIC,
            depth: 0,
        }
    }

    pub fn literal(index: usize) -> Self {
        Self {
            start: index,
            end: index + 1,
            tag: Tag::LITERAL,
            depth: 0,
        }
    }

    /// Token indices this node claims, as a half-open range.
    ///
    /// Inverted bounds (a heading with nothing after its marker, an empty
    /// italic pair) give an empty range.
    pub fn covered(&self) -> Range<usize> {
        let end = match self.tag {
            Tag::ITALIC => self.end + 1,
            Tag::HEADING | Tag::LITERAL => self.end,
        };
        self.start..end.max(self.start)
    }

    pub fn covers(&self, index: usize) -> bool {
        self.covered().contains(&index)
    }
}

impl fmt::Display for SpanNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) {}..{}",
            self.tag, self.depth, self.start, self.end
        )
    }
}
