use serde::{Deserialize, Serialize};

/// Canonical extension of the markup dialect.
pub const DEFAULT_EXTENSION: &str = "md";

/// Which indices the literal fallback rule claims.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralCoverage {
    /// Every index outside all previously claimed spans.
    #[default]
    Uncovered,
    /// Indices that are both before a node's start and after its end. No
    /// ordinary node satisfies this, so the rule emits nothing; kept for
    /// output compatibility with earlier releases.
    Inverted,
}

/// Order of the final span list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanOrder {
    /// Headings, then italics, then literals, each in scan order.
    #[default]
    Discovery,
    /// Stable sort by `start`.
    Source,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Extension a source file must carry, without the dot.
    pub extension: String,
    pub literal_coverage: LiteralCoverage,
    pub span_order: SpanOrder,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            literal_coverage: LiteralCoverage::default(),
            span_order: SpanOrder::default(),
        }
    }
}
