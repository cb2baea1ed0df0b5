//! Accessor chain types produced by the parser.

use serde::{Deserialize, Serialize};

/// One traversal step in a parsed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accessor {
    /// Named field selection (`.name`)
    Child(String),
    /// Zero-based sequence position (`[3]`)
    Index(usize),
    /// All elements of a sequence (`[*]`)
    Wildcard,
}

/// A complete parsed path expression.
///
/// The leading `$` is implicit and not stored; `accessors` holds the
/// traversal steps in left-to-right source order, which is also the order
/// they are applied during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathExpr {
    /// Accessors in traversal order.
    pub accessors: Vec<Accessor>,
}

impl PathExpr {
    /// Creates a path expression from accessors in traversal order.
    pub fn new(accessors: Vec<Accessor>) -> Self {
        Self { accessors }
    }
}
