//! pathquill - a restricted JSONPath-style accessor language.
//!
//! A path string such as `$.store.books[1]` is scanned into tokens, parsed
//! into an accessor chain, and optionally applied to a `serde_json::Value`
//! tree. Scanning and parsing are two separate passes over pure data: the
//! scanner produces tokens, the parser consumes them.
//!
//! # Supported Syntax
//!
//! - `$` - root marker (required, always first)
//! - `.property` - named field access
//! - `[index]` - array element by non-negative index
//! - `[*]` - all elements of an array (wildcard)
//!
//! Identifiers match `[a-zA-Z][a-zA-Z0-9]*`; indexes match `[0-9]+`. There
//! are no filters, slices, recursive descent, or quoted keys.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let doc = json!({
//!     "store": {
//!         "books": [
//!             { "title": "Dune" },
//!             { "title": "Emma" },
//!         ]
//!     }
//! });
//!
//! let titles = pathquill::select(&doc, "$.store.books[*].title").unwrap();
//! assert_eq!(titles, vec![&json!("Dune"), &json!("Emma")]);
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod scanner;
pub mod token;

pub use ast::{Accessor, PathExpr};
pub use error::{EvalError, ParseError, PathError};
pub use evaluator::Evaluator;
pub use parser::{parse_path, Parser};
pub use scanner::tokenize;
pub use token::Token;

use serde_json::Value;

/// Parses a path expression string into its accessor chain.
pub fn parse(path: &str) -> Result<PathExpr, ParseError> {
    parse_path(&tokenize(path)?)
}

/// Parses a path and applies it to a JSON value in one call.
///
/// Returns every value the path selects; see [`Evaluator::evaluate`] for
/// the selection and failure semantics.
pub fn select<'a>(root: &'a Value, path: &str) -> Result<Vec<&'a Value>, PathError> {
    let expr = parse(path)?;
    Ok(Evaluator::new(root).evaluate(&expr)?)
}
