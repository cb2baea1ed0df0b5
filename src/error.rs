//! Error types for path parsing and evaluation.

use std::fmt;

use crate::token::Token;

/// Errors that can occur while scanning or parsing a path expression.
///
/// Diagnostics are offset-free: scan failures quote a short preview of the
/// unconsumed input, parse failures describe the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The scanner found input that no token rule matches.
    UnrecognizedInput { rest: String },
    /// The parser hit a token that no grammar rule allows at this point.
    UnexpectedToken { found: String },
    /// The token sequence ended before the root marker.
    UnexpectedEnd,
}

impl ParseError {
    pub(crate) fn unrecognized(rest: &str, preview_len: usize) -> Self {
        ParseError::UnrecognizedInput {
            rest: rest.chars().take(preview_len).collect(),
        }
    }

    pub(crate) fn unexpected(found: &Token) -> Self {
        ParseError::UnexpectedToken {
            found: found.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnrecognizedInput { rest } => {
                write!(f, "unrecognized input starting at '{}'", rest)
            }
            ParseError::UnexpectedToken { found } => {
                write!(f, "unexpected token {}", found)
            }
            ParseError::UnexpectedEnd => {
                write!(f, "unexpected end of path, expected '$'")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors that can occur while applying a parsed path to a JSON value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A child accessor was applied to something other than an object.
    NotAnObject { identifier: String },
    /// An index or wildcard accessor was applied to something other than an array.
    NotAnArray,
    /// A child accessor named a key the object does not contain.
    MissingKey { identifier: String },
    /// An index accessor pointed past the end of the array.
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::NotAnObject { identifier } => {
                write!(f, "cannot select field '{}' from a non-object value", identifier)
            }
            EvalError::NotAnArray => {
                write!(f, "cannot index into a non-array value")
            }
            EvalError::MissingKey { identifier } => {
                write!(f, "object has no field '{}'", identifier)
            }
            EvalError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for array of length {}", index, len)
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Any failure from the one-shot parse-and-select entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path string did not parse.
    Parse(ParseError),
    /// The path did not fit the shape of the data.
    Eval(EvalError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Parse(err) => write!(f, "{}", err),
            PathError::Eval(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathError::Parse(err) => Some(err),
            PathError::Eval(err) => Some(err),
        }
    }
}

impl From<ParseError> for PathError {
    fn from(err: ParseError) -> Self {
        PathError::Parse(err)
    }
}

impl From<EvalError> for PathError {
    fn from(err: EvalError) -> Self {
        PathError::Eval(err)
    }
}
