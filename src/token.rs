//! Lexical tokens for path expressions.

use std::fmt;

/// A single lexical unit of a path expression.
///
/// Tokens carry no source offsets; their order in the scanner's output is
/// their only positional information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Root marker (`$`)
    Dollar,
    /// Child separator (`.`)
    Dot,
    /// Opening bracket (`[`)
    LeftBracket,
    /// Closing bracket (`]`)
    RightBracket,
    /// Wildcard (`*`)
    Asterisk,
    /// Field name matching `[a-zA-Z][a-zA-Z0-9]*`
    Identifier(String),
    /// Non-negative array index (`[0-9]+`)
    NumberIndex(usize),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Dollar => write!(f, "'$'"),
            Token::Dot => write!(f, "'.'"),
            Token::LeftBracket => write!(f, "'['"),
            Token::RightBracket => write!(f, "']'"),
            Token::Asterisk => write!(f, "'*'"),
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            Token::NumberIndex(value) => write!(f, "index {}", value),
        }
    }
}
