//! Recursive-descent parser over the scanner's token stream.
//!
//! Grammar (EBNF):
//!
//! ```text
//! Root                  := "$" Accessor*
//! Accessor              := ChildAccessor | ArrayIndexAccessor | ArrayWildCardAccessor
//! ChildAccessor         := "." Identifier
//! ArrayIndexAccessor    := "[" NumberIndex "]"
//! ArrayWildCardAccessor := "[" "*" "]"
//! ```
//!
//! The alternatives are prefix-disjoint given the scanner's token kinds, so
//! a fixed-lookahead, non-backtracking cursor over the token slice suffices.

use crate::ast::{Accessor, PathExpr};
use crate::error::ParseError;
use crate::token::Token;

/// Token-cursor parser for the accessor grammar.
pub struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the start of the token sequence.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    /// Parses the full token sequence into a path expression.
    ///
    /// The first token must be the root marker; every remaining token must
    /// belong to an accessor. A bare root marker parses to an empty
    /// accessor list.
    pub fn parse(&mut self) -> Result<PathExpr, ParseError> {
        match self.tokens.first() {
            Some(Token::Dollar) => self.index = 1,
            Some(other) => return Err(ParseError::unexpected(other)),
            None => return Err(ParseError::UnexpectedEnd),
        }

        let mut accessors = Vec::new();
        while self.index < self.tokens.len() {
            let accessor = self
                .child_accessor()
                .or_else(|| self.array_index_accessor())
                .or_else(|| self.array_wildcard_accessor())
                .ok_or_else(|| ParseError::unexpected(&self.tokens[self.index]))?;
            accessors.push(accessor);
        }

        Ok(PathExpr::new(accessors))
    }

    fn child_accessor(&mut self) -> Option<Accessor> {
        match self.rest() {
            [Token::Dot, Token::Identifier(name), ..] => {
                let accessor = Accessor::Child(name.clone());
                self.index += 2;
                Some(accessor)
            }
            _ => None,
        }
    }

    fn array_index_accessor(&mut self) -> Option<Accessor> {
        match self.rest() {
            [Token::LeftBracket, Token::NumberIndex(index), Token::RightBracket, ..] => {
                let accessor = Accessor::Index(*index);
                self.index += 3;
                Some(accessor)
            }
            _ => None,
        }
    }

    fn array_wildcard_accessor(&mut self) -> Option<Accessor> {
        match self.rest() {
            [Token::LeftBracket, Token::Asterisk, Token::RightBracket, ..] => {
                self.index += 3;
                Some(Accessor::Wildcard)
            }
            _ => None,
        }
    }

    fn rest(&self) -> &'a [Token] {
        &self.tokens[self.index..]
    }
}

/// Parses a token sequence into a path expression.
pub fn parse_path(tokens: &[Token]) -> Result<PathExpr, ParseError> {
    Parser::new(tokens).parse()
}
