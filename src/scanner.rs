//! Lexical scanner for path expressions.

use crate::error::ParseError;
use crate::token::Token;

/// Maximum number of characters of unconsumed input quoted in scan errors.
const ERROR_PREVIEW_LEN: usize = 10;

/// Splits a path expression into tokens.
///
/// Scanning is a single left-to-right pass. At each position the rules are
/// tried in fixed priority order: an identifier (`[a-zA-Z][a-zA-Z0-9]*`),
/// a digit run (`[0-9]+`), then the single-character tokens `$`, `[`, `]`,
/// `*`, `.`. The matched prefix is consumed and scanning continues; if no
/// rule matches, scanning fails with a preview of the remaining input.
///
/// An empty input is valid and yields an empty token list.
pub fn tokenize(path: &str) -> Result<Vec<Token>, ParseError> {
    let mut rest = path;
    let mut tokens = Vec::new();

    while !rest.is_empty() {
        if let Some((ident, tail)) = scan_identifier(rest) {
            tokens.push(Token::Identifier(ident.to_string()));
            rest = tail;
        } else if let Some((digits, tail)) = scan_digits(rest) {
            // A digit run too long for usize cannot name a real index.
            let index = digits
                .parse::<usize>()
                .map_err(|_| ParseError::unrecognized(rest, ERROR_PREVIEW_LEN))?;
            tokens.push(Token::NumberIndex(index));
            rest = tail;
        } else {
            let token = match rest.as_bytes()[0] {
                b'$' => Token::Dollar,
                b'[' => Token::LeftBracket,
                b']' => Token::RightBracket,
                b'*' => Token::Asterisk,
                b'.' => Token::Dot,
                _ => return Err(ParseError::unrecognized(rest, ERROR_PREVIEW_LEN)),
            };
            tokens.push(token);
            rest = &rest[1..];
        }
    }

    Ok(tokens)
}

/// Matches an identifier prefix, returning it and the remaining input.
fn scan_identifier(input: &str) -> Option<(&str, &str)> {
    if !input.as_bytes().first()?.is_ascii_alphabetic() {
        return None;
    }
    let len = input
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    Some(input.split_at(len))
}

/// Matches a digit-run prefix, returning it and the remaining input.
fn scan_digits(input: &str) -> Option<(&str, &str)> {
    let len = input.bytes().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        None
    } else {
        Some(input.split_at(len))
    }
}
