//! Splits expression text into [Token]s for the [parser](super::parser).

use alloc::{string::String, vec::Vec};

use crate::error::NodeError;

/// A token which may appear in expression text.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Token {
    /// An addition symbol.
    Add,

    /// A subtraction symbol, also used for unary negation.
    Subtract,

    /// A multiplication symbol. (It is possible for implicit multiplications to appear too, if
    /// units are adjacent.)
    Multiply,

    /// A division symbol.
    Divide,

    /// An exponentiation symbol, `^`.
    Power,

    /// A factorial symbol, `!`, when not part of `!=`.
    Factorial,

    /// An underscore, introducing an identifier's subscript.
    Subscript,

    LeftParenthesis,
    RightParenthesis,

    /// An absolute value bar. The same token opens and closes.
    Bar,

    Comma,

    /// A relation symbol, such as `<=`.
    Relation(&'static str),

    /// A numeral, kept as its source text, e.g. `12.5`.
    Number(String),

    /// A run of letters. The parser decides whether this is a function name or a sequence of
    /// single-letter variables.
    Word(String),
}

impl Token {
    /// Attempts to convert the given character to a single-character `Token`, or returns `None`
    /// if this is not possible.
    ///
    /// Numbers, words and relations may span several characters, so they are not returned here.
    pub fn from_char(c: char) -> Option<Token> {
        match c {
            '+' => Some(Token::Add),
            '-' => Some(Token::Subtract),
            '*' => Some(Token::Multiply),
            '/' => Some(Token::Divide),
            '^' => Some(Token::Power),
            '_' => Some(Token::Subscript),
            '(' => Some(Token::LeftParenthesis),
            ')' => Some(Token::RightParenthesis),
            '|' => Some(Token::Bar),
            ',' => Some(Token::Comma),
            _ => None,
        }
    }
}

/// Converts text into a list of tokens. Whitespace is skipped.
pub fn tokenize(text: &str) -> Result<Vec<Token>, NodeError> {
    let chars = text.chars().collect::<Vec<_>>();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c.is_whitespace() {
            i += 1;
        } else if c.is_ascii_digit() || (c == '.' && next.map_or(false, |n| n.is_ascii_digit())) {
            let start = i;
            let mut seen_point = false;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    if seen_point {
                        return Err(NodeError::MalformedNumber);
                    }
                    seen_point = true;
                }
                i += 1;
            }
            tokens.push(Token::Number(chars[start..i].iter().collect()));
        } else if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            tokens.push(Token::Word(chars[start..i].iter().collect()));
        } else {
            let (token, length) = match (c, next) {
                ('<', Some('=')) => (Token::Relation("<="), 2),
                ('>', Some('=')) => (Token::Relation(">="), 2),
                ('!', Some('=')) => (Token::Relation("!="), 2),
                ('<', _) => (Token::Relation("<"), 1),
                ('>', _) => (Token::Relation(">"), 1),
                ('=', _) => (Token::Relation("="), 1),
                ('!', _) => (Token::Factorial, 1),
                _ => (Token::from_char(c).ok_or(NodeError::UnexpectedCharacter(c))?, 1),
            };
            tokens.push(token);
            i += length;
        }
    }

    Ok(tokens)
}
