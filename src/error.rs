use alloc::fmt;

pub trait Error : alloc::fmt::Display + alloc::fmt::Debug {}

/// An error encountered while turning text into a node tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// A character which can't begin any token.
    UnexpectedCharacter(char),

    /// Parsing finished, but there was more input left over.
    UnexpectedTokensAtEnd,

    /// A number, identifier, or bracketed expression was expected, but something else (or
    /// nothing at all) was found.
    ExpectedUnit,

    /// An opening bracket or bar was never closed.
    UnclosedGroup,

    /// A number contained more than one decimal point.
    MalformedNumber,
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NodeError::UnexpectedCharacter(c) => write!(f, "unexpected character '{}'", c),
            NodeError::UnexpectedTokensAtEnd => write!(f, "unexpected tokens at end of input"),
            NodeError::ExpectedUnit => write!(f, "expected a number, identifier or group"),
            NodeError::UnclosedGroup => write!(f, "unclosed parentheses or absolute value"),
            NodeError::MalformedNumber => write!(f, "malformed number"),
        }
    }
}
impl Error for NodeError {}
