use alloc::{string::String, vec, vec::Vec};
use core::{mem, str::FromStr};
use log::trace;

use crate::error::NodeError;

use super::build::{self, ApplyOptions};
use super::token::{tokenize, Token};
use super::tree::{Identifier, Node, Operator};

/// Parses expression text into a node tree.
///
/// Sums and products are flattened into single variadic nodes, subtraction becomes addition of a
/// negation marked with `was_minus`, and adjacent units like `2x` become an implicit
/// multiplication.
pub fn parse(text: &str) -> Result<Node, NodeError> {
    let tokens = tokenize(text)?;
    trace!("tokenized {:?} into {:?}", text, tokens);

    Parser { tokens, index: 0 }.parse()
}

impl FromStr for Node {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Converts a list of tokens into a single node.
pub struct Parser {
    pub tokens: Vec<Token>,
    pub index: usize,
}

impl Parser {
    pub fn parse(&mut self) -> Result<Node, NodeError> {
        let result = self.parse_relation()?;

        // Leftover tokens is an error
        if self.index < self.tokens.len() {
            Err(NodeError::UnexpectedTokensAtEnd)
        } else {
            Ok(result)
        }
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn next(&self) -> Option<&Token> {
        self.tokens.get(self.index + 1)
    }

    fn eoi(&self) -> bool {
        self.index >= self.tokens.len()
    }

    fn expect(&mut self, token: Token) -> Result<(), NodeError> {
        if self.current() == Some(&token) {
            self.advance();
            Ok(())
        } else {
            Err(NodeError::UnclosedGroup)
        }
    }

    /// Returns true if the current token can begin a unit which is implicitly multiplied with the
    /// previous one, e.g. the `x` in `2x`.
    fn at_implicit_operand(&self) -> bool {
        matches!(
            self.current(),
            Some(Token::Number(_) | Token::Word(_) | Token::LeftParenthesis)
        )
    }

    fn parse_relation(&mut self) -> Result<Node, NodeError> {
        let mut operands = vec![self.parse_sum()?];
        let mut chained: Option<&'static str> = None;

        while let Some(Token::Relation(symbol)) = self.current() {
            let symbol = *symbol;
            self.advance();
            let right = self.parse_sum()?;

            // `a < b < c` is one relation with three operands, but `a < b = c` nests
            match chained {
                Some(previous) if previous != symbol => {
                    let left = relation(previous, mem::take(&mut operands));
                    operands = vec![left, right];
                },
                _ => operands.push(right),
            }
            chained = Some(symbol);
        }

        Ok(match chained {
            Some(symbol) => relation(symbol, operands),
            None => operands.remove(0),
        })
    }

    fn parse_sum(&mut self) -> Result<Node, NodeError> {
        let mut terms = vec![self.parse_product()?];

        while !self.eoi() {
            match self.current() {
                Some(Token::Add) => {
                    self.advance();
                    terms.push(self.parse_product()?);
                },
                Some(Token::Subtract) => {
                    self.advance();
                    let subtrahend = self.parse_product()?;
                    terms.push(build::neg(subtrahend, ApplyOptions::was_minus()));
                },
                _ => break,
            }
        }

        Ok(if terms.len() == 1 { terms.remove(0) } else { build::add(terms) })
    }

    fn parse_product(&mut self) -> Result<Node, NodeError> {
        // Operands of the explicit multiplication currently being built
        let mut factors = vec![self.parse_unary()?];

        while !self.eoi() {
            match self.current() {
                Some(Token::Multiply) => {
                    self.advance();
                    factors.push(self.parse_unary()?);
                },
                Some(Token::Divide) => {
                    self.advance();
                    let denominator = self.parse_unary()?;
                    let numerator = product(mem::take(&mut factors));
                    factors.push(build::div(numerator, denominator));
                },
                _ => break,
            }
        }

        Ok(product(factors))
    }

    fn parse_unary(&mut self) -> Result<Node, NodeError> {
        // Brackets directly under a sign are redundant, so `-(2/3)` negates the fraction itself
        match self.current() {
            Some(Token::Subtract) => {
                self.advance();
                let operand = self.parse_unary()?;
                Ok(build::neg(unwrap_parentheses(operand), ApplyOptions::default()))
            },
            Some(Token::Add) => {
                self.advance();
                let operand = self.parse_unary()?;
                Ok(build::pos(unwrap_parentheses(operand)))
            },
            _ => self.parse_implicit(),
        }
    }

    fn parse_implicit(&mut self) -> Result<Node, NodeError> {
        let mut factors = vec![self.parse_power()?];

        // Construct implicit multiplications as long as the next token is one which can be
        // implicitly multiplied with. "2x" will initially parse as "2", then this loop picks up
        // the "x".
        while self.at_implicit_operand() {
            factors.push(self.parse_power()?);
        }

        Ok(if factors.len() == 1 { factors.remove(0) } else { build::implicit_mul(factors) })
    }

    fn parse_power(&mut self) -> Result<Node, NodeError> {
        let base = self.parse_postfix()?;

        if let Some(Token::Power) = self.current() {
            self.advance();
            let exponent = self.parse_exponent()?;
            Ok(build::pow(base, exponent))
        } else {
            Ok(base)
        }
    }

    /// Exponents may be signed, as in `x^-2`, and are right-associative.
    fn parse_exponent(&mut self) -> Result<Node, NodeError> {
        match self.current() {
            Some(Token::Subtract) => {
                self.advance();
                Ok(build::neg(self.parse_exponent()?, ApplyOptions::default()))
            },
            Some(Token::Add) => {
                self.advance();
                Ok(build::pos(self.parse_exponent()?))
            },
            _ => self.parse_power(),
        }
    }

    fn parse_postfix(&mut self) -> Result<Node, NodeError> {
        let mut out = self.parse_unit()?;
        while let Some(Token::Factorial) = self.current() {
            self.advance();
            out = build::fact(out);
        }
        Ok(out)
    }

    fn parse_unit(&mut self) -> Result<Node, NodeError> {
        match self.current().cloned() {
            Some(Token::Number(numeral)) => {
                self.advance();
                Ok(build::number(numeral))
            },

            Some(Token::Word(word)) => {
                if word.chars().count() > 1 && self.next() == Some(&Token::LeftParenthesis) {
                    self.advance();
                    self.parse_call(word)
                } else {
                    self.parse_identifier(word)
                }
            },

            Some(Token::LeftParenthesis) => {
                self.advance();
                let inner = self.parse_relation()?;
                self.expect(Token::RightParenthesis)?;
                Ok(build::parens(inner))
            },

            Some(Token::Bar) => {
                self.advance();
                let inner = self.parse_relation()?;
                self.expect(Token::Bar)?;
                Ok(build::abs(inner))
            },

            _ => Err(NodeError::ExpectedUnit),
        }
    }

    /// Takes one letter from the current word as an identifier. Any remaining letters are left
    /// as the current token, so `xy` is read as `x` implicitly multiplied by `y`.
    fn parse_identifier(&mut self, word: String) -> Result<Node, NodeError> {
        let mut letters = word.chars();
        let name = letters.next().ok_or(NodeError::ExpectedUnit)?;
        let rest = letters.collect::<String>();

        if rest.is_empty() {
            self.advance();
        } else {
            self.tokens[self.index] = Token::Word(rest);
            return Ok(build::identifier(name));
        }

        if let Some(Token::Subscript) = self.current() {
            self.advance();
            let subscript = match self.current().cloned() {
                Some(Token::Number(numeral)) => {
                    self.advance();
                    build::number(numeral)
                },
                _ => self.parse_unit()?,
            };
            return Ok(build::identifier_with_subscript(name, subscript));
        }

        Ok(build::identifier(name))
    }

    /// Parses the bracketed arguments of a call to the function `name`, with the current token
    /// being the opening bracket.
    fn parse_call(&mut self, name: String) -> Result<Node, NodeError> {
        self.expect(Token::LeftParenthesis)?;

        let mut args = vec![];
        if self.current() != Some(&Token::RightParenthesis) {
            args.push(self.parse_relation()?);
            while let Some(Token::Comma) = self.current() {
                self.advance();
                args.push(self.parse_relation()?);
            }
        }
        self.expect(Token::RightParenthesis)?;

        // A missing root index stays missing; only the builder fills in a default
        let op = if name == "nthRoot" {
            Operator::NthRoot
        } else {
            Operator::Function(Identifier { name, subscript: None })
        };
        Ok(build::apply(op, args, ApplyOptions::default()))
    }
}

fn unwrap_parentheses(node: Node) -> Node {
    match node {
        Node::Parentheses(body) => *body,
        other => other,
    }
}

fn product(mut factors: Vec<Node>) -> Node {
    if factors.len() == 1 {
        factors.remove(0)
    } else {
        build::mul(factors)
    }
}

fn relation(symbol: &str, operands: Vec<Node>) -> Node {
    let op = match symbol {
        "=" => Operator::Eq,
        "!=" => Operator::Ne,
        "<" => Operator::Lt,
        "<=" => Operator::Le,
        ">" => Operator::Gt,
        _ => Operator::Ge,
    };
    build::apply(op, operands, ApplyOptions::default())
}
