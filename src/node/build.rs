//! Functions to build nodes.
//!
//! Every builder is total and returns a freshly constructed node. The encodings here are the
//! ones the rest of the crate recognises; for example [sub] does not introduce a subtraction
//! operator, so `is_add` still holds for anything built from it.

use alloc::{boxed::Box, string::{String, ToString}, vec, vec::Vec};

use super::tree::{Apply, Identifier, Node, Operator};

/// Optional flags merged onto an [Apply] node by [apply].
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    pub implicit: bool,
    pub was_minus: bool,
}

impl ApplyOptions {
    /// Options for a `neg` which came from a subtraction.
    pub fn was_minus() -> ApplyOptions {
        ApplyOptions { was_minus: true, ..Default::default() }
    }

    /// Options for a `mul` written by juxtaposition.
    pub fn implicit() -> ApplyOptions {
        ApplyOptions { implicit: true, ..Default::default() }
    }
}

pub fn apply(op: Operator, args: Vec<Node>, options: ApplyOptions) -> Node {
    Node::Apply(Apply {
        op,
        args,
        implicit: options.implicit,
        was_minus: options.was_minus,
    })
}

// Operations

pub fn neg(arg: Node, options: ApplyOptions) -> Node {
    apply(Operator::Neg, vec![arg], options)
}

pub fn pos(arg: Node) -> Node {
    apply(Operator::Pos, vec![arg], ApplyOptions::default())
}

pub fn add(terms: Vec<Node>) -> Node {
    apply(Operator::Add, terms, ApplyOptions::default())
}

/// `minuend - subtrahend`, encoded as `minuend + (-subtrahend)` with the negation marked as
/// having come from a minus sign.
pub fn sub(minuend: Node, subtrahend: Node) -> Node {
    add(vec![minuend, neg(subtrahend, ApplyOptions::was_minus())])
}

pub fn mul(args: Vec<Node>) -> Node {
    apply(Operator::Mul, args, ApplyOptions::default())
}

pub fn implicit_mul(args: Vec<Node>) -> Node {
    apply(Operator::Mul, args, ApplyOptions::implicit())
}

pub fn div(numerator: Node, denominator: Node) -> Node {
    apply(Operator::Div, vec![numerator, denominator], ApplyOptions::default())
}

pub fn pow(base: Node, exponent: Node) -> Node {
    apply(Operator::Pow, vec![base, exponent], ApplyOptions::default())
}

pub fn abs(arg: Node) -> Node {
    apply(Operator::Abs, vec![arg], ApplyOptions::default())
}

pub fn fact(arg: Node) -> Node {
    apply(Operator::Fact, vec![arg], ApplyOptions::default())
}

/// Builds an `nthRoot`. Without an index this is a square root, and the index `2` is written
/// into the node explicitly.
pub fn nth_root(radicand: Node, index: Option<Node>) -> Node {
    apply(
        Operator::NthRoot,
        vec![radicand, index.unwrap_or_else(|| number(2))],
        ApplyOptions::default(),
    )
}

/// A call to the function `name`, e.g. `function("sin", vec![x])`.
pub fn function(name: impl Into<String>, args: Vec<Node>) -> Node {
    let op = Operator::Function(Identifier { name: name.into(), subscript: None });
    apply(op, args, ApplyOptions::default())
}

// Relations

pub fn eq(args: Vec<Node>) -> Node { apply(Operator::Eq, args, ApplyOptions::default()) }
pub fn ne(args: Vec<Node>) -> Node { apply(Operator::Ne, args, ApplyOptions::default()) }
pub fn lt(args: Vec<Node>) -> Node { apply(Operator::Lt, args, ApplyOptions::default()) }
pub fn le(args: Vec<Node>) -> Node { apply(Operator::Le, args, ApplyOptions::default()) }
pub fn gt(args: Vec<Node>) -> Node { apply(Operator::Gt, args, ApplyOptions::default()) }
pub fn ge(args: Vec<Node>) -> Node { apply(Operator::Ge, args, ApplyOptions::default()) }

// Leaves

pub fn identifier(name: impl Into<String>) -> Node {
    Node::Identifier(Identifier { name: name.into(), subscript: None })
}

pub fn identifier_with_subscript(name: impl Into<String>, subscript: Node) -> Node {
    Node::Identifier(Identifier { name: name.into(), subscript: Some(Box::new(subscript)) })
}

/// Builds a `Number` from anything printable, keeping its text exactly, so `number("2.50")`
/// stays `2.50`.
pub fn number(value: impl ToString) -> Node {
    Node::Number(value.to_string())
}

pub fn parens(body: Node) -> Node {
    Node::Parentheses(Box::new(body))
}
