//! The definition of the node tree itself.

use alloc::{boxed::Box, string::String, vec::Vec};

/// A symbolic variable, optionally with a subscript (e.g. `x_1`).
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Identifier {
    pub name: String,
    pub subscript: Option<Box<Node>>,
}

/// The operator of an [Apply] node.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Operator {
    /// Variadic addition. Subtraction is represented as addition of a [Operator::Neg].
    Add,

    /// Variadic multiplication, either explicit (`2 * x`) or implicit (`2x`).
    Mul,

    /// Binary division, `[numerator, denominator]`.
    Div,

    /// Binary exponentiation, `[base, exponent]`.
    Pow,

    Neg,
    Pos,
    Abs,
    Fact,

    /// `[radicand]` or `[radicand, index]`.
    NthRoot,

    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,

    /// A call to a named function, such as `sin(x)`. Unlike every other operator, the operator
    /// here is itself an identifier.
    Function(Identifier),
}

impl Operator {
    /// The short name of this operator, as used in the tree format this crate models. Functions
    /// return their identifier's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Add => "add",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Pow => "pow",
            Self::Neg => "neg",
            Self::Pos => "pos",
            Self::Abs => "abs",
            Self::Fact => "fact",
            Self::NthRoot => "nthRoot",
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::Function(id) => &id.name,
        }
    }

    /// If this is a relation, returns the symbol used to write it.
    pub fn relation_symbol(&self) -> Option<&'static str> {
        match self {
            Self::Eq => Some("="),
            Self::Ne => Some("!="),
            Self::Lt => Some("<"),
            Self::Le => Some("<="),
            Self::Gt => Some(">"),
            Self::Ge => Some(">="),
            _ => None,
        }
    }

    /// Returns true if this operator is one of the six relations.
    pub fn is_relation(&self) -> bool {
        self.relation_symbol().is_some()
    }
}

/// An operator applied to an ordered list of arguments.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Apply {
    pub op: Operator,
    pub args: Vec<Node>,

    /// Set on a `mul` which had no operator in the source text, like `2x`.
    pub implicit: bool,

    /// Set on a `neg` which came from a subtraction, like the `-b` in `a - b`.
    pub was_minus: bool,
}

/// A node in a mathematical expression tree.
///
/// Nodes are treated as immutable values. Anything which "modifies" a node builds a new one,
/// usually through the functions in [build](crate::node::build).
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Node {
    /// A literal numeral, kept as its exact source text.
    Number(String),
    Identifier(Identifier),
    Apply(Apply),
    Parentheses(Box<Node>),
}

impl Node {
    /// If this is an `Apply`, returns it.
    pub fn as_apply(&self) -> Option<&Apply> {
        if let Node::Apply(apply) = self {
            Some(apply)
        } else {
            None
        }
    }

    /// If this is an `Apply`, returns its arguments, otherwise an empty slice.
    pub fn args(&self) -> &[Node] {
        match self {
            Node::Apply(apply) => &apply.args[..],
            _ => &[],
        }
    }

    /// The first argument of an `Apply`. Useful for peeling unary operators.
    pub(crate) fn first_arg(&self) -> Option<&Node> {
        self.args().first()
    }
}
