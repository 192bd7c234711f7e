//! Functions to query properties of nodes.
//!
//! These are all shape checks. They never fail; a node of the wrong shape just answers `false`
//! (or `None` for the accessors).

use rust_decimal::Decimal;

use crate::decimal_ext::{numeral_is_whole, DecimalExtensions};

use super::tree::{Node, Operator};

impl Node {
    pub fn is_identifier(&self) -> bool {
        matches!(self, Node::Identifier(_))
    }

    pub fn is_apply(&self) -> bool {
        matches!(self, Node::Apply(_))
    }

    pub fn is_parens(&self) -> bool {
        matches!(self, Node::Parentheses(_))
    }

    /// Deprecated upstream; prefer [is_apply](Node::is_apply). An `Apply` which isn't a
    /// (possibly negated) number.
    pub fn is_operation(&self) -> bool {
        self.is_apply() && !self.is_number()
    }

    /// Returns true for a call to a named function like `sin(x)`, where the operator is an
    /// identifier rather than one of the built-in operators.
    pub fn is_function(&self) -> bool {
        matches!(self, Node::Apply(a) if matches!(a.op, Operator::Function(_)))
    }

    /// Returns true if this is an `Apply` of exactly this operator.
    pub fn is_op(&self, op: &Operator) -> bool {
        matches!(self, Node::Apply(a) if a.op == *op)
    }

    pub fn is_add(&self) -> bool { self.is_op(&Operator::Add) }
    pub fn is_mul(&self) -> bool { self.is_op(&Operator::Mul) }
    pub fn is_div(&self) -> bool { self.is_op(&Operator::Div) }
    pub fn is_pow(&self) -> bool { self.is_op(&Operator::Pow) }
    pub fn is_neg(&self) -> bool { self.is_op(&Operator::Neg) }
    pub fn is_pos(&self) -> bool { self.is_op(&Operator::Pos) }
    pub fn is_abs(&self) -> bool { self.is_op(&Operator::Abs) }
    pub fn is_fact(&self) -> bool { self.is_op(&Operator::Fact) }
    pub fn is_nth_root(&self) -> bool { self.is_op(&Operator::NthRoot) }

    /// Returns true for a division, or a division under any number of negations: `2/3`,
    /// `-(2/3)` and `--(2/3)` are all fractions.
    pub fn is_fraction(&self) -> bool {
        if self.is_neg() {
            self.first_arg().map_or(false, Node::is_fraction)
        } else {
            self.is_div()
        }
    }

    /// A fraction whose operands are both numbers. Only the top-level operands are inspected,
    /// so the numbers of a negated fraction are not looked at.
    pub fn is_constant_fraction(&self) -> bool {
        self.is_fraction() && self.args().iter().all(Node::is_number)
    }

    pub fn is_integer_fraction(&self) -> bool {
        self.is_fraction() && self.args().iter().all(Node::is_integer)
    }

    /// Returns true for a numeral, or a numeral under any number of negations. A numeral under a
    /// unary plus is not a number.
    pub fn is_number(&self) -> bool {
        match self {
            Node::Number(_) => true,
            _ if self.is_neg() => self.first_arg().map_or(false, Node::is_number),
            _ => false,
        }
    }

    /// Returns true for numbers with no fractional part. This is read from the numeral itself,
    /// so it holds for integers too large for [value](Node::value).
    pub fn is_integer(&self) -> bool {
        self.numeral().and_then(numeral_is_whole).unwrap_or(false)
    }

    /// Returns true for numbers with a fractional part, like `2.2` or `-0.5`.
    pub fn is_decimal(&self) -> bool {
        self.numeral().and_then(numeral_is_whole).map_or(false, |whole| !whole)
    }

    /// The source text of a number, under any negations.
    fn numeral(&self) -> Option<&str> {
        match self {
            Node::Number(numeral) => Some(numeral.as_str()),
            _ if self.is_neg() => self.first_arg()?.numeral(),
            _ => None,
        }
    }

    pub fn is_rel(&self) -> bool {
        matches!(self, Node::Apply(a) if a.op.is_relation())
    }

    /// Returns true for an implicit multiplication such as `2x`, also looking through
    /// negations, so `-2x` is implicit too.
    pub fn is_implicit(&self) -> bool {
        match self {
            Node::Apply(a) if a.op == Operator::Mul => a.implicit,
            _ if self.is_neg() => self.first_arg().map_or(false, Node::is_implicit),
            _ => false,
        }
    }

    /// The value of a numeral, looking through negations and unary pluses. Check
    /// [is_number](Node::is_number) first if the distinction matters.
    ///
    /// Returns `None` for anything else, or if the numeral can't be read exactly.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Node::Number(numeral) => Decimal::from_numeral(numeral),
            _ if self.is_neg() => self.first_arg()?.value().map(|v| -v),
            _ if self.is_pos() => self.first_arg()?.value(),
            _ => None,
        }
    }

    /// The numerator of a fraction, looking through any negations around it. Note that the
    /// negation is not carried onto the result: the numerator of `-(2/3)` is `2`.
    pub fn numerator(&self) -> Option<&Node> {
        if !self.is_fraction() {
            return None;
        }

        if self.is_neg() {
            self.first_arg()?.numerator()
        } else {
            self.args().get(0)
        }
    }

    /// The denominator of a fraction, looking through any negations around it.
    pub fn denominator(&self) -> Option<&Node> {
        if !self.is_fraction() {
            return None;
        }

        if self.is_neg() {
            self.first_arg()?.denominator()
        } else {
            self.args().get(1)
        }
    }
}
