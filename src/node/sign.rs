//! Sign flipping of terms, keeping their shape where possible.

use alloc::vec::Vec;

use super::build::{self, ApplyOptions};
use super::tree::{Node, Operator};

impl Node {
    /// Flips the sign of this node, in canonical form:
    ///   - `-x` becomes `x`
    ///   - `x + 3` becomes `-(x + 3)`
    ///   - `2/3` becomes `-2 / 3`
    ///   - `(-3) x` becomes `3 x`
    ///   - `3` becomes `-3`, and `3x` becomes `-3x`
    ///
    /// Returns `None` for nodes which are none of these, such as functions or relations.
    pub fn negate(&self) -> Option<Node> {
        if self.is_neg() {
            return self.first_arg().cloned();
        }

        if self.is_add() {
            return Some(build::neg(self.clone(), ApplyOptions::default()));
        }

        if self.is_fraction() {
            let numerator = self.numerator()?.negate()?;
            return Some(build::div(numerator, self.denominator()?.clone()));
        }

        if self.is_polynomial_term() {
            let coefficient = self.coefficient()?;

            if let (Node::Apply(c), Node::Apply(term)) = (&coefficient, self) {
                let position = term.args.iter().position(|a| *a == coefficient);
                if let (Operator::Neg, Operator::Mul, Some(i)) = (&c.op, &term.op, position) {
                    // Swap the negative coefficient for its positive, keeping the other factors
                    let mut args = Vec::with_capacity(term.args.len());
                    args.push(coefficient.negate()?);
                    args.extend(term.args.iter().enumerate().filter(|(j, _)| *j != i).map(|(_, a)| a.clone()));

                    return Some(build::apply(
                        Operator::Mul,
                        args,
                        ApplyOptions { implicit: term.implicit, ..Default::default() },
                    ));
                }
            }

            return Some(build::neg(self.clone(), ApplyOptions::default()));
        }

        None
    }
}
