//! Recognisers for polynomials and their terms.
//!
//! Each rule is a structural check over the node and its children; there's no backtracking.

use super::tree::Node;

impl Node {
    /// Returns true for a sum whose every term is a [polynomial term](Node::is_polynomial_term).
    pub fn is_polynomial(&self) -> bool {
        self.is_add() && self.args().iter().all(Node::is_polynomial_term)
    }

    /// Returns true for an identifier, or an identifier raised to a number or to another
    /// variable factor, e.g. `x`, `x^2`, `x^y^2`.
    pub fn is_variable_factor(&self) -> bool {
        if self.is_identifier() {
            return true;
        }

        match self.args() {
            [base, exponent] if self.is_pow() =>
                base.is_identifier()
                    && (exponent.is_number() || exponent.is_variable_factor()),
            _ => false,
        }
    }

    /// Returns true for monomial-like nodes:
    ///   - numbers, constant fractions and decimals;
    ///   - identifiers;
    ///   - powers whose base is an identifier or a polynomial, and whose exponent is a term;
    ///   - a negated term;
    ///   - a product of terms.
    pub fn is_polynomial_term(&self) -> bool {
        if self.is_number() || self.is_constant_fraction() || self.is_decimal() {
            true
        } else if self.is_identifier() {
            true
        } else if self.is_pow() {
            match self.args() {
                [base, exponent] =>
                    (base.is_identifier() || base.is_polynomial()) && exponent.is_polynomial_term(),
                _ => false,
            }
        } else if self.is_neg() {
            self.first_arg().map_or(false, Node::is_polynomial_term)
        } else if self.is_mul() {
            self.args().iter().all(Node::is_polynomial_term)
        } else {
            false
        }
    }

    /// Returns true for a power of a number, like `2^x`. Such powers aren't grouped with
    /// variable terms.
    pub fn has_constant_base(&self) -> bool {
        self.is_pow() && self.first_arg().map_or(false, Node::is_number)
    }
}
