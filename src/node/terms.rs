//! Decomposition of polynomial terms into coefficients and variable factors, and grouping of
//! like terms.

use alloc::{collections::BTreeMap, string::String, vec, vec::Vec};
use log::{debug, trace};

use crate::print::Printer;

use super::build::{self, ApplyOptions};
use super::tree::{Node, Operator};

/// The result of [coefficients_and_constants](Node::coefficients_and_constants): the terms of
/// an expression, split into groups.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Decomposition {
    /// Coefficients of each group of like terms, keyed by the printed text of the group's
    /// variable factors. For `2x + 3x`, this is `x => [2, 3]`.
    pub coefficient_map: BTreeMap<String, Vec<Node>>,

    /// Numbers and constant fractions.
    pub constants: Vec<Node>,

    /// Anything which is neither a constant nor a groupable term.
    pub others: Vec<Node>,
}

/// Stable-sorts variable factors by [name](Node::variable_factor_name), so that `y x` and `x y`
/// produce the same list.
pub fn sort_variables(mut variables: Vec<Node>) -> Vec<Node> {
    variables.sort_by(|a, b| a.variable_factor_name().cmp(&b.variable_factor_name()));
    variables
}

impl Node {
    /// The name of the variable in a variable factor: `x` for both `x` and `x^2`.
    pub fn variable_factor_name(&self) -> Option<&str> {
        match self {
            Node::Identifier(id) => Some(id.name.as_str()),
            _ if self.is_pow() => self.first_arg()?.variable_factor_name(),
            _ => None,
        }
    }

    /// The variable factors of a term, in their original order. Numeric factors are dropped, so
    /// the variable factors of `3 x y^2` are `x` and `y^2`.
    ///
    /// Negations are looked through, but only at the top of the term.
    pub fn variable_factors(&self) -> Vec<Node> {
        if self.is_variable_factor() {
            vec![self.clone()]
        } else if self.is_mul() {
            self.args().iter().filter(|a| a.is_variable_factor()).cloned().collect()
        } else if self.is_neg() {
            // TODO: (x)(-y)(z) loses the inner negation; combine signs across factors
            self.first_arg().map(Node::variable_factors).unwrap_or_default()
        } else {
            vec![]
        }
    }

    /// The numeric coefficient of a polynomial term:
    ///   - A number is its own coefficient.
    ///   - Identifiers and powers have a coefficient of `1`.
    ///   - A negation's coefficient is the negation of its inner coefficient, keeping the
    ///     original `was_minus` flag.
    ///   - A product's coefficient is its numeric factors: the single one if there's only one,
    ///     or a new product of them if there are several.
    ///
    /// Returns `None` for other shapes.
    pub fn coefficient(&self) -> Option<Node> {
        match self {
            _ if self.is_number() => Some(self.clone()),
            Node::Identifier(_) => Some(build::number(1)),
            _ if self.is_pow() => Some(build::number(1)),
            Node::Apply(a) if a.op == Operator::Neg => {
                let inner = a.args.first()?.coefficient()?;
                Some(build::neg(inner, ApplyOptions { was_minus: a.was_minus, ..Default::default() }))
            },
            Node::Apply(a) if a.op == Operator::Mul => {
                let mut numbers = a.args.iter()
                    .filter(|n| n.is_number() || n.is_constant_fraction())
                    .cloned()
                    .collect::<Vec<_>>();

                Some(match numbers.len() {
                    0 => build::number(1),
                    1 => numbers.remove(0),
                    _ => build::mul(numbers),
                })
            },
            _ => None,
        }
    }

    /// The degree of a single-variable polynomial term, e.g. `2` for `6x^2`.
    ///
    /// Multivariable terms are not supported: for a product, this is the degree of its second
    /// factor.
    ///
    /// # Panics
    ///
    /// A negated term is assumed to wrap an operator with an exponent-like second argument,
    /// such as `-(x^2)`. Panics if the negated node has no second argument, e.g. `-x`.
    pub fn poly_degree(&self) -> Option<Node> {
        if self.is_number() {
            Some(build::number(0))
        } else if self.is_identifier() || self.is_polynomial() {
            Some(build::number(1))
        } else if self.is_pow() {
            self.args().get(1).cloned()
        } else if self.is_mul() {
            self.args().get(1)?.poly_degree()
        } else if self.is_neg() {
            let variable = self.first_arg()?;
            match variable.args().get(1) {
                Some(exponent) => Some(exponent.clone()),
                None => panic!("cannot get the degree of negated node {:?}", variable),
            }
        } else {
            None
        }
    }

    /// Splits an expression into groups of like terms, constants, and everything else. See
    /// [collect_coefficients_and_constants](Node::collect_coefficients_and_constants) for the
    /// rules; this starts from an empty [Decomposition].
    pub fn coefficients_and_constants(&self, printer: &impl Printer) -> Decomposition {
        let mut decomposition = Decomposition::default();
        self.collect_coefficients_and_constants(printer, &mut decomposition);
        decomposition
    }

    /// Walks this expression depth-first, adding its terms to `into`:
    ///   - Numbers and constant fractions are constants.
    ///   - Polynomials are recursed into.
    ///   - Polynomial terms with variable factors (and no constant base) have their coefficient
    ///     added to the list keyed by the printed, sorted variable factors.
    ///   - Any other operator application is recursed into.
    ///   - Anything else is added to `others`.
    ///
    /// A key for several factors is printed as a product with the same implicitness as the
    /// term, so `2xy` and `3 * x * y` are grouped separately.
    pub fn collect_coefficients_and_constants(&self, printer: &impl Printer, into: &mut Decomposition) {
        if self.is_number() || self.is_constant_fraction() {
            into.constants.push(self.clone());
            return;
        }

        if self.is_polynomial() {
            for arg in self.args() {
                arg.collect_coefficients_and_constants(printer, into);
            }
            return;
        }

        if self.is_polynomial_term() && !self.has_constant_base() {
            let variables = sort_variables(self.variable_factors());
            let key = variable_key(variables, self.is_implicit(), printer);

            if let (Some(key), Some(coefficient)) = (key, self.coefficient()) {
                debug!("grouping term under {}", key);
                into.coefficient_map.entry(key).or_default().push(coefficient);
                return;
            }
        }

        if self.is_apply() {
            trace!("recursing into {}", self.as_apply().map_or("", |a| a.op.name()));
            for arg in self.args() {
                arg.collect_coefficients_and_constants(printer, into);
            }
        } else {
            into.others.push(self.clone());
        }
    }

    /// Returns true if the two nodes share a base: they print identically, or one is a power of
    /// the other, or both are powers of the same base.
    ///
    /// For example `(x + 1)^3` and `x + 1` do, but `x^2` and `(x + 1)^2` do not.
    pub fn has_same_base(&self, other: &Node, printer: &impl Printer) -> bool {
        let power_base = |n: &Node| if n.is_pow() { n.first_arg().map(|b| printer.print(b)) } else { None };

        let this = printer.print(self);
        let that = printer.print(other);
        let this_base = power_base(self);
        let that_base = power_base(other);

        this == that
            || this_base.as_ref() == Some(&that)
            || that_base.as_ref() == Some(&this)
            || (this_base.is_some() && this_base == that_base)
    }
}

/// Prints the key for a group of like terms from its sorted variable factors. There's no key for
/// a term without any.
fn variable_key(mut variables: Vec<Node>, implicit: bool, printer: &impl Printer) -> Option<String> {
    match variables.len() {
        0 => None,
        1 => variables.pop().map(|v| printer.print(&v)),
        _ => Some(printer.print(&build::apply(
            Operator::Mul,
            variables,
            ApplyOptions { implicit, ..Default::default() },
        ))),
    }
}
