//! The node tree representing mathematical expressions, and everything which inspects it.
//!
//! Nodes are built by [parse] or by the functions in [build]. Everything else is a method on
//! [Node]:
//!   - shape checks like [is_fraction](Node::is_fraction) and [is_number](Node::is_number);
//!   - the polynomial grammar, such as [is_polynomial_term](Node::is_polynomial_term);
//!   - term decomposition, such as [coefficient](Node::coefficient) and
//!     [coefficients_and_constants](Node::coefficients_and_constants);
//!   - sign normalisation with [negate](Node::negate).

mod tree;
pub use tree::*;

pub mod build;

mod query;

mod polynomial;

mod terms;
pub use terms::*;

mod sign;

mod token;
pub use token::*;

mod parser;
pub use parser::*;
