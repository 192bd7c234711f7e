//! Printing node trees to canonical text.
//!
//! The query functions only ever need to compare nodes by their printed form, so the printer is
//! passed in through the [Printer] trait rather than being fixed. [TextPrinter] is the
//! implementation provided by this crate; closures work too, which is handy for stubbing.

use alloc::string::String;
use core::fmt;

use crate::{node::Node, printers::TextPrinter};

/// Serializes nodes to text. Implementations must be deterministic, and must print two nodes the
/// same way if they should be treated as the same when grouping terms.
pub trait Printer {
    fn print(&self, node: &Node) -> String;
}

impl<F> Printer for F where F : Fn(&Node) -> String {
    fn print(&self, node: &Node) -> String {
        self(node)
    }
}

/// How implicit multiplications are written.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum ImplicitStyle {
    /// Factors separated by a space, like `2 x`.
    Space,

    /// Factors written directly next to each other, like `2x`. A space is still used between two
    /// numbers, since `2 3` and `23` mean different things.
    Juxtapose,
}

/// Settings for [TextPrinter].
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct PrintSettings {
    pub implicit_style: ImplicitStyle,

    /// Whether binary operators and relations get a space either side, like `a + b`.
    pub spaces_around_operators: bool,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            implicit_style: ImplicitStyle::Space,
            spaces_around_operators: true,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", TextPrinter::default().print(self))
    }
}
