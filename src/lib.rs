#![no_std]
extern crate core;
extern crate alloc;

pub mod error;
pub mod node;
pub mod print;
pub mod printers;
mod decimal_ext;

#[cfg(test)]
pub mod tests;

pub use crate::{
    node::{Node, Operator, Apply, Identifier, parse},
    print::{Printer, PrintSettings},
    printers::TextPrinter,
};

pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");
