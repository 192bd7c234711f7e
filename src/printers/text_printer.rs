use alloc::{format, string::{String, ToString}, vec::Vec};

use crate::node::{Apply, Node, Operator};
use crate::print::{ImplicitStyle, PrintSettings, Printer};

/// Binding strength of each kind of node, loosest first. A child which binds more loosely than
/// its position requires is wrapped in parentheses.
mod precedence {
    pub const RELATION: u8 = 0;
    pub const ADD: u8 = 1;
    pub const MUL: u8 = 2;
    pub const UNARY: u8 = 3;
    pub const IMPLICIT_MUL: u8 = 4;
    pub const POW: u8 = 5;
    pub const FACT: u8 = 6;
    pub const ATOM: u8 = 7;
}

/// Prints nodes as the plain text syntax read by [parse](crate::node::parse), e.g.
/// `2 x^2 - 3 / 4`.
#[derive(Default, Clone, Debug)]
pub struct TextPrinter {
    pub settings: PrintSettings,
}

impl TextPrinter {
    pub fn new(settings: PrintSettings) -> Self {
        TextPrinter { settings }
    }

    fn precedence(node: &Node) -> u8 {
        match node {
            Node::Number(_) | Node::Identifier(_) | Node::Parentheses(_) => precedence::ATOM,
            Node::Apply(a) => match a.op {
                _ if a.op.is_relation() => precedence::RELATION,
                Operator::Add => precedence::ADD,
                Operator::Mul if a.implicit => precedence::IMPLICIT_MUL,
                Operator::Mul | Operator::Div => precedence::MUL,
                Operator::Neg | Operator::Pos => precedence::UNARY,
                Operator::Pow => precedence::POW,
                Operator::Fact => precedence::FACT,
                _ => precedence::ATOM,
            },
        }
    }

    /// Prints `node`, in parentheses if it binds more loosely than `min`.
    fn print_at(&self, node: &Node, min: u8) -> String {
        let printed = self.print(node);
        if Self::precedence(node) < min {
            format!("({})", printed)
        } else {
            printed
        }
    }

    fn binary_operator(&self, symbol: &str) -> String {
        if self.settings.spaces_around_operators {
            format!(" {} ", symbol)
        } else {
            symbol.to_string()
        }
    }

    fn print_list(&self, args: &[Node]) -> String {
        args.iter().map(|a| self.print(a)).collect::<Vec<_>>().join(", ")
    }

    fn print_apply(&self, apply: &Apply) -> String {
        let args = &apply.args[..];

        match &apply.op {
            Operator::Add => {
                let mut result = String::new();
                for (i, arg) in args.iter().enumerate() {
                    match arg {
                        // Subtractions are stored as additions of a negation
                        Node::Apply(inner) if i > 0 && inner.op == Operator::Neg && inner.was_minus => {
                            result.push_str(&self.binary_operator("-"));
                            if let Some(subtrahend) = inner.args.first() {
                                result.push_str(&self.print_at(subtrahend, precedence::MUL));
                            }
                        },
                        _ => {
                            if i > 0 {
                                result.push_str(&self.binary_operator("+"));
                            }
                            result.push_str(&self.print_at(arg, precedence::MUL));
                        }
                    }
                }
                result
            },

            Operator::Mul if apply.implicit => {
                let mut result = String::new();
                for arg in args {
                    let printed = self.print_at(arg, precedence::POW);
                    if !result.is_empty() {
                        let both_digits = result.ends_with(|c: char| c.is_ascii_digit())
                            && printed.starts_with(|c: char| c.is_ascii_digit() || c == '.');
                        if self.settings.implicit_style == ImplicitStyle::Space || both_digits {
                            result.push(' ');
                        }

                        // `ab(c)` would read back as a call to `ab`, so split off the last letter
                        let mut tail = result.chars().rev();
                        let call_like = printed.starts_with('(') && matches!(
                            (tail.next(), tail.next()),
                            (Some(a), Some(b)) if a.is_alphabetic() && b.is_alphabetic()
                        );
                        if call_like {
                            if let Some(last) = result.pop() {
                                result.push(' ');
                                result.push(last);
                            }
                        }
                    }
                    result.push_str(&printed);
                }
                result
            },

            Operator::Mul => args.iter()
                .map(|a| self.print_at(a, precedence::UNARY))
                .collect::<Vec<_>>()
                .join(&self.binary_operator("*")),

            Operator::Div => match args {
                [numerator, denominator] => format!(
                    "{}{}{}",
                    self.print_at(numerator, precedence::MUL),
                    self.binary_operator("/"),
                    self.print_at(denominator, precedence::UNARY),
                ),
                _ => format!("div({})", self.print_list(args)),
            },

            Operator::Pow => match args {
                [base, exponent] => {
                    // The parser accepts a signed exponent, so there's no need for brackets
                    let exponent = if matches!(exponent, Node::Apply(Apply { op: Operator::Neg | Operator::Pos, .. })) {
                        self.print(exponent)
                    } else {
                        self.print_at(exponent, precedence::POW)
                    };
                    format!("{}^{}", self.print_at(base, precedence::FACT), exponent)
                },
                _ => format!("pow({})", self.print_list(args)),
            },

            Operator::Neg | Operator::Pos => {
                let sign = if apply.op == Operator::Neg { "-" } else { "+" };
                match args.first() {
                    Some(arg) => format!("{}{}", sign, self.print_at(arg, precedence::UNARY)),
                    None => sign.to_string(),
                }
            },

            Operator::Fact => match args.first() {
                Some(arg) => format!("{}!", self.print_at(arg, precedence::FACT)),
                None => "!".to_string(),
            },

            Operator::Abs => format!("|{}|", self.print_list(args)),

            Operator::NthRoot => format!("nthRoot({})", self.print_list(args)),

            Operator::Function(id) => format!("{}({})", self.print(&Node::Identifier(id.clone())), self.print_list(args)),

            op => {
                // Relations
                let symbol = op.relation_symbol().unwrap_or("?");
                args.iter()
                    .map(|a| self.print_at(a, precedence::ADD))
                    .collect::<Vec<_>>()
                    .join(&self.binary_operator(symbol))
            }
        }
    }
}

impl Printer for TextPrinter {
    fn print(&self, node: &Node) -> String {
        match node {
            Node::Number(value) => value.clone(),
            Node::Identifier(id) => match &id.subscript {
                Some(subscript) => format!("{}_{}", id.name, self.print_at(subscript, precedence::ATOM)),
                None => id.name.clone(),
            },
            Node::Parentheses(body) => format!("({})", self.print(body)),
            Node::Apply(apply) => self.print_apply(apply),
        }
    }
}
