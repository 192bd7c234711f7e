mod text_printer;
pub use text_printer::*;
