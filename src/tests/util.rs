macro_rules! num {
    ($v:expr) => { crate::node::build::number($v) };
}

macro_rules! ident {
    ($v:ident) => { crate::node::build::identifier(stringify!($v)) };
}

macro_rules! parse {
    ($s:expr) => { crate::node::parse($s).unwrap() };
}

macro_rules! dec {
    ($l:literal) => {
        <rust_decimal::Decimal as core::str::FromStr>::from_str(stringify!($l)).unwrap()
    };
}

macro_rules! printed {
    ($n:expr) => {
        <crate::printers::TextPrinter as crate::print::Printer>::print(
            &crate::printers::TextPrinter::default(),
            &$n,
        )
    };
}

/// Installs a logger which writes through the test harness, so trace output from parsing and
/// decomposition shows up for failing tests. Safe to call from every test.
pub fn init_logger() {
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Trace, simplelog::Config::default());
}
