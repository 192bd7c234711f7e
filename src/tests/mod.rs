#[macro_use]
mod util;

mod terms;
mod sign;
