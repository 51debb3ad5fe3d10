//! Parsing and serialization of the JsonUI text format

mod grammar;
pub mod lexer;
pub mod printer;
pub mod value;

pub use grammar::parse;
pub use printer::print;
pub use value::Value;
