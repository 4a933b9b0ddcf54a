//! Text front end for graphs.

pub use parser::parse;

mod parser;
