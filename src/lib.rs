#![doc = include_str!("../README.md")]

pub mod char;
pub mod error;
pub mod input;
pub mod parse;
pub mod parser;
pub mod prelude;

pub use input::{Back, Input, Printable};
pub use parser::{Parser, Printer};
