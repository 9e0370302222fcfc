//! Ordered configuration trees with safe, never-failing navigation.
//!
//! Documents are loaded once into a [`ConfigNode`] and then queried by path.
//! Every lookup degrades to an empty value instead of failing, which is what
//! report generators over loosely structured exports need.

pub mod parser;
pub mod tree;

pub use parser::{parse, parse_file, ParseError};
pub use tree::{ConfigNode, Scalar};
