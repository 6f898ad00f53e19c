//! Literal-data files
//!
//! Palette files hold a single Python-style literal (tuples, lists, dicts,
//! numbers, strings). This module parses them into [`Literal`] values and
//! writes values back with a bounded line width.
//!
//! # Architecture
//!
//! - `value.rs` - The `Literal` value type and its single-line form
//! - `parser.rs` - Document parser with line/column errors
//! - `printer.rs` - Width-bounded pretty printer
//! - `files.rs` - Loading and saving `.pyl` files

mod files;
mod parser;
mod printer;
mod value;

pub use files::{load_pyl, save_pyl};
pub use parser::{parse, ParseError};
pub use printer::pretty;
pub use value::Literal;
