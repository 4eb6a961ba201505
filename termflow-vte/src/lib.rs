//! Streaming recognizer for ECMA-48 / ISO-2022 / ISO-6429 terminal
//! control streams.
//!
//! Bytes go in through [`Parser::parse`] in chunks of any size; decoded
//! structure comes out as calls on a [`Context`] implementation. The
//! [`Scanner`] underneath turns raw UTF-8 into Unicode scalars and is
//! also usable on its own.

mod context;
mod enums;
mod parser;
mod scanner;

pub mod codes;

pub use context::Context;
pub use parser::Parser;
pub use scanner::Scanner;
