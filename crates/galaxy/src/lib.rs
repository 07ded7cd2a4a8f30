//! Interpreter for the intergalactic merchant's language.
//!
//! Input text mixes three kinds of lines:
//!
//! - **definitions** — `glob is I` binds a custom symbol to a Roman digit
//! - **prices** — `glob glob Silver is 34 Credits` prices a quantity of a good
//! - **queries** — `how much is pish tegj glob glob ?` or
//!   `how many Credits is glob prok Silver ?`
//!
//! [`pipeline::process`] classifies every line, builds the symbol dictionary
//! and the unit price table, and answers the queries in input order. Lines
//! that fit no shape or fail validation are collected as
//! [`rejection::Rejection`]s.
//!
//! # Quick start
//!
//! ```
//! use galaxy::prelude::*;
//!
//! let input = "glob is I\n\
//!              prok is V\n\
//!              pish is X\n\
//!              tegj is L\n\
//!              glob glob Silver is 34 Credits\n\
//!              how much is pish tegj glob glob ?\n\
//!              how many Credits is glob prok Silver ?";
//!
//! let report = process(input).unwrap();
//! assert_eq!(report.results, ["pish tegj glob glob is 42", "glob prok Silver is 68 Credits"]);
//! ```

pub mod dictionary;
pub mod error;
pub mod line;
pub mod numeral;
pub mod pipeline;
pub mod price;
pub mod query;
pub mod rejection;

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        dictionary::SymbolDictionary,
        error::{FatalError, NumeralError, PriceError},
        numeral::{RomanDigit, int_to_roman, roman_to_int, symbols_to_int},
        pipeline::{Report, process},
        price::PriceTable,
        query::Query,
        rejection::{Rejection, Stage},
    };
}
