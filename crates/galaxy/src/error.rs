//! Error types of the intergalactic trade language.
//!
//! Two severities exist. [`NumeralError`] and [`PriceError`] describe a single
//! bad value and are recoverable: the offending line is rejected or the query
//! answers with a diagnostic. [`FatalError`] means the input contradicts
//! itself and no consistent answer can be produced for the whole run.

use thiserror::Error;

use crate::numeral::RomanDigit;

/// Problems converting between integers, Roman numerals and custom symbols.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// The integer has no Roman representation.
    #[error("Roman number should be in 1..=3999 range, got {0}")]
    OutOfRange(u32),

    /// A token is not one of the seven Roman digit characters.
    #[error("'{0}' is not a Roman digit")]
    InvalidDigit(String),

    /// One or more symbols have no entry in the symbol dictionary.
    #[error("intergalactic numeral '{}' not found in dictionary", .0.join(", "))]
    UnknownSymbols(Vec<String>),

    /// The numeral has no symbols at all.
    #[error("empty numeral")]
    Empty,

    /// The symbols spell a Roman numeral that is not the canonical form of
    /// its own value (e.g. `IIII`, `VX`, `IC`).
    #[error("invalid numeral '{numeral}'")]
    NotCanonical {
        /// The Roman spelling that failed the round trip.
        numeral: String,
    },
}

/// Problems with the total price token of a price line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceError {
    #[error("cannot convert price to float")]
    NotANumber(String),

    #[error("negative price")]
    Negative(f64),
}

/// Contradictions in the input that abort the whole run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FatalError {
    /// The same symbol was defined as two different Roman digits.
    #[error(
        "Contradicting entries in input dictionary: '{symbol}' is defined as both \
         '{existing}' and '{conflicting}'"
    )]
    ContradictingSymbol {
        symbol: String,
        existing: RomanDigit,
        conflicting: RomanDigit,
    },

    /// Two price lines for the same good imply different unit prices.
    #[error(
        "Contradicting entries in input prices: unit price of '{good}' is both \
         {existing} and {conflicting}"
    )]
    ContradictingPrice {
        good: String,
        existing: f64,
        conflicting: f64,
    },
}

/// Convenience alias for fallible numeral operations.
pub type NumeralResult<T> = Result<T, NumeralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_symbols_are_comma_joined() {
        let err = NumeralError::UnknownSymbols(vec!["mish".into(), "yish".into()]);
        assert_eq!(err.to_string(), "intergalactic numeral 'mish, yish' not found in dictionary");
    }

    #[test]
    fn single_unknown_symbol_is_reported_alone() {
        let err = NumeralError::UnknownSymbols(vec!["mish".into()]);
        assert_eq!(err.to_string(), "intergalactic numeral 'mish' not found in dictionary");
    }

    #[test]
    fn price_errors_match_diagnostic_wording() {
        assert_eq!(PriceError::NotANumber("578xx".into()).to_string(), "cannot convert price to float");
        assert_eq!(PriceError::Negative(-1.0).to_string(), "negative price");
    }
}
