//! Custom symbol → Roman digit dictionary.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::{
    error::FatalError,
    line::Definition,
    numeral::RomanDigit,
    rejection::{Rejection, Stage},
};

/// Mapping from custom symbols (`glob`, `prok`, ...) to Roman digits.
///
/// Every key maps to exactly one digit. Symbols are stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolDictionary {
    symbols: HashMap<String, RomanDigit>,
}

impl SymbolDictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary mapping each Roman digit character to itself.
    #[must_use]
    pub fn identity() -> Self {
        let symbols = RomanDigit::ALL.iter().map(|&d| (d.as_char().to_string(), d)).collect();
        Self { symbols }
    }

    /// Builds the dictionary from classified definition lines.
    ///
    /// A definition whose digit token is not exactly one Roman digit
    /// character is appended to `rejections` and skipped.
    ///
    /// # Errors
    ///
    /// [`FatalError::ContradictingSymbol`] if two valid definitions map the
    /// same symbol to different digits.
    pub fn build(
        definitions: &[Definition],
        rejections: &mut Vec<Rejection>,
    ) -> Result<Self, FatalError> {
        let mut dict = Self::new();
        for definition in definitions {
            match definition.digit.parse::<RomanDigit>() {
                Ok(digit) => dict.insert(definition.symbol.as_str(), digit)?,
                Err(e) => {
                    debug!(symbol = %definition.symbol, %e, "definition rejected");
                    rejections.push(Rejection::new(definition.tokens(), Stage::ValidateDict));
                }
            }
        }
        info!(symbols = dict.len(), "symbol dictionary built");
        Ok(dict)
    }

    /// Adds a mapping. Re-adding an identical mapping is a no-op.
    ///
    /// # Errors
    ///
    /// [`FatalError::ContradictingSymbol`] if `symbol` already maps to a
    /// different digit.
    pub fn insert(&mut self, symbol: impl Into<String>, digit: RomanDigit) -> Result<(), FatalError> {
        let symbol = symbol.into().to_lowercase();
        match self.symbols.get(&symbol) {
            Some(&existing) if existing != digit => {
                Err(FatalError::ContradictingSymbol { symbol, existing, conflicting: digit })
            }
            Some(_) => Ok(()),
            None => {
                self.symbols.insert(symbol, digit);
                Ok(())
            }
        }
    }

    /// Looks up the digit for `symbol`.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<RomanDigit> {
        self.symbols.get(symbol).copied()
    }

    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains_key(symbol)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over `(symbol, digit)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RomanDigit)> {
        self.symbols.iter().map(|(s, &d)| (s.as_str(), d))
    }
}
