//! Roman numerals and their custom-symbol spellings.
//!
//! Conversion in both directions is validated by a round trip: a sequence of
//! symbols is summed with the classical subtractive rule, the sum is spelled
//! back in canonical Roman form and the two spellings must match exactly.
//! This rejects `IIII`, `VX`, `IM` and every other non-canonical sequence
//! without a separate grammar.

use std::{fmt, str::FromStr};

use crate::{
    dictionary::SymbolDictionary,
    error::{NumeralError, NumeralResult},
};

/// Largest integer with a Roman representation.
pub const MAX_NUMERAL: u32 = 3999;

/// Greedy table for [`int_to_roman`], strictly descending.
const NUMERAL_TABLE: [(u32, &str); 13] = [
    (1000, "m"),
    (900, "cm"),
    (500, "d"),
    (400, "cd"),
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

/// One of the seven canonical Roman digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RomanDigit {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl RomanDigit {
    /// All digits in ascending value order.
    pub const ALL: [Self; 7] = [Self::I, Self::V, Self::X, Self::L, Self::C, Self::D, Self::M];

    /// Integer value of the digit.
    ///
    /// ```
    /// use galaxy::numeral::RomanDigit;
    /// assert_eq!(RomanDigit::L.value(), 50);
    /// ```
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::I => 1,
            Self::V => 5,
            Self::X => 10,
            Self::L => 50,
            Self::C => 100,
            Self::D => 500,
            Self::M => 1000,
        }
    }

    /// Lowercase character of the digit, as used in canonical spellings.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::I => 'i',
            Self::V => 'v',
            Self::X => 'x',
            Self::L => 'l',
            Self::C => 'c',
            Self::D => 'd',
            Self::M => 'm',
        }
    }
}

impl fmt::Display for RomanDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for RomanDigit {
    type Error = NumeralError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'i' => Ok(Self::I),
            'v' => Ok(Self::V),
            'x' => Ok(Self::X),
            'l' => Ok(Self::L),
            'c' => Ok(Self::C),
            'd' => Ok(Self::D),
            'm' => Ok(Self::M),
            _ => Err(NumeralError::InvalidDigit(c.to_string())),
        }
    }
}

impl FromStr for RomanDigit {
    type Err = NumeralError;

    /// Parses a token that must be exactly one Roman digit character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c).map_err(|_| NumeralError::InvalidDigit(s.to_string())),
            _ => Err(NumeralError::InvalidDigit(s.to_string())),
        }
    }
}

/// Converts an integer in `1..=3999` to its canonical lowercase Roman form.
///
/// # Errors
///
/// [`NumeralError::OutOfRange`] for `0` and anything above [`MAX_NUMERAL`].
///
/// # Example
///
/// ```
/// use galaxy::numeral::int_to_roman;
///
/// assert_eq!(int_to_roman(1994).unwrap(), "mcmxciv");
/// assert!(int_to_roman(4000).is_err());
/// ```
pub fn int_to_roman(n: u32) -> NumeralResult<String> {
    if !(1..=MAX_NUMERAL).contains(&n) {
        return Err(NumeralError::OutOfRange(n));
    }

    let mut remainder = n;
    let mut out = String::new();
    for &(value, symbol) in &NUMERAL_TABLE {
        let count = remainder / value;
        for _ in 0..count {
            out.push_str(symbol);
        }
        remainder %= value;
    }
    Ok(out)
}

/// Converts a sequence of custom symbols to an integer.
///
/// Every symbol is resolved through `dict`; the resulting digits are summed
/// left to right, subtracting a digit whose right neighbour is strictly
/// larger. The sum is accepted only if its canonical spelling equals the
/// digits as written.
///
/// # Errors
///
/// - [`NumeralError::Empty`] for an empty sequence
/// - [`NumeralError::UnknownSymbols`] listing every symbol missing from `dict`
/// - [`NumeralError::NotCanonical`] when the round trip fails
///
/// # Example
///
/// ```
/// use galaxy::{dictionary::SymbolDictionary, numeral::{RomanDigit, symbols_to_int}};
///
/// let mut dict = SymbolDictionary::new();
/// dict.insert("glob", RomanDigit::I).unwrap();
/// dict.insert("prok", RomanDigit::V).unwrap();
///
/// assert_eq!(symbols_to_int(&["glob", "prok"], &dict).unwrap(), 4);
/// assert!(symbols_to_int(&["glob", "glob", "glob", "glob"], &dict).is_err());
/// ```
pub fn symbols_to_int<S: AsRef<str>>(symbols: &[S], dict: &SymbolDictionary) -> NumeralResult<u32> {
    if symbols.is_empty() {
        return Err(NumeralError::Empty);
    }

    let unknown: Vec<String> = symbols
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !dict.contains(s))
        .map(String::from)
        .collect();
    if !unknown.is_empty() {
        return Err(NumeralError::UnknownSymbols(unknown));
    }

    let digits: Vec<RomanDigit> =
        symbols.iter().filter_map(|s| dict.get(s.as_ref())).collect();
    evaluate(&digits)
}

/// Converts a plain Roman numeral (any case) to an integer.
///
/// Goes through [`symbols_to_int`] with the identity dictionary, so the same
/// canonical-form check applies.
///
/// ```
/// use galaxy::numeral::roman_to_int;
///
/// assert_eq!(roman_to_int("MCMIII").unwrap(), 1903);
/// assert!(roman_to_int("IIII").is_err());
/// ```
pub fn roman_to_int(numeral: &str) -> NumeralResult<u32> {
    let symbols: Vec<String> = numeral.chars().map(|c| c.to_lowercase().collect()).collect();
    symbols_to_int(symbols.as_slice(), &SymbolDictionary::identity())
}

fn evaluate(digits: &[RomanDigit]) -> NumeralResult<u32> {
    let mut sum: i64 = 0;
    for (i, digit) in digits.iter().enumerate() {
        let value = i64::from(digit.value());
        match digits.get(i + 1) {
            Some(next) if next.value() > digit.value() => sum -= value,
            _ => sum += value,
        }
    }

    let spelled: String = digits.iter().map(|d| d.as_char()).collect();
    let not_canonical = || NumeralError::NotCanonical { numeral: spelled.clone() };

    let value = u32::try_from(sum).map_err(|_| not_canonical())?;
    match int_to_roman(value) {
        Ok(canonical) if canonical == spelled => Ok(value),
        _ => Err(not_canonical()),
    }
}
