//! Price line validation and the unit price table.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::{
    dictionary::SymbolDictionary,
    error::{FatalError, PriceError},
    line::PriceLine,
    numeral::symbols_to_int,
    rejection::{Rejection, Stage},
};

/// A price line whose quantity and total passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine {
    pub good: String,
    /// Quantity as an integer, `1..=3999`.
    pub units: u32,
    /// Total price of `units` of `good`.
    pub total: f64,
}

impl PricedLine {
    #[must_use]
    pub fn unit_price(&self) -> f64 {
        self.total / f64::from(self.units)
    }
}

/// Parses a total price token.
///
/// The first `,` is read as a decimal separator. `-0` counts as
/// non-negative.
///
/// # Errors
///
/// [`PriceError::NotANumber`] or [`PriceError::Negative`].
///
/// # Example
///
/// ```
/// use galaxy::price::parse_price;
///
/// assert_eq!(parse_price("39,10").unwrap(), 39.1);
/// assert!(parse_price("578xx").is_err());
/// assert!(parse_price("-5").is_err());
/// ```
pub fn parse_price(raw: &str) -> Result<f64, PriceError> {
    let normalized = raw.replacen(',', ".", 1);
    let price: f64 = normalized.parse().map_err(|_| PriceError::NotANumber(raw.to_string()))?;
    // NaN fails this comparison as well
    if price >= 0.0 { Ok(price) } else { Err(PriceError::Negative(price)) }
}

/// Validates price lines against the symbol dictionary.
///
/// Lines with an unresolvable quantity or a bad price are appended to
/// `rejections` with a `validate_price` reason; the rest are returned in
/// input order.
pub fn validate_price_lines(
    lines: &[PriceLine],
    dict: &SymbolDictionary,
    rejections: &mut Vec<Rejection>,
) -> Vec<PricedLine> {
    let mut accepted = Vec::with_capacity(lines.len());

    for line in lines {
        let units = match symbols_to_int(line.quantity.as_slice(), dict) {
            Ok(units) => units,
            Err(e) => {
                debug!(good = %line.good, %e, "price line rejected: bad quantity");
                rejections.push(Rejection::with_detail(
                    line.tokens(),
                    Stage::ValidatePrice,
                    format!(
                        "incorrect Intergalactic quantity '{}' in validate_price",
                        line.quantity.join(", ")
                    ),
                ));
                continue;
            }
        };

        match parse_price(&line.total) {
            Ok(total) => accepted.push(PricedLine { good: line.good.clone(), units, total }),
            Err(e) => {
                debug!(good = %line.good, total = %line.total, %e, "price line rejected");
                rejections.push(Rejection::with_detail(line.tokens(), Stage::ValidatePrice, e.to_string()));
            }
        }
    }

    accepted
}

/// Unit price of every good with at least one valid price line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    /// Derives unit prices from validated price lines.
    ///
    /// Repeated lines for one good must imply exactly the same unit price.
    ///
    /// # Errors
    ///
    /// [`FatalError::ContradictingPrice`] on the first mismatch.
    pub fn derive(lines: &[PricedLine]) -> Result<Self, FatalError> {
        let mut prices: HashMap<String, f64> = HashMap::new();

        for line in lines {
            let unit_price = line.unit_price();
            match prices.get(&line.good).copied() {
                Some(existing) if existing != unit_price => {
                    return Err(FatalError::ContradictingPrice {
                        good: line.good.clone(),
                        existing,
                        conflicting: unit_price,
                    });
                }
                Some(_) => {}
                None => {
                    prices.insert(line.good.clone(), unit_price);
                }
            }
        }

        info!(goods = prices.len(), "price table built");
        Ok(Self { prices })
    }

    /// Unit price of `good` (lowercase), if known.
    #[must_use]
    pub fn unit_price(&self, good: &str) -> Option<f64> {
        self.prices.get(good).copied()
    }

    #[must_use]
    pub fn contains(&self, good: &str) -> bool {
        self.prices.contains_key(good)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(String, f64)> for PriceTable {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self { prices: iter.into_iter().collect() }
    }
}
