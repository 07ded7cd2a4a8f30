//! Line classification by shape.
//!
//! Every non-empty input line is lowercased, split on whitespace and sorted
//! into one of three known shapes. Nothing is validated here beyond the shape:
//! digits, quantities and prices are checked by later stages.

use tracing::debug;

use crate::rejection::{Rejection, Stage};

/// `<symbol> is <digit>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub symbol: String,
    /// Raw digit token, validated by the dictionary builder.
    pub digit: String,
}

impl Definition {
    /// Tokens of the line as it was read.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        vec![self.symbol.clone(), "is".to_string(), self.digit.clone()]
    }
}

/// `<quantity...> <good> is <total> credits`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLine {
    /// Custom symbols, at least one.
    pub quantity: Vec<String>,
    pub good: String,
    /// Raw total price token, validated by the price table builder.
    pub total: String,
}

impl PriceLine {
    /// Tokens of the line as it was read.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = self.quantity.clone();
        tokens.extend([self.good.clone(), "is".into(), self.total.clone(), "credits".into()]);
        tokens
    }
}

/// Any line ending with `?`. The payload is interpreted by the query engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryLine {
    pub tokens: Vec<String>,
}

/// A classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Definition(Definition),
    Price(PriceLine),
    Query(QueryLine),
}

/// Classifies the lowercase tokens of one line.
///
/// Shapes are tried in priority order: definition, price, query. The tokens
/// are handed back unchanged when no shape matches.
///
/// # Example
///
/// ```
/// use galaxy::line::{Line, classify};
///
/// let tokens = ["glob", "is", "i"].map(String::from).to_vec();
/// assert!(matches!(classify(tokens), Ok(Line::Definition(_))));
///
/// let tokens = ["hello", "world"].map(String::from).to_vec();
/// assert!(classify(tokens).is_err());
/// ```
pub fn classify(tokens: Vec<String>) -> Result<Line, Vec<String>> {
    let is_query = tokens.last().is_some_and(|t| t == "?");
    let line = match tokens.as_slice() {
        [symbol, is, digit] if is == "is" => {
            Some(Line::Definition(Definition { symbol: symbol.clone(), digit: digit.clone() }))
        }
        [quantity @ .., good, is, total, credits]
            if !quantity.is_empty() && is == "is" && credits == "credits" =>
        {
            Some(Line::Price(PriceLine {
                quantity: quantity.to_vec(),
                good: good.clone(),
                total: total.clone(),
            }))
        }
        _ => None,
    };

    match line {
        Some(line) => Ok(line),
        None if is_query => Ok(Line::Query(QueryLine { tokens })),
        None => Err(tokens),
    }
}

/// Input lines grouped by shape, each group in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedLines {
    pub definitions: Vec<Definition>,
    pub prices: Vec<PriceLine>,
    pub queries: Vec<QueryLine>,
    pub rejections: Vec<Rejection>,
}

/// Splits the whole input into definitions, prices, queries and rejections.
///
/// Empty and whitespace-only lines are skipped silently.
pub fn sort_lines(input: &str) -> SortedLines {
    let mut sorted = SortedLines::default();

    for raw in input.split('\n') {
        let tokens: Vec<String> = raw.to_lowercase().split_whitespace().map(String::from).collect();
        if tokens.is_empty() {
            continue;
        }

        match classify(tokens) {
            Ok(Line::Definition(d)) => sorted.definitions.push(d),
            Ok(Line::Price(p)) => sorted.prices.push(p),
            Ok(Line::Query(q)) => sorted.queries.push(q),
            Err(tokens) => {
                debug!(line = raw, "unrecognized line");
                sorted.rejections.push(Rejection::new(tokens, Stage::SortLines));
            }
        }
    }

    debug!(
        definitions = sorted.definitions.len(),
        prices = sorted.prices.len(),
        queries = sorted.queries.len(),
        rejected = sorted.rejections.len(),
        "input sorted"
    );
    sorted
}
