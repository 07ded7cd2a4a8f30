//! Query parsing and answering.
//!
//! Two query shapes are understood:
//!
//! - `how much is <symbols...> ?` converts a custom numeral to an integer
//! - `how many credits is <symbols...> <good> ?` prices a quantity of a good
//!
//! Any other line ending with `?` gets the catch-all answer. A failed query
//! still produces an answer line; it never goes to the diagnostics stream.

use tracing::debug;

use crate::{
    dictionary::SymbolDictionary, line::QueryLine, numeral::symbols_to_int, price::PriceTable,
};

/// Answer to a query of unknown shape.
pub const UNKNOWN_QUERY_ANSWER: &str = "I have no idea what you are talking about";

/// A parsed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `how much is <quantity> ?`
    NumeralConversion { quantity: Vec<String> },
    /// `how many credits is <quantity> <good> ?`
    PriceQuery { quantity: Vec<String>, good: String },
    /// Anything else.
    Unknown,
}

impl Query {
    /// Parses query tokens (including the trailing `?`). Keywords match
    /// case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// use galaxy::query::Query;
    ///
    /// let tokens: Vec<String> = "how many credits is glob prok silver ?"
    ///     .split_whitespace()
    ///     .map(String::from)
    ///     .collect();
    ///
    /// assert_eq!(
    ///     Query::parse(&tokens),
    ///     Query::PriceQuery { quantity: vec!["glob".into(), "prok".into()], good: "silver".into() }
    /// );
    /// ```
    #[must_use]
    pub fn parse(tokens: &[String]) -> Self {
        let Some((mark, body)) = tokens.split_last() else {
            return Self::Unknown;
        };
        if mark != "?" {
            return Self::Unknown;
        }

        let lowered: Vec<String> = body.iter().map(|t| t.to_lowercase()).collect();
        let words: Vec<&str> = lowered.iter().map(String::as_str).collect();

        match words.as_slice() {
            ["how", "much", "is", quantity @ ..] => Self::NumeralConversion { quantity: owned(quantity) },
            ["how", "many", "credits", "is", quantity @ .., good] => {
                Self::PriceQuery { quantity: owned(quantity), good: (*good).to_string() }
            }
            _ => Self::Unknown,
        }
    }

    /// Answers the query against the symbol dictionary and price table.
    #[must_use]
    pub fn answer(&self, dict: &SymbolDictionary, prices: &PriceTable) -> String {
        match self {
            Self::NumeralConversion { quantity } => match symbols_to_int(quantity.as_slice(), dict) {
                Ok(n) => format!("{} is {n}", quantity.join(" ")),
                Err(e) => {
                    debug!(%e, "numeral query failed");
                    invalid_number(quantity)
                }
            },
            Self::PriceQuery { quantity, good } => {
                let Some(unit_price) = prices.unit_price(good) else {
                    return format!("No correct price found in input for good '{}'", capitalize(good));
                };
                match symbols_to_int(quantity.as_slice(), dict) {
                    Ok(n) => format!(
                        "{} {} is {} Credits",
                        quantity.join(" "),
                        capitalize(good),
                        format_credits(unit_price * f64::from(n))
                    ),
                    Err(e) => {
                        debug!(%e, %good, "price query failed");
                        invalid_number(quantity)
                    }
                }
            }
            Self::Unknown => UNKNOWN_QUERY_ANSWER.to_string(),
        }
    }
}

/// Answers every query line in order, one answer per line.
pub fn run_queries(lines: &[QueryLine], dict: &SymbolDictionary, prices: &PriceTable) -> Vec<String> {
    lines.iter().map(|line| Query::parse(&line.tokens).answer(dict, prices)).collect()
}

/// Upper-cases the first character and keeps the rest.
///
/// ```
/// use galaxy::query::capitalize;
/// assert_eq!(capitalize("silver"), "Silver");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats a credit amount: whole amounts without decimals, anything else
/// with exactly four.
///
/// ```
/// use galaxy::query::format_credits;
/// assert_eq!(format_credits(68.0), "68");
/// assert_eq!(format_credits(133.2), "133.2000");
/// ```
#[must_use]
pub fn format_credits(total: f64) -> String {
    if total.fract() == 0.0 {
        // normalise -0
        let total = if total == 0.0 { 0.0 } else { total };
        format!("{total:.0}")
    } else {
        format!("{total:.4}")
    }
}

fn invalid_number(quantity: &[String]) -> String {
    format!("Invalid Intergalactic number '{}' found in the query", quantity.join(" "))
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeral::RomanDigit;

    fn sample_dict() -> SymbolDictionary {
        let mut dict = SymbolDictionary::new();
        for (symbol, digit) in [
            ("glob", RomanDigit::I),
            ("prok", RomanDigit::V),
            ("pish", RomanDigit::X),
            ("tegj", RomanDigit::L),
            ("fish", RomanDigit::X),
            ("gaa", RomanDigit::M),
            ("c", RomanDigit::C),
        ] {
            dict.insert(symbol, digit).unwrap();
        }
        dict
    }

    fn sample_prices() -> PriceTable {
        [("silver", 17.0), ("gold", 14450.0), ("iron", 195.5)]
            .into_iter()
            .map(|(good, price)| (good.to_string(), price))
            .collect()
    }

    fn query_line(s: &str) -> QueryLine {
        QueryLine { tokens: s.split_whitespace().map(String::from).collect() }
    }

    #[test]
    fn answers_sample_queries() {
        let lines: Vec<QueryLine> = [
            "how much is pish tegj glob glob ?",
            "how many credits is glob prok silver ?",
            "how many credits is glob prok gold ?",
            "how many credits is glob prok iron ?",
            "how much wood could a woodchuck chuck if a woodchuck could chuck wood ?",
            "how much is the fish ?",
            "how many credits is pish prok qwerty ?",
        ]
        .into_iter()
        .map(query_line)
        .collect();

        let answers = run_queries(&lines, &sample_dict(), &sample_prices());

        assert_eq!(
            answers,
            [
                "pish tegj glob glob is 42",
                "glob prok Silver is 68 Credits",
                "glob prok Gold is 57800 Credits",
                "glob prok Iron is 782 Credits",
                "I have no idea what you are talking about",
                "Invalid Intergalactic number 'the fish' found in the query",
                "No correct price found in input for good 'Qwerty'",
            ]
        );
    }

    #[test]
    fn unpriced_good_reported_before_numeral_check() {
        let answer = Query::parse(&query_line("how many credits is nonsense words copper ?").tokens)
            .answer(&sample_dict(), &sample_prices());
        assert_eq!(answer, "No correct price found in input for good 'Copper'");
    }

    #[test]
    fn invalid_numeral_in_price_query() {
        let answer = Query::parse(&query_line("how many credits is glob glob glob glob silver ?").tokens)
            .answer(&sample_dict(), &sample_prices());
        assert_eq!(answer, "Invalid Intergalactic number 'glob glob glob glob' found in the query");
    }

    #[test]
    fn fractional_total_has_four_decimals() {
        let prices: PriceTable = [("mud".to_string(), 0.3)].into_iter().collect();
        // cdxliv = 444
        let mut dict = sample_dict();
        dict.insert("dee", RomanDigit::D).unwrap();
        let answer = Query::parse(&query_line("how many credits is c dee pish tegj glob prok mud ?").tokens)
            .answer(&dict, &prices);
        assert_eq!(answer, "c dee pish tegj glob prok Mud is 133.2000 Credits");
    }

    #[test]
    fn keywords_match_case_insensitively() {
        let tokens = query_line("HOW Many CREDITS is glob silver ?").tokens;
        assert_eq!(
            Query::parse(&tokens),
            Query::PriceQuery { quantity: vec!["glob".into()], good: "silver".into() }
        );
    }

    #[test]
    fn empty_numeral_query_is_invalid_number() {
        let query = Query::parse(&query_line("how much is ?").tokens);
        assert_eq!(query, Query::NumeralConversion { quantity: vec![] });
        assert_eq!(
            query.answer(&sample_dict(), &sample_prices()),
            "Invalid Intergalactic number '' found in the query"
        );
    }

    #[test]
    fn price_query_without_good_is_unknown() {
        assert_eq!(Query::parse(&query_line("how many credits is ?").tokens), Query::Unknown);
    }

    #[test]
    fn price_query_with_empty_quantity_is_invalid_number() {
        let answer = Query::parse(&query_line("how many credits is silver ?").tokens)
            .answer(&sample_dict(), &sample_prices());
        assert_eq!(answer, "Invalid Intergalactic number '' found in the query");
    }

    #[test]
    fn missing_question_mark_is_unknown() {
        assert_eq!(Query::parse(&query_line("how much is glob").tokens), Query::Unknown);
        assert_eq!(Query::parse(&[]), Query::Unknown);
    }

    #[test]
    fn credits_formatting() {
        assert_eq!(format_credits(0.0), "0");
        assert_eq!(format_credits(-0.0), "0");
        assert_eq!(format_credits(15172500.0), "15172500");
        assert_eq!(format_credits(0.1 + 0.2), "0.3000");
    }
}
