//! The whole batch: classify, build tables, answer queries.

use tracing::info;

use crate::{
    dictionary::SymbolDictionary,
    error::FatalError,
    line::sort_lines,
    price::{PriceTable, validate_price_lines},
    query::run_queries,
    rejection::Rejection,
};

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// One answer per query line, in input order.
    pub results: Vec<String>,
    /// Rejected lines: classifier rejections first, then dictionary, then price.
    pub rejections: Vec<Rejection>,
}

impl Report {
    /// Results joined by newlines, without a trailing newline.
    #[must_use]
    pub fn results_text(&self) -> String {
        self.results.join("\n")
    }

    /// Rendered rejections joined by newlines, terminated by an empty entry.
    ///
    /// With at least one rejection the text ends with `"\n\n"`; without any
    /// it is just `"\n"`.
    #[must_use]
    pub fn diagnostics_text(&self) -> String {
        let mut lines: Vec<String> = self.rejections.iter().map(Rejection::render).collect();
        lines.push("\n".to_string());
        lines.join("\n")
    }
}

/// Runs every phase over the complete input text.
///
/// # Errors
///
/// [`FatalError`] when the definitions or the prices contradict each other.
/// Nothing is answered in that case.
///
/// # Example
///
/// ```
/// let input = "glob is I\nprok is V\nglob glob Silver is 34 Credits\n\
///              how many Credits is glob prok Silver ?";
/// let report = galaxy::pipeline::process(input).unwrap();
/// assert_eq!(report.results, ["glob prok Silver is 68 Credits"]);
/// ```
pub fn process(input: &str) -> Result<Report, FatalError> {
    let sorted = sort_lines(input);
    let mut rejections = sorted.rejections;

    let dict = SymbolDictionary::build(&sorted.definitions, &mut rejections)?;
    let priced = validate_price_lines(&sorted.prices, &dict, &mut rejections);
    let prices = PriceTable::derive(&priced)?;
    let results = run_queries(&sorted.queries, &dict, &prices);

    info!(answers = results.len(), rejected = rejections.len(), "input processed");
    Ok(Report { results, rejections })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "glob is I\n\
                           prok is V\n\
                           pish is X\n\
                           tegj is L\n\
                           glob glob Silver is 34 Credits\n\
                           glob prok Gold is 57800 Credits\n\
                           pish pish Iron is 3910 Credits\n\
                           how much is pish tegj glob glob ?\n\
                           how many Credits is glob prok Silver ?\n\
                           how many Credits is glob prok Gold ?\n\
                           how many Credits is glob prok Iron ?\n\
                           how much wood could a woodchuck chuck if a woodchuck could chuck wood ?";

    #[test]
    fn minimal_sample() {
        let report = process(MINIMAL).unwrap();
        assert_eq!(
            report.results_text(),
            "pish tegj glob glob is 42\n\
             glob prok Silver is 68 Credits\n\
             glob prok Gold is 57800 Credits\n\
             glob prok Iron is 782 Credits\n\
             I have no idea what you are talking about"
        );
        assert!(report.rejections.is_empty());
        assert_eq!(report.diagnostics_text(), "\n");
    }

    #[test]
    fn extended_sample() {
        let input = "glob is I\n\
                     prok is V\n\
                     pish is X\n\
                     tegj is L\n\
                     MMM  is M\n\
                     111  is I\n\
                     glob glob Silver is 34 Credits\n\
                     glob prok Gold is 57800 Credits\n\
                     pish pish Iron is 3910 Credits\n\
                     pish fish Iron is 3910 Credits\n\
                     glob prok Ttg is 998 Credits\n\
                     how much is pish tegj glob glob ?\n\
                     how many Credits is glob prok Silver ?\n\
                     how many Credits is glob prok Gold ?\n\
                     how many Credits is glob prok Iron ?\n\
                     how much wood could a woodchuck chuck if a woodchuck could chuck wood ?\n\
                     how much is MMM MMM MMM MMM MMM ?\n\
                     how many credits is glob ffg gold ?\n\
                     how many credits is tegj MMM Iron ?\n\
                     how many credits is MMM tegj gold ?\n\
                     how many credits is tegj glob Ggggg ?\n\
                     prok mud is 333 Credits\n\
                     how many Credits is glob glob mud ?";

        let report = process(input).unwrap();
        assert_eq!(
            report.results,
            [
                "pish tegj glob glob is 42",
                "glob prok Silver is 68 Credits",
                "glob prok Gold is 57800 Credits",
                "glob prok Iron is 782 Credits",
                "I have no idea what you are talking about",
                "Invalid Intergalactic number 'mmm mmm mmm mmm mmm' found in the query",
                "Invalid Intergalactic number 'glob ffg' found in the query",
                "Invalid Intergalactic number 'tegj mmm' found in the query",
                "mmm tegj Gold is 15172500 Credits",
                "No correct price found in input for good 'Ggggg'",
                "glob glob Mud is 133.2000 Credits",
            ]
        );
        assert_eq!(
            report.diagnostics_text(),
            "pish fish iron is 3910 credits REJECTED by validate_price: incorrect Intergalactic \
             quantity 'pish, fish' in validate_price\n\n"
        );
    }

    #[test]
    fn rejections_ordered_by_stage() {
        let input = "glob is i\n\
                     glob silver is -1 credits\n\
                     glob is k\n\
                     nonsense line\n";
        let report = process(input).unwrap();
        let stages: Vec<&str> = report.rejections.iter().map(|r| r.stage().as_str()).collect();
        assert_eq!(stages, ["sort_lines", "validate_dict", "validate_price"]);
    }

    #[test]
    fn contradicting_symbols_abort() {
        let err = process("glob is i\nglob is v\nhow much is glob ?").unwrap_err();
        assert!(matches!(err, FatalError::ContradictingSymbol { .. }));
    }

    #[test]
    fn contradicting_prices_abort() {
        let input = "glob is i\nglob silver is 17 credits\nglob glob silver is 36 credits";
        let err = process(input).unwrap_err();
        assert!(matches!(err, FatalError::ContradictingPrice { .. }));
    }

    #[test]
    fn consistent_prices_accepted() {
        let input = "glob is i\nglob silver is 17 credits\nglob glob silver is 34 credits\n\
                     how many credits is glob glob glob silver ?";
        assert_eq!(process(input).unwrap().results, ["glob glob glob Silver is 51 Credits"]);
    }

    #[test]
    fn empty_input() {
        let report = process("").unwrap();
        assert!(report.results.is_empty());
        assert_eq!(report.results_text(), "");
        assert_eq!(report.diagnostics_text(), "\n");
    }
}
