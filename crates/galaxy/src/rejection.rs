//! Rejected input lines and the stage that rejected them.

use std::fmt;

/// Processing stage that can reject an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Line classification: the line matches no known shape.
    SortLines,
    /// Definition validation: the digit is not a single Roman digit.
    ValidateDict,
    /// Price validation: bad quantity or bad price token.
    ValidatePrice,
}

impl Stage {
    /// Name of the stage as written to the diagnostics stream.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SortLines => "sort_lines",
            Self::ValidateDict => "validate_dict",
            Self::ValidatePrice => "validate_price",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reason a line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reason {
    pub stage: Stage,
    pub detail: Option<String>,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "REJECTED by {}: {detail}", self.stage),
            None => write!(f, "REJECTED by {}", self.stage),
        }
    }
}

/// An input line that could not be classified or validated.
///
/// Keeps the line's lowercase tokens and every reason attached to it.
/// Later stages append reasons; earlier ones are never replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    tokens: Vec<String>,
    reasons: Vec<Reason>,
}

impl Rejection {
    /// Rejection without further detail.
    #[must_use]
    pub fn new(tokens: Vec<String>, stage: Stage) -> Self {
        Self { tokens, reasons: vec![Reason { stage, detail: None }] }
    }

    /// Rejection with a stage-specific detail message.
    #[must_use]
    pub fn with_detail(tokens: Vec<String>, stage: Stage, detail: impl Into<String>) -> Self {
        Self { tokens, reasons: vec![Reason { stage, detail: Some(detail.into()) }] }
    }

    /// Appends another reason.
    pub fn push_reason(&mut self, stage: Stage, detail: Option<String>) {
        self.reasons.push(Reason { stage, detail });
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    /// Stage of the first reason.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.reasons[0].stage
    }

    /// Renders the diagnostics line: tokens followed by every reason.
    ///
    /// ```
    /// use galaxy::rejection::{Rejection, Stage};
    ///
    /// let r = Rejection::new(vec!["hello".into(), "world".into()], Stage::SortLines);
    /// assert_eq!(r.render(), "hello world REJECTED by sort_lines");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.tokens
            .iter()
            .cloned()
            .chain(self.reasons.iter().map(ToString::to_string))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
