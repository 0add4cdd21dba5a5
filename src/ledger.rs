use crate::options::Options;
use crate::parse::Parser;
use getset::CopyGetters;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A string wrapped in [`Arc`](std::sync::Arc)
/// representing the source file path.
pub type SrcFile = Arc<String>;

/// Represents a line in a source file. This struct is used to track the origin
/// of every parsed [`Entry`], as well as for locating errors.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Source {
    pub file: SrcFile,
    /// 1-based physical line number.
    pub line: usize,
    /// The raw line text, before whitespace and comment stripping.
    pub text: String,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Kinds of errors that `coinsum` encountered while totaling a ledger file.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// The ledger file does not exist.
    NotFound,
    /// Any other IO error, e.g., the file exists but cannot be read.
    /// Unlike the other kinds, this does not indicate bad input.
    Io,
    /// The requested delimiter collides with a reserved symbol, or is not a
    /// single character.
    ReservedToken,
    /// A line does not split into exactly three fields.
    Syntax,
    /// The kind field is neither the whole nor the fractional tag.
    InvalidType,
    /// The amount field is not a positive integer literal.
    InvalidAmount,
    /// The denomination field is not a positive integer literal.
    InvalidDenomination,
    /// The running total left the numeric domain.
    NotANumber,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorType::NotFound => "file not found",
            ErrorType::Io => "io error",
            ErrorType::ReservedToken => "reserved token",
            ErrorType::Syntax => "invalid syntax",
            ErrorType::InvalidType => "invalid coin type",
            ErrorType::InvalidAmount => "invalid amount",
            ErrorType::InvalidDenomination => "invalid denomination",
            ErrorType::NotANumber => "not a number",
        };
        write!(f, "{}", name)
    }
}

/// Contains the full information of an error.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    pub msg: String,
    /// `None` for errors raised before any line was read.
    pub src: Option<Source>,
    pub r#type: ErrorType,
}

impl Error {
    /// Whether this error describes bad user input, as opposed to an
    /// environment failure the caller should not try to recover from.
    pub fn is_input(&self) -> bool {
        self.r#type != ErrorType::Io
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.r#type, self.msg)?;
        if let Some(src) = &self.src {
            write!(f, "\n  {}:{} | {}", src.file, src.line, src.text)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

/// The kind tag of a coin entry.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinKind {
    /// Coins counted as full currency units.
    Whole,
    /// Coins counted as hundredths of a currency unit.
    Fractional,
}

impl fmt::Display for CoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinKind::Whole => write!(f, "w"),
            CoinKind::Fractional => write!(f, "f"),
        }
    }
}

/// A single parsed ledger line. Both numeric fields are unsigned by
/// construction: no sign, no decimal point, and no NaN or Infinity literal
/// can reach them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub denomination: u64,
    pub amount: u64,
    pub kind: CoinKind,
    pub src: Source,
}

impl Entry {
    /// The monetary value this entry adds to the total: `denomination *
    /// amount` for whole units, a hundredth of that for fractional units.
    pub fn contribution(&self) -> f64 {
        let units = self.denomination as f64 * self.amount as f64;
        match self.kind {
            CoinKind::Whole => units,
            CoinKind::Fractional => units / 100.0,
        }
    }
}

/// The result of totaling a valid ledger file.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
pub struct Ledger {
    /// Returns the accumulated total.
    #[getset(get_copy = "pub")]
    pub(crate) total: f64,

    /// Returns the number of entries that contributed to the total.
    #[getset(get_copy = "pub")]
    pub(crate) entries: usize,
}

impl Ledger {
    /// Reads and totals the ledger file at `path` with the line format
    /// described by `options`. Fails fast on the first invalid line.
    pub fn from_file(path: &str, options: &Options) -> Result<Self, Error> {
        Parser::parse(path, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(line: usize, text: &str) -> Source {
        Source {
            file: Arc::new("coins".to_string()),
            line,
            text: text.to_string(),
        }
    }

    #[test]
    fn whole_contribution_is_denomination_times_amount() {
        let entry = Entry {
            denomination: 5,
            amount: 3,
            kind: CoinKind::Whole,
            src: src(1, "5:3:w"),
        };
        assert_eq!(entry.contribution(), 15.0);
    }

    #[test]
    fn fractional_contribution_is_in_hundredths() {
        let entry = Entry {
            denomination: 5,
            amount: 3,
            kind: CoinKind::Fractional,
            src: src(1, "5:3:f"),
        };
        assert_eq!(entry.contribution(), 0.15);
    }

    #[test]
    fn error_display_includes_line_context() {
        let error = Error {
            msg: "expected 3 fields, found 2".to_string(),
            src: Some(src(4, "5:3")),
            r#type: ErrorType::Syntax,
        };
        assert_eq!(
            error.to_string(),
            "invalid syntax: expected 3 fields, found 2\n  coins:4 | 5:3"
        );
    }

    #[test]
    fn error_display_without_source() {
        let error = Error {
            msg: "coins does not exist".to_string(),
            src: None,
            r#type: ErrorType::NotFound,
        };
        assert_eq!(error.to_string(), "file not found: coins does not exist");
    }

    #[test]
    fn io_errors_are_not_input_errors() {
        let error = Error {
            msg: "permission denied".to_string(),
            src: None,
            r#type: ErrorType::Io,
        };
        assert!(!error.is_input());
    }
}
