use crate::{CoinKind, Entry, Error, ErrorType, Ledger, Options, Source, SrcFile};
use std::{fs, io, sync::Arc};

/// A single-pass parser over the lines of one ledger source. It validates
/// each line against the configured [`Options`] and folds the entries into a
/// running total, failing fast on the first invalid line.
pub struct Parser<'o> {
    options: &'o Options,
    file: SrcFile,
}

impl<'o> Parser<'o> {
    /// Reads the file at `path` and totals it. A missing file is reported as
    /// [`ErrorType::NotFound`] before any line is parsed; any other read
    /// failure is reported as [`ErrorType::Io`].
    pub fn parse(path: &str, options: &'o Options) -> Result<Ledger, Error> {
        match fs::read_to_string(path) {
            Ok(data) => Self::parse_str(&data, Arc::new(path.to_string()), options),
            Err(io_error) => {
                let r#type = if io_error.kind() == io::ErrorKind::NotFound {
                    ErrorType::NotFound
                } else {
                    ErrorType::Io
                };
                Err(Error {
                    msg: format!("couldn't read {}: {}", path, io_error),
                    src: None,
                    r#type,
                })
            }
        }
    }

    /// Totals ledger text already in memory. `file` only labels error
    /// locations. Empty input yields a total of `0.0`.
    pub fn parse_str(data: &str, file: SrcFile, options: &'o Options) -> Result<Ledger, Error> {
        let parser = Parser { options, file };
        let mut total = 0.0_f64;
        let mut entries = 0;
        for (index, raw) in data.lines().enumerate() {
            let line = index + 1;
            if let Some(entry) = parser.parse_line(line, raw)? {
                total += entry.contribution();
                entries += 1;
                // Unreachable while the fields are digit-validated, but the
                // total must never silently leave the numeric domain.
                if total.is_nan() {
                    return Err(parser.error(
                        ErrorType::NotANumber,
                        "the running total is not a number".to_string(),
                        line,
                        raw,
                    ));
                }
            }
        }
        Ok(Ledger { total, entries })
    }

    /// Parses one physical line into an [`Entry`], or `None` if the line is
    /// blank or holds only a comment.
    fn parse_line(&self, line: usize, raw: &str) -> Result<Option<Entry>, Error> {
        let mut text: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if let Some(at) = text.find(self.options.comment()) {
            text.truncate(at);
        }
        if text.is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = text.split(self.options.token()).collect();
        if fields.len() != 3 {
            return Err(self.error(
                ErrorType::Syntax,
                format!("expected 3 fields, found {}", fields.len()),
                line,
                raw,
            ));
        }

        let kind = if is_tag(fields[2], self.options.whole()) {
            CoinKind::Whole
        } else if is_tag(fields[2], self.options.fraction()) {
            CoinKind::Fractional
        } else {
            return Err(self.error(
                ErrorType::InvalidType,
                format!("unknown coin type {:?}", fields[2]),
                line,
                raw,
            ));
        };

        let amount = parse_number(fields[1]).ok_or_else(|| {
            self.error(
                ErrorType::InvalidAmount,
                format!("invalid amount {:?}", fields[1]),
                line,
                raw,
            )
        })?;

        let denomination = parse_number(fields[0]).ok_or_else(|| {
            self.error(
                ErrorType::InvalidDenomination,
                format!("invalid denomination {:?}", fields[0]),
                line,
                raw,
            )
        })?;

        Ok(Some(Entry {
            denomination,
            amount,
            kind,
            src: Source {
                file: self.file.clone(),
                line,
                text: raw.to_string(),
            },
        }))
    }

    fn error(&self, r#type: ErrorType, msg: String, line: usize, raw: &str) -> Error {
        Error {
            msg,
            src: Some(Source {
                file: self.file.clone(),
                line,
                text: raw.to_string(),
            }),
            r#type,
        }
    }
}

fn is_tag(field: &str, tag: char) -> bool {
    let mut chars = field.chars();
    chars.next() == Some(tag) && chars.next().is_none()
}

/// Parses a numeric field: non-empty, decimal digits only (no sign, no
/// decimal point), value greater than zero. A literal too large for `u64`
/// is invalid rather than wrapping.
fn parse_number(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match field.parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(number) => Some(number),
    }
}
