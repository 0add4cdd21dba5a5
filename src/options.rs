use crate::{Error, ErrorType};
use getset::CopyGetters;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The line format of a ledger file: the field delimiter, the comment
/// marker, and the two kind tags. Immutable once built, passed explicitly to
/// the parser.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CopyGetters)]
pub struct Options {
    /// Returns the field delimiter.
    #[getset(get_copy = "pub")]
    pub(crate) token: char,

    /// Returns the comment marker.
    #[getset(get_copy = "pub")]
    pub(crate) comment: char,

    /// Returns the tag marking whole currency units.
    #[getset(get_copy = "pub")]
    pub(crate) whole: char,

    /// Returns the tag marking fractional (hundredth) units.
    #[getset(get_copy = "pub")]
    pub(crate) fraction: char,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            token: ':',
            comment: '#',
            whole: 'w',
            fraction: 'f',
        }
    }
}

impl Options {
    /// Default options with the field delimiter replaced by `candidate`,
    /// which must pass [`check_token`](Options::check_token).
    pub fn with_token(candidate: &str) -> Result<Self, Error> {
        let mut options = Options::default();
        options.token = options.check_token(candidate)?;
        Ok(options)
    }

    /// The characters that cannot be used as the delimiter: the two kind
    /// tags, the comment marker, and the decimal digits.
    pub fn reserved(&self) -> Vec<char> {
        let mut symbols = vec![self.whole, self.fraction, self.comment];
        symbols.extend('0'..='9');
        symbols
    }

    /// Validates a candidate delimiter. It must be exactly one character and
    /// must not collide with any reserved symbol.
    pub fn check_token(&self, candidate: &str) -> Result<char, Error> {
        let mut chars = candidate.chars();
        let token = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(Error {
                    msg: format!("token {:?} is not a single character", candidate),
                    src: None,
                    r#type: ErrorType::ReservedToken,
                })
            }
        };
        if self.reserved().contains(&token) {
            return Err(Error {
                msg: format!(
                    "token {:?} is reserved, along with {:?}",
                    token,
                    self.reserved()
                ),
                src: None,
                r#type: ErrorType::ReservedToken,
            });
        }
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format() {
        let options = Options::default();
        assert_eq!(options.token(), ':');
        assert_eq!(options.comment(), '#');
        assert_eq!(options.whole(), 'w');
        assert_eq!(options.fraction(), 'f');
    }

    #[test]
    fn reserved_set_is_derived_from_the_format() {
        let reserved = Options::default().reserved();
        assert!(reserved.contains(&'w'));
        assert!(reserved.contains(&'f'));
        assert!(reserved.contains(&'#'));
        for digit in '0'..='9' {
            assert!(reserved.contains(&digit));
        }
        assert_eq!(reserved.len(), 13);
    }

    #[test]
    fn plain_token_is_accepted() {
        assert_eq!(Options::default().check_token(";"), Ok(';'));
        assert_eq!(Options::with_token("|").map(|o| o.token()), Ok('|'));
    }

    #[test]
    fn reserved_tokens_are_rejected() {
        let options = Options::default();
        for candidate in &["w", "f", "#", "0", "5", "9"] {
            let err = options.check_token(candidate).unwrap_err();
            assert_eq!(err.r#type, ErrorType::ReservedToken);
        }
    }

    #[test]
    fn empty_and_multichar_tokens_are_rejected() {
        let options = Options::default();
        assert_eq!(
            options.check_token("").unwrap_err().r#type,
            ErrorType::ReservedToken
        );
        assert_eq!(
            options.check_token("::").unwrap_err().r#type,
            ErrorType::ReservedToken
        );
    }
}
