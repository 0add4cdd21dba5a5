//! # coinsum
//!
//! coinsum is a coin counting tool, and a library for parsing plain-text
//! coin ledger files.
//!
//! A ledger file holds one coin entry per line: three fields separated by a
//! delimiter (`:` unless configured otherwise) giving the denomination, the
//! number of coins, and the kind tag, `w` for whole currency units or `f`
//! for hundredths. Whitespace is ignored anywhere, and `#` starts a comment
//! running to the end of the line.
//!
//! ```text
//! 25 : 4 : f   # four quarter coins
//! 5  : 3 : w   # three five-unit coins
//! ```

mod ledger;
mod options;
pub mod parse;

pub use ledger::*;
pub use options::*;
