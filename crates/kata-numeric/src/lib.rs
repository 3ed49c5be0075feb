//! Small numeric exercises: Roman numeral conversion, digit-descending
//! reordering, and a generalized Tribonacci generator.
//!
//! Every function is pure and call-local; the only failure modes are the
//! documented input-validation errors.

#![forbid(unsafe_code)]

mod digits;
mod roman;
mod tribonacci;

pub use digits::{descending_digits, DigitsError};
pub use roman::{from_roman, to_roman, RomanError};
pub use tribonacci::tribonacci;
