//! Numeric bound checks on string input
//!
//! The input must first be all ASCII digits; anything else fails with the
//! bound message rather than a separate "not numeric" one. An empty input
//! passes the digit test and compares as `0`.

use crate::foundation::ValidationError;
use crate::validators::content::is_digits;

/// Reads a digit-only string as a float, treating the empty string as zero.
#[inline]
fn as_number(input: &str) -> f64 {
    input.parse::<f64>().unwrap_or(0.0)
}

crate::validator! {
    /// Validates that a digit-only string is strictly less than `bound`.
    #[derive(Copy, PartialEq)]
    pub LessThan { bound: f64 } for str;
    rule(self, input) { is_digits(input) && as_number(input) < self.bound }
    error(self, input) { ValidationError::less_than(self.bound) }
    fn less_than(bound: f64);
}

crate::validator! {
    /// Validates that a digit-only string is strictly greater than `bound`.
    #[derive(Copy, PartialEq)]
    pub GreaterThan { bound: f64 } for str;
    rule(self, input) { is_digits(input) && as_number(input) > self.bound }
    error(self, input) { ValidationError::greater_than(self.bound) }
    fn greater_than(bound: f64);
}
