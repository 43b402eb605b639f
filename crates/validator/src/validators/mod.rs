//! Built-in checks
//!
//! One check per predicate rule kind. Every check validates `str` and
//! returns a [`ValidationError`](crate::foundation::ValidationError) carrying
//! the kind's default message template.
//!
//! - **Length**: [`Required`], [`MinLength`], [`MaxLength`]
//! - **Content**: [`Alphanumeric`], [`Alphabetic`], [`Numeric`]
//! - **Pattern**: [`Email`], [`MatchesRegex`]
//! - **Range**: [`LessThan`], [`GreaterThan`]
//!
//! ```rust
//! use formcheck_validator::foundation::Validate;
//! use formcheck_validator::validators::{email, min_length};
//!
//! assert!(min_length(3).validate("abc").is_ok());
//! assert!(email().validate("not-an-email").is_err());
//! ```

pub mod content;
pub mod length;
pub mod pattern;
pub mod range;

pub use content::{Alphabetic, Alphanumeric, Numeric, alphabetic, alphanumeric, numeric};
pub use length::{MaxLength, MinLength, Required, max_length, min_length, required};
pub use pattern::{Email, MatchesRegex, email, matches_regex, normalize_pattern};
pub use range::{GreaterThan, LessThan, greater_than, less_than};
