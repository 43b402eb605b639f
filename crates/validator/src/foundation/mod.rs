//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`] and the default message [`templates`]
//!
//! Every built-in check is a small value implementing [`Validate`] with
//! `Input = str`. A failing check returns a [`ValidationError`] whose message
//! is a template; the engine sets the field and renders it:
//!
//! ```rust
//! use formcheck_validator::foundation::Validate;
//! use formcheck_validator::validators::max_length;
//!
//! let error = max_length(3).validate("abcd").unwrap_err().with_field("code");
//! assert_eq!(error.render(), "Maximum length exceeded for code.");
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, templates};
pub use traits::Validate;

/// A check result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
