//! Core traits for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every check implements.
///
/// Checks are generic over their input so that the same trait can describe
/// borrowed string checks (`Input = str`) as well as typed ones. The error
/// they return has no field set; the engine attaches the field afterwards.
///
/// # Examples
///
/// ```rust
/// use formcheck_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "{field} must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("abc").is_ok());
/// assert!(NoSpaces.validate("a c").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns the name of this validator.
    ///
    /// Used for debugging and log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
