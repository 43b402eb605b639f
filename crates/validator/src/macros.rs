//! Macros for declaring checks with minimal boilerplate.
//!
//! ```rust,ignore
//! use formcheck_validator::validator;
//! use formcheck_validator::foundation::ValidationError;
//!
//! // Unit check (no fields)
//! validator! {
//!     pub NotEmpty for str;
//!     rule(input) { !input.is_empty() }
//!     error(input) { ValidationError::required() }
//!     fn not_empty();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MaxLength { max: usize } for str;
//!     rule(self, input) { input.chars().count() <= self.max }
//!     error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
//!     fn max_length(max: usize);
//! }
//! ```

/// Creates a complete check: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied to struct checks; unit checks
/// additionally derive `Copy, PartialEq, Eq, Hash`. Add extra derives via
/// `#[derive(...)]`.
///
/// # Variants
///
/// **Unit check** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub Numeric for str;
///     rule(input) { input.bytes().all(|b| b.is_ascii_digit()) }
///     error(input) { ValidationError::new("numeric", templates::NUMERIC) }
///     fn numeric();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     pub LessThan { bound: f64 } for str;
///     rule(self, input) { is_digits(input) && as_number(input) < self.bound }
///     error(self, input) { ValidationError::less_than(self.bound) }
///     fn less_than(bound: f64);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the error type):
/// ```rust,ignore
/// validator! {
///     pub MatchesRegex { pattern: regex::Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error(self, input) { ValidationError::pattern(self.pattern.as_str().to_owned()) }
///     new(pattern: &str) -> regex::Error { Ok(Self { pattern: regex::Regex::new(pattern)? }) }
///     fn matches_regex(pattern: &str) -> regex::Error;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit check + factory fn ──────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit check, no factory ───────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + fallible new + fallible factory ─────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new, no factory ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError};

    crate::validator! {
        /// Test-only unit check.
        pub Shouty for str;
        rule(input) { input.chars().all(|c| !c.is_lowercase()) }
        error(input) { ValidationError::new("shouty", "{field} must be shouted") }
        fn shouty();
    }

    crate::validator! {
        /// Test-only struct check.
        #[derive(Copy, PartialEq, Eq)]
        pub EndsWithBang { count: usize } for str;
        rule(self, input) { input.ends_with(&"!".repeat(self.count)) }
        error(self, input) {
            ValidationError::new("bang", "Need {count} bangs").with_param("count", self.count.to_string())
        }
        fn ends_with_bang(count: usize);
    }

    #[test]
    fn test_unit_variant() {
        assert!(shouty().validate("HEY").is_ok());
        assert_eq!(shouty().validate("hey").unwrap_err().code, "shouty");
    }

    #[test]
    fn test_struct_variant() {
        let check = ends_with_bang(2);
        assert_eq!(check, EndsWithBang::new(2));
        assert!(check.validate("wow!!").is_ok());
        assert_eq!(
            check.validate("wow!").unwrap_err().render(),
            "Need 2 bangs"
        );
    }
}
