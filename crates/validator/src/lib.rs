//! # formcheck-validator
//!
//! Declarative validation and sanitization of submitted form fields.
//!
//! Rules are registered against field names, each with a kind, an optional
//! parameter and an optional custom message. A validation run evaluates them
//! in registration order against a map of field values, applies
//! transformations in place and collects one combined message per failing
//! field.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use formcheck_validator::prelude::*;
//!
//! let mut form = FormValidator::new();
//! form.add_rule("Name", RuleKind::TrimWhitespace, None, None)?
//!     .add_rule("Name", RuleKind::Required, None, None)?
//!     .add_rule("Name", RuleKind::MaxLen, Some("40"), None)?
//!     .add_rule("Age", RuleKind::LessThan, Some("130"), None)?;
//!
//! let mut post = HashMap::from([
//!     ("Name".to_string(), "  Ada  ".to_string()),
//!     ("Age".to_string(), "36".to_string()),
//! ]);
//! assert!(form.validate_form(&mut post));
//! assert_eq!(post["Name"], "Ada");
//! # Ok::<(), RuleError>(())
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and
//!   [`ValidationError`](foundation::ValidationError)
//! - [`validators`]: one check per predicate rule kind, built with [`validator!`]
//! - [`transform`]: in-place rewrites of field values
//! - [`rules`]: rule declarations and the ordered [`RuleRegistry`](rules::RuleRegistry)
//! - [`engine`]: runs a registry over a [`FieldValues`](values::FieldValues) map
//! - [`form`]: the stateful [`FormValidator`](form::FormValidator)
//! - [`config`]: rule sets loaded from JSON

// ValidationError is returned by value from every check; boxing it would add
// an allocation per failure.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod engine;
pub mod form;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod report;
pub mod rules;
pub mod transform;
pub mod validators;
pub mod values;
