//! Prelude module for convenient imports.
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let mut registry = RuleRegistry::new();
//! registry.add("email", RuleKind::Email, None, None)?;
//! assert!(min_length(3).validate("abc").is_ok());
//! # Ok::<(), RuleError>(())
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{Validate, ValidationError, ValidationResult};

// ============================================================================
// VALIDATORS AND TRANSFORMS
// ============================================================================

pub use crate::transform::Transform;
pub use crate::validators::*;

// ============================================================================
// RULES AND EVALUATION
// ============================================================================

pub use crate::config::{ConfigError, RuleSetConfig, RuleSpec};
pub use crate::engine::{EngineConfig, ValidationEngine};
pub use crate::form::FormValidator;
pub use crate::report::{ErrorMap, ValidationReport};
pub use crate::rules::{Rule, RuleError, RuleKind, RuleRegistry};
pub use crate::values::FieldValues;
