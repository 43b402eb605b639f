//! Rule declarations and their registry.
//!
//! A [`Rule`] binds a field to a [`RuleKind`], with an optional parameter and
//! an optional custom message. The [`RuleRegistry`] keeps rules in
//! registration order and compiles each one into a checker as it is added.

mod checker;
mod error;
mod kind;
mod registry;
mod rule;

pub(crate) use checker::Outcome;
pub use error::RuleError;
pub use kind::{ParameterKind, RuleKind};
pub use registry::RuleRegistry;
pub use rule::Rule;
