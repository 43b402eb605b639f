//! The caller-owned map of submitted field values.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

/// Read and rewrite access to submitted field values.
///
/// The engine reads every field a rule names and rewrites the value of
/// fields touched by a transformation. It never inserts or removes keys.
pub trait FieldValues {
    /// Returns the current value of `field`, if submitted.
    fn value(&self, field: &str) -> Option<&str>;

    /// Replaces the value of an existing `field`.
    ///
    /// Returns false, leaving the map untouched, when the field is absent.
    fn replace(&mut self, field: &str, value: String) -> bool;
}

impl<S: BuildHasher> FieldValues for HashMap<String, String, S> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }

    fn replace(&mut self, field: &str, value: String) -> bool {
        if let Some(slot) = self.get_mut(field) {
            *slot = value;
            true
        } else {
            false
        }
    }
}

impl FieldValues for BTreeMap<String, String> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }

    fn replace(&mut self, field: &str, value: String) -> bool {
        if let Some(slot) = self.get_mut(field) {
            *slot = value;
            true
        } else {
            false
        }
    }
}

impl<S: BuildHasher> FieldValues for IndexMap<String, String, S> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }

    fn replace(&mut self, field: &str, value: String) -> bool {
        if let Some(slot) = self.get_mut(field) {
            *slot = value;
            true
        } else {
            false
        }
    }
}

impl<V: FieldValues + ?Sized> FieldValues for &mut V {
    fn value(&self, field: &str) -> Option<&str> {
        (**self).value(field)
    }

    fn replace(&mut self, field: &str, value: String) -> bool {
        (**self).replace(field, value)
    }
}
