//! Property-based tests for formcheck-validator.

use std::collections::HashMap;

use formcheck_validator::prelude::*;
use proptest::prelude::*;

fn registry(rules: &[(RuleKind, Option<&str>)]) -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    for (kind, parameter) in rules {
        registry.add("field", *kind, *parameter, None).unwrap();
    }
    registry
}

fn single(value: &str) -> HashMap<String, String> {
    HashMap::from([("field".to_owned(), value.to_owned())])
}

// ============================================================================
// IDEMPOTENCY: validating unchanged values twice gives the same report
// ============================================================================

proptest! {
    #[test]
    fn predicate_runs_are_idempotent(s in ".{0,20}") {
        let registry = registry(&[
            (RuleKind::Required, None),
            (RuleKind::MaxLen, Some("8")),
            (RuleKind::Alphanumeric, None),
            (RuleKind::Email, None),
            (RuleKind::LessThan, Some("100")),
        ]);
        let engine = ValidationEngine::new();
        let mut values = single(&s);

        let first = engine.validate(&registry, &mut values);
        let second = engine.validate(&registry, &mut values);
        prop_assert_eq!(first, second);
        prop_assert_eq!(&values["field"], &s);
    }

    #[test]
    fn transforms_settle_after_one_run(s in ".{0,20}") {
        let registry = registry(&[
            (RuleKind::TrimWhitespace, None),
            (RuleKind::Lowercase, None),
        ]);
        let engine = ValidationEngine::new();
        let mut values = single(&s);

        engine.validate(&registry, &mut values);
        let once = values["field"].clone();
        engine.validate(&registry, &mut values);
        prop_assert_eq!(&values["field"], &once);
    }
}

// ============================================================================
// CHECK SEMANTICS
// ============================================================================

proptest! {
    #[test]
    fn numeric_accepts_exactly_ascii_digits(s in "[0-9a-z ]{0,10}") {
        let expected = s.bytes().all(|b| b.is_ascii_digit());
        prop_assert_eq!(numeric().validate(&*s).is_ok(), expected);
    }

    #[test]
    fn lengths_count_characters(s in "\\PC{0,12}", limit in 0usize..12) {
        let len = s.chars().count();
        prop_assert_eq!(max_length(limit).validate(&*s).is_ok(), len <= limit);
        prop_assert_eq!(min_length(limit).validate(&*s).is_ok(), len >= limit);
    }

    #[test]
    fn bounds_follow_numeric_order(n in 0u32..1000, bound in 0u32..1000) {
        let value = n.to_string();
        let bound = f64::from(bound);
        prop_assert_eq!(less_than(bound).validate(&*value).is_ok(), f64::from(n) < bound);
        prop_assert_eq!(greater_than(bound).validate(&*value).is_ok(), f64::from(n) > bound);
    }

    #[test]
    fn one_entry_per_failing_field(fields in proptest::collection::btree_set("[a-z]{1,6}", 1..6)) {
        let mut registry = RuleRegistry::new();
        for field in &fields {
            registry.add(field.clone(), RuleKind::Required, None, None).unwrap();
            registry.add(field.clone(), RuleKind::MinLen, Some("1"), None).unwrap();
        }

        let report = ValidationEngine::new().validate(&registry, &mut HashMap::<String, String>::new());
        prop_assert_eq!(report.len(), fields.len());
        prop_assert_eq!(report.failures().len(), fields.len() * 2);
        let order: Vec<&String> = report.errors().keys().collect();
        prop_assert_eq!(order, fields.iter().collect::<Vec<_>>());
    }
}
