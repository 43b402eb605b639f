//! Benchmarks for registration and validation runs.

use std::collections::HashMap;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use formcheck_validator::prelude::*;

fn contact_form() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    let rules: [(&str, RuleKind, Option<&str>); 9] = [
        ("name", RuleKind::TrimWhitespace, None),
        ("name", RuleKind::Required, None),
        ("name", RuleKind::MaxLen, Some("40")),
        ("email", RuleKind::Lowercase, None),
        ("email", RuleKind::Email, None),
        ("age", RuleKind::GreaterThan, Some("17")),
        ("age", RuleKind::LessThan, Some("130")),
        ("zip", RuleKind::Regex, Some("/^[0-9]{5}$/")),
        ("nick", RuleKind::Alphanumeric, None),
    ];
    for (field, kind, parameter) in rules {
        if let Err(err) = registry.add(field, kind, parameter, None) {
            panic!("benchmark rule refused: {err}");
        }
    }
    registry
}

fn submission(valid: bool) -> HashMap<String, String> {
    let pairs = if valid {
        [
            ("name", "  Ada Lovelace "),
            ("email", "Ada@Example.COM"),
            ("age", "36"),
            ("zip", "12345"),
            ("nick", "ada1815"),
        ]
    } else {
        [
            ("name", "   "),
            ("email", "ada@"),
            ("age", "12"),
            ("zip", "12-45"),
            ("nick", "ada_1815"),
        ]
    };
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

// ============================================================================
// Registration
// ============================================================================

fn bench_registration(c: &mut Criterion) {
    c.bench_function("register_contact_form", |b| b.iter(|| black_box(contact_form())));

    c.bench_function("register_regex_rule", |b| {
        b.iter(|| {
            let mut registry = RuleRegistry::new();
            let added = registry
                .add("code", RuleKind::Regex, Some(black_box("/^[A-Z]{2}-[0-9]{4}$/i")), None)
                .is_ok();
            black_box(added)
        })
    });
}

// ============================================================================
// Validation runs
// ============================================================================

fn bench_validate(c: &mut Criterion) {
    let registry = contact_form();
    let engine = ValidationEngine::new();
    let mut group = c.benchmark_group("validate");

    for valid in [true, false] {
        let label = if valid { "passing" } else { "failing" };
        group.bench_with_input(BenchmarkId::from_parameter(label), &valid, |b, &valid| {
            let input = submission(valid);
            b.iter(|| {
                let mut values = input.clone();
                black_box(engine.validate(&registry, &mut values))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_registration, bench_validate);
criterion_main!(benches);
