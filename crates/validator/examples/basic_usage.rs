//! Basic usage example for formcheck-validator

use std::collections::HashMap;

use formcheck_validator::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Rules added in code
    let mut form = FormValidator::new();
    form.add_named_rule("Name", "whitespace", None, None)?
        .add_named_rule("Name", "req", None, None)?
        .add_named_rule("Name", "maxlen", Some("40"), None)?
        .add_named_rule("Email", "req", None, Some("Please fill in Email"))?
        .add_named_rule("Email", "email", None, None)?
        .add_named_rule("Age", "lessthan", Some("130"), None)?;

    let mut post = HashMap::from([
        ("Name".to_string(), "   ".to_string()),
        ("Age".to_string(), "abc".to_string()),
    ]);

    if form.validate_form(&mut post) {
        println!("✓ form is valid");
    } else {
        for (field, message) in form.errors() {
            println!("✗ {field} : {message}");
        }
    }

    // The same kind of rules loaded from JSON
    let config = RuleSetConfig::from_json_str(
        r#"{
            "separator": "; ",
            "rules": [
                { "field": "code", "rule": "caps" },
                { "field": "code", "rule": "regex", "param": "/^[A-Z]{3}$/" },
                { "field": "qty",  "rule": "greater_than", "param": 0 }
            ]
        }"#,
    )?;
    let mut order = config.build()?;
    let mut values = HashMap::from([
        ("code".to_string(), "abc".to_string()),
        ("qty".to_string(), "2".to_string()),
    ]);
    println!(
        "order valid: {} (code is now {:?})",
        order.validate_form(&mut values),
        values["code"]
    );

    Ok(())
}
