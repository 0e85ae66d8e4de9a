//! Runs the built-in validators over a few parameter sets and prints the reports

use paramgate_validation::{
    validate, BooleanValidator, IntegerValidator, OneOfValidator, ParamSource,
    ValidationMapping, ValidationOutcome,
};

fn main() {
    let mapping = ValidationMapping::new()
        .field("id", IntegerValidator::new())
        .field("active", BooleanValidator::new())
        .field("sort", OneOfValidator::new(["asc", "desc"]))
        .field("tag", |value: Option<&str>| match value {
            Some(tag) if tag.len() > 16 => ValidationOutcome::invalid("tag is too long"),
            _ => ValidationOutcome::Valid,
        });

    let cases: Vec<Vec<(&str, &str)>> = vec![
        vec![("id", "1"), ("active", "true")],
        vec![("id", "not-an-integer")],
        vec![("id", "not-an-integer"), ("active", "not-a-boolean")],
        vec![("id", "1"), ("sort", "sideways"), ("tag", "a-very-long-tag-indeed")],
    ];

    for params in cases {
        let source: ParamSource = params.iter().copied().collect();
        let report = validate(&mapping, &source);
        println!("{:?}", params);
        println!("  {}", report);
    }
}
