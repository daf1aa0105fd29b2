//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `modelbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use modelbook_core::{CircleShape, PersonRecord, ValidatedNumber};

fn main() {
    let mut person = PersonRecord::new("Jane", "Doe", Some(1990));
    person
        .set_salary(50_000, 10.0)
        .expect("demo salary pair is valid");
    println!(
        "person full_name={} age_at_2024={:?} total_salary={}",
        person.full_name(),
        person.age_at(2024),
        person.total_salary()
    );

    let mut circle = CircleShape::new(2.0).expect("demo radius is valid");
    println!(
        "circle radius={} diameter={} area={}",
        circle.radius(),
        circle.diameter(),
        circle.area()
    );

    let mut number = ValidatedNumber::new();
    number.set_value(1.5).expect("demo value is positive");
    println!("number value={:?}", number.value());

    println!("modelbook_core version={}", modelbook_core::core_version());
}
