use modelbook_core::{InvalidArgument, PersonRecord};

#[test]
fn new_stores_inputs_and_leaves_salary_unset() {
    let person = PersonRecord::new("Jane", "Doe", Some(1990));

    assert_eq!(person.first_name(), "Jane");
    assert_eq!(person.last_name(), "Doe");
    assert_eq!(person.birth_year(), Some(1990));
    assert_eq!(person.base_salary(), None);
    assert_eq!(person.bonus_percent(), None);
    assert_eq!(person.total_salary(), 0.0);
}

#[test]
fn age_at_derives_from_birth_year() {
    let person = PersonRecord::new("Jane", "Doe", Some(1990));
    assert_eq!(person.age_at(2024), Some(34));

    let unset = PersonRecord::new("Jane", "Doe", None);
    assert_eq!(unset.age_at(2024), None);
}

#[test]
fn set_birth_year_accepts_unbounded_years() {
    let mut person = PersonRecord::new("Jane", "Doe", None);

    person.set_birth_year(-44);
    assert_eq!(person.age_at(2024), Some(2068));

    person.set_birth_year(2030);
    assert_eq!(person.age_at(2024), Some(-6));
}

#[test]
fn full_name_trims_when_a_part_is_empty() {
    assert_eq!(PersonRecord::new("Jane", "Doe", None).full_name(), "Jane Doe");
    assert_eq!(PersonRecord::new("", "Doe", None).full_name(), "Doe");
    assert_eq!(PersonRecord::new("Jane", "", None).full_name(), "Jane");
    assert_eq!(PersonRecord::new("", "", None).full_name(), "");
}

#[test]
fn set_full_name_requires_two_tokens() {
    let mut person = PersonRecord::new("Jane", "Doe", None);

    let err = person.set_full_name("Ada").unwrap_err();
    assert_eq!(err, InvalidArgument::FullNameTokenCount { found: 1 });
    let err = person.set_full_name("   ").unwrap_err();
    assert_eq!(err, InvalidArgument::FullNameTokenCount { found: 0 });

    // Rejected writes leave the stored names untouched.
    assert_eq!(person.full_name(), "Jane Doe");
}

#[test]
fn set_full_name_stores_first_two_tokens_and_discards_the_rest() {
    let mut person = PersonRecord::new("", "", None);

    person.set_full_name("Ada Lovelace").unwrap();
    assert_eq!(person.full_name(), "Ada Lovelace");

    person.set_full_name("Ada Lovelace Byron").unwrap();
    assert_eq!(person.first_name(), "Ada");
    assert_eq!(person.last_name(), "Lovelace");
    assert_eq!(person.full_name(), "Ada Lovelace");
}

#[test]
fn set_salary_stores_pair_and_derives_total() {
    let mut person = PersonRecord::new("Jane", "Doe", None);

    person.set_salary(50_000, 10.0).unwrap();
    assert_eq!(person.base_salary(), Some(50_000));
    assert_eq!(person.bonus_percent(), Some(10.0));
    assert_eq!(person.total_salary(), 55_000.0);

    person.set_salary(100_000, 12.5).unwrap();
    assert_eq!(person.total_salary(), 112_500.0);

    person.set_salary(0, 0.0).unwrap();
    assert_eq!(person.total_salary(), 0.0);
}

#[test]
fn set_salary_rejects_negative_components_without_mutating() {
    let mut person = PersonRecord::new("Jane", "Doe", None);
    person.set_salary(50_000, 10.0).unwrap();

    let err = person.set_salary(-1, 10.0).unwrap_err();
    assert_eq!(err, InvalidArgument::NegativeBaseSalary { base_salary: -1 });

    let err = person.set_salary(60_000, -0.5).unwrap_err();
    assert_eq!(
        err,
        InvalidArgument::NegativeBonusPercent { bonus_percent: -0.5 }
    );

    assert_eq!(person.base_salary(), Some(50_000));
    assert_eq!(person.bonus_percent(), Some(10.0));
    assert_eq!(person.total_salary(), 55_000.0);
}

#[test]
fn set_salary_rejects_non_finite_bonus_before_range_checks() {
    let mut person = PersonRecord::new("Jane", "Doe", None);

    let err = person.set_salary(-1, f64::NAN).unwrap_err();
    assert!(matches!(
        err,
        InvalidArgument::NonFinite {
            field: "bonus_percent",
            ..
        }
    ));
    assert_eq!(person.base_salary(), None);
    assert_eq!(person.total_salary(), 0.0);
}

#[test]
fn jane_doe_end_to_end() {
    let mut person = PersonRecord::new("Jane", "Doe", Some(1990));
    assert_eq!(person.age_at(2024), Some(34));

    person.set_salary(50_000, 10.0).unwrap();
    assert_eq!(person.total_salary(), 55_000.0);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let mut person = PersonRecord::new("Jane", "Doe", Some(1990));
    person.set_salary(50_000, 10.0).unwrap();

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["first_name"], "Jane");
    assert_eq!(json["last_name"], "Doe");
    assert_eq!(json["birth_year"], 1990);
    assert_eq!(json["base_salary"], 50_000);
    assert_eq!(json["bonus_percent"], 10.0);

    let decoded: PersonRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

#[test]
fn deserialize_rejects_negative_salary() {
    let value = serde_json::json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "birth_year": null,
        "base_salary": -5,
        "bonus_percent": 10.0
    });

    let err = serde_json::from_value::<PersonRecord>(value).unwrap_err();
    assert!(
        err.to_string().contains("non-negative"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_half_of_the_salary_pair() {
    let value = serde_json::json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "birth_year": 1990,
        "base_salary": 50_000,
        "bonus_percent": null
    });

    let err = serde_json::from_value::<PersonRecord>(value).unwrap_err();
    assert!(
        err.to_string().contains("set together"),
        "unexpected error: {err}"
    );
}
