use outcome_rail::ValidationError;

#[test]
fn validation_error_carries_property_and_severity() {
    let finding = ValidationError::new("email", String::from("warning"));

    assert_eq!(finding.property_name(), "email");
    assert_eq!(finding.severity(), "warning");
    assert_eq!(finding.clone(), finding);
}

#[cfg(feature = "serde")]
#[test]
fn validation_error_uses_camel_case_fields() {
    let json = serde_json::to_value(ValidationError::new("age", "error")).unwrap();

    assert_eq!(json, serde_json::json!({ "propertyName": "age", "severity": "error" }));
}
