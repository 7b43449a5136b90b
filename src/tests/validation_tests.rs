use crate::phonenumber::enums::TypeValue;
use crate::validation::{
    PhoneValidator, PhoneValidatorOptions, ValidationResult, Validator, INVALID_NUMBER_FORMAT_CODE,
};

use super::get_provider;

fn validator() -> PhoneValidator {
    PhoneValidator::new(get_provider())
}

#[test]
fn accepts_a_valid_number_for_an_allowed_country() {
    let options = PhoneValidatorOptions {
        countries: vec!["BE".to_string()],
        ..Default::default()
    };
    assert!(validator().validate("012345678", &options).is_valid());
}

#[test]
fn accepts_international_numbers_without_any_options() {
    let options = PhoneValidatorOptions::default();
    assert!(validator().validate("+3212345678", &options).is_valid());
}

#[test]
fn rejects_a_number_outside_the_allowed_countries() {
    let options = PhoneValidatorOptions {
        countries: vec!["NL".to_string(), "FR".to_string()],
        ..Default::default()
    };
    let result = validator().validate("+3212345678", &options);
    assert!(!result.is_valid());
    assert_eq!(INVALID_NUMBER_FORMAT_CODE, result.errors()[0].code);
}

#[test]
fn international_option_relaxes_the_country_allow_list() {
    let options = PhoneValidatorOptions {
        countries: vec!["NL".to_string()],
        international: true,
        ..Default::default()
    };
    assert!(validator().validate("+3212345678", &options).is_valid());
    // A national-format number still has to match a hint to resolve.
    assert!(!validator().validate("012345678", &options).is_valid());
}

#[test]
fn type_allow_list_is_enforced() {
    let mobile_only = PhoneValidatorOptions {
        countries: vec!["BE".to_string()],
        types: vec![TypeValue::from("mobile")],
        ..Default::default()
    };
    assert!(validator().validate("0470123456", &mobile_only).is_valid());
    assert!(!validator().validate("012345678", &mobile_only).is_valid());
}

#[test]
fn ambiguous_type_passes_a_concrete_type_requirement() {
    let options = PhoneValidatorOptions {
        countries: vec!["IN".to_string()],
        types: vec![TypeValue::from("fixed_line")],
        ..Default::default()
    };
    assert!(validator().validate("8590332334", &options).is_valid());
}

#[test]
fn lenient_option_accepts_plausible_numbers() {
    let strict = PhoneValidatorOptions {
        countries: vec!["BE".to_string()],
        ..Default::default()
    };
    let lenient = PhoneValidatorOptions {
        lenient: true,
        ..strict.clone()
    };
    assert!(!validator().validate("0123456789", &strict).is_valid());
    assert!(validator().validate("0123456789", &lenient).is_valid());
}

#[test]
fn garbage_input_collapses_to_the_generic_failure() {
    let options = PhoneValidatorOptions {
        countries: vec!["BE".to_string()],
        ..Default::default()
    };
    let result = validator().validate("definitely not a phone number", &options);
    assert_eq!(ValidationResult::invalid(), result);
    assert_eq!("Invalid number format", result.errors()[0].message);
}

#[test]
fn unknown_countries_and_types_in_options_are_dropped_not_fatal() {
    let options = PhoneValidatorOptions {
        countries: vec!["XX".to_string(), "BE".to_string()],
        types: vec![TypeValue::from("bogus"), TypeValue::from("fixed_line")],
        ..Default::default()
    };
    assert!(validator().validate("012345678", &options).is_valid());
}

#[test]
fn empty_input_is_left_to_the_host_framework() {
    let options = PhoneValidatorOptions {
        countries: vec!["BE".to_string()],
        ..Default::default()
    };
    assert!(validator().validate("", &options).is_valid());
}

#[test]
fn options_deserialize_from_host_configuration() {
    let options: PhoneValidatorOptions = serde_json::from_str(
        r#"{"countries": ["BE", "NL"], "types": ["mobile", 0], "lenient": true}"#,
    )
    .unwrap();
    assert_eq!(vec!["BE", "NL"], options.countries);
    assert_eq!(vec![TypeValue::from("mobile"), TypeValue::from(0)], options.types);
    assert!(options.lenient);
    assert!(!options.international);

    let defaults: PhoneValidatorOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(PhoneValidatorOptions::default(), defaults);
}
