use crate::i18n::CountryCodeRegistry;
use crate::phonenumber::enums::{FormatValue, PhoneNumberFormat, PhoneNumberType, TypeValue};

use super::get_provider;

#[test]
fn country_registry_validates_case_insensitively() {
    let registry = CountryCodeRegistry::new(get_provider());
    assert!(registry.is_valid("BE"));
    assert!(registry.is_valid("be"));
    assert!(registry.is_valid("aC")); // non-ISO calling region
    assert!(!registry.is_valid("ZZ"));
    assert!(!registry.is_valid(""));
}

#[test]
fn country_registry_lists_every_supported_region() {
    let registry = CountryCodeRegistry::new(get_provider());
    let all = registry.all();
    assert!(all.len() >= 8);
    assert!(all.iter().any(|c| *c == "AC"));
}

#[test]
fn country_sanitize_drops_invalid_and_deduplicates_in_order() {
    let registry = CountryCodeRegistry::new(get_provider());
    let sanitized = registry.sanitize(["be", "xx", "NL", "BE", "", "fr"]);
    assert_eq!(
        vec!["BE", "NL", "FR"],
        sanitized.iter().map(|c| c.as_str()).collect::<Vec<_>>()
    );

    assert!(registry.sanitize(["xx", "yy"]).is_empty());
    assert!(registry.sanitize(Vec::<String>::new()).is_empty());
}

#[test]
fn format_lookup_is_bidirectional() {
    assert_eq!(Some(PhoneNumberFormat::E164), PhoneNumberFormat::from_code(0));
    assert_eq!(Some(PhoneNumberFormat::RFC3966), PhoneNumberFormat::from_code(3));
    assert_eq!(None, PhoneNumberFormat::from_code(99));

    assert_eq!(
        Some(PhoneNumberFormat::National),
        PhoneNumberFormat::from_name("national")
    );
    assert_eq!(
        Some(PhoneNumberFormat::International),
        PhoneNumberFormat::from_name("INTERNATIONAL")
    );
    assert_eq!(None, PhoneNumberFormat::from_name("fancy"));

    for format in PhoneNumberFormat::all() {
        assert_eq!(Some(format), PhoneNumberFormat::from_code(format.code()));
        assert_eq!(Some(format), PhoneNumberFormat::from_name(format.name()));
        assert_eq!(
            format.human_readable_name(),
            format.name().to_ascii_lowercase()
        );
    }
}

#[test]
fn format_resolve_accepts_codes_and_names() {
    assert_eq!(Some(PhoneNumberFormat::National), PhoneNumberFormat::resolve(2));
    assert_eq!(
        Some(PhoneNumberFormat::RFC3966),
        PhoneNumberFormat::resolve("rfc3966")
    );
    assert_eq!(None, PhoneNumberFormat::resolve(-5));
    assert!(PhoneNumberFormat::is_valid("e164"));
    assert!(!PhoneNumberFormat::is_valid("e166"));
}

#[test]
fn format_sanitize_never_fails() {
    let sanitized = PhoneNumberFormat::sanitize([
        FormatValue::from("national"),
        FormatValue::from("bogus"),
        FormatValue::from(0),
        FormatValue::from("NATIONAL"),
    ]);
    assert_eq!(
        vec![PhoneNumberFormat::National, PhoneNumberFormat::E164],
        sanitized
    );
    assert!(PhoneNumberFormat::sanitize(Vec::<FormatValue>::new()).is_empty());
}

#[test]
fn type_lookup_is_bidirectional() {
    assert_eq!(Some(PhoneNumberType::FixedLine), PhoneNumberType::from_code(0));
    assert_eq!(Some(PhoneNumberType::VoiceMail), PhoneNumberType::from_code(10));
    assert_eq!(Some(PhoneNumberType::Unknown), PhoneNumberType::from_code(-1));
    assert_eq!(None, PhoneNumberType::from_code(42));

    assert_eq!(
        Some(PhoneNumberType::FixedLineOrMobile),
        PhoneNumberType::from_name("fixed_line_or_mobile")
    );
    assert_eq!(Some(PhoneNumberType::VoIP), PhoneNumberType::from_name("voip"));
    assert_eq!(None, PhoneNumberType::from_name("carrier_pigeon"));

    for phone_type in PhoneNumberType::all() {
        assert_eq!(Some(phone_type), PhoneNumberType::from_code(phone_type.code()));
        assert_eq!(Some(phone_type), PhoneNumberType::from_name(phone_type.name()));
        assert_eq!(
            phone_type.human_readable_name(),
            phone_type.name().to_ascii_lowercase()
        );
    }
}

#[test]
fn type_sanitize_drops_invalid_elements_silently() {
    let sanitized = PhoneNumberType::sanitize([
        TypeValue::from("mobile"),
        TypeValue::from("bogus"),
        TypeValue::from(0),
        TypeValue::from(99),
        TypeValue::from("MOBILE"),
    ]);
    assert_eq!(
        vec![PhoneNumberType::Mobile, PhoneNumberType::FixedLine],
        sanitized
    );
}

#[test]
fn type_values_deserialize_from_mixed_configuration() {
    let values: Vec<TypeValue> = serde_json::from_str(r#"["mobile", 2, "TOLL_FREE"]"#).unwrap();
    assert_eq!(
        vec![
            PhoneNumberType::Mobile,
            PhoneNumberType::FixedLineOrMobile,
            PhoneNumberType::TollFree
        ],
        PhoneNumberType::sanitize(values)
    );
}
