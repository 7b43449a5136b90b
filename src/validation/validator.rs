use std::sync::Arc;

use log::debug;
use serde::Deserialize;

use crate::i18n::CountryCodeRegistry;
use crate::interfaces::PhoneMetadataProvider;
use crate::phonenumber::enums::{PhoneNumberType, TypeValue};
use crate::phonenumber::PhoneNumber;

/// Stable error code of the single user-visible failure, kept identical
/// across releases so host frameworks can key translations on it.
pub const INVALID_NUMBER_FORMAT_CODE: u64 = 1552843864;

/// Options a host framework hands to the validator. Unknown countries and
/// types inside the lists are dropped, not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PhoneValidatorOptions {
    /// Allowed countries; empty means any.
    pub countries: Vec<String>,
    /// Allowed number types, by name or numeric code; empty means any.
    pub types: Vec<TypeValue>,
    /// Accept internationally formatted numbers from outside `countries`.
    pub international: bool,
    /// Accept merely plausible numbers instead of strictly valid ones.
    pub lenient: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub message: &'static str,
    pub code: u64,
}

/// Pass/fail outcome of a validation run. Internal error causes are never
/// exposed; every failure collapses to one generic message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn invalid() -> Self {
        Self {
            errors: vec![ValidationError {
                message: "Invalid number format",
                code: INVALID_NUMBER_FORMAT_CODE,
            }],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// The framework-facing validation contract.
pub trait Validator {
    fn validate(&self, value: &str, options: &PhoneValidatorOptions) -> ValidationResult;
}

/// Validates raw phone strings against country, type and validity
/// constraints.
pub struct PhoneValidator {
    provider: Arc<dyn PhoneMetadataProvider>,
}

impl PhoneValidator {
    pub fn new(provider: Arc<dyn PhoneMetadataProvider>) -> Self {
        Self { provider }
    }
}

impl Validator for PhoneValidator {
    fn validate(&self, value: &str, options: &PhoneValidatorOptions) -> ValidationResult {
        // Emptiness is the host's concern (required-field handling), not a
        // malformed number.
        if value.is_empty() {
            return ValidationResult::ok();
        }

        let registry = CountryCodeRegistry::new(Arc::clone(&self.provider));
        let countries = registry.sanitize(&options.countries);
        let types = PhoneNumberType::sanitize(options.types.iter().cloned());

        let phone =
            PhoneNumber::with_countries(Arc::clone(&self.provider), value, countries.iter())
                .lenient(options.lenient);

        // Is the country within the allowed list (if applicable)?
        if !options.international
            && !countries.is_empty()
            && !phone.is_of_country(countries.iter())
        {
            debug!("{:?} rejected: not in the allowed countries", value);
            return ValidationResult::invalid();
        }

        // Is the type within the allowed list (if applicable)?
        if !types.is_empty() && !phone.is_of_type(types) {
            debug!("{:?} rejected: not an allowed number type", value);
            return ValidationResult::invalid();
        }

        if !phone.is_valid() {
            debug!("{:?} rejected: not a valid number", value);
            return ValidationResult::invalid();
        }

        ValidationResult::ok()
    }
}
