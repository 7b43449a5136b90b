pub mod i18n;
pub mod interfaces;
pub mod phonenumber;
pub mod validation;

#[cfg(test)]
mod tests;

pub use i18n::{CountryCode, CountryCodeRegistry};
pub use interfaces::{ParsedNumber, PhoneMetadataProvider, ProviderParseError};
pub use phonenumber::{
    errors::{CountryCodeError, NumberFormatError, NumberParseError, PhoneNumberError},
    FormatValue, PhoneNumber, PhoneNumberFormat, PhoneNumberType, TypeValue,
};
pub use validation::{
    PhoneValidator, PhoneValidatorOptions, ValidationError, ValidationResult, Validator,
};
