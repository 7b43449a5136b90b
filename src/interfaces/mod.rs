use thiserror::Error;

use crate::phonenumber::enums::{PhoneNumberFormat, PhoneNumberType};

/// A parsed phone number as produced by a [`PhoneMetadataProvider`].
///
/// The core never interprets this beyond carrying it back into provider
/// calls; it is just enough structure to cross the trait boundary without
/// tying the crate to one backend's internal number type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParsedNumber {
    /// Country calling code, e.g. `32` for Belgium.
    pub country_code: i32,
    /// National significant number without prefixes or separators.
    pub national_number: u64,
    /// Extension digits, if the input carried any.
    pub extension: Option<String>,
    /// The input exactly as handed to `parse`.
    pub raw_input: String,
}

/// Parse failures reported by a metadata backend.
///
/// These never escape the crate as-is; every call site translates them into
/// the public error taxonomy or folds them into a negative result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProviderParseError {
    #[error("Invalid country code")]
    InvalidCountryCode,
    #[error("Not a number")]
    NotANumber,
    #[error("Too short Nsn")]
    TooShortNsn,
    #[error("Too long Nsn")]
    TooLongNsn,
}

/// Numbering-plan metadata API used to isolate the underlying metadata
/// engine and allow different implementations to be swapped in easily.
///
/// Implementations own the authoritative per-region numbering-plan data and
/// must be stateless with respect to these calls: the core shares one
/// provider across instances and queries it concurrently without locking.
pub trait PhoneMetadataProvider: Send + Sync {
    /// Every region code the backend has metadata for, uppercase.
    /// Includes non-ISO calling regions such as `"AC"`.
    fn supported_regions(&self) -> Vec<String>;

    /// Membership test for a canonical (already uppercased) region code.
    fn is_supported_region(&self, region: &str) -> bool {
        self.supported_regions().iter().any(|r| r == region)
    }

    /// Parses a raw number string. `default_region` of `None` is the
    /// "no default region" sentinel: parsing then succeeds only for input
    /// that carries its own country information (e.g. a `+` prefix).
    fn parse(
        &self,
        raw_number: &str,
        default_region: Option<&str>,
    ) -> Result<ParsedNumber, ProviderParseError>;

    /// Whether the number is valid for the region it belongs to.
    fn is_valid_number(&self, number: &ParsedNumber) -> bool;

    /// Whether the number is valid specifically for `region`.
    fn is_valid_number_for_region(&self, number: &ParsedNumber, region: &str) -> bool;

    /// Length/shape plausibility check, without full pattern validation.
    fn is_possible_number(&self, number: &ParsedNumber) -> bool;

    /// Plausibility check scoped to `region`.
    fn is_possible_number_for_region(&self, number: &ParsedNumber, region: &str) -> bool;

    /// Classifies the number; `PhoneNumberType::Unknown` when no pattern of
    /// the owning region matches.
    fn number_type(&self, number: &ParsedNumber) -> PhoneNumberType;

    /// The region the number actually belongs to, derived from its country
    /// calling code and national pattern.
    fn region_code_for_number(&self, number: &ParsedNumber) -> Option<String>;

    /// Renders the number in the requested output format.
    fn format(&self, number: &ParsedNumber, format: PhoneNumberFormat) -> String;

    /// Renders the number as it would be dialled from `calling_from`.
    fn format_out_of_country_calling_number(
        &self,
        number: &ParsedNumber,
        calling_from: &str,
    ) -> String;

    /// Renders the number as it would be dialled from a mobile phone in
    /// `calling_from`; `with_formatting` keeps separators in the output.
    fn format_number_for_mobile_dialing(
        &self,
        number: &ParsedNumber,
        calling_from: &str,
        with_formatting: bool,
    ) -> String;
}
