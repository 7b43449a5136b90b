use thiserror::Error;

use crate::i18n::CountryCode;

// Helper type for Result
pub type Result<T> = std::result::Result<T, PhoneNumberError>;

/// Umbrella error for the operations that raise (formatting and conversion
/// to a provider object). Validation-style operations never surface these;
/// they reduce every failure to a negative result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneNumberError {
    #[error("{0}")]
    CountryCode(#[from] CountryCodeError),

    #[error("{0}")]
    NumberFormat(#[from] NumberFormatError),

    #[error("{0}")]
    NumberParse(#[from] NumberParseError),
}

/// A caller explicitly supplied a dialing-from country that the metadata
/// backend does not recognize. Never raised for country hints given at
/// construction; those are silently filtered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid country code \"{0}\".")]
pub struct CountryCodeError(pub String);

/// A format argument did not resolve to a known output format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid number format \"{0}\".")]
pub struct NumberFormatError(pub String);

/// The number could not be tied to a country.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberParseError {
    /// No country hints were supplied and the number does not carry its own
    /// country information.
    #[error("Number \"{number}\" requires a country to be specified.")]
    CountryRequired { number: String },

    /// Hints were supplied but the number validated against none of them.
    #[error("Number \"{number}\" does not match the provided countries.")]
    CountryMismatch {
        number: String,
        countries: Vec<CountryCode>,
    },
}

impl NumberParseError {
    pub fn number(&self) -> &str {
        match self {
            Self::CountryRequired { number } => number,
            Self::CountryMismatch { number, .. } => number,
        }
    }

    /// The hint list that was attempted, empty for `CountryRequired`.
    pub fn countries(&self) -> &[CountryCode] {
        match self {
            Self::CountryRequired { .. } => &[],
            Self::CountryMismatch { countries, .. } => countries,
        }
    }
}
