use std::fmt;
use std::sync::{Arc, OnceLock};

use log::trace;
use serde::{Serialize, Serializer};

use crate::i18n::{CountryCode, CountryCodeRegistry};
use crate::interfaces::{ParsedNumber, PhoneMetadataProvider};
use crate::phonenumber::enums::{FormatValue, PhoneNumberFormat, PhoneNumberType, TypeValue};
use crate::phonenumber::errors::{
    CountryCodeError, NumberFormatError, NumberParseError, Result,
};

/// A raw phone string together with optional country hints, lazily resolved
/// against a metadata backend.
///
/// Instances are cheap, per-request values. Country scoping and leniency
/// toggles return independent copies, so callers sharing an instance never
/// observe each other's scoping; the only shared state is the read-only
/// provider.
#[derive(Clone)]
pub struct PhoneNumber {
    provider: Arc<dyn PhoneMetadataProvider>,
    raw_number: String,
    /// Sanitized hint list, first-seen order. Invalid hints were already
    /// dropped at construction; that is a leniency policy, not validation.
    countries: Vec<CountryCode>,
    lenient: bool,
    /// Memoized country resolution. Only a derived copy (new hints or a
    /// different leniency) resolves again.
    country: OnceLock<Option<CountryCode>>,
}

impl PhoneNumber {
    pub fn new(provider: Arc<dyn PhoneMetadataProvider>, raw_number: impl Into<String>) -> Self {
        Self {
            provider,
            raw_number: raw_number.into(),
            countries: Vec::new(),
            lenient: false,
            country: OnceLock::new(),
        }
    }

    /// Creates a number scoped to the given country hints. Hints that the
    /// backend does not recognize are silently dropped.
    pub fn with_countries<I>(
        provider: Arc<dyn PhoneMetadataProvider>,
        raw_number: impl Into<String>,
        countries: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::new(provider, raw_number).of_country(countries)
    }

    /// Returns a copy scoped to additional country hints, merged after the
    /// existing ones and deduplicated. The receiver is left untouched.
    pub fn of_country<I>(&self, countries: I) -> PhoneNumber
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let registry = self.registry();
        let mut merged = self.countries.clone();
        for country in registry.sanitize(countries) {
            if !merged.contains(&country) {
                merged.push(country);
            }
        }
        Self {
            provider: Arc::clone(&self.provider),
            raw_number: self.raw_number.clone(),
            countries: merged,
            lenient: self.lenient,
            country: OnceLock::new(),
        }
    }

    /// Returns a copy with lenient checking toggled: mere plausibility in
    /// length and shape instead of strict regional validity.
    pub fn lenient(&self, lenient: bool) -> PhoneNumber {
        Self {
            provider: Arc::clone(&self.provider),
            raw_number: self.raw_number.clone(),
            countries: self.countries.clone(),
            lenient,
            country: OnceLock::new(),
        }
    }

    /// The number exactly as supplied by the caller.
    pub fn raw_number(&self) -> &str {
        &self.raw_number
    }

    /// The country the number resolves to, or `None` when neither the
    /// number itself nor any hint settles it. Resolution happens once per
    /// instance; repeated calls return the memoized answer.
    pub fn country(&self) -> Option<&CountryCode> {
        self.country.get_or_init(|| self.resolve_country()).as_ref()
    }

    fn resolve_country(&self) -> Option<CountryCode> {
        // An internationally formatted number carries its own country, so
        // hints are not consulted at all.
        if let Ok(parsed) = self.provider.parse(&self.raw_number, None) {
            if self.provider.is_valid_number(&parsed) {
                if let Some(region) = self.provider.region_code_for_number(&parsed) {
                    return Some(CountryCode::new_unchecked(region));
                }
            }
        }

        // First hint that accepts the number wins; list order is the only
        // tie-break.
        for hint in &self.countries {
            match self.provider.parse(&self.raw_number, Some(hint.as_str())) {
                Ok(parsed) => {
                    let accepted = if self.lenient {
                        self.provider
                            .is_possible_number_for_region(&parsed, hint.as_str())
                    } else {
                        self.provider
                            .is_valid_number_for_region(&parsed, hint.as_str())
                    };
                    if accepted {
                        return Some(hint.clone());
                    }
                }
                Err(err) => {
                    trace!(
                        "discarding hint {} for {:?}: {}",
                        hint, self.raw_number, err
                    );
                }
            }
        }

        None
    }

    /// Whether the number belongs to one of the given countries. Invalid
    /// entries in the list are ignored; never fails.
    pub fn is_of_country<I>(&self, countries: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let countries = self.registry().sanitize(countries);
        match self.country() {
            Some(country) => countries.contains(country),
            None => false,
        }
    }

    /// Strict mode: valid for the resolved country. Lenient mode: merely
    /// possible in length and shape. Every failure, including a number that
    /// never resolved, is `false`; this call does not fail.
    pub fn is_valid(&self) -> bool {
        match self.country() {
            Some(country) => {
                match self.provider.parse(&self.raw_number, Some(country.as_str())) {
                    Ok(parsed) => {
                        if self.lenient {
                            self.provider.is_possible_number(&parsed)
                        } else {
                            self.provider
                                .is_valid_number_for_region(&parsed, country.as_str())
                        }
                    }
                    Err(_) => false,
                }
            }
            // Without a resolved country only an internationally formatted
            // number can still be judged, and only leniently.
            None => {
                self.lenient
                    && self
                        .provider
                        .parse(&self.raw_number, None)
                        .map(|parsed| self.provider.is_possible_number(&parsed))
                        .unwrap_or(false)
            }
        }
    }

    /// The backend's classification, or `None` when the number cannot be
    /// parsed at all.
    pub fn get_type(&self) -> Option<PhoneNumberType> {
        let parsed = self.parsed().ok()?;
        Some(self.provider.number_type(&parsed))
    }

    /// Lowercase name of the classification, e.g. `"mobile"`.
    pub fn type_name(&self) -> Option<&'static str> {
        self.get_type().map(PhoneNumberType::human_readable_name)
    }

    /// Whether the classification falls into the requested set. When the
    /// set asks for FIXED_LINE or MOBILE, the undecidable
    /// FIXED_LINE_OR_MOBILE category is accepted as well. Never fails;
    /// unresolvable entries and unparseable numbers yield `false`.
    pub fn is_of_type<I>(&self, types: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<TypeValue>,
    {
        let mut accepted = PhoneNumberType::sanitize(types);
        if accepted
            .iter()
            .any(|t| matches!(t, PhoneNumberType::FixedLine | PhoneNumberType::Mobile))
            && !accepted.contains(&PhoneNumberType::FixedLineOrMobile)
        {
            accepted.push(PhoneNumberType::FixedLineOrMobile);
        }
        match self.get_type() {
            Some(number_type) => accepted.contains(&number_type),
            None => false,
        }
    }

    /// The provider-side object for this number. Parsing needs a country,
    /// so an unresolved number fails here with the cause that explains why
    /// resolution came up empty.
    pub fn parsed(&self) -> Result<ParsedNumber> {
        let Some(country) = self.country() else {
            return Err(self.country_resolution_error().into());
        };
        match self.provider.parse(&self.raw_number, Some(country.as_str())) {
            Ok(parsed) => Ok(parsed),
            Err(err) => {
                trace!("provider refused {:?} for {}: {}", self.raw_number, country, err);
                Err(self.country_resolution_error().into())
            }
        }
    }

    /// Hints were given but none validated: mismatch. No usable hints at
    /// all: a country is simply required.
    fn country_resolution_error(&self) -> NumberParseError {
        if self.countries.is_empty() {
            NumberParseError::CountryRequired {
                number: self.raw_number.clone(),
            }
        } else {
            NumberParseError::CountryMismatch {
                number: self.raw_number.clone(),
                countries: self.countries.clone(),
            }
        }
    }

    /// Formats the number. The argument may be a numeric format code or a
    /// constant name such as `"national"`.
    pub fn format(&self, format: impl Into<FormatValue>) -> Result<String> {
        let value = format.into();
        let Some(resolved) = PhoneNumberFormat::resolve(value.clone()) else {
            return Err(NumberFormatError(value.to_string()).into());
        };
        let parsed = self.parsed()?;
        Ok(self.provider.format(&parsed, resolved))
    }

    pub fn format_e164(&self) -> Result<String> {
        self.format(PhoneNumberFormat::E164)
    }

    pub fn format_international(&self) -> Result<String> {
        self.format(PhoneNumberFormat::International)
    }

    pub fn format_national(&self) -> Result<String> {
        self.format(PhoneNumberFormat::National)
    }

    pub fn format_rfc3966(&self) -> Result<String> {
        self.format(PhoneNumberFormat::RFC3966)
    }

    /// Formats the number as it would be dialled from `country`. Unlike
    /// construction hints, an unknown dialing-from code is an error.
    pub fn format_for_country(&self, country: &str) -> Result<String> {
        let Some(country) = self.registry().get(country) else {
            return Err(CountryCodeError(country.to_owned()).into());
        };
        let parsed = self.parsed()?;
        Ok(self
            .provider
            .format_out_of_country_calling_number(&parsed, country.as_str()))
    }

    /// Formats the number for dialling from a mobile phone in `country`.
    /// `remove_formatting` strips the output down to diallable characters.
    pub fn format_for_mobile_dialing_in_country(
        &self,
        country: &str,
        remove_formatting: bool,
    ) -> Result<String> {
        let Some(country) = self.registry().get(country) else {
            return Err(CountryCodeError(country.to_owned()).into());
        };
        let parsed = self.parsed()?;
        Ok(self.provider.format_number_for_mobile_dialing(
            &parsed,
            country.as_str(),
            !remove_formatting,
        ))
    }

    /// Canonical E164 string, the serialized form of a phone number.
    pub fn to_serialized(&self) -> Result<String> {
        self.format_e164()
    }

    /// Rebuilds an instance from its serialized form. The country is
    /// re-derived from the number itself, no hint needed: serialized
    /// numbers are internationally formatted.
    pub fn from_serialized(
        provider: Arc<dyn PhoneMetadataProvider>,
        serialized: impl Into<String>,
    ) -> PhoneNumber {
        Self::new(provider, serialized)
    }

    fn registry(&self) -> CountryCodeRegistry {
        CountryCodeRegistry::new(Arc::clone(&self.provider))
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneNumber")
            .field("raw_number", &self.raw_number)
            .field("countries", &self.countries)
            .field("lenient", &self.lenient)
            .field("country", &self.country.get())
            .finish()
    }
}

/// Two numbers are equal iff their canonical E164 renderings are identical.
/// A number that cannot be formatted is equal to nothing, itself included.
impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        match (self.format_e164(), other.format_e164()) {
            (Ok(own), Ok(theirs)) => own == theirs,
            _ => false,
        }
    }
}

/// E164 rendering; falls back to the raw input verbatim, so conversion to
/// a string never fails.
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format_e164() {
            Ok(formatted) => f.write_str(&formatted),
            Err(_) => f.write_str(&self.raw_number),
        }
    }
}

/// Serializes to the canonical E164 string.
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.format_e164() {
            Ok(formatted) => serializer.serialize_str(&formatted),
            Err(err) => Err(serde::ser::Error::custom(err)),
        }
    }
}
