use std::fmt;
use std::sync::Arc;

use crate::interfaces::PhoneMetadataProvider;

/// A validated region code: uppercase ISO-3166-1 alpha-2, plus the
/// non-sovereign calling regions the metadata backend knows about
/// (e.g. `"AC"` for Ascension Island).
///
/// Values are only created through [`CountryCodeRegistry`], so holding a
/// `CountryCode` means the backend recognized it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// `code` must already be canonical (uppercase, provider-recognized).
    pub(crate) fn new_unchecked(code: String) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for CountryCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CountryCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<CountryCode> for str {
    fn eq(&self, other: &CountryCode) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<CountryCode> for &str {
    fn eq(&self, other: &CountryCode) -> bool {
        **self == *other.as_str()
    }
}

/// Validates and normalizes caller-supplied country codes against the
/// canonical region set of the metadata backend.
pub struct CountryCodeRegistry {
    provider: Arc<dyn PhoneMetadataProvider>,
}

impl CountryCodeRegistry {
    pub fn new(provider: Arc<dyn PhoneMetadataProvider>) -> Self {
        Self { provider }
    }

    /// Every region the backend supports.
    pub fn all(&self) -> Vec<CountryCode> {
        self.provider
            .supported_regions()
            .into_iter()
            .map(CountryCode::new_unchecked)
            .collect()
    }

    /// Whether `code`, uppercased, names a supported region.
    pub fn is_valid(&self, code: &str) -> bool {
        self.provider.is_supported_region(&code.to_ascii_uppercase())
    }

    /// Normalizes a single code, or `None` if the backend does not know it.
    pub fn get(&self, code: &str) -> Option<CountryCode> {
        let canonical = code.to_ascii_uppercase();
        if self.provider.is_supported_region(&canonical) {
            Some(CountryCode::new_unchecked(canonical))
        } else {
            None
        }
    }

    /// Uppercases every candidate, drops the ones the backend does not
    /// recognize and deduplicates while preserving first-seen order.
    /// Never fails; garbage input just yields an empty list.
    pub fn sanitize<I>(&self, codes: I) -> Vec<CountryCode>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut sanitized: Vec<CountryCode> = Vec::new();
        for code in codes {
            if let Some(country) = self.get(code.as_ref()) {
                if !sanitized.contains(&country) {
                    sanitized.push(country);
                }
            }
        }
        sanitized
    }
}
