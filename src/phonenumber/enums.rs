use std::fmt;

use serde::Deserialize;
use strum::{EnumIter, EnumString, FromRepr, IntoEnumIterator};

/// Defines the standardized output formats for phone numbers, mirrored from
/// the metadata backend together with its numeric codes.
///
/// For example, the Google Switzerland office number would be:
/// - **E164**: `+41446681800`
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
/// - **RFC3966**: `tel:+41-44-668-1800`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, FromRepr)]
#[repr(i32)]
pub enum PhoneNumberFormat {
    /// International format without any separators, always starting with `+`.
    #[strum(serialize = "E164")]
    E164 = 0,
    /// Country code plus nationally formatted number, for international display.
    #[strum(serialize = "INTERNATIONAL")]
    International = 1,
    /// The format used for dialing within the number's own country.
    #[strum(serialize = "NATIONAL")]
    National = 2,
    /// `tel:`-prefixed, hyphen-separated technical format for links.
    #[strum(serialize = "RFC3966")]
    RFC3966 = 3,
}

impl PhoneNumberFormat {
    pub fn all() -> impl Iterator<Item = PhoneNumberFormat> {
        Self::iter()
    }

    /// The backend's numeric code for this format.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Canonical constant name, e.g. `"INTERNATIONAL"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::E164 => "E164",
            Self::International => "INTERNATIONAL",
            Self::National => "NATIONAL",
            Self::RFC3966 => "RFC3966",
        }
    }

    /// Lowercase name for user-facing output, e.g. `"international"`.
    pub fn human_readable_name(self) -> &'static str {
        match self {
            Self::E164 => "e164",
            Self::International => "international",
            Self::National => "national",
            Self::RFC3966 => "rfc3966",
        }
    }

    pub fn from_code(code: i32) -> Option<PhoneNumberFormat> {
        Self::from_repr(code)
    }

    /// Case-insensitive lookup by constant name.
    pub fn from_name(name: &str) -> Option<PhoneNumberFormat> {
        name.to_ascii_uppercase().parse().ok()
    }

    /// Resolves a caller-supplied format argument: a numeric code is taken
    /// as-is, anything else is treated as a constant name.
    pub fn resolve(value: impl Into<FormatValue>) -> Option<PhoneNumberFormat> {
        match value.into() {
            FormatValue::Code(code) => Self::from_code(code),
            FormatValue::Name(name) => Self::from_name(&name),
        }
    }

    pub fn is_valid(value: impl Into<FormatValue>) -> bool {
        Self::resolve(value).is_some()
    }

    /// Resolves every element, dropping the ones that do not name a format,
    /// deduplicated in first-seen order. Never fails.
    pub fn sanitize<I>(values: I) -> Vec<PhoneNumberFormat>
    where
        I: IntoIterator,
        I::Item: Into<FormatValue>,
    {
        let mut sanitized = Vec::new();
        for value in values {
            if let Some(format) = Self::resolve(value) {
                if !sanitized.contains(&format) {
                    sanitized.push(format);
                }
            }
        }
        sanitized
    }
}

/// A caller-supplied format argument: either the backend's numeric code or
/// a (case-insensitive) constant name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatValue {
    Code(i32),
    Name(String),
}

impl From<i32> for FormatValue {
    fn from(code: i32) -> Self {
        Self::Code(code)
    }
}

impl From<&str> for FormatValue {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for FormatValue {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<PhoneNumberFormat> for FormatValue {
    fn from(format: PhoneNumberFormat) -> Self {
        Self::Code(format.code())
    }
}

impl fmt::Display for FormatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{}", code),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Categorizes phone numbers based on their primary use, mirrored from the
/// metadata backend together with its numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, FromRepr)]
#[repr(i32)]
pub enum PhoneNumberType {
    /// Traditional landline numbers tied to a geographic location.
    #[strum(serialize = "FIXED_LINE")]
    FixedLine = 0,
    /// Numbers assigned to wireless devices.
    #[strum(serialize = "MOBILE")]
    Mobile = 1,
    /// Used in regions (e.g. the USA) where fixed-line and mobile numbers
    /// cannot be told apart by the number alone.
    #[strum(serialize = "FIXED_LINE_OR_MOBILE")]
    FixedLineOrMobile = 2,
    /// Free for the caller; the recipient pays.
    #[strum(serialize = "TOLL_FREE")]
    TollFree = 3,
    /// Charged above normal rates.
    #[strum(serialize = "PREMIUM_RATE")]
    PremiumRate = 4,
    /// Call cost split between caller and recipient.
    #[strum(serialize = "SHARED_COST")]
    SharedCost = 5,
    /// Voice-over-IP service numbers.
    #[strum(serialize = "VOIP")]
    VoIP = 6,
    /// Tied to a person rather than a location or device.
    #[strum(serialize = "PERSONAL_NUMBER")]
    PersonalNumber = 7,
    /// Paging devices.
    #[strum(serialize = "PAGER")]
    Pager = 8,
    /// Universal Access Numbers, routed by the receiving company.
    #[strum(serialize = "UAN")]
    UAN = 9,
    /// Direct voicemail access numbers.
    #[strum(serialize = "VOICEMAIL")]
    VoiceMail = 10,
    /// No known pattern of the owning region matched.
    #[strum(serialize = "UNKNOWN")]
    Unknown = -1,
}

impl PhoneNumberType {
    pub fn all() -> impl Iterator<Item = PhoneNumberType> {
        Self::iter()
    }

    /// The backend's numeric code for this type.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Canonical constant name, e.g. `"FIXED_LINE"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::FixedLine => "FIXED_LINE",
            Self::Mobile => "MOBILE",
            Self::FixedLineOrMobile => "FIXED_LINE_OR_MOBILE",
            Self::TollFree => "TOLL_FREE",
            Self::PremiumRate => "PREMIUM_RATE",
            Self::SharedCost => "SHARED_COST",
            Self::VoIP => "VOIP",
            Self::PersonalNumber => "PERSONAL_NUMBER",
            Self::Pager => "PAGER",
            Self::UAN => "UAN",
            Self::VoiceMail => "VOICEMAIL",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Lowercase name for user-facing output, e.g. `"fixed_line"`.
    pub fn human_readable_name(self) -> &'static str {
        match self {
            Self::FixedLine => "fixed_line",
            Self::Mobile => "mobile",
            Self::FixedLineOrMobile => "fixed_line_or_mobile",
            Self::TollFree => "toll_free",
            Self::PremiumRate => "premium_rate",
            Self::SharedCost => "shared_cost",
            Self::VoIP => "voip",
            Self::PersonalNumber => "personal_number",
            Self::Pager => "pager",
            Self::UAN => "uan",
            Self::VoiceMail => "voicemail",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_code(code: i32) -> Option<PhoneNumberType> {
        Self::from_repr(code)
    }

    /// Case-insensitive lookup by constant name.
    pub fn from_name(name: &str) -> Option<PhoneNumberType> {
        name.to_ascii_uppercase().parse().ok()
    }

    /// Resolves a caller-supplied type argument: a numeric code is taken
    /// as-is, anything else is treated as a constant name.
    pub fn resolve(value: impl Into<TypeValue>) -> Option<PhoneNumberType> {
        match value.into() {
            TypeValue::Code(code) => Self::from_code(code),
            TypeValue::Name(name) => Self::from_name(&name),
        }
    }

    pub fn is_valid(value: impl Into<TypeValue>) -> bool {
        Self::resolve(value).is_some()
    }

    /// Resolves every element, silently dropping the ones that do not name
    /// a type, deduplicated in first-seen order. Never fails.
    pub fn sanitize<I>(values: I) -> Vec<PhoneNumberType>
    where
        I: IntoIterator,
        I::Item: Into<TypeValue>,
    {
        let mut sanitized = Vec::new();
        for value in values {
            if let Some(parsed_type) = Self::resolve(value) {
                if !sanitized.contains(&parsed_type) {
                    sanitized.push(parsed_type);
                }
            }
        }
        sanitized
    }
}

/// A caller-supplied type argument: either the backend's numeric code or a
/// (case-insensitive) constant name. Deserializes from host-framework
/// configuration where both spellings occur.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeValue {
    Code(i32),
    Name(String),
}

impl From<i32> for TypeValue {
    fn from(code: i32) -> Self {
        Self::Code(code)
    }
}

impl From<&str> for TypeValue {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for TypeValue {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<PhoneNumberType> for TypeValue {
    fn from(phone_type: PhoneNumberType) -> Self {
        Self::Code(phone_type.code())
    }
}

impl fmt::Display for TypeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{}", code),
            Self::Name(name) => f.write_str(name),
        }
    }
}
