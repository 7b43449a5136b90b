pub mod enums;
pub mod errors;
mod phone_number;

pub use enums::{FormatValue, PhoneNumberFormat, PhoneNumberType, TypeValue};
pub use phone_number::PhoneNumber;
