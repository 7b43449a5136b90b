mod validator;

pub use validator::{
    PhoneValidator, PhoneValidatorOptions, ValidationError, ValidationResult, Validator,
    INVALID_NUMBER_FORMAT_CODE,
};
