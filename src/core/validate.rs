//! Pure field validators shared by the record constructors.

use crate::errors::{Error, Result};

/// Accepts `value` if it is zero or positive.
///
/// # Errors
/// Returns [`Error::Validation`] naming `field` when `value` is negative.
pub fn non_negative(field: &'static str, value: i64) -> Result<i64> {
    if value < 0 {
        return Err(Error::Validation {
            field,
            reason: "cannot be negative".to_string(),
        });
    }
    Ok(value)
}

/// Accepts a customer email containing at least one of `'@'` or `'.'`.
///
/// Either character alone is enough, so `"a.b"` and `"a@b"` both pass while
/// `"abc"` does not.
///
/// # Errors
/// Returns [`Error::Validation`] for `email` when neither character is present.
pub fn customer_email(value: String) -> Result<String> {
    if !value.contains(['@', '.']) {
        return Err(Error::Validation {
            field: "email",
            reason: format!("is invalid: {value:?}"),
        });
    }
    Ok(value)
}
