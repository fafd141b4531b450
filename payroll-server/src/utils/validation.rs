//! Input validation helpers
//!
//! Derive-based checks live on the shared payload types (`validator`); this
//! module turns their failures into [`AppError`] and adds the rules a derive
//! cannot express.

use shared::util::is_object_id;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::AppError;

/// Phone numbers: optional leading `+`, then this many digits
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MAX_PHONE_DIGITS: usize = 15;

/// Employee codes and names
pub const MAX_NAME_LEN: usize = 200;

/// Convert `validator` errors into a 400 ValidationFailed
///
/// The first field error (sorted by field name for stable output) becomes the
/// message; every failing field is listed under `details.fields`.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut fields: Vec<(String, String)> = errors
        .errors()
        .iter()
        .filter_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(errs) => errs.first().map(|e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                (field.to_string(), msg)
            }),
            _ => None,
        })
        .collect();
    fields.sort();

    let Some((first_field, first_msg)) = fields.first().cloned() else {
        return AppError::validation("Invalid request body");
    };

    let listed: serde_json::Map<String, serde_json::Value> = fields
        .into_iter()
        .map(|(f, m)| (f, serde_json::Value::String(m)))
        .collect();

    AppError::invalid_field(&first_field, first_msg).with_detail("fields", listed)
}

/// Validate a phone number (10-15 digits, optional leading `+`)
pub fn validate_phone(value: &str, field: &str) -> Result<(), AppError> {
    let digits = value.strip_prefix('+').unwrap_or(value);
    let valid = (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit());
    if valid {
        Ok(())
    } else {
        Err(AppError::invalid_field(
            field,
            "Please add a valid phone number",
        ))
    }
}

/// Validate that a required string is non-empty once trimmed
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_field(
            field,
            format!("{field} must not be empty"),
        ));
    }
    if value.len() > max_len {
        return Err(AppError::invalid_field(
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        ));
    }
    Ok(())
}

/// Validate an identifier carried in a request body (e.g. `employee`)
///
/// Returns the stored form: ids are kept lowercase, so an uppercase spelling of
/// an existing id still matches.
pub fn validate_reference(value: &str, field: &str) -> Result<String, AppError> {
    if is_object_id(value) {
        Ok(value.to_ascii_lowercase())
    } else {
        Err(AppError::invalid_id(value).with_detail("field", field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;
    use shared::models::EmployeeCreate;
    use validator::Validate;

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("5551234567", "phoneNumber").is_ok());
        assert!(validate_phone("+441234567890", "phoneNumber").is_ok());
        assert!(validate_phone("555-1234", "phoneNumber").is_err());
        assert!(validate_phone("12345", "phoneNumber").is_err());
        assert!(validate_phone("1234567890123456", "phoneNumber").is_err());
        assert!(validate_phone("+", "phoneNumber").is_err());
    }

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text("Ada", "fullName", MAX_NAME_LEN).is_ok());
        let err = validate_required_text("   ", "fullName", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(validate_required_text(&"x".repeat(201), "fullName", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_validate_reference() {
        assert_eq!(
            validate_reference("65a1f0c2e4b0a1b2c3d4e5f6", "employee").unwrap(),
            "65a1f0c2e4b0a1b2c3d4e5f6"
        );
        assert_eq!(
            validate_reference("65A1F0C2E4B0A1B2C3D4E5F6", "employee").unwrap(),
            "65a1f0c2e4b0a1b2c3d4e5f6"
        );
        let err = validate_reference("nope", "employee").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidId);
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let payload = EmployeeCreate {
            employee_id: "".into(),
            full_name: "Ada".into(),
            email: "not-an-email".into(),
            phone_number: "5551234567".into(),
            salary: 10.0,
            password: "secret1".into(),
            role: Default::default(),
        };
        let err = validation_error(payload.validate().unwrap_err());
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        // "email" sorts before "employee_id"
        assert_eq!(details["field"], "email");
        assert_eq!(err.message, "Please add a valid email");
        let fields = details["fields"].as_object().unwrap();
        assert_eq!(fields.len(), 2);
    }
}
