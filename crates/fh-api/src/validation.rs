use crate::error::ApiError;
use validator::ValidateEmail;

/// Reject empty or whitespace-only required fields.
pub fn validate_not_blank(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Validate email format using the validator crate
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    if email.is_empty() {
        return Err(ApiError::Validation("email must not be blank".to_string()));
    }

    if !email.validate_email() {
        return Err(ApiError::Validation("invalid email format".to_string()));
    }

    Ok(())
}
