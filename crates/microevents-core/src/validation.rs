// Input validation for event operations
//
// Required-field checks, NUL rejection and last-resort size limits. The limits are hard
// limits, not configurable.

use crate::error::EventError;

/// Maximum size for the event kind.
pub const MAX_KIND_BYTES: usize = 256;

/// Maximum size for a status value.
pub const MAX_STATUS_BYTES: usize = 256;

/// Maximum size for a status message.
pub const MAX_MESSAGE_BYTES: usize = 64 * 1024; // 64 KB

/// Owner is required.
pub fn validate_owner(owner: Option<i64>) -> Result<i64, EventError> {
    owner.ok_or_else(|| EventError::validation("owner is required"))
}

/// Kind is required, non-empty and within `MAX_KIND_BYTES`.
pub fn validate_kind(kind: Option<String>) -> Result<String, EventError> {
    let kind = required_text("kind", kind)?;
    check_size("kind", &kind, MAX_KIND_BYTES)?;
    check_no_nul("kind", &kind)?;
    Ok(kind)
}

/// Status is required, non-empty and within `MAX_STATUS_BYTES`.
/// Any value is an allowed transition.
pub fn validate_status(status: Option<String>) -> Result<String, EventError> {
    let status = required_text("status", status)?;
    check_size("status", &status, MAX_STATUS_BYTES)?;
    check_no_nul("status", &status)?;
    Ok(status)
}

/// Message is optional and defaults to empty.
pub fn validate_message(message: Option<String>) -> Result<String, EventError> {
    let message = message.unwrap_or_default();
    check_size("message", &message, MAX_MESSAGE_BYTES)?;
    check_no_nul("message", &message)?;
    Ok(message)
}

fn required_text(field: &str, value: Option<String>) -> Result<String, EventError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(EventError::validation(format!("{} is required", field))),
    }
}

fn check_size(field: &str, value: &str, max: usize) -> Result<(), EventError> {
    if value.len() > max {
        tracing::warn!(
            "Event {} exceeds limit: {} bytes (max: {})",
            field,
            value.len(),
            max
        );
        return Err(EventError::validation(format!(
            "{} exceeds {} bytes",
            field, max
        )));
    }
    Ok(())
}

// PostgreSQL text columns cannot hold NUL
fn check_no_nul(field: &str, value: &str) -> Result<(), EventError> {
    if value.contains('\0') {
        tracing::warn!("Event {} contains a NUL byte", field);
        return Err(EventError::validation(format!(
            "{} must not contain NUL",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_required() {
        assert_eq!(validate_owner(Some(42)).unwrap(), 42);
        assert!(validate_owner(None).unwrap_err().is_validation());
    }

    #[test]
    fn test_kind_rules() {
        assert_eq!(validate_kind(Some("test".into())).unwrap(), "test");
        assert!(validate_kind(None).is_err());
        assert!(validate_kind(Some(String::new())).is_err());
        assert!(validate_kind(Some("k".repeat(MAX_KIND_BYTES))).is_ok());
        assert!(validate_kind(Some("k".repeat(MAX_KIND_BYTES + 1))).is_err());
    }

    #[test]
    fn test_status_rules() {
        assert_eq!(validate_status(Some("done".into())).unwrap(), "done");
        let err = validate_status(None).unwrap_err();
        assert_eq!(err.to_string(), "status is required");
        assert!(validate_status(Some(String::new())).is_err());
        assert!(validate_status(Some("s".repeat(MAX_STATUS_BYTES + 1))).is_err());
    }

    #[test]
    fn test_message_defaults_to_empty() {
        assert_eq!(validate_message(None).unwrap(), "");
        assert_eq!(validate_message(Some("hi".into())).unwrap(), "hi");
        assert!(validate_message(Some("m".repeat(MAX_MESSAGE_BYTES + 1))).is_err());
    }

    #[test]
    fn test_nul_bytes_rejected() {
        let err = validate_kind(Some("a\0b".into())).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "kind must not contain NUL");

        let err = validate_status(Some("done\0".into())).unwrap_err();
        assert_eq!(err.to_string(), "status must not contain NUL");

        let err = validate_message(Some("\0".into())).unwrap_err();
        assert_eq!(err.to_string(), "message must not contain NUL");
    }
}
