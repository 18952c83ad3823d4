//! Field validation contract used at entity construction boundaries.

use crate::entity::Record;
use crate::error::FieldsErrors;

/// Validates a projected field map.
///
/// `validate` answers pass/fail and leaves the outcome readable afterwards:
/// the normalized data on success, the per-field messages on failure. Each
/// call resets the previous outcome.
pub trait FieldsValidator {
    fn validate(&mut self, data: &Record) -> bool;

    /// Normalized field map from the last passing `validate` call.
    fn validated_data(&self) -> Option<&Record>;

    /// Per-field messages from the last failing `validate` call.
    fn fields_errors(&self) -> &FieldsErrors;
}

/// Append a message to a field's error list.
pub fn push_field_error(errors: &mut FieldsErrors, field: &str, message: impl Into<String>) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.into());
}
