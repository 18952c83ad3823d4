//! Category field validation.
//!
//! Type strictness is checked against the projected [`Record`]; the rule
//! mechanics (length bounds, presence) are delegated to the `validator`
//! crate.

use validator::{Validate, ValidationErrors};

use vodlib_core::{FieldValue, FieldsErrors, FieldsValidator, Record, push_field_error};

/// Rule set evaluated by the `validator` derive.
#[derive(Debug, Validate)]
struct CategoryRules {
    #[validate(length(min = 3, max = 255, message = "must have between 3 and 255 characters"))]
    name: String,
    #[validate(length(max = 255, message = "must have at most 255 characters"))]
    description: Option<String>,
}

/// Validates category field maps.
///
/// After [`FieldsValidator::validate`], read `validated_data` on success or
/// `fields_errors` on failure.
#[derive(Debug, Default)]
pub struct CategoryValidator {
    validated_data: Option<Record>,
    fields_errors: FieldsErrors,
}

impl CategoryValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_fields_errors(self) -> FieldsErrors {
        self.fields_errors
    }
}

impl FieldsValidator for CategoryValidator {
    fn validate(&mut self, data: &Record) -> bool {
        self.validated_data = None;
        self.fields_errors = FieldsErrors::new();
        let mut errors = FieldsErrors::new();

        let name = match data.get("name") {
            None | Some(FieldValue::Null) => {
                push_field_error(&mut errors, "name", "is required");
                None
            }
            Some(FieldValue::Text(value)) => Some(value.clone()),
            Some(_) => {
                push_field_error(&mut errors, "name", "must be a string");
                None
            }
        };

        let description = match data.get("description") {
            None | Some(FieldValue::Null) => None,
            Some(FieldValue::Text(value)) => Some(value.clone()),
            Some(_) => {
                push_field_error(&mut errors, "description", "must be a string");
                None
            }
        };

        if let Some(value) = data.get("is_active") {
            if !matches!(value, FieldValue::Bool(_) | FieldValue::Null) {
                push_field_error(&mut errors, "is_active", "must be a boolean");
            }
        }
        for field in ["created_at", "updated_at"] {
            if let Some(value) = data.get(field) {
                if !matches!(value, FieldValue::Timestamp(_) | FieldValue::Null) {
                    push_field_error(&mut errors, field, "must be a datetime");
                }
            }
        }

        if let Some(name) = name {
            let rules = CategoryRules { name, description };
            if let Err(rule_errors) = rules.validate() {
                merge_rule_errors(&mut errors, &rule_errors);
            }
        }

        if errors.is_empty() {
            self.validated_data = Some(data.clone());
            true
        } else {
            self.fields_errors = errors;
            false
        }
    }

    fn validated_data(&self) -> Option<&Record> {
        self.validated_data.as_ref()
    }

    fn fields_errors(&self) -> &FieldsErrors {
        &self.fields_errors
    }
}

fn merge_rule_errors(errors: &mut FieldsErrors, rule_errors: &ValidationErrors) {
    for (field, field_errors) in rule_errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            push_field_error(errors, field, message);
        }
    }
}
