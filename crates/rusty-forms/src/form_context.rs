// File: src/form_context.rs
// Purpose: Form context for re-rendering a submission with its validation errors

use crate::validation::{Engine, ValidationErrors, ValidationRules};
use crate::value::{FormData, Value};

/// Validation errors together with the values that produced them
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    /// Field names to error messages
    pub errors: ValidationErrors,
    /// Original field values submitted
    pub values: FormData,
}

impl FormContext {
    /// Create a new form context with errors and values
    pub fn new(errors: ValidationErrors, values: FormData) -> Self {
        Self { errors, values }
    }

    /// Validate `values` with the default engine and keep them for redisplay
    pub fn validate(values: FormData, rules: &ValidationRules) -> Self {
        Self::validate_with(&Engine::default(), values, rules)
    }

    pub fn validate_with(engine: &Engine, values: FormData, rules: &ValidationRules) -> Self {
        let errors = engine.validate(&values, rules);
        Self { errors, values }
    }

    /// Check if field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.has_error(field)
    }

    /// Get error message for a field
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get original value for a field
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Original value rendered for an input's `value` attribute; empty when absent
    pub fn display_value(&self, field: &str) -> String {
        self.values
            .get(field)
            .map(|value| value.to_string())
            .unwrap_or_default()
    }

    /// Split into the submitted values when valid, or keep the context for redisplay
    pub fn into_result(self) -> Result<FormData, FormContext> {
        if self.has_errors() {
            Err(self)
        } else {
            Ok(self.values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldRule;

    fn rules() -> ValidationRules {
        ValidationRules::new()
            .field("title", FieldRule::new().required_with("Event title is required"))
            .field("capacity", FieldRule::new().required())
    }

    #[test]
    fn test_form_context_errors() {
        let mut values = FormData::new();
        values.insert("title".to_string(), Value::from("   "));
        values.insert("capacity".to_string(), Value::from(40));

        let context = FormContext::validate(values, &rules());

        assert!(context.has_errors());
        assert!(context.has_error("title"));
        assert_eq!(context.error("title"), Some("Event title is required"));
        assert!(!context.has_error("capacity"));
        assert_eq!(context.display_value("capacity"), "40");
        assert_eq!(context.display_value("missing"), "");
    }

    #[test]
    fn test_valid_context_into_values() {
        let mut values = FormData::new();
        values.insert("title".to_string(), Value::from("Rust meetup"));
        values.insert("capacity".to_string(), Value::from(0));

        let values = FormContext::validate(values, &rules()).into_result().unwrap();
        assert_eq!(values.get("title"), Some(&Value::from("Rust meetup")));
    }

    #[test]
    fn test_large_numbers_redisplay_exactly() {
        let mut values = FormData::new();
        values.insert("budget".to_string(), Value::Number(1e20));

        let context = FormContext::validate(values, &ValidationRules::new());
        assert_eq!(context.display_value("budget"), "100000000000000000000");
    }

    #[test]
    fn test_empty_form_context() {
        let context = FormContext::default();
        assert!(!context.has_errors());
        assert!(context.error("any").is_none());
        assert!(context.value("any").is_none());
    }
}
