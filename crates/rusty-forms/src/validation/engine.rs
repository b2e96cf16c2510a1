// File: src/validation/engine.rs
// Purpose: Evaluate a form's rules against a submission

use super::errors::ValidationErrors;
use super::rule::{CustomValidator, FieldRule, ValidationRules};
use crate::config::EngineConfig;
use crate::value::{FormData, Value};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Validate a submission with the default [`EngineConfig`].
///
/// See [`Engine::validate`] for the evaluation order.
pub fn validate_form(form_data: &FormData, rules: &ValidationRules) -> ValidationErrors {
    Engine::default().validate(form_data, rules)
}

/// Rule evaluator. Holds configuration only; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Check every field named in `rules`, in rule order.
    ///
    /// Per field the checks run as required, pattern, min length, max length,
    /// custom. Each failing check replaces the message recorded by an earlier
    /// one, so the last violated rule is the one reported. Pattern and length
    /// checks only apply to non-empty strings; the custom check only to
    /// truthy values.
    ///
    /// Fields present in `form_data` without a rule are never read.
    pub fn validate(&self, form_data: &FormData, rules: &ValidationRules) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for (field, rule) in rules.iter() {
            if let Some(message) = self.check_field(field, rule, form_data) {
                errors.set(field, message);
            }
        }

        debug!(
            fields = rules.len(),
            invalid = errors.len(),
            "form validated"
        );
        errors
    }

    fn check_field(&self, field: &str, rule: &FieldRule, form_data: &FormData) -> Option<String> {
        let value = form_data.get(field);
        let mut error = None;

        if rule.required && is_missing(value) {
            error = Some(rule.required_error(field));
        }

        if let Some(Value::String(text)) = value {
            if !text.is_empty() {
                if let Some(pattern) = &rule.pattern {
                    if !pattern.is_full_match(text) {
                        error = Some(rule.pattern_error(field));
                    }
                }

                let length = text.chars().count();

                if let Some(min) = rule.min_length {
                    if length < min {
                        error = Some(rule.min_length_error(field, min));
                    }
                }

                if let Some(max) = rule.max_length {
                    if length > max {
                        error = Some(rule.max_length_error(field, max));
                    }
                }
            }
        }

        if let (Some(validator), Some(value)) = (&rule.validate, value) {
            if value.is_truthy() {
                if let Some(message) = self.run_custom(field, validator, value, form_data) {
                    error = Some(message);
                }
            }
        }

        error
    }

    fn run_custom(
        &self,
        field: &str,
        validator: &CustomValidator,
        value: &Value,
        form_data: &FormData,
    ) -> Option<String> {
        let outcome = if self.config.catch_validator_panics {
            match panic::catch_unwind(AssertUnwindSafe(|| validator(value, form_data))) {
                Ok(outcome) => outcome,
                Err(payload) => {
                    warn!(
                        field,
                        reason = panic_reason(&*payload),
                        "custom validator panicked"
                    );
                    return Some(self.config.failure_message(field));
                }
            }
        } else {
            validator(value, form_data)
        };

        match outcome {
            Err(message) if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Required-check emptiness: strings are empty after trimming, anything else
/// only when undefined, null or `""`. `false` and `0` are present.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.trim().is_empty(),
        Some(_) => false,
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> &str {
    if let Some(reason) = payload.downcast_ref::<&str>() {
        reason
    } else if let Some(reason) = payload.downcast_ref::<String>() {
        reason
    } else {
        "unknown"
    }
}
