// File: src/validation/rule.rs
// Purpose: Per-field rule descriptors and the ordered rule map of a form

use super::pattern::{CommonPattern, Pattern};
use crate::value::{FormData, Value};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Caller-supplied check run against a truthy field value.
///
/// Receives the field value and the whole submission (for cross-field rules
/// such as password confirmation). `Err` with a non-empty message records
/// that message for the field; `Ok(())` or an empty message means valid.
pub type CustomValidator = Arc<dyn Fn(&Value, &FormData) -> Result<(), String> + Send + Sync>;

/// Constraints for a single field. Every attribute is optional.
///
/// # Example
///
/// ```rust
/// use rusty_forms::{CommonPattern, FieldRule};
///
/// let rule = FieldRule::new()
///     .required_with("Email is required")
///     .common(CommonPattern::Email)
///     .max_length(254);
/// assert!(rule.required);
/// ```
#[derive(Clone, Default)]
pub struct FieldRule {
    pub required: bool,
    pub required_message: Option<String>,
    pub pattern: Option<Pattern>,
    pub pattern_message: Option<String>,
    pub min_length: Option<usize>,
    pub min_length_message: Option<String>,
    pub max_length: Option<usize>,
    pub max_length_message: Option<String>,
    pub validate: Option<CustomValidator>,
}

impl FieldRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field required with a custom message
    pub fn required_with(mut self, message: impl Into<String>) -> Self {
        self.required = true;
        self.required_message = Some(message.into());
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn pattern_message(mut self, message: impl Into<String>) -> Self {
        self.pattern_message = Some(message.into());
        self
    }

    /// Adopt a library pattern together with its message
    pub fn common(mut self, common: CommonPattern) -> Self {
        self.pattern = Some(common.pattern().clone());
        self.pattern_message = Some(common.message().to_string());
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn min_length_message(mut self, message: impl Into<String>) -> Self {
        self.min_length_message = Some(message.into());
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn max_length_message(mut self, message: impl Into<String>) -> Self {
        self.max_length_message = Some(message.into());
        self
    }

    pub fn validate<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Value, &FormData) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validate = Some(Arc::new(validator));
        self
    }

    pub(crate) fn required_error(&self, field: &str) -> String {
        self.required_message
            .clone()
            .unwrap_or_else(|| format!("{} is required", field))
    }

    pub(crate) fn pattern_error(&self, field: &str) -> String {
        self.pattern_message
            .clone()
            .unwrap_or_else(|| format!("Invalid {} format", field))
    }

    pub(crate) fn min_length_error(&self, field: &str, min: usize) -> String {
        self.min_length_message
            .clone()
            .unwrap_or_else(|| format!("{} must be at least {} characters", field, min))
    }

    pub(crate) fn max_length_error(&self, field: &str, max: usize) -> String {
        self.max_length_message
            .clone()
            .unwrap_or_else(|| format!("{} cannot exceed {} characters", field, max))
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("required", &self.required)
            .field("required_message", &self.required_message)
            .field("pattern", &self.pattern)
            .field("pattern_message", &self.pattern_message)
            .field("min_length", &self.min_length)
            .field("min_length_message", &self.min_length_message)
            .field("max_length", &self.max_length)
            .field("max_length_message", &self.max_length_message)
            .field("validate", &self.validate.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// The rules of a form, checked in insertion order
#[derive(Debug, Clone, Default)]
pub struct ValidationRules {
    fields: IndexMap<String, FieldRule>,
}

impl ValidationRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ValidationRules::insert`]
    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.insert(name, rule);
        self
    }

    /// Add or replace the rule for a field.
    ///
    /// Replacing keeps the field's original position.
    pub fn insert(&mut self, name: impl Into<String>, rule: FieldRule) -> Option<FieldRule> {
        self.fields.insert(name.into(), rule)
    }

    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.fields.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldRule)> for ValidationRules {
    fn from_iter<I: IntoIterator<Item = (K, FieldRule)>>(iter: I) -> Self {
        let mut rules = Self::new();
        for (name, rule) in iter {
            rules.insert(name, rule);
        }
        rules
    }
}
