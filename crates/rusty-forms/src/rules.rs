// File: src/rules.rs
// Purpose: Rule sets declared as data (TOML) and compiled into ValidationRules

use crate::error::RuleError;
use crate::validation::{CommonPattern, FieldRule, Pattern, ValidationRules};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A form's rules as written in a rule file.
///
/// ```toml
/// [[field]]
/// name = "email"
/// required = true
/// preset = "email"
///
/// [[field]]
/// name = "confirm_password"
/// required = true
/// equals_field = "password"
/// equals_message = "Passwords do not match"
/// ```
///
/// Fields are checked in the order they are declared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldSpec>,
}

/// One `[[field]]` entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    pub name: String,

    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_message: Option<String>,

    /// Regular expression the whole value must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Library pattern name: email, phone or url
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length_message: Option<String>,

    /// Another field whose value this one must equal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equals_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equals_message: Option<String>,
}

impl RuleSet {
    /// Load a rule set from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|error| RuleError::Io {
            path: path.to_path_buf(),
            error,
        })?;

        let rule_set = Self::from_toml_str(&content)?;
        debug!(path = ?path, fields = rule_set.fields.len(), "rule set loaded");
        Ok(rule_set)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RuleError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the engine's rules, rejecting duplicate fields, bad regular
    /// expressions, unknown presets and `equals_field` targets that are not
    /// other declared fields
    pub fn compile(&self) -> Result<ValidationRules, RuleError> {
        let mut seen = HashSet::new();
        for spec in &self.fields {
            if spec.name.trim().is_empty() {
                return Err(RuleError::MissingName);
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(RuleError::DuplicateField(spec.name.clone()));
            }
        }

        let mut rules = ValidationRules::new();
        for spec in &self.fields {
            // Forward references are fine; the target only has to be declared
            if let Some(other) = &spec.equals_field {
                if *other == spec.name {
                    return Err(RuleError::SelfReference(spec.name.clone()));
                }
                if !seen.contains(other.as_str()) {
                    return Err(RuleError::UnknownEqualsField {
                        field: spec.name.clone(),
                        other: other.clone(),
                    });
                }
            }
            rules.insert(spec.name.clone(), spec.compile()?);
        }

        Ok(rules)
    }
}

impl FieldSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn compile(&self) -> Result<FieldRule, RuleError> {
        let mut rule = FieldRule::new();

        rule.required = self.required;
        rule.required_message = self.required_message.clone();

        match (&self.pattern, &self.preset) {
            (Some(_), Some(_)) => return Err(RuleError::PatternConflict(self.name.clone())),
            (Some(source), None) => rule = rule.pattern(Pattern::new(source)?),
            (None, Some(preset)) => rule = rule.common(preset.parse::<CommonPattern>()?),
            (None, None) => {}
        }
        if let Some(message) = &self.pattern_message {
            rule = rule.pattern_message(message.clone());
        }

        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(RuleError::LengthBounds {
                    field: self.name.clone(),
                    min,
                    max,
                });
            }
        }
        rule.min_length = self.min_length;
        rule.min_length_message = self.min_length_message.clone();
        rule.max_length = self.max_length;
        rule.max_length_message = self.max_length_message.clone();

        if let Some(other) = &self.equals_field {
            let other = other.clone();
            let message = self
                .equals_message
                .clone()
                .unwrap_or_else(|| format!("{} must match {}", self.name, other));

            rule = rule.validate(move |value, form_data| {
                if form_data.get(&other) == Some(value) {
                    Ok(())
                } else {
                    Err(message.clone())
                }
            });
        }

        Ok(rule)
    }
}
