//! # rusty-forms
//!
//! Declarative form validation. A form submission is a map of field values,
//! a form's rules are an ordered map of per-field [`FieldRule`]s, and a
//! validation run produces a map of one human-readable message per invalid
//! field.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_forms::{validate_form, CommonPattern, FieldRule, FormData, ValidationRules, Value};
//!
//! let rules = ValidationRules::new()
//!     .field("email", FieldRule::new().required().common(CommonPattern::Email))
//!     .field("password", FieldRule::new().required().min_length(8));
//!
//! let mut data = FormData::new();
//! data.insert("email".to_string(), Value::from("not-an-email"));
//! data.insert("password".to_string(), Value::from("hunter2"));
//!
//! let errors = validate_form(&data, &rules);
//! assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
//! assert_eq!(errors.get("password"), Some("password must be at least 8 characters"));
//! ```
//!
//! ## Modules
//!
//! - [`validation`] - the engine, field rules, error map and pattern library
//! - [`focus`] - moving the user to the first invalid field
//! - [`rules`] - rule sets described as TOML
//! - [`form_context`] - errors paired with the submitted values for re-rendering
//! - [`config`] - engine and output configuration

pub mod config;
pub mod error;
pub mod focus;
pub mod form_context;
pub mod rules;
pub mod validation;
pub mod value;

pub use config::{Config, EngineConfig, OutputConfig, OutputFormat};
pub use error::RuleError;
pub use focus::{
    scroll_to_first_error, FieldRefs, ScrollBehavior, ScrollBlock, ScrollOptions, ScrollTarget,
};
pub use form_context::FormContext;
pub use rules::{FieldSpec, RuleSet};
pub use validation::{
    validate_form, CommonPattern, CustomValidator, Engine, FieldRule, Pattern, ValidationErrors,
    ValidationRules,
};
pub use value::{FormData, Value};
