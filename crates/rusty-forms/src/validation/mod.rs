// File: src/validation/mod.rs
// Purpose: Validation engine, field rules and the shared pattern library

mod engine;
mod errors;
mod pattern;
mod rule;

pub use engine::{validate_form, Engine};
pub use errors::ValidationErrors;
pub use pattern::{CommonPattern, Pattern};
pub use rule::{CustomValidator, FieldRule, ValidationRules};
