use anyhow::{Context, Result};
use rusty_forms::{Engine, EngineConfig, FormData, OutputFormat, RuleSet, ValidationErrors};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

/// Validate the submission in `data` against the rule file and print the errors.
///
/// Exit code 0 when the submission is valid, 1 when any field failed.
pub fn run(engine: &EngineConfig, rules: &Path, data: &Path, format: OutputFormat) -> Result<ExitCode> {
    let errors = check(engine, rules, data)?;

    let report = render(&errors, format)?;
    if !report.is_empty() {
        println!("{report}");
    }

    Ok(if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

pub fn check(engine: &EngineConfig, rules: &Path, data: &Path) -> Result<ValidationErrors> {
    let rules = RuleSet::load(rules)
        .and_then(|rule_set| rule_set.compile())
        .with_context(|| format!("Failed to load rules: {:?}", rules))?;

    let content = fs::read_to_string(data)
        .with_context(|| format!("Failed to read form data: {:?}", data))?;
    let form_data: FormData = serde_json::from_str(&content)
        .with_context(|| format!("Form data must be a JSON object: {:?}", data))?;

    let errors = Engine::new(engine.clone()).validate(&form_data, &rules);
    info!(fields = rules.len(), invalid = errors.len(), "submission checked");
    Ok(errors)
}

pub fn render(errors: &ValidationErrors, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(errors.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(errors).context("Failed to serialize errors")
        }
    }
}
