use anyhow::Result;
use rusty_forms::CommonPattern;
use std::process::ExitCode;

pub fn run() -> Result<ExitCode> {
    println!("{}", listing());
    Ok(ExitCode::SUCCESS)
}

/// One block per preset: name, expression and message
pub fn listing() -> String {
    CommonPattern::ALL
        .iter()
        .map(|preset| {
            format!(
                "{}\n  pattern: {}\n  message: {}",
                preset,
                preset.pattern().as_str(),
                preset.message()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
