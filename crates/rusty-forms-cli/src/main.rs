mod commands;

use clap::{Parser, Subcommand};
use rusty_forms::{Config, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rusty-forms")]
#[command(version, about = "Check form submissions against declarative validation rules", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "rusty-forms.toml")]
    config: PathBuf,

    /// Log engine decisions (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON form submission against a TOML rule file
    Check {
        /// Rule file ([[field]] tables)
        #[arg(short, long)]
        rules: PathBuf,

        /// JSON object of field values
        #[arg(short, long)]
        data: PathBuf,

        /// Output format: text or json (overrides the config file)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// List the built-in patterns usable as `preset`
    Patterns,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check { rules, data, format } => Config::load(&cli.config).and_then(|config| {
            let format = format.unwrap_or(config.output.format);
            commands::check::run(&config.engine, &rules, &data, format)
        }),
        Commands::Patterns => commands::patterns::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
