//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands;
use tourgate::config::Config;
use tourgate::core::models::Field;
use tourgate::output::OutputMode;

/// tourgate - Traveler data checks before booking
#[derive(Parser, Debug)]
#[command(
    name = "tourgate",
    version,
    about = "Traveler data checks before booking",
    long_about = "Validate traveler data before a tour reservation is submitted.\n\n\
                  Checks Chilean RUT check digits, names, emails, phones and birth dates,\n\
                  and verifies seats and traveler forms for every package in a booking."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.config/tourgate/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a Chilean RUT (e.g. 12.345.678-5)
    Rut {
        /// RUT to validate, with or without separators
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Compute the check digit for a RUT body
    CheckDigit {
        /// Digits before the check character (dots and hyphens allowed)
        #[arg(allow_hyphen_values = true)]
        body: String,
    },

    /// Validate a single traveler field
    Field {
        /// Field kind: name, rut, email, phone, birth_date
        field: Field,

        /// Value to validate (omit for an empty field)
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,

        /// Date to treat as today for birth dates (yyyy-mm-dd or dd/mm/yyyy)
        #[arg(long)]
        today: Option<String>,
    },

    /// Validate a booking file before reservation
    Booking {
        /// Path to the booking JSON file
        file: PathBuf,

        /// Require a phone number for every traveler
        #[arg(long)]
        require_phone: bool,

        /// Date to treat as today for birth dates (yyyy-mm-dd or dd/mm/yyyy)
        #[arg(long)]
        today: Option<String>,
    },

    /// Show the effective configuration, or create a default config file
    Config {
        /// Write a default config file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing config file (with --init)
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
///
/// Exit status is success when every check passed and 1 when one failed.
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = Config::load(cli.config.as_deref())?;

    let output_mode = if cli.json || config.output.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let passed = match cli.command {
        Some(Command::Rut { value }) => commands::rut(&value, output_mode),
        Some(Command::CheckDigit { body }) => commands::check_digit(&body, output_mode),
        Some(Command::Field {
            field,
            value,
            today,
        }) => commands::field(field, value.as_deref(), today.as_deref(), output_mode),
        Some(Command::Booking {
            file,
            require_phone,
            today,
        }) => {
            let mut policy = config.policy;
            policy.require_phone |= require_phone;
            commands::booking(&file, policy, today.as_deref(), output_mode)
        },
        Some(Command::Config { init, force }) => {
            commands::config(cli.config.as_deref(), init, force, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": tourgate::VERSION
                    })
                );
            } else {
                println!("tourgate v{}", tourgate::VERSION);
            }
            Ok(true)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": tourgate::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("tourgate v{}", tourgate::VERSION);
                println!("\nRun 'tourgate --help' for usage");
                println!("Run 'tourgate rut 12.345.678-5' to check a RUT");
            }
            Ok(true)
        },
    }?;

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
