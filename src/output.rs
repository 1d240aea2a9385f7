//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::config::Config;
use crate::core::models::{BookingReport, Issue, PackageReservation};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of validating a single field
#[derive(Debug, Serialize)]
pub struct FieldResult {
    /// Field name (e.g., "national_id")
    pub field: String,
    /// Value as given, if any
    pub input: Option<String>,
    /// Whether the value passed
    pub valid: bool,
    /// Display form of the value (RUT only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    /// Why the value failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of computing a check digit
#[derive(Debug, Serialize)]
pub struct CheckDigitResult {
    /// Body as given
    pub body: String,
    /// Expected check character, if the body is all digits
    pub check_digit: Option<char>,
    /// Display form of the complete RUT
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

/// Result of checking a booking file
#[derive(Debug, Serialize)]
pub struct BookingResult {
    /// Whether the booking may be submitted
    pub passed: bool,
    /// Number of packages in the booking
    pub packages_checked: usize,
    /// Problems found
    pub issues: Vec<Issue>,
    /// Normalized packages ready to reserve
    pub packages: Vec<PackageReservation>,
    /// Phone to attach to the reservation
    pub contact_phone: Option<String>,
}

/// Effective configuration
#[derive(Debug, Serialize)]
pub struct ConfigResult {
    /// Config file path
    pub path: String,
    /// Whether the file exists
    pub exists: bool,
    /// Effective settings
    pub config: Config,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl FieldResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let shown = self.formatted.as_deref().or(self.input.as_deref()).unwrap_or("(empty)");
        if self.valid {
            println!("{} {}: {}", "VALID".green().bold(), self.field, shown);
        } else {
            println!("{} {}: {}", "INVALID".red().bold(), self.field, shown);
            if let Some(message) = &self.message {
                println!("  {message}");
            }
        }
    }
}

impl CheckDigitResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        match (self.check_digit, &self.formatted) {
            (Some(digit), Some(formatted)) => {
                println!("Check digit: {digit}");
                println!("RUT: {formatted}");
            },
            (Some(digit), None) => println!("Check digit: {digit}"),
            (None, _) => {
                println!("{} body must contain only digits: {}", "INVALID".red().bold(), self.body);
            },
        }
    }
}

impl BookingResult {
    /// Build from a gate report
    #[must_use]
    pub fn new(report: BookingReport, packages_checked: usize) -> Self {
        Self {
            passed: report.passed,
            packages_checked,
            issues: report.issues,
            packages: report.packages,
            contact_phone: report.contact_phone,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Checking {} package(s)...\n", self.packages_checked);

        for package in &self.packages {
            println!(
                "  [{}] {} - {} traveler(s) ok",
                package.package_id,
                package.package_name,
                package.travelers.len()
            );
        }

        if self.passed {
            if let Some(phone) = &self.contact_phone {
                println!("\nContact phone: {phone}");
            }
            println!("\n{} booking may be submitted.", "PASSED".green().bold());
            return;
        }

        println!("\nIssues:");
        for issue in &self.issues {
            println!("  - {issue}");
        }
        println!("\n{} {} issue(s) must be fixed", "BLOCKED".red().bold(), self.issues.len());
    }
}

impl ConfigResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let origin = if self.exists { "" } else { " (not found, defaults)" };
                println!("# {}{origin}", self.path);
                print!("{}", self.config.to_toml().unwrap_or_default());
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}
