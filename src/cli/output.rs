//! Output formatting for command results
//!
//! Results go to stdout; diagnostics go to stderr alongside the logs.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for CLI results
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Plain,
    /// JSON output for machine processing
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
    verbose: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Pretty-printed JSON on stdout
    pub fn json<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn header(&self, title: &str) {
        println!("{}", title);
        println!("{}", "=".repeat(title.chars().count()));
    }

    pub fn print(&self, line: &str) {
        println!("{}", line);
    }

    /// Bulleted or numbered list
    pub fn list<S: AsRef<str>>(&self, items: &[S], numbered: bool) {
        for (i, item) in items.iter().enumerate() {
            if numbered {
                println!("  {}. {}", i + 1, item.as_ref());
            } else {
                println!("  - {}", item.as_ref());
            }
        }
    }

    pub fn warn(&self, message: &str) {
        eprintln!("warning: {}", message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("error: {}", message);
    }
}
