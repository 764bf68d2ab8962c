//! Frigo CLI - recipes from an ingredient list or a fridge photo
//!
//! Works without a Gemini key: every command then answers from the offline
//! fallback, which is reported on stderr in verbose mode.

mod commands;
mod context;
mod output;

use clap::{Parser, Subcommand};

use context::CliContext;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "frigo",
    version,
    about = "Generate recipes from what is in your fridge",
    long_about = "Frigo asks Gemini for a recipe built around your ingredients, or for the \
                  ingredients visible on a photo. Set GEMINI_API_KEY to enable the model; \
                  without it, deterministic offline recipes are returned."
)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Enable verbose output (debug logs, result provenance)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a recipe from ingredient names
    #[command(visible_alias = "g")]
    Generate(commands::generate::GenerateArgs),

    /// List the ingredients visible on a photo
    #[command(visible_alias = "a")]
    Analyze(commands::analyze::AnalyzeArgs),

    /// Detect ingredients on a photo, then generate a recipe from them
    FromPhoto(commands::from_photo::FromPhotoArgs),
}

pub struct CliApp {
    cli: Cli,
    context: CliContext,
}

impl CliApp {
    pub fn new() -> anyhow::Result<Self> {
        let cli = Cli::parse();
        let context = CliContext::new(&cli)?;
        Ok(Self { cli, context })
    }

    pub async fn run(self) -> anyhow::Result<i32> {
        let exit_code = match self.cli.command {
            Commands::Generate(ref args) => commands::generate::run(&self.context, args).await,
            Commands::Analyze(ref args) => commands::analyze::run(&self.context, args).await,
            Commands::FromPhoto(ref args) => commands::from_photo::run(&self.context, args).await,
        }?;

        Ok(exit_code)
    }
}

pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    /// Bad input: empty ingredient list, unreadable or non-image file
    pub const INPUT_ERROR: i32 = 2;
}
