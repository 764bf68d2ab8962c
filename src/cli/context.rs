//! CLI Context - services shared by every command

use std::sync::Arc;

use anyhow::{Context, Result};
use frigo_core::config::Config;
use frigo_core::init_tracing;
use frigo_llm::RecipeOrchestrator;

use crate::cli::Cli;
use crate::cli::output::OutputWriter;

pub struct CliContext {
    /// Application configuration
    pub config: Arc<Config>,

    /// Recipe pipeline over the configured Gemini account
    pub orchestrator: RecipeOrchestrator,

    /// Output writer configured based on CLI flags
    pub output: OutputWriter,
}

impl CliContext {
    /// Load configuration, install logging and build the pipeline
    pub fn new(cli: &Cli) -> Result<Self> {
        let mut config = Config::load().context(
            "Failed to load configuration. Check config/*.toml and FRIGO__* env vars",
        )?;

        if cli.verbose {
            config.logging.level = "debug".to_string();
        }
        init_tracing(&config.logging)?;

        let orchestrator = RecipeOrchestrator::from_config(&config.llm);

        tracing::debug!(
            model = %config.llm.default_model,
            vision_model = %config.llm.vision_model(),
            api_key_present = config.llm.api_key().is_some(),
            "CLI context initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            orchestrator,
            output: OutputWriter::new(cli.format, cli.verbose),
        })
    }
}
