//! Analyze Command - ingredients visible on a photo

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::commands::{read_image, report_provenance};
use crate::cli::context::CliContext;
use crate::cli::exit_codes;
use crate::cli::output::OutputFormat;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Photo to analyze (JPEG, PNG, WEBP, GIF or BMP)
    pub image: PathBuf,
}

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    ingredients: &'a [String],
    count: usize,
}

pub async fn run(ctx: &CliContext, args: &AnalyzeArgs) -> Result<i32> {
    let bytes = match read_image(&args.image).await {
        Ok(bytes) => bytes,
        Err(message) => {
            ctx.output.error(&message);
            return Ok(exit_codes::INPUT_ERROR);
        }
    };

    let outcome = match ctx.orchestrator.analyze_use_case().execute(&bytes).await {
        Ok(outcome) => outcome,
        Err(e) => {
            ctx.output.error(&format!("{}: {}", args.image.display(), e));
            return Ok(exit_codes::INPUT_ERROR);
        }
    };

    report_provenance(ctx, "Ingredient list", outcome.fallback_reason());
    let ingredients = outcome.value();

    match ctx.output.format() {
        OutputFormat::Json => ctx.output.json(&AnalyzeOutput {
            ingredients,
            count: ingredients.len(),
        })?,
        OutputFormat::Plain => {
            ctx.output
                .header(&format!("{} ingrédient(s) détecté(s)", ingredients.len()));
            ctx.output.list(ingredients, false);
        }
    }

    Ok(exit_codes::SUCCESS)
}
