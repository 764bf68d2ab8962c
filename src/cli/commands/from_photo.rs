//! From-Photo Command - detect ingredients, then generate a recipe

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use frigo_llm::GeneratedRecipe;

use crate::cli::commands::{print_recipe, read_image, report_provenance};
use crate::cli::context::CliContext;
use crate::cli::exit_codes;
use crate::cli::output::OutputFormat;

#[derive(Args, Debug)]
pub struct FromPhotoArgs {
    /// Photo of the available ingredients
    pub image: PathBuf,
}

#[derive(Serialize)]
struct FromPhotoOutput<'a> {
    detected_ingredients: &'a [String],
    recipe: &'a GeneratedRecipe,
    message: String,
}

pub async fn run(ctx: &CliContext, args: &FromPhotoArgs) -> Result<i32> {
    let bytes = match read_image(&args.image).await {
        Ok(bytes) => bytes,
        Err(message) => {
            ctx.output.error(&message);
            return Ok(exit_codes::INPUT_ERROR);
        }
    };

    let result = match ctx.orchestrator.generate_from_photo(&bytes).await {
        Ok(result) => result,
        Err(e) => {
            ctx.output.error(&format!("{}: {}", args.image.display(), e));
            return Ok(exit_codes::INPUT_ERROR);
        }
    };

    report_provenance(ctx, "Ingredient list", result.detected.fallback_reason());
    report_provenance(ctx, "Recipe", result.recipe.fallback_reason());

    match ctx.output.format() {
        OutputFormat::Json => ctx.output.json(&FromPhotoOutput {
            detected_ingredients: result.detected.value(),
            recipe: result.recipe.value(),
            message: result.message(),
        })?,
        OutputFormat::Plain => {
            ctx.output.print(&result.message());
            ctx.output.list(result.detected.value(), false);
            ctx.output.print("");
            print_recipe(ctx, result.recipe.value());
        }
    }

    Ok(exit_codes::SUCCESS)
}
