//! CLI Commands Module

pub mod analyze;
pub mod from_photo;
pub mod generate;

use std::path::Path;

use frigo_llm::{FallbackReason, GeneratedRecipe};

use crate::cli::context::CliContext;

/// Tell the user, in verbose mode, where a result came from
pub(crate) fn report_provenance(ctx: &CliContext, what: &str, reason: Option<&FallbackReason>) {
    if !ctx.output.is_verbose() {
        return;
    }

    match reason {
        Some(reason) => ctx
            .output
            .warn(&format!("{} produced offline ({})", what, reason)),
        None => eprintln!("{} produced by {}", what, ctx.config.llm.default_model),
    }
}

pub(crate) fn print_recipe(ctx: &CliContext, recipe: &GeneratedRecipe) {
    ctx.output.header(&recipe.title);
    ctx.output.print(&format!(
        "{} min | {} pers. | {}",
        recipe.cooking_time, recipe.servings, recipe.difficulty
    ));

    ctx.output.print("\nIngrédients :");
    ctx.output.list(&recipe.ingredients, false);

    ctx.output.print("\nPréparation :");
    ctx.output.list(&recipe.instructions, true);
}

/// Read an image file; `Err` carries a user-facing message
pub(crate) async fn read_image(path: &Path) -> Result<Vec<u8>, String> {
    tokio::fs::read(path)
        .await
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))
}
