//! Generate Command - recipe from ingredient names

use anyhow::Result;
use clap::Args;

use crate::cli::commands::{print_recipe, report_provenance};
use crate::cli::context::CliContext;
use crate::cli::exit_codes;
use crate::cli::output::OutputFormat;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Ingredient names, e.g. `frigo generate poulet "crème fraîche" champignons`
    #[arg(required = true, num_args = 1..)]
    pub ingredients: Vec<String>,

    /// Print the record handed to recipe storage instead of the bare recipe
    #[arg(long)]
    pub draft: bool,
}

pub async fn run(ctx: &CliContext, args: &GenerateArgs) -> Result<i32> {
    let outcome = match ctx
        .orchestrator
        .recipe_use_case()
        .execute(&args.ingredients)
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            ctx.output.error(&e.to_string());
            return Ok(exit_codes::INPUT_ERROR);
        }
    };

    report_provenance(ctx, "Recipe", outcome.fallback_reason());

    match ctx.output.format() {
        OutputFormat::Json if args.draft => ctx.output.json(&outcome.into_draft())?,
        OutputFormat::Json => ctx.output.json(outcome.value())?,
        OutputFormat::Plain => {
            print_recipe(ctx, outcome.value());
            if args.draft {
                let draft = outcome.into_draft();
                ctx.output.print(&format!(
                    "\nÀ enregistrer sous : \"{}\" (généré par IA : {})",
                    draft.title,
                    if draft.is_ai_generated { "oui" } else { "non" }
                ));
            }
        }
    }

    Ok(exit_codes::SUCCESS)
}
